//! Test-only dump methods for registry inspection.
