//! skein-graph: where the skein type model meets the node graph.
//!
//! Two surfaces: the severity-leveled [`Reporter`] every compilation pass
//! logs through, and the [`Node`] contract an AST node implements to
//! resolve its output types from its already-resolved inputs.
//!
//! # Example
//!
//! ```
//! use skein_graph::{Reporter, Severity};
//!
//! let reporter = Reporter::new();
//! reporter.warning("narrowing `float3` to `float2`");
//! assert_eq!(reporter.worst(), Some(Severity::Warning));
//! assert!(!reporter.has_errors());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod node;
pub mod report;

#[cfg(test)]
mod report_tests;

pub use node::{Node, PinDecl};
pub use report::{HandlerGuard, LogEntry, Reporter, Severity};
