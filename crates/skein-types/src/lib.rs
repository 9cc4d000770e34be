//! skein-types: the front-end type model of the skein node-graph compiler.
//!
//! A compilation owns one [`TypeRegistry`] holding every [`TypeDefinition`],
//! keyed by the 64-bit hash of the type's name. Consumers look types up as
//! borrowed [`TypeHandle`]s and ask structural questions: validity, size,
//! member access, cast classification, and whether one type is an
//! acceptable resolution of another.
//!
//! # Example
//!
//! ```
//! use skein_types::builtins;
//!
//! let types = builtins::standard_registry();
//!
//! let float2 = types.get_type(builtins::refs::FLOAT2);
//! assert_eq!(float2.size(), 8);
//! assert!(float2.has_member_named("xy"));
//!
//! let number = types.get_type(builtins::refs::NUMBER);
//! let int = types.get_type(builtins::refs::INT);
//! assert!(number.is_valid_resolution(&int));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod builtins;
pub mod cast;
pub mod def;
pub mod handle;
pub mod ident;
pub mod registry;

mod dump;
mod resolve;

#[cfg(test)]
mod builtins_tests;

pub use cast::CastClass;
pub use def::{
    ConstructHook, DestructHook, DimPredicate, MemberResolver, SubtypePredicate, TypeDefinition,
};
pub use handle::TypeHandle;
pub use ident::{NameHash, TypeRef};
pub use registry::TypeRegistry;

/// Errors surfaced when a caller escalates a silent registry refusal.
///
/// The registry primitives themselves never fail; see
/// [`TypeRegistry::add_definition`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// A definition under this name is already registered.
    #[error("type `{name}` is already registered")]
    DuplicateType { name: String },
}

/// Result type for registration escalation points.
pub type Result<T> = std::result::Result<T, Error>;
