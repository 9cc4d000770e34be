//! The node contract: how AST nodes talk to the type model.
//!
//! Pin tables are plain consts. A node computes its output types from
//! already-resolved input handles and reports failures through the
//! [`Reporter`] instead of unwinding.

use skein_types::{NameHash, TypeHandle, TypeRef, TypeRegistry};

use crate::report::Reporter;

/// A declared input, output or parameter pin.
///
/// `type_ref` names the declared, possibly meta, type. The pin name
/// doubles as a member-access key via [`PinDecl::name_hash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinDecl {
    pub name: &'static str,
    pub type_ref: TypeRef,
}

impl PinDecl {
    pub const fn new(name: &'static str, type_ref: TypeRef) -> Self {
        Self { name, type_ref }
    }

    /// The hash a member lookup under this pin's name would use.
    pub const fn name_hash(&self) -> NameHash {
        NameHash::of(self.name)
    }
}

/// One AST node kind.
///
/// `None` and `false` are the machine-readable failure outcomes; the
/// human-readable half always goes through the reporter.
pub trait Node {
    fn name(&self) -> &str;
    fn description(&self) -> &str;

    fn input_pins(&self) -> &[PinDecl];
    fn output_pins(&self) -> &[PinDecl];
    fn params(&self) -> &[PinDecl];

    /// Compute output types from resolved input types.
    ///
    /// `inputs` matches `input_pins` position for position. Returns one
    /// handle per output pin, or `None` after reporting what failed.
    fn resolve_output_types<'reg>(
        &self,
        inputs: &[TypeHandle<'reg>],
        types: &'reg TypeRegistry,
        reporter: &Reporter,
    ) -> Option<Vec<TypeHandle<'reg>>>;

    /// Node-specific checks once output types are resolved.
    fn validate(&self, reporter: &Reporter) -> bool;

    /// Whether every output is a compile-time constant.
    fn is_constant(&self) -> bool;

    /// Fold whatever outputs are constant. Called whether or not the
    /// node is constant overall.
    fn const_generate(&self, reporter: &Reporter);

    /// Lower the node. Not called when [`Node::is_constant`] holds.
    fn generate(&self, reporter: &Reporter) -> bool;
}
