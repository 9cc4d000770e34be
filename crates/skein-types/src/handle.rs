//! Read-only type handles and the recursive validity and size queries.

use std::fmt;

use indexmap::IndexSet;

use crate::cast::CastClass;
use crate::def::TypeDefinition;
use crate::ident::{NameHash, TypeRef};
use crate::registry::TypeRegistry;

/// A borrowed view of one registered type.
///
/// Pairs the definition with the registry that owns it: members and
/// subtypes refer to other types by [`TypeRef`] only, so every nested
/// lookup goes back through the registry. Cheap to copy, never outlives
/// the registry, never independently mutable.
#[derive(Clone, Copy)]
pub struct TypeHandle<'reg> {
    registry: &'reg TypeRegistry,
    def: &'reg TypeDefinition,
}

impl fmt::Debug for TypeHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeHandle")
            .field("id", &self.def.id)
            .field("name", &self.def.debug_name)
            .finish_non_exhaustive()
    }
}

/// Handles to the same id alias the same definition, so identity is id
/// equality.
impl PartialEq for TypeHandle<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.def.id == other.def.id
    }
}

impl Eq for TypeHandle<'_> {}

impl<'reg> TypeHandle<'reg> {
    pub(crate) fn new(registry: &'reg TypeRegistry, def: &'reg TypeDefinition) -> Self {
        Self { registry, def }
    }

    /// The underlying definition.
    #[inline]
    pub fn def(&self) -> &'reg TypeDefinition {
        self.def
    }

    #[inline]
    pub(crate) fn registry(&self) -> &'reg TypeRegistry {
        self.registry
    }

    // ========== Identity ==========

    /// The type's own id.
    #[inline]
    pub fn get_ref(&self) -> TypeRef {
        self.def.id
    }

    /// Whether this is the none sentinel.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.def.id.is_zero()
    }

    /// Diagnostic name. Never identity.
    #[inline]
    pub fn debug_name(&self) -> &'reg str {
        &self.def.debug_name
    }

    // ========== Shape ==========

    #[inline]
    pub fn is_concrete(&self) -> bool {
        self.def.concrete
    }

    /// Fixed dimensionality. Meaningless when a dim predicate is present.
    #[inline]
    pub fn dim(&self) -> usize {
        self.def.dim
    }

    /// Whether the type accepts a range of dimensions instead of one.
    #[inline]
    pub fn is_meta_array(&self) -> bool {
        self.def.dim_predicate.is_some()
    }

    /// A leaf type: no static members and fully concrete.
    ///
    /// Dynamic members do not count against this; a vector with swizzle
    /// access is still a primitive.
    pub fn is_primitive(&self) -> bool {
        self.def.members.is_empty() && self.is_fully_concrete()
    }

    /// Concrete all the way down: no dim predicate, and every static
    /// member resolves to a fully concrete type. A cycle in the member
    /// graph answers false.
    pub fn is_fully_concrete(&self) -> bool {
        self.fully_concrete_guarded(&mut IndexSet::new())
    }

    fn fully_concrete_guarded(&self, path: &mut IndexSet<TypeRef>) -> bool {
        if !self.def.concrete || self.def.dim_predicate.is_some() {
            return false;
        }
        if !path.insert(self.def.id) {
            return false;
        }
        let ok = self
            .def
            .members
            .values()
            .all(|&ty| self.registry.get_type(ty).fully_concrete_guarded(path));
        path.swap_remove(&self.def.id);
        ok
    }

    // ========== Members ==========

    /// Whether the type provides a member under this name hash, either as
    /// a static member or through its dynamic resolver.
    pub fn has_member(&self, name: NameHash) -> bool {
        if self.def.members.contains_key(&name) {
            return true;
        }
        match &self.def.members_getter {
            Some(getter) => !getter.resolve(name).is_zero(),
            None => false,
        }
    }

    /// [`Self::has_member`] for names only known as runtime text.
    pub fn has_member_named(&self, name: &str) -> bool {
        self.has_member(NameHash::of(name))
    }

    /// The resolved type of a member, or the none handle when the name is
    /// not provided statically or dynamically.
    pub fn get_member_type(&self, name: NameHash) -> TypeHandle<'reg> {
        if let Some(&ty) = self.def.members.get(&name) {
            return self.registry.get_type(ty);
        }
        match &self.def.members_getter {
            Some(getter) => self.registry.get_type(getter.resolve(name)),
            None => self.registry.get_none(),
        }
    }

    /// [`Self::get_member_type`] for names only known as runtime text.
    pub fn get_member_type_named(&self, name: &str) -> TypeHandle<'reg> {
        self.get_member_type(NameHash::of(name))
    }

    // ========== Validity and size ==========

    /// A type is valid when its id is non-zero, its dimensionality is
    /// usable, and every static member resolves to a valid type.
    ///
    /// The member recursion tracks its descent path; a type whose members
    /// lead back to itself answers false instead of recursing forever.
    pub fn is_valid(&self) -> bool {
        self.valid_guarded(&mut IndexSet::new())
    }

    fn valid_guarded(&self, path: &mut IndexSet<TypeRef>) -> bool {
        if self.def.id.is_zero() {
            return false;
        }
        if self.def.dim == 0 && self.def.dim_predicate.is_none() {
            return false;
        }
        if !path.insert(self.def.id) {
            return false;
        }
        let ok = self
            .def
            .members
            .values()
            .all(|&ty| self.registry.get_type(ty).valid_guarded(path));
        path.swap_remove(&self.def.id);
        ok
    }

    /// Total size: intrinsic size plus the size of every static member,
    /// multiplied by `dim` unless a dim predicate is present (a
    /// meta-array reports its element size). Invalid types have size 0.
    pub fn size(&self) -> usize {
        if !self.is_valid() {
            return 0;
        }
        let mut total = self.def.size;
        // Validity implies the member graph is acyclic from here, so the
        // recursion bottoms out.
        for &ty in self.def.members.values() {
            total += self.registry.get_type(ty).size();
        }
        if self.def.dim_predicate.is_some() {
            total
        } else {
            total * self.def.dim
        }
    }

    // ========== Casts ==========

    /// The classification for casting into `other`; empty when the cast
    /// table has no entry.
    pub fn cast_class(&self, other: &TypeHandle<'_>) -> CastClass {
        self.def
            .casts
            .get(&other.get_ref())
            .copied()
            .unwrap_or(CastClass::empty())
    }

    /// Whether the compiler may insert this cast without explicit syntax.
    pub fn can_implicit_cast(&self, other: &TypeHandle<'_>) -> bool {
        self.cast_class(other).contains(CastClass::IMPLICIT)
    }

    /// Whether the cast preserves every value exactly.
    pub fn can_lossless_cast(&self, other: &TypeHandle<'_>) -> bool {
        self.cast_class(other).contains(CastClass::LOSSLESS)
    }

    /// Whether the cast can be evaluated at compile time.
    pub fn can_constant_cast(&self, other: &TypeHandle<'_>) -> bool {
        self.cast_class(other).contains(CastClass::CONSTANT)
    }
}
