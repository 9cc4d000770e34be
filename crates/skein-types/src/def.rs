//! Type definitions: the data describing one registered type.
//!
//! A definition is plain data except for its behavior fields, which are
//! boxed closures owning whatever context they capture (a swizzle table,
//! a dimension rule). Definitions refer to other types by [`TypeRef`]
//! only; resolving a reference always goes back through the registry.

use std::fmt;

use indexmap::{IndexMap, IndexSet};

use crate::cast::CastClass;
use crate::ident::{NameHash, TypeRef};

// ========== Behavior fields ==========

/// Dynamically computed members, e.g. swizzle access on vector types.
///
/// Returns [`TypeRef::ZERO`] for names the type does not provide.
pub struct MemberResolver(Box<dyn Fn(NameHash) -> TypeRef + Send + Sync>);

impl MemberResolver {
    pub fn new(f: impl Fn(NameHash) -> TypeRef + Send + Sync + 'static) -> Self {
        Self(Box::new(f))
    }

    #[inline]
    pub fn resolve(&self, name: NameHash) -> TypeRef {
        (self.0)(name)
    }
}

/// Dynamically accepted subtypes of a meta-type.
pub struct SubtypePredicate(Box<dyn Fn(TypeRef) -> bool + Send + Sync>);

impl SubtypePredicate {
    pub fn new(f: impl Fn(TypeRef) -> bool + Send + Sync + 'static) -> Self {
        Self(Box::new(f))
    }

    #[inline]
    pub fn accepts(&self, id: TypeRef) -> bool {
        (self.0)(id)
    }
}

/// Accepted dimensionalities of a meta-array.
///
/// Presence of this predicate supersedes the fixed `dim` field entirely.
pub struct DimPredicate(Box<dyn Fn(usize) -> bool + Send + Sync>);

impl DimPredicate {
    pub fn new(f: impl Fn(usize) -> bool + Send + Sync + 'static) -> Self {
        Self(Box::new(f))
    }

    #[inline]
    pub fn accepts(&self, dim: usize) -> bool {
        (self.0)(dim)
    }
}

/// Non-default construction from a list of argument types.
pub struct ConstructHook(Box<dyn Fn(&[TypeRef]) -> bool + Send + Sync>);

impl ConstructHook {
    pub fn new(f: impl Fn(&[TypeRef]) -> bool + Send + Sync + 'static) -> Self {
        Self(Box::new(f))
    }

    #[inline]
    pub fn construct(&self, args: &[TypeRef]) -> bool {
        (self.0)(args)
    }
}

/// Teardown counterpart of [`ConstructHook`].
pub struct DestructHook(Box<dyn Fn() -> bool + Send + Sync>);

impl DestructHook {
    pub fn new(f: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Self(Box::new(f))
    }

    #[inline]
    pub fn destruct(&self) -> bool {
        (self.0)()
    }
}

macro_rules! opaque_debug {
    ($($ty:ident),+) => {
        $(impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(concat!(stringify!($ty), "(..)"))
            }
        })+
    };
}

opaque_debug!(
    MemberResolver,
    SubtypePredicate,
    DimPredicate,
    ConstructHook,
    DestructHook
);

// ========== Definition ==========

/// The data describing one type. Owned by the registry once registered.
///
/// Exactly one of the two structural groups is meaningful, selected by
/// `concrete`: members and casts for concrete types, subtypes for
/// meta-types. The algorithms ignore the inapplicable group.
#[derive(Debug)]
pub struct TypeDefinition {
    /// Primary key; the hash of the type's name.
    pub id: TypeRef,
    /// For diagnostics and dumps only, never identity.
    pub debug_name: String,
    /// Intrinsic size excluding members. Concrete types only.
    pub size: usize,
    /// Fixed dimensionality. Superseded by `dim_predicate` when present.
    pub dim: usize,
    /// Accepted dimensionalities; marks the type as a meta-array.
    pub dim_predicate: Option<DimPredicate>,
    pub concrete: bool,
    /// Member name hash to member type.
    pub members: IndexMap<NameHash, TypeRef>,
    /// Dynamic members (e.g. swizzles) on top of `members`.
    pub members_getter: Option<MemberResolver>,
    /// Acceptable subtypes of a meta-type.
    pub subtypes: IndexSet<TypeRef>,
    /// Dynamically accepted subtypes on top of `subtypes`.
    pub subtypes_getter: Option<SubtypePredicate>,
    /// Cast classification per target type; absence means not possible.
    pub casts: IndexMap<TypeRef, CastClass>,
    pub construct_from: Option<ConstructHook>,
    pub destruct: Option<DestructHook>,
    /// Construction may bypass `construct_from` when every member is
    /// default-constructible too.
    pub can_default_construct: bool,
}

impl TypeDefinition {
    /// A concrete definition named `name`: size 0, dim 1, no members.
    pub fn concrete(name: &str) -> Self {
        Self::named(name, true)
    }

    /// A meta definition named `name` with no subtypes yet.
    pub fn meta(name: &str) -> Self {
        Self::named(name, false)
    }

    fn named(name: &str, concrete: bool) -> Self {
        Self {
            id: NameHash::of(name),
            debug_name: name.to_string(),
            size: 0,
            dim: 1,
            dim_predicate: None,
            concrete,
            members: IndexMap::new(),
            members_getter: None,
            subtypes: IndexSet::new(),
            subtypes_getter: None,
            casts: IndexMap::new(),
            construct_from: None,
            destruct: None,
            can_default_construct: true,
        }
    }

    /// The reserved "none" sentinel definition: id zero, dim zero, meta.
    /// Always invalid; matches nothing but itself.
    pub(crate) fn none() -> Self {
        let mut def = Self::named("none", false);
        def.id = TypeRef::ZERO;
        def.dim = 0;
        def
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_dim(mut self, dim: usize) -> Self {
        self.dim = dim;
        self
    }

    pub fn with_dim_predicate(
        mut self,
        pred: impl Fn(usize) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.dim_predicate = Some(DimPredicate::new(pred));
        self
    }

    pub fn with_member(mut self, name: &str, ty: TypeRef) -> Self {
        self.members.insert(NameHash::of(name), ty);
        self
    }

    pub fn with_members_getter(
        mut self,
        f: impl Fn(NameHash) -> TypeRef + Send + Sync + 'static,
    ) -> Self {
        self.members_getter = Some(MemberResolver::new(f));
        self
    }

    pub fn with_subtype(mut self, ty: TypeRef) -> Self {
        self.subtypes.insert(ty);
        self
    }

    pub fn with_subtypes(mut self, tys: impl IntoIterator<Item = TypeRef>) -> Self {
        self.subtypes.extend(tys);
        self
    }

    pub fn with_subtypes_getter(
        mut self,
        f: impl Fn(TypeRef) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.subtypes_getter = Some(SubtypePredicate::new(f));
        self
    }

    pub fn with_cast(mut self, to: TypeRef, class: CastClass) -> Self {
        self.casts.insert(to, class);
        self
    }

    pub fn with_construct_from(
        mut self,
        f: impl Fn(&[TypeRef]) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.construct_from = Some(ConstructHook::new(f));
        self
    }

    pub fn with_destruct(mut self, f: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.destruct = Some(DestructHook::new(f));
        self
    }

    pub fn with_default_construct(mut self, can: bool) -> Self {
        self.can_default_construct = can;
        self
    }
}
