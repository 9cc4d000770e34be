//! The type registry: single source of truth for registered types.

use indexmap::IndexMap;

use crate::def::TypeDefinition;
use crate::handle::TypeHandle;
use crate::ident::{NameHash, TypeRef};

/// Owns every [`TypeDefinition`] of a compilation, keyed by [`TypeRef`].
///
/// Append-only: entries are never removed or replaced, so lookups are
/// stable for the registry's whole lifetime. The "none" sentinel is
/// seeded at slot 0 and reachable both under [`TypeRef::ZERO`] and under
/// the hash of the literal name `"none"`.
#[derive(Debug)]
pub struct TypeRegistry {
    defs: Vec<TypeDefinition>,
    slots: IndexMap<TypeRef, usize>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            defs: Vec::new(),
            slots: IndexMap::new(),
        };
        registry.slots.insert(TypeRef::ZERO, 0);
        registry.slots.insert(NameHash::of("none"), 0);
        registry.defs.push(TypeDefinition::none());
        registry
    }

    /// Insert `def` under its id.
    ///
    /// A conflicting id is a silent no-op returning false; the caller
    /// decides whether that is an error. The seeded none entry makes both
    /// the zero id and the name `"none"` unregisterable.
    pub fn add_definition(&mut self, def: TypeDefinition) -> bool {
        if self.slots.contains_key(&def.id) {
            return false;
        }
        self.slots.insert(def.id, self.defs.len());
        self.defs.push(def);
        true
    }

    /// The handle for `id`, or the none handle when `id` is unknown.
    pub fn get_type(&self, id: TypeRef) -> TypeHandle<'_> {
        match self.slots.get(&id) {
            Some(&slot) => TypeHandle::new(self, &self.defs[slot]),
            None => self.get_none(),
        }
    }

    /// The sentinel handle for the none type.
    pub fn get_none(&self) -> TypeHandle<'_> {
        TypeHandle::new(self, &self.defs[0])
    }

    /// Whether a definition with `id` exists, the seeded none included.
    pub fn contains(&self, id: TypeRef) -> bool {
        self.slots.contains_key(&id)
    }

    /// Number of stored definitions, the seeded none included.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// All definitions in registration order, the none sentinel first.
    pub fn iter(&self) -> impl Iterator<Item = TypeHandle<'_>> {
        self.defs.iter().map(move |def| TypeHandle::new(self, def))
    }
}
