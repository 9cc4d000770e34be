//! Structural resolution: whether one type is an acceptable form of another.
//!
//! `self` is the declared target (a pin or parameter type), `candidate`
//! the actual type offered for it. Concrete targets demand structural
//! identity of the member shape, recursively; meta targets accept any
//! candidate whose alternatives are all covered by their own.

use indexmap::IndexSet;

use crate::handle::TypeHandle;
use crate::ident::TypeRef;

/// (target id, candidate id) pairs currently under test. Re-entering a
/// pair means the answer depends only on the cycle itself, which proves
/// nothing; that branch fails while sibling branches keep searching.
type InProgress = IndexSet<(TypeRef, TypeRef)>;

impl TypeHandle<'_> {
    /// Whether `candidate` is an acceptable resolution of this type.
    ///
    /// Identical ids always accept each other. Otherwise both sides must
    /// be valid, dimensions must agree (deferred while the candidate is
    /// itself a partial, dim-predicated resolution), and the structural
    /// group must match: member-by-member for concrete types, coverage of
    /// every candidate alternative for meta-types. A concrete candidate
    /// offered to a meta target counts as the single alternative of
    /// itself, so `number` accepts `float` directly and through nested
    /// meta-types.
    pub fn is_valid_resolution(&self, candidate: &TypeHandle<'_>) -> bool {
        self.resolve_guarded(candidate, &mut InProgress::new())
    }

    fn resolve_guarded(&self, candidate: &TypeHandle<'_>, in_progress: &mut InProgress) -> bool {
        if self.get_ref() == candidate.get_ref() {
            return true;
        }
        let pair = (self.get_ref(), candidate.get_ref());
        if !in_progress.insert(pair) {
            return false;
        }
        let accepted = self.resolve_structure(candidate, in_progress);
        in_progress.swap_remove(&pair);
        accepted
    }

    fn resolve_structure(&self, candidate: &TypeHandle<'_>, in_progress: &mut InProgress) -> bool {
        if self.is_concrete() != candidate.is_concrete() {
            // A concrete target never takes a meta candidate. A meta
            // target takes a concrete candidate as the singleton
            // alternative of itself.
            if self.is_concrete() {
                return false;
            }
            return self.is_valid()
                && candidate.is_valid()
                && self.covers_alternative(candidate.get_ref(), candidate, in_progress);
        }

        if !self.is_valid() || !candidate.is_valid() {
            return false;
        }

        // A dim-predicated candidate is still partial; its dimension
        // compatibility is deferred to a later, fuller resolution.
        if !candidate.is_meta_array() {
            let dim_ok = match &self.def().dim_predicate {
                Some(pred) => pred.accepts(candidate.dim()),
                None => self.dim() == candidate.dim(),
            };
            if !dim_ok {
                return false;
            }
        }

        if self.is_concrete() {
            self.resolve_members(candidate, in_progress)
        } else {
            self.resolve_subtypes(candidate, in_progress)
        }
    }

    /// Concrete against concrete: same member count, every candidate
    /// member matched by name, each with an identical or recursively
    /// acceptable type.
    fn resolve_members(&self, candidate: &TypeHandle<'_>, in_progress: &mut InProgress) -> bool {
        if self.def().members.len() != candidate.def().members.len() {
            return false;
        }
        for (name, &offered_ty) in &candidate.def().members {
            let Some(&own_ty) = self.def().members.get(name) else {
                return false;
            };
            if own_ty == offered_ty {
                continue;
            }
            let own = self.registry().get_type(own_ty);
            let offered = candidate.registry().get_type(offered_ty);
            if !own.resolve_guarded(&offered, in_progress) {
                return false;
            }
        }
        true
    }

    /// Meta against meta: every alternative the candidate permits must be
    /// covered by one of this type's own.
    fn resolve_subtypes(&self, candidate: &TypeHandle<'_>, in_progress: &mut InProgress) -> bool {
        for &alternative in &candidate.def().subtypes {
            let offered = candidate.registry().get_type(alternative);
            if !self.covers_alternative(alternative, &offered, in_progress) {
                return false;
            }
        }
        true
    }

    /// An alternative is covered when it is literally listed, accepted by
    /// the dynamic predicate, or accepted transitively by some listed
    /// subtype. The literal and predicate checks run on the raw id so
    /// that ids not registered yet can still match each other.
    fn covers_alternative(
        &self,
        alternative: TypeRef,
        offered: &TypeHandle<'_>,
        in_progress: &mut InProgress,
    ) -> bool {
        if self.def().subtypes.contains(&alternative) {
            return true;
        }
        if let Some(getter) = &self.def().subtypes_getter
            && getter.accepts(alternative)
        {
            return true;
        }
        self.def()
            .subtypes
            .iter()
            .any(|&id| self.registry().get_type(id).resolve_guarded(offered, in_progress))
    }
}
