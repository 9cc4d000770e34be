//! Cast classification between registered types.

use bitflags::bitflags;

bitflags! {
    /// How a value of one type may convert into another.
    ///
    /// An empty mask means the cast is not possible. Bits combine freely:
    /// an implicit numeric widening is typically also `LOSSLESS`, and a
    /// compile-time-evaluable cast still carries `GENERATES_IR` when it
    /// must lower for runtime operands.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CastClass: u8 {
        /// The conversion is exact for every value.
        const LOSSLESS = 1 << 1;
        /// May be inserted by the compiler without explicit syntax.
        const IMPLICIT = 1 << 2;
        /// Evaluable at compile time.
        const CONSTANT = 1 << 3;
        /// Lowering emits instructions.
        const GENERATES_IR = 1 << 4;
    }
}

impl CastClass {
    /// Whether any conversion exists at all.
    #[inline]
    pub const fn is_possible(self) -> bool {
        !self.is_empty()
    }
}
