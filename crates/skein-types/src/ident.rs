//! Name hashing: stable 64-bit identifiers for type and member names.
//!
//! Every textual name entering the type model is reduced to a [`NameHash`]
//! by one fixed FNV-1a function. The function is `const`, so names known
//! ahead of time hash at compile time, and runtime-text lookups go through
//! the exact same code path; the two can never disagree.

use std::fmt;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x100_0000_01b3;

/// Stable 64-bit hash of a type or member name.
///
/// Equality and ordering are by value. [`NameHash::ZERO`] is reserved as
/// the "no type" sentinel and never names anything.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NameHash(u64);

/// A type's primary key: the hash of its name.
pub type TypeRef = NameHash;

impl NameHash {
    /// Sentinel meaning "no type" / absent.
    pub const ZERO: NameHash = NameHash(0);

    /// Hash a name with 64-bit FNV-1a.
    ///
    /// Usable in const context:
    /// `const FLOAT: NameHash = NameHash::of("float");`
    #[must_use]
    pub const fn of(name: &str) -> NameHash {
        let bytes = name.as_bytes();
        let mut hash = FNV_OFFSET_BASIS;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
            i += 1;
        }
        NameHash(hash)
    }

    /// Wrap a raw hash value.
    #[inline]
    pub const fn from_raw(raw: u64) -> NameHash {
        NameHash(raw)
    }

    /// The raw 64-bit value.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Whether this is the zero sentinel.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for NameHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NameHash({:#018x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_fnv1a_vectors() {
        assert_eq!(NameHash::of("").raw(), 0xcbf2_9ce4_8422_2325);
        assert_eq!(NameHash::of("a").raw(), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(NameHash::of("foobar").raw(), 0x8594_4171_f739_67e8);
    }

    #[test]
    fn const_and_runtime_agree() {
        const FLOAT: NameHash = NameHash::of("float");
        let name = String::from("float");
        assert_eq!(NameHash::of(&name), FLOAT);
    }

    #[test]
    fn distinct_names_hash_distinctly() {
        assert_ne!(NameHash::of("float"), NameHash::of("float2"));
        assert_ne!(NameHash::of("x"), NameHash::of("y"));
    }

    #[test]
    fn zero_is_not_a_name() {
        assert!(NameHash::ZERO.is_zero());
        assert!(!NameHash::of("none").is_zero());
    }

    #[test]
    fn debug_prints_hex() {
        assert_eq!(
            format!("{:?}", NameHash::ZERO),
            "NameHash(0x0000000000000000)"
        );
    }
}
