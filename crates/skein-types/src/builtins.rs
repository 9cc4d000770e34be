//! The baseline type catalog a compilation starts from.
//!
//! Scalars, float vectors with swizzle access, a variable-dimension float
//! array, and the meta-types node signatures are usually written against.
//! Hosts with their own type universe can skip [`install`] and register
//! from scratch; the none sentinel is always present either way.

use indexmap::IndexMap;

use crate::cast::CastClass;
use crate::def::TypeDefinition;
use crate::ident::{NameHash, TypeRef};
use crate::registry::TypeRegistry;
use crate::{Error, Result};

/// Well-known ids, hashed at compile time.
pub mod refs {
    use crate::ident::{NameHash, TypeRef};

    pub const BOOL: TypeRef = NameHash::of("bool");
    pub const INT: TypeRef = NameHash::of("int");
    pub const UINT: TypeRef = NameHash::of("uint");
    pub const FLOAT: TypeRef = NameHash::of("float");
    pub const FLOAT2: TypeRef = NameHash::of("float2");
    pub const FLOAT3: TypeRef = NameHash::of("float3");
    pub const FLOAT4: TypeRef = NameHash::of("float4");
    pub const FLOAT_ARRAY: TypeRef = NameHash::of("float[]");
    pub const NUMBER: TypeRef = NameHash::of("number");
    pub const SCALAR: TypeRef = NameHash::of("scalar");
    pub const VECTOR: TypeRef = NameHash::of("vector");
    pub const ANY: TypeRef = NameHash::of("any");
}

/// Register the builtin catalog into `registry`.
///
/// Fails with [`Error::DuplicateType`] on the first id already taken,
/// leaving everything registered up to that point in place.
pub fn install(registry: &mut TypeRegistry) -> Result<()> {
    for def in catalog() {
        let name = def.debug_name.clone();
        if !registry.add_definition(def) {
            return Err(Error::DuplicateType { name });
        }
    }
    Ok(())
}

/// A fresh registry with the whole catalog installed.
pub fn standard_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    let installed = install(&mut registry).is_ok();
    debug_assert!(installed, "builtin catalog ids collide");
    registry
}

fn catalog() -> Vec<TypeDefinition> {
    let runtime = CastClass::CONSTANT | CastClass::GENERATES_IR;
    let widening = CastClass::IMPLICIT | runtime;

    vec![
        TypeDefinition::concrete("bool")
            .with_size(1)
            .with_cast(refs::INT, CastClass::LOSSLESS | widening)
            .with_cast(refs::FLOAT, CastClass::LOSSLESS | widening),
        TypeDefinition::concrete("int")
            .with_size(4)
            .with_cast(refs::UINT, runtime)
            .with_cast(refs::FLOAT, widening),
        TypeDefinition::concrete("uint")
            .with_size(4)
            .with_cast(refs::INT, runtime)
            .with_cast(refs::FLOAT, widening),
        TypeDefinition::concrete("float")
            .with_size(4)
            .with_cast(refs::INT, runtime)
            .with_cast(refs::UINT, runtime),
        vector("float2", &["x", "y"]),
        vector("float3", &["x", "y", "z"]),
        vector("float4", &["x", "y", "z", "w"]),
        TypeDefinition::concrete("float[]")
            .with_size(4)
            .with_dim_predicate(|dim| dim >= 1)
            .with_destruct(|| true),
        TypeDefinition::meta("number").with_subtypes([refs::INT, refs::UINT, refs::FLOAT]),
        TypeDefinition::meta("scalar").with_subtypes([refs::BOOL, refs::NUMBER]),
        TypeDefinition::meta("vector").with_subtypes([refs::FLOAT2, refs::FLOAT3, refs::FLOAT4]),
        TypeDefinition::meta("any").with_subtypes_getter(|id| !id.is_zero()),
    ]
}

/// A vector type: `float` components under the given names, plus swizzle
/// members for every 1..=4 letter combination of those names. Constructs
/// from one float per component or a single float splat.
fn vector(name: &str, components: &[&str]) -> TypeDefinition {
    let arity = components.len();
    let mut def = TypeDefinition::concrete(name);
    for component in components {
        def = def.with_member(component, refs::FLOAT);
    }
    def.with_members_getter(swizzle_resolver(components))
        .with_construct_from(move |args| {
            (args.len() == arity || args.len() == 1) && args.iter().all(|&arg| arg == refs::FLOAT)
        })
}

/// Precomputes the hash of every swizzle over `components` and maps it to
/// the float type of the swizzle's width, so `"xy"` on a float3 resolves
/// to float2 and `"zzz"` to float3. Single letters overlap the static
/// members and resolve identically.
fn swizzle_resolver(components: &[&str]) -> impl Fn(NameHash) -> TypeRef + Send + Sync + 'static {
    let widths = [refs::FLOAT, refs::FLOAT2, refs::FLOAT3, refs::FLOAT4];
    let mut table: IndexMap<NameHash, TypeRef> = IndexMap::new();
    let mut prefixes = vec![String::new()];
    for width in widths {
        let mut longer = Vec::new();
        for prefix in &prefixes {
            for component in components {
                let swizzle = format!("{prefix}{component}");
                table.insert(NameHash::of(&swizzle), width);
                longer.push(swizzle);
            }
        }
        prefixes = longer;
    }
    move |name| table.get(&name).copied().unwrap_or(TypeRef::ZERO)
}
