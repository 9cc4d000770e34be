use crate::Error;
use crate::builtins::{self, refs};
use crate::cast::CastClass;
use crate::def::TypeDefinition;
use crate::ident::{NameHash, TypeRef};
use crate::registry::TypeRegistry;

#[test]
fn install_populates_a_fresh_registry() {
    let types = builtins::standard_registry();

    assert_eq!(types.len(), 13);
    for id in [
        refs::BOOL,
        refs::INT,
        refs::UINT,
        refs::FLOAT,
        refs::FLOAT2,
        refs::FLOAT3,
        refs::FLOAT4,
        refs::FLOAT_ARRAY,
        refs::NUMBER,
        refs::SCALAR,
        refs::VECTOR,
        refs::ANY,
    ] {
        assert!(types.contains(id));
        assert!(types.get_type(id).is_valid());
    }

    // The sentinel survives installation untouched.
    assert!(!types.get_type(TypeRef::ZERO).is_valid());
}

#[test]
fn install_escalates_id_conflicts() {
    let mut types = TypeRegistry::new();
    types.add_definition(TypeDefinition::concrete("float").with_size(8));

    let err = builtins::install(&mut types).unwrap_err();
    assert!(matches!(&err, Error::DuplicateType { name } if name == "float"));
    assert_eq!(err.to_string(), "type `float` is already registered");

    // Everything registered before the clash stays; the clash loses.
    assert!(types.contains(refs::BOOL));
    assert!(types.contains(refs::INT));
    assert!(types.contains(refs::UINT));
    assert!(!types.contains(refs::FLOAT2));
    assert_eq!(types.get_type(refs::FLOAT).def().size, 8);
}

#[test]
fn every_builtin_accepts_itself() {
    let types = builtins::standard_registry();

    for handle in types.iter().skip(1) {
        assert!(handle.is_valid(), "{} should be valid", handle.debug_name());
        assert!(handle.is_valid_resolution(&handle));
    }
}

#[test]
fn float2_walkthrough() {
    let types = builtins::standard_registry();
    let float2 = types.get_type(refs::FLOAT2);

    assert!(float2.is_valid());
    assert!(float2.is_fully_concrete());
    assert_eq!(float2.size(), 8);
    assert!(float2.has_member_named("x"));
    assert_eq!(float2.get_member_type_named("y").get_ref(), refs::FLOAT);
    assert!(float2.get_member_type_named("q").is_none());
    assert!(float2.is_valid_resolution(&float2));
    assert!(!float2.is_valid_resolution(&types.get_type(refs::FLOAT3)));
}

#[test]
fn vector_sizes_accumulate_components() {
    let types = builtins::standard_registry();

    assert_eq!(types.get_type(refs::FLOAT2).size(), 8);
    assert_eq!(types.get_type(refs::FLOAT3).size(), 12);
    assert_eq!(types.get_type(refs::FLOAT4).size(), 16);
}

#[test]
fn swizzles_resolve_to_vectors_of_their_width() {
    let types = builtins::standard_registry();
    let float3 = types.get_type(refs::FLOAT3);

    assert_eq!(float3.get_member_type_named("x").get_ref(), refs::FLOAT);
    assert_eq!(float3.get_member_type_named("xz").get_ref(), refs::FLOAT2);
    assert_eq!(float3.get_member_type_named("zyx").get_ref(), refs::FLOAT3);
    assert_eq!(float3.get_member_type_named("xxyy").get_ref(), refs::FLOAT4);
    assert!(float3.has_member_named("zz"));

    // No `w` component on a float3, in any position.
    assert!(!float3.has_member_named("w"));
    assert!(float3.get_member_type_named("xw").is_none());

    let float4 = types.get_type(refs::FLOAT4);
    assert_eq!(float4.get_member_type_named("wzyx").get_ref(), refs::FLOAT4);
}

#[test]
fn float_array_is_dimension_polymorphic() {
    let mut types = builtins::standard_registry();
    types.add_definition(TypeDefinition::concrete("float8").with_size(4).with_dim(8));

    let array = types.get_type(refs::FLOAT_ARRAY);
    assert!(array.is_meta_array());
    assert_eq!(array.size(), 4);
    assert!(!array.is_fully_concrete());
    assert!(!array.is_primitive());

    let predicate = array.def().dim_predicate.as_ref().unwrap();
    assert!(predicate.accepts(1));
    assert!(predicate.accepts(1024));
    assert!(!predicate.accepts(0));

    assert!(array.is_valid_resolution(&types.get_type(NameHash::of("float8"))));
    assert!(array.is_valid_resolution(&types.get_type(refs::FLOAT)));
}

#[test]
fn numeric_cast_table_bits() {
    let types = builtins::standard_registry();
    let int = types.get_type(refs::INT);
    let uint = types.get_type(refs::UINT);
    let float = types.get_type(refs::FLOAT);
    let boolean = types.get_type(refs::BOOL);

    // Widening is implicit but not lossless for int.
    assert!(int.can_implicit_cast(&float));
    assert!(!int.can_lossless_cast(&float));
    assert!(int.can_constant_cast(&float));

    // Narrowing stays explicit.
    assert!(!float.can_implicit_cast(&int));
    assert!(float.can_constant_cast(&int));

    assert!(boolean.can_lossless_cast(&int));
    assert!(boolean.can_implicit_cast(&float));

    // Reinterpreting between int and uint is neither implicit nor free.
    assert!(!int.can_implicit_cast(&uint));
    assert!(int.cast_class(&uint).contains(CastClass::GENERATES_IR));

    // No table entry, no cast.
    assert!(!uint.cast_class(&boolean).is_possible());
}

#[test]
fn meta_types_accept_their_subtype_families() {
    let types = builtins::standard_registry();
    let number = types.get_type(refs::NUMBER);
    let scalar = types.get_type(refs::SCALAR);
    let vector = types.get_type(refs::VECTOR);
    let any = types.get_type(refs::ANY);
    let int = types.get_type(refs::INT);
    let float = types.get_type(refs::FLOAT);
    let float3 = types.get_type(refs::FLOAT3);

    assert!(number.is_valid_resolution(&int));
    assert!(number.is_valid_resolution(&float));
    assert!(scalar.is_valid_resolution(&number));
    assert!(scalar.is_valid_resolution(&float));
    assert!(vector.is_valid_resolution(&float3));

    assert!(!number.is_valid_resolution(&float3));
    assert!(!vector.is_valid_resolution(&int));
    assert!(!float.is_valid_resolution(&number));

    assert!(any.is_valid_resolution(&float3));
    assert!(any.is_valid_resolution(&vector));
    assert!(!any.is_valid_resolution(&types.get_none()));
}

#[test]
fn memberless_scalars_cover_each_other_structurally() {
    let types = builtins::standard_registry();

    // `bool` is not listed under number, but int's shape (memberless,
    // dim 1) covers it transitively.
    let number = types.get_type(refs::NUMBER);
    assert!(number.is_valid_resolution(&types.get_type(refs::BOOL)));
}

#[test]
fn vectors_construct_from_components_or_splat() {
    let types = builtins::standard_registry();
    let float3 = types.get_type(refs::FLOAT3);

    let hook = float3.def().construct_from.as_ref().unwrap();
    assert!(hook.construct(&[refs::FLOAT, refs::FLOAT, refs::FLOAT]));
    assert!(hook.construct(&[refs::FLOAT]));
    assert!(!hook.construct(&[refs::FLOAT, refs::FLOAT]));
    assert!(!hook.construct(&[refs::FLOAT, refs::INT, refs::FLOAT]));
    assert!(float3.def().can_default_construct);

    let array = types.get_type(refs::FLOAT_ARRAY);
    assert!(array.def().destruct.as_ref().unwrap().destruct());
    assert!(types.get_type(refs::FLOAT).def().destruct.is_none());
}

#[test]
fn catalog_dump() {
    let types = builtins::standard_registry();

    insta::assert_snapshot!(types.dump(), @r"
    none meta dim=0
    bool concrete size=1 casts(2)
    int concrete size=4 casts(2)
    uint concrete size=4 casts(2)
    float concrete size=4 casts(2)
    float2 concrete size=8 members(2): float, float +dynamic-members
    float3 concrete size=12 members(3): float, float, float +dynamic-members
    float4 concrete size=16 members(4): float, float, float, float +dynamic-members
    float[] concrete dim=* size=4
    number meta subtypes: int | uint | float
    scalar meta subtypes: bool | number
    vector meta subtypes: float2 | float3 | float4
    any meta +dynamic-subtypes
    ");
}
