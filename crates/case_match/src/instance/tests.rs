use super::*;
use crate::test_helpers::{Shape, Square};
use pretty_assertions::assert_eq;

#[test]
fn test_value_is_instance_of_own_type() {
    assert!(7_i64.is_instance_of::<i64>());
    assert!(String::from("x").is_instance_of::<String>());
    assert!(vec![1_u8].is_instance_of::<Vec<u8>>());
}

#[test]
fn test_value_is_not_instance_of_unrelated_type() {
    assert!(!7_i64.is_instance_of::<i32>());
    assert!(!7_i64.is_instance_of::<String>());
    assert!(!"x".is_instance_of::<String>());
    assert!(!Some(1_u8).is_instance_of::<u8>());
}

#[test]
fn test_derived_type_is_instance_of_parent() {
    let square = Square::new(2.0);
    assert!(square.is_instance_of::<Square>());
    assert!(square.is_instance_of::<Shape>());
    assert!(!square.is_instance_of::<i64>());

    let shape = Shape { sides: 3 };
    assert!(!shape.is_instance_of::<Square>());
}

#[test]
fn test_narrow_to_parent_yields_embedded_value() {
    let square = Square::new(2.0);
    let shape = narrow::<Shape, _>(&square);
    assert_eq!(shape.map(|s| s.sides), Some(4));
}

#[test]
fn test_narrow_through_trait_object() {
    let values: Vec<Box<dyn Instance>> = vec![
        Box::new(1_i64),
        Box::new(String::from("two")),
        Box::new(Square::new(3.0)),
    ];

    let ints: Vec<i64> = values
        .iter()
        .filter_map(|v| narrow::<i64, _>(&**v).copied())
        .collect();
    assert_eq!(ints, vec![1]);

    let shapes = values
        .iter()
        .filter(|v| narrow::<Shape, _>(*v).is_some())
        .count();
    assert_eq!(shapes, 1);
}

#[test]
fn test_dyn_any_is_instance_of_concrete_type() {
    let value: Box<dyn Any> = Box::new(5_u32);
    assert_eq!(narrow::<u32, dyn Any>(&*value), Some(&5));
    assert_eq!(narrow::<u64, dyn Any>(&*value), None);
}
