#![cfg(feature = "derive")]

use either::{Either, Semigroup, Sum};

#[derive(Debug, PartialEq, Semigroup)]
struct Report {
    #[semigroup(first)]
    name: &'static str,
    lines: Vec<String>,
    errors: Sum<u32>,
    #[semigroup(last)]
    revision: u32,
}

#[derive(Debug, PartialEq, Semigroup)]
struct Pair<T>(T, Sum<i32>);

#[derive(Debug, PartialEq, Semigroup)]
struct Marker;

#[test]
fn test_named_fields() {
    let lhs = Report {
        name: "lhs",
        lines: vec!["a".to_owned()],
        errors: Sum(1),
        revision: 1,
    };
    let rhs = Report {
        name: "rhs",
        lines: vec!["b".to_owned()],
        errors: Sum(2),
        revision: 2,
    };
    assert_eq!(
        lhs.combine(rhs),
        Report {
            name: "lhs",
            lines: vec!["a".to_owned(), "b".to_owned()],
            errors: Sum(3),
            revision: 2,
        }
    );
}

#[test]
fn test_generic_tuple_struct() {
    let lhs = Pair("foo".to_owned(), Sum(1));
    let rhs = Pair("bar".to_owned(), Sum(2));
    assert_eq!(lhs.combine(rhs), Pair("foobar".to_owned(), Sum(3)));
}

#[test]
fn test_unit_struct() {
    assert_eq!(Marker.combine(Marker), Marker);
}

#[test]
fn test_concat_with_derived_payload() {
    let lhs: Either<&str, Pair<Vec<i32>>> = Either::Right(Pair(vec![1], Sum(1)));
    let rhs: Either<&str, Pair<Vec<i32>>> = Either::Right(Pair(vec![2], Sum(2)));
    assert_eq!(lhs.concat(rhs), Either::Right(Pair(vec![1, 2], Sum(3))));
}
