#![cfg(feature = "serde")]

use either::{Either, Panic, Sum};

#[test]
fn test_externally_tagged() {
    let right: Either<String, i32> = Either::Right(1);
    let left: Either<String, i32> = Either::Left("boom".to_owned());
    assert_eq!(ron::to_string(&right).unwrap(), "Right(1)");
    assert_eq!(ron::to_string(&left).unwrap(), "Left(\"boom\")");
}

#[test]
fn test_deserialize() {
    let right: Either<String, i32> = ron::from_str("Right(1)").unwrap();
    let left: Either<Panic, Sum<i32>> = ron::from_str("Left((message: \"boom\"))").unwrap();
    assert_eq!(right, Either::Right(1));
    assert_eq!(left, Either::Left(Panic::new("boom")));
}
