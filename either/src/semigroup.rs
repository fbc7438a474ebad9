use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::ops;

/// A type with an associative append.
///
/// Implementations must satisfy
/// `a.combine(b).combine(c) == a.combine(b.combine(c))`.
pub trait Semigroup {
    fn combine(self, other: Self) -> Self;
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T> Semigroup for VecDeque<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

/// Entries of `other` replace entries of `self` with the same key.
impl<K: Ord, V> Semigroup for BTreeMap<K, V> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

/// Entries of `other` replace entries of `self` with the same key.
impl<K: Eq + Hash, V, S: BuildHasher> Semigroup for HashMap<K, V, S> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T: Ord> Semigroup for BTreeSet<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T: Eq + Hash, S: BuildHasher> Semigroup for HashSet<T, S> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

/// `None` is the identity.
impl<T: Semigroup> Semigroup for Option<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(lhs), Some(rhs)) => Some(lhs.combine(rhs)),
            (lhs, None) => lhs,
            (None, rhs) => rhs,
        }
    }
}

impl Semigroup for () {
    #[inline]
    fn combine(self, _other: Self) -> Self {}
}

macro_rules! tuple_semigroup {
    ($($name:ident $index:tt),+) => {
        impl<$($name: Semigroup),+> Semigroup for ($($name,)+) {
            #[inline]
            fn combine(self, other: Self) -> Self {
                ($(self.$index.combine(other.$index),)+)
            }
        }
    };
}

tuple_semigroup!(A 0);
tuple_semigroup!(A 0, B 1);
tuple_semigroup!(A 0, B 1, C 2);
tuple_semigroup!(A 0, B 1, C 2, D 3);

/// Combines numbers by addition.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum<T>(pub T);

impl<T: ops::Add<Output = T>> Semigroup for Sum<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Sum(self.0 + other.0)
    }
}

/// Combines numbers by multiplication.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product<T>(pub T);

impl<T: ops::Mul<Output = T>> Semigroup for Product<T> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Product(self.0 * other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option() {
        assert_eq!(Some(Sum(1)).combine(Some(Sum(2))), Some(Sum(3)));
        assert_eq!(Some(Sum(1)).combine(None), Some(Sum(1)));
        assert_eq!(None::<Sum<i32>>.combine(Some(Sum(2))), Some(Sum(2)));
        assert_eq!(None::<Sum<i32>>.combine(None), None);
    }

    #[test]
    fn test_tuple() {
        let lhs = ("foo".to_owned(), vec![1], Product(2));
        let rhs = ("bar".to_owned(), vec![2, 3], Product(5));
        assert_eq!(
            lhs.combine(rhs),
            ("foobar".to_owned(), vec![1, 2, 3], Product(10))
        );
    }

    #[test]
    fn test_map_right_entries_win() {
        let lhs = BTreeMap::from([(1, "a"), (2, "b")]);
        let rhs = BTreeMap::from([(2, "c"), (3, "d")]);
        assert_eq!(
            lhs.combine(rhs),
            BTreeMap::from([(1, "a"), (2, "c"), (3, "d")])
        );
    }
}
