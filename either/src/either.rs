use std::fmt;

use crate::fault::Fault;
use crate::semigroup::Semigroup;

/// A value that is exactly one of `Left(L)` or `Right(R)`.
///
/// Operations are right-biased: `map`, `chain`, `ap` and `concat` act on the
/// `Right` payload and pass a `Left` through untouched.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Wraps `value` as `Right`.
    #[inline]
    pub fn of(value: R) -> Self {
        Either::Right(value)
    }

    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => Either::Right(value),
        }
    }

    #[inline]
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => Either::Right(value),
        }
    }

    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(value) => Some(value),
            Either::Right(_) => None,
        }
    }

    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(value) => Some(value),
        }
    }

    #[inline]
    pub fn map<F, U>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        match self {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => Either::Right(f(value)),
        }
    }

    #[inline]
    pub fn left_map<F, M>(self, f: F) -> Either<M, R>
    where
        F: FnOnce(L) -> M,
    {
        match self {
            Either::Left(value) => Either::Left(f(value)),
            Either::Right(value) => Either::Right(value),
        }
    }

    /// Applies `on_left` or `on_right` to whichever payload is present.
    #[inline]
    pub fn bimap<F, G, M, U>(self, on_left: F, on_right: G) -> Either<M, U>
    where
        F: FnOnce(L) -> M,
        G: FnOnce(R) -> U,
    {
        match self {
            Either::Left(value) => Either::Left(on_left(value)),
            Either::Right(value) => Either::Right(on_right(value)),
        }
    }

    /// Sequences a fallible step after this one. A `Left` stops the sequence.
    #[inline]
    pub fn chain<F, U>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        match self {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => f(value),
        }
    }

    /// Recovers from a `Left` by running `f` on its payload.
    #[inline]
    pub fn or_else<F, M>(self, f: F) -> Either<M, R>
    where
        F: FnOnce(L) -> Either<M, R>,
    {
        match self {
            Either::Left(value) => f(value),
            Either::Right(value) => Either::Right(value),
        }
    }

    #[inline]
    pub fn fold<F, G, T>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(value) => on_left(value),
            Either::Right(value) => on_right(value),
        }
    }

    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(value) => Either::Right(value),
            Either::Right(value) => Either::Left(value),
        }
    }

    /// Returns the `Right` payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Left`, with a message including the `Left`
    /// payload. Use [`Either::try_get`], [`Either::get_or_else`] or
    /// [`Either::fold`] when a `Left` is expected.
    #[track_caller]
    pub fn get(self) -> R
    where
        L: fmt::Debug,
    {
        match self {
            Either::Left(value) => {
                log::error!("{}: {:?}", Fault::LeftValue, value);
                panic!("{}: {:?}", Fault::LeftValue, value)
            }
            Either::Right(value) => value,
        }
    }

    pub fn try_get(self) -> Result<R, Fault> {
        match self {
            Either::Left(_) => Err(Fault::LeftValue),
            Either::Right(value) => Ok(value),
        }
    }

    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        match self {
            Either::Left(_) => default,
            Either::Right(value) => value,
        }
    }

    #[inline]
    pub fn get_or_else_with<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Either::Left(value) => f(value),
            Either::Right(value) => value,
        }
    }

    #[inline]
    pub fn is_equal(&self, other: &Self) -> bool
    where
        L: PartialEq,
        R: PartialEq,
    {
        self == other
    }

    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        self.into()
    }

    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&R> {
        self.as_ref().right().into_iter()
    }
}

impl<L, F> Either<L, F> {
    /// Applies the function held in `Right` to the `Right` payload of `other`.
    ///
    /// The receiver's `Left` wins over `other`'s.
    #[inline]
    pub fn ap<A, B>(self, other: Either<L, A>) -> Either<L, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Either::Left(value) => Either::Left(value),
            Either::Right(f) => other.map(f),
        }
    }
}

impl<L, R: Semigroup> Either<L, R> {
    /// Combines two `Right` payloads. If either side is `Left` that `Left`
    /// is returned, the receiver's first.
    pub fn concat(self, other: Self) -> Self {
        match (self, other) {
            (Either::Right(lhs), Either::Right(rhs)) => Either::Right(lhs.combine(rhs)),
            (Either::Left(value), _) | (_, Either::Left(value)) => Either::Left(value),
        }
    }
}

impl<T> Either<T, T> {
    #[inline]
    pub fn merge(self) -> T {
        match self {
            Either::Left(value) | Either::Right(value) => value,
        }
    }
}

impl<T> Either<(), T> {
    /// `None` becomes `Left(())`, anything present becomes `Right`.
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Either::Right(value),
            None => Either::Left(()),
        }
    }
}

impl<L, R> Either<L, Either<L, R>> {
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        self.chain(|inner| inner)
    }
}

impl<L, R: Semigroup> Semigroup for Either<L, R> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(value) => write!(f, "Left({})", value),
            Either::Right(value) => write!(f, "Right({})", value),
        }
    }
}

impl<T> From<Option<T>> for Either<(), T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Either::from_nullable(value)
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(value: Result<R, L>) -> Self {
        match value {
            Ok(value) => Either::Right(value),
            Err(value) => Either::Left(value),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(value: Either<L, R>) -> Self {
        match value {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_left_precedence() {
        let lhs: Either<&str, String> = Either::Left("lhs");
        let rhs: Either<&str, String> = Either::Left("rhs");
        assert_eq!(lhs.concat(rhs), Either::Left("lhs"));

        let lhs: Either<&str, String> = Either::Right("foo".to_owned());
        let rhs: Either<&str, String> = Either::Left("rhs");
        assert_eq!(lhs.concat(rhs), Either::Left("rhs"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Either::<i32, &str>::Right("foo").to_string(), "Right(foo)");
        assert_eq!(Either::<i32, &str>::Left(1).to_string(), "Left(1)");
    }
}
