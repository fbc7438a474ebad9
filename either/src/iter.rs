use std::option;

use crate::either::Either;

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = option::IntoIter<R>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.right().into_iter()
    }
}

impl<'a, L, R> IntoIterator for &'a Either<L, R> {
    type Item = &'a R;
    type IntoIter = option::IntoIter<&'a R>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects `Right` payloads, stopping at the first `Left`.
impl<L, R, C> FromIterator<Either<L, R>> for Either<L, C>
where
    C: FromIterator<R>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Either<L, R>>,
    {
        let mut failure = None;
        let collection = iter
            .into_iter()
            .map_while(|item| match item {
                Either::Left(value) => {
                    failure = Some(value);
                    None
                }
                Either::Right(value) => Some(value),
            })
            .collect();
        match failure {
            Some(value) => Either::Left(value),
            None => Either::Right(collection),
        }
    }
}
