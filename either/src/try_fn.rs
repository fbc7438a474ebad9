use std::panic::{self, AssertUnwindSafe};

use crate::either::Either;
use crate::fault::Panic;

/// Wraps `f` so that a panic during a call comes back as `Left(Panic)`.
///
/// Only the panic raised inside that one call is captured. Functions taking
/// several arguments receive them as a tuple.
pub fn try_fn<F, A, R>(mut f: F) -> impl FnMut(A) -> Either<Panic, R>
where
    F: FnMut(A) -> R,
{
    move |args| match panic::catch_unwind(AssertUnwindSafe(|| f(args))) {
        Ok(value) => Either::Right(value),
        Err(payload) => {
            let panic = Panic::from_payload(payload);
            log::debug!("captured panic: {}", panic);
            Either::Left(panic)
        }
    }
}

/// Wraps a `Result`-returning `f` so that `Err(e)` comes back as `Left(e)`.
pub fn try_result<F, A, R, E>(mut f: F) -> impl FnMut(A) -> Either<E, R>
where
    F: FnMut(A) -> Result<R, E>,
{
    move |args| match f(args) {
        Ok(value) => Either::Right(value),
        Err(error) => {
            log::trace!("converted error into Left");
            Either::Left(error)
        }
    }
}
