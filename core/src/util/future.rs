use std::future::Future;

use crate::deferred::{deferred, Deferred};
use crate::fallible::Fallible;

pub trait ResultFutureExt {
  type Success;
  type Failure;

  /// Wrap this future into a [`Deferred`] that settles with a [`Fallible`]: `Ok` becomes a success, `Err` a failure.
  fn into_deferred(self) -> Deferred<impl Future<Output=Fallible<Self::Success, Self::Failure>>>;
}

impl<F: Future<Output=Result<T, E>>, T, E> ResultFutureExt for F {
  type Success = T;
  type Failure = E;

  #[inline]
  fn into_deferred(self) -> Deferred<impl Future<Output=Fallible<T, E>>> {
    deferred(self)
  }
}
