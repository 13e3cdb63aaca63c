//! Bridge from a pending computation to a [`Fallible`].
//!
//! A [`Deferred`] wraps a future that settles exactly once. Every way of obtaining the settled value consumes the
//! handle, so a settlement is produced at most once per handle. Dropping the handle is the only way to cancel.

use std::future::{Future, IntoFuture};

use futures::future::Inspect;
use futures::FutureExt;

use crate::fallible::Fallible;
use crate::util::maybe_send::{BoxFuture, MaybeSend, MaybeSendFuture};

/// Pending computation that settles with a [`Fallible`].
#[must_use = "deferred values do nothing unless awaited"]
pub struct Deferred<F> {
  future: F,
}

/// Create a [`Deferred`] from `future`. Settling with `Ok` produces a success, settling with `Err` a failure.
#[inline]
pub fn deferred<T, E>(future: impl Future<Output=Result<T, E>>) -> Deferred<impl Future<Output=Fallible<T, E>>> {
  Deferred { future: future.map(Fallible::from) }
}

impl<F: Future<Output=Fallible<T, E>>, T, E> Deferred<F> {
  /// Create a [`Deferred`] from a `future` that already settles with a [`Fallible`].
  #[inline]
  pub fn from_fallible(future: F) -> Self { Self { future } }

  /// Wait for settlement inside the current async context.
  #[inline]
  pub async fn settle(self) -> Fallible<T, E> {
    self.await
  }

  /// Block the current thread until settled.
  #[inline]
  pub fn wait(self) -> Fallible<T, E> {
    futures::executor::block_on(self.into_future())
  }


  /// Map the success value with `f` once settled, returning a new handle.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Deferred<impl Future<Output=Fallible<U, E>>> {
    Deferred { future: self.future.map(move |fallible| fallible.map(f)) }
  }

  /// Map the error with `f` once settled, returning a new handle.
  #[inline]
  pub fn map_err<G>(self, f: impl FnOnce(E) -> G) -> Deferred<impl Future<Output=Fallible<T, G>>> {
    Deferred { future: self.future.map(move |fallible| fallible.map_err(f)) }
  }

  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Fallible<U, E>) -> Deferred<impl Future<Output=Fallible<U, E>>> {
    Deferred { future: self.future.map(move |fallible| fallible.and_then(f)) }
  }


  /// Returns a future that runs continuation `f` with the settled value.
  #[inline]
  pub fn then<R>(self, f: impl FnOnce(Fallible<T, E>) -> R) -> impl Future<Output=R> {
    self.into_future().map(f)
  }

  /// Spawn continuation `f` onto the current tokio runtime, running it with the settled value.
  ///
  /// # Panics
  ///
  /// Panics if called outside of a tokio runtime.
  #[cfg(not(target_arch = "wasm32"))]
  pub fn spawn_then<R: MaybeSend + 'static>(
    self,
    f: impl FnOnce(Fallible<T, E>) -> R + MaybeSend + 'static,
  ) -> tokio::task::JoinHandle<R> where
    F: MaybeSend + 'static,
    T: 'static,
    E: 'static,
  {
    tracing::trace!("spawning deferred continuation");
    tokio::spawn(self.then(f))
  }


  /// Erase the type of the wrapped future. The future must be `Send` on native platforms.
  #[inline]
  pub fn boxed<'a>(self) -> Deferred<BoxFuture<'a, Fallible<T, E>>> where
    F: MaybeSendFuture<'a>
  {
    Deferred { future: self.future.boxed_maybe_send() }
  }
}

impl<F: Future<Output=Fallible<T, E>>, T, E> IntoFuture for Deferred<F> {
  type Output = Fallible<T, E>;
  type IntoFuture = Inspect<F, fn(&Fallible<T, E>)>;

  #[inline]
  fn into_future(self) -> Self::IntoFuture {
    self.future.inspect(trace_settled::<T, E> as fn(&Fallible<T, E>))
  }
}

fn trace_settled<T, E>(fallible: &Fallible<T, E>) {
  tracing::trace!(success = fallible.is_success(), "deferred value settled");
}
