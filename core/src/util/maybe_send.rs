use std::future::Future;

/// A trait alias that enforces `Send` only on native platforms.
pub use maybe_send::MaybeSend;
/// A boxed future that is `Send` only on native platforms.
pub use maybe_send::BoxFuture;

/// A future that can be boxed into a [`BoxFuture`], requiring `Send` only on native platforms.
pub trait MaybeSendFuture<'a>: Future {
  fn boxed_maybe_send(self) -> BoxFuture<'a, Self::Output>;
}

#[cfg(not(target_arch = "wasm32"))]
mod maybe_send {
  use std::future::Future;
  use std::pin::Pin;

  pub trait MaybeSend: Send {}

  impl<T> MaybeSend for T where T: Send {}

  pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output=T> + Send + 'a>>;

  impl<'a, F: Future + Send + 'a> super::MaybeSendFuture<'a> for F {
    #[inline]
    fn boxed_maybe_send(self) -> BoxFuture<'a, F::Output> { Box::pin(self) }
  }
}

#[cfg(target_arch = "wasm32")]
mod maybe_send {
  use std::future::Future;
  use std::pin::Pin;

  pub trait MaybeSend {}

  impl<T> MaybeSend for T {}

  pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output=T> + 'a>>;

  impl<'a, F: Future + 'a> super::MaybeSendFuture<'a> for F {
    #[inline]
    fn boxed_maybe_send(self) -> BoxFuture<'a, F::Output> { Box::pin(self) }
  }
}
