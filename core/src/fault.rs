use std::fmt::Debug;
use std::panic::{self, UnwindSafe};

/// Fault raised when a container is unwrapped as the variant it does not currently hold.
///
/// Faults are raised as the panic payload, so they can be told apart from other panics and recovered with
/// [`AccessFault::catch`]. Callers that check the variant first, or use one of the fallback operations such as
/// `unwrap_or`, never observe a fault.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum AccessFault {
  /// `unwrap` was called on an empty optional. There is no payload to carry.
  #[error("called `unwrap` on an `Absent` value")]
  EmptyValue,
  /// An unwrap-family operation was called on the other variant. Carries the caller message or a fixed prefix,
  /// combined with the rendering of the off-variant payload where one exists.
  #[error("{0}")]
  WrongVariant(String),
}

impl AccessFault {
  #[inline]
  pub(crate) fn wrong_variant(message: &str, payload: &dyn Debug) -> Self {
    Self::WrongVariant(format!("{message}: {payload:?}"))
  }

  /// Message describing this fault.
  #[inline]
  pub fn message(&self) -> String { self.to_string() }

  /// Raise this fault, stopping normal flow of the current call path.
  #[cold]
  #[inline(never)]
  #[track_caller]
  pub(crate) fn raise(self) -> ! {
    tracing::debug!(fault = %self, "raising access fault");
    panic::panic_any(self)
  }

  /// Run `f`, returning `Err` with the fault if `f` raised an [`AccessFault`]. Panics that are not access faults are
  /// resumed as-is.
  pub fn catch<R>(f: impl FnOnce() -> R + UnwindSafe) -> Result<R, AccessFault> {
    match panic::catch_unwind(f) {
      Ok(output) => Ok(output),
      Err(payload) => match payload.downcast::<AccessFault>() {
        Ok(fault) => Err(*fault),
        Err(payload) => panic::resume_unwind(payload),
      },
    }
  }
}
