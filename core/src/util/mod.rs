pub mod maybe_send;
#[cfg(feature = "deferred")]
pub mod future;
