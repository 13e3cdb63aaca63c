pub mod fault;
pub mod optional;
pub mod fallible;
pub mod sequence;
mod convert;

#[cfg(feature = "deferred")]
pub mod deferred;

pub mod util;
pub mod app;

pub use fault::AccessFault;
pub use optional::Optional::{self, Absent, Present};
pub use fallible::Fallible::{self, Failure, Success};
