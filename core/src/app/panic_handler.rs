use std::panic;

use crate::fault::AccessFault;

/// Install a panic hook that reports panics carrying an [`AccessFault`] as `tracing` error events, including the
/// location of the call that raised the fault. Faults later recovered with [`AccessFault::catch`] are reported too.
/// Other panics are forwarded to the previously installed hook.
pub fn install_fault_hook() {
  let previous = panic::take_hook();
  panic::set_hook(Box::new(move |info| {
    let Some(fault) = info.payload().downcast_ref::<AccessFault>() else {
      return previous(info);
    };
    match info.location() {
      Some(location) => tracing::error!(%fault, %location, "access fault raised"),
      None => tracing::error!(%fault, "access fault raised"),
    }
  }));
}
