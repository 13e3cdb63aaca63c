use std::error::Error;
use std::time::Duration;

use maybe_core::{AccessFault, Absent, Failure, Fallible, Optional, Present, Success};
use maybe_core::app::panic_handler::install_fault_hook;
use maybe_core::app::tracing::AppTracingBuilder;
use maybe_core::util::future::ResultFutureExt;

#[derive(Clone, Debug)]
struct ErrorCode {
  code: u32,
}

fn give_result(input: i32) -> Fallible<i32, ErrorCode> {
  if input < 0 {
    Failure(ErrorCode { code: 430 })
  } else {
    Success(input)
  }
}

async fn give_result_later(input: i32, delay: Duration) -> Result<i32, ErrorCode> {
  tokio::time::sleep(delay).await;
  give_result(input).into()
}

/// Settle one deferred failure after transforming it, and one success through a spawned continuation.
async fn run_deferred() -> Result<(Fallible<i32, u32>, i32), tokio::task::JoinError> {
  let pending = give_result_later(-5, Duration::from_millis(10))
    .into_deferred()
    .map(|v| v * 2)
    .map_err(|e| e.code);
  let continuation = give_result_later(21, Duration::from_millis(5))
    .into_deferred()
    .map(|v| v * 2)
    .spawn_then(|settled| settled.iter().copied().sum::<i32>());
  let settled = pending.await;
  let sum = continuation.await?;
  Ok((settled, sum))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
  let _ = dotenvy::dotenv(); // Ignore error ok: .env file is not required.
  AppTracingBuilder::default().try_init()?;
  install_fault_hook();

  let result = give_result(-1);
  tracing::info!(%result, "gave result");
  let code = result.map_err(|e| e.code);
  tracing::info!(%code, fallback = code.unwrap_or(0), "mapped error to code");

  for value in [4, 3] {
    let filtered = Present(value).filter(|v| v % 2 == 0);
    tracing::info!(value, %filtered, "filtered on even");
  }

  let mut slot: Optional<&str> = Absent;
  slot.insert("first");
  let previous = slot.replace("second");
  let taken = slot.take();
  tracing::info!(%previous, %taken, %slot, "mutated slot");

  let one_present = Present(2).xor(Absent);
  let both_present = Present(2).xor(Present(2));
  tracing::info!(%one_present, %both_present, "xor");

  let fault = AccessFault::catch(|| slot.expect("slot must be filled"));
  if let Err(fault) = fault {
    tracing::warn!(%fault, "recovered from access fault");
  }

  let (settled, sum) = run_deferred().await?;
  tracing::info!(%settled, "deferred settled");
  tracing::info!(sum, "continuation finished");

  Ok(())
}
