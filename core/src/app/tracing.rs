use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Environment variable the console filter is read from when no filter is set on the builder.
pub const CONSOLE_LOG_ENV_VAR: &str = "CONSOLE_LOG";

#[derive(Default)]
pub struct AppTracingBuilder {
  console_filter: Option<EnvFilter>,
  console_filter_env_var: Option<&'static str>,
}
impl AppTracingBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Some(console_filter);
    self
  }
  pub fn with_console_filter_env_var(mut self, env_var: &'static str) -> Self {
    self.console_filter_env_var = Some(env_var);
    self
  }

  fn console_filter(self) -> EnvFilter {
    self.console_filter.unwrap_or_else(|| {
      let env_var = self.console_filter_env_var.unwrap_or(CONSOLE_LOG_ENV_VAR);
      EnvFilter::try_from_env(env_var).unwrap_or_default()
    })
  }

  /// Install a global subscriber that writes formatted events to stderr, filtered by the console filter. Fails if a
  /// global subscriber was already installed.
  pub fn try_init(self) -> Result<(), TryInitError> {
    let console_filter = self.console_filter();
    tracing_subscriber::registry()
      .with(
        tracing_subscriber::fmt::layer()
          .with_writer(std::io::stderr)
          .with_filter(console_filter)
      )
      .try_init()
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn explicit_filter_takes_precedence() {
    let filter = AppTracingBuilder::default()
      .with_console_filter(EnvFilter::new("maybe_core=trace"))
      .with_console_filter_env_var("MAYBE_CORE_TEST_UNSET_LOG")
      .console_filter();
    assert_eq!(filter.to_string(), "maybe_core=trace");
  }

  #[test]
  fn second_init_fails() {
    let _ = AppTracingBuilder::default().try_init();
    assert!(AppTracingBuilder::default().try_init().is_err());
  }
}
