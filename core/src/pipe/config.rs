// agency/src/pipe/config.rs

//! Functional-option configuration for pipes.
//!
//! Options travel through pipe handlers and interceptors as plain values.
//! Composition never turns them into a `PipeConfig`; a handler that wants one
//! builds it with [`new_pipe_config`].

use std::fmt;
use std::sync::Arc;

/// Settings a pipe handler can decode from the options it receives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipeConfig {
  pub prompt: String,
}

impl PipeConfig {
  /// Starts from the default config and applies `options` in order.
  /// Later options overwrite fields set by earlier ones.
  pub fn from_options<'a, I>(options: I) -> Self
  where
    I: IntoIterator<Item = &'a PipeOption>,
  {
    let mut config = PipeConfig::default();
    for option in options {
      option.apply(&mut config);
    }
    config
  }
}

/// A function that mutates a `PipeConfig` in place.
///
/// Cloning an option is cheap and shares the underlying function.
#[derive(Clone)]
pub struct PipeOption(Arc<dyn Fn(&mut PipeConfig) + Send + Sync>);

impl PipeOption {
  pub fn new(f: impl Fn(&mut PipeConfig) + Send + Sync + 'static) -> Self {
    PipeOption(Arc::new(f))
  }

  pub fn apply(&self, config: &mut PipeConfig) {
    (self.0)(config)
  }
}

impl fmt::Debug for PipeOption {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("PipeOption(<fn>)")
  }
}

/// Builds a `PipeConfig` from `options`; see [`PipeConfig::from_options`].
pub fn new_pipe_config<'a, I>(options: I) -> PipeConfig
where
  I: IntoIterator<Item = &'a PipeOption>,
{
  PipeConfig::from_options(options)
}

/// Option that sets `PipeConfig::prompt`.
///
/// The prompt is rendered once, when the option is created, e.g.
/// `with_prompt(format_args!("Summarize in {} words", 50))`.
pub fn with_prompt(prompt: impl fmt::Display) -> PipeOption {
  let rendered = prompt.to_string();
  PipeOption::new(move |config| config.prompt = rendered.clone())
}
