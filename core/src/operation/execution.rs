// agency/src/operation/execution.rs

//! Contains `Operation::execute()` and the `Step` implementation for operations.

use crate::core::context::Context;
use crate::core::step::Step;
use crate::operation::definition::Operation;
use async_trait::async_trait;
use tracing::{event, instrument, Level};

impl<M, E> Operation<M, E>
where
  M: Send + Sync + 'static,
  E: std::error::Error + Send + Sync + 'static,
{
  /// Runs the handler once with `input` and the current configuration.
  ///
  /// The handler's error is returned as-is. On success its output is returned
  /// untouched; nothing is cached between calls, so configuration changes made
  /// after a previous run are picked up.
  #[instrument(
    name = "Operation::execute",
    skip_all,
    fields(message_type = %std::any::type_name::<M>())
  )]
  pub async fn execute(&self, ctx: Context, input: M) -> Result<M, E> {
    {
      let config = self.config.read();
      event!(
        Level::TRACE,
        prompt_len = config.prompt.len(),
        num_messages = config.messages.len(),
        "Invoking operation handler."
      );
    }
    (self.handler)(ctx, input, self.config.clone()).await
  }
}

#[async_trait]
impl<M, E> Step<M, E> for Operation<M, E>
where
  M: Send + Sync + 'static,
  E: std::error::Error + Send + Sync + 'static,
{
  async fn run(&self, ctx: Context, input: M) -> Result<M, E> {
    self.execute(ctx, input).await
  }
}
