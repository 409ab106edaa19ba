// agency/src/pipe/execution.rs

//! Contains `Pipe::execute()` and the `Step` implementation for pipes.

use crate::core::context::Context;
use crate::core::step::Step;
use crate::pipe::definition::Pipe;
use async_trait::async_trait;
use tracing::{event, instrument, Level};

impl<M, E> Pipe<M, E>
where
  M: Send + Sync + 'static,
  E: std::error::Error + Send + Sync + 'static,
{
  /// Executes the whole pipeline on `input`, with no options.
  ///
  /// Steps run one after another; the returned future completes once the
  /// last step finishes or any step fails. Errors are returned unchanged.
  #[instrument(
    name = "Pipe::execute",
    skip_all,
    fields(
      message_type = %std::any::type_name::<M>(),
      interceptor_present = self.interceptor.is_some(),
    )
  )]
  pub async fn execute(&self, ctx: Context, input: M) -> Result<M, E> {
    event!(Level::TRACE, "Pipeline execution starting.");
    (self.handler)(ctx, input, Vec::new()).await
  }
}

#[async_trait]
impl<M, E> Step<M, E> for Pipe<M, E>
where
  M: Send + Sync + 'static,
  E: std::error::Error + Send + Sync + 'static,
{
  async fn run(&self, ctx: Context, input: M) -> Result<M, E> {
    self.execute(ctx, input).await
  }
}
