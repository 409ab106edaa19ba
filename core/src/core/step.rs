// agency/src/core/step.rs

//! Defines the `Step<M, E>` trait for running an `Operation` or a `Pipe`
//! without knowing which one it is.

use crate::core::context::Context;
use async_trait::async_trait;

/// A single message-transforming step.
///
/// Both `Operation` and `Pipe` implement this by delegating to their own
/// `execute`. The trait adds no behaviour of its own; it exists so callers can
/// hold either kind as `Box<dyn Step<M, E>>`.
#[async_trait]
pub trait Step<M, E>: Send + Sync
where
  M: Send + 'static,
  E: std::error::Error + Send + Sync + 'static,
{
  /// Runs the step once on `input`.
  async fn run(&self, ctx: Context, input: M) -> Result<M, E>;
}
