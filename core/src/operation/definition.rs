// agency/src/operation/definition.rs

//! Contains the `Operation<M, E>` struct definition and the methods for its
//! construction and configuration.

use crate::core::context::{BoxFuture, Context};
use crate::core::message::Message;
use crate::core::shared::Shared;
use crate::error::AgencyError;
use crate::operation::config::OperationConfig;
use std::fmt;
use std::future::Future;
use tracing::{event, Level};

/// Type alias for a stored operation handler.
///
/// A handler receives the context, the input message and a handle to the
/// operation's live configuration, and resolves to the output message.
///
/// Handlers must drop any config lock guard BEFORE awaiting.
pub type OperationHandler<M, E> = Box<
  dyn Fn(Context, M, Shared<OperationConfig<M>>) -> BoxFuture<'static, Result<M, E>> + Send + Sync,
>;

/// The basic building block: one handler plus the configuration it runs with.
///
/// `M` is the message type flowing through the handler (defaults to
/// [`Message`]); `E` is the error type `execute` returns (defaults to
/// [`AgencyError`]).
pub struct Operation<M = Message, E = AgencyError>
where
  M: Send + Sync + 'static,
  E: std::error::Error + Send + Sync + 'static,
{
  pub(crate) handler: OperationHandler<M, E>,
  pub(crate) config: Shared<OperationConfig<M>>,
}

impl<M, E> Operation<M, E>
where
  M: Send + Sync + 'static,
  E: std::error::Error + Send + Sync + 'static,
{
  /// Creates an operation from a handler function, with an empty config.
  ///
  /// The handler is not called here. Its error type only needs to convert
  /// into the operation's `E`.
  pub fn new<F, Fut, UserProvidedErr>(handler_fn: F) -> Self
  where
    F: Fn(Context, M, Shared<OperationConfig<M>>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<M, UserProvidedErr>> + Send + 'static,
    UserProvidedErr: Into<E> + Send + 'static,
  {
    let handler: OperationHandler<M, E> = Box::new(move |ctx: Context, input: M, config: Shared<OperationConfig<M>>| {
      let user_fut = handler_fn(ctx, input, config);
      Box::pin(async move { user_fut.await.map_err(Into::into) })
    });

    Self {
      handler,
      config: Shared::new(OperationConfig::default()),
    }
  }

  /// Returns the live configuration handle.
  ///
  /// This is the same object the handler sees, not a copy: writes through it
  /// are observed by every later `execute`.
  pub fn config(&self) -> Shared<OperationConfig<M>> {
    self.config.clone()
  }

  /// Stores the rendered `prompt` in the configuration.
  ///
  /// Positional arguments are rendered by the caller, typically with
  /// `format_args!`:
  ///
  /// ```
  /// # use agency::{AgencyError, Context, Message, Operation};
  /// let mut op = Operation::<Message, AgencyError>::new(|_ctx: Context, input: Message, _cfg| async move {
  ///   Ok::<_, AgencyError>(input)
  /// });
  /// op.set_prompt(format_args!("Translate into {}", "French"));
  /// assert_eq!(op.config().read().prompt, "Translate into French");
  /// ```
  pub fn set_prompt(&mut self, prompt: impl fmt::Display) -> &mut Self {
    let rendered = prompt.to_string();
    event!(Level::TRACE, prompt_len = rendered.len(), "Operation prompt set.");
    self.config.write().prompt = rendered;
    self
  }

  /// Replaces the message history. Nothing is appended.
  pub fn set_messages(&mut self, messages: Vec<M>) -> &mut Self {
    event!(Level::TRACE, num_messages = messages.len(), "Operation messages set.");
    self.config.write().messages = messages;
    self
  }
}

// Handlers are opaque closures; print the config and a placeholder instead.
impl<M, E> fmt::Debug for Operation<M, E>
where
  M: Send + Sync + fmt::Debug + 'static,
  E: std::error::Error + Send + Sync + 'static,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Operation")
      .field("handler", &"<fn>")
      .field("config", &*self.config.read())
      .finish()
  }
}
