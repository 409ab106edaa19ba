// agency/src/pipe/definition.rs

//! Contains the `Pipe<M, E>` struct definition, its construction, the
//! interceptor hook and option pre-binding.

use crate::core::context::{BoxFuture, Context};
use crate::core::message::Message;
use crate::error::AgencyError;
use crate::pipe::config::PipeOption;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Type alias for a stored pipe handler.
///
/// Shared behind `Arc` because a composed pipe keeps its constituents'
/// handlers alive inside its own closure.
pub type PipeHandler<M, E> =
  Arc<dyn Fn(Context, M, Vec<PipeOption>) -> BoxFuture<'static, Result<M, E>> + Send + Sync>;

/// Observer called between two composed steps. It only sees a shared
/// reference to the intermediate message, so it cannot change what is
/// forwarded.
pub type Interceptor<M> = Arc<dyn Fn(&M, &[PipeOption]) + Send + Sync>;

/// One step of a linear pipeline. Pipes are combined with [`Pipe::then`].
///
/// Every combinator returns a new `Pipe`; a pipe has no running state of its
/// own, so one value can be executed any number of times.
pub struct Pipe<M = Message, E = AgencyError>
where
  M: Send + Sync + 'static,
  E: std::error::Error + Send + Sync + 'static,
{
  pub(crate) handler: PipeHandler<M, E>,
  pub(crate) interceptor: Option<Interceptor<M>>,
}

impl<M, E> Pipe<M, E>
where
  M: Send + Sync + 'static,
  E: std::error::Error + Send + Sync + 'static,
{
  /// Creates a pipe from a handler function, with no interceptor.
  pub fn new<F, Fut, UserProvidedErr>(handler_fn: F) -> Self
  where
    F: Fn(Context, M, Vec<PipeOption>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<M, UserProvidedErr>> + Send + 'static,
    UserProvidedErr: Into<E> + Send + 'static,
  {
    let handler: PipeHandler<M, E> = Arc::new(move |ctx: Context, input: M, options: Vec<PipeOption>| {
      let user_fut = handler_fn(ctx, input, options);
      Box::pin(async move { user_fut.await.map_err(Into::into) })
    });

    Self {
      handler,
      interceptor: None,
    }
  }

  /// Attaches an interceptor, replacing any previous one.
  ///
  /// The interceptor is only called from a handler built by [`Pipe::then`],
  /// after this pipe's handler succeeds and before the next pipe runs. A pipe
  /// executed on its own never calls it.
  pub fn intercept(mut self, interceptor: impl Fn(&M, &[PipeOption]) + Send + Sync + 'static) -> Self {
    self.interceptor = Some(Arc::new(interceptor));
    self
  }

  /// Returns a new pipe that always calls this pipe's handler with exactly
  /// `options`, ignoring whatever options it is itself called with.
  ///
  /// The interceptor is carried over. `self` is left untouched.
  pub fn with_options(&self, options: impl IntoIterator<Item = PipeOption>) -> Self {
    let bound: Vec<PipeOption> = options.into_iter().collect();
    let inner = Arc::clone(&self.handler);
    let handler: PipeHandler<M, E> =
      Arc::new(move |ctx: Context, input: M, _ignored: Vec<PipeOption>| inner(ctx, input, bound.clone()));

    Self {
      handler,
      interceptor: self.interceptor.clone(),
    }
  }

  pub fn has_interceptor(&self) -> bool {
    self.interceptor.is_some()
  }
}

impl<M, E> Clone for Pipe<M, E>
where
  M: Send + Sync + 'static,
  E: std::error::Error + Send + Sync + 'static,
{
  fn clone(&self) -> Self {
    Self {
      handler: Arc::clone(&self.handler),
      interceptor: self.interceptor.clone(),
    }
  }
}

impl<M, E> fmt::Debug for Pipe<M, E>
where
  M: Send + Sync + 'static,
  E: std::error::Error + Send + Sync + 'static,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Pipe")
      .field("handler", &"<fn>")
      .field("interceptor_present", &self.interceptor.is_some())
      .finish()
  }
}
