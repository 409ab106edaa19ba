// agency/src/pipe/composition.rs

//! Contains `Pipe::then()`, the only way pipes are combined.

use crate::core::context::Context;
use crate::pipe::config::PipeOption;
use crate::pipe::definition::{Pipe, PipeHandler};
use std::sync::Arc;
use tracing::{event, Level};

impl<M, E> Pipe<M, E>
where
  M: Send + Sync + 'static,
  E: std::error::Error + Send + Sync + 'static,
{
  /// Returns a new pipe that runs `self`, then `next` on its output.
  ///
  /// The composed handler:
  /// 1. runs `self`'s handler on the input, with no options;
  /// 2. on error returns it at once: no interceptor call, `next` never runs;
  /// 3. calls `self`'s interceptor, if any, with the intermediate output and
  ///    the options the composed handler was called with;
  /// 4. runs `next`'s handler, with no options, on that same output.
  ///
  /// The result keeps `self`'s interceptor and drops `next`'s. Since it is
  /// kept, chaining again (`a.then(b).then(c)`) fires it at the later
  /// junction too. Re-attach with [`Pipe::intercept`] after a `then` to
  /// observe a junction with a different callback.
  pub fn then(self, next: Pipe<M, E>) -> Pipe<M, E> {
    let first = self.handler;
    let second = next.handler;
    let observer = self.interceptor.clone();

    let handler: PipeHandler<M, E> = Arc::new(move |ctx: Context, input: M, options: Vec<PipeOption>| {
      let first = Arc::clone(&first);
      let second = Arc::clone(&second);
      let observer = observer.clone();
      Box::pin(async move {
        let output = first(ctx.clone(), input, Vec::new()).await?;

        if let Some(observe) = observer.as_ref() {
          event!(Level::TRACE, num_options = options.len(), "Invoking interceptor.");
          observe(&output, &options);
        }

        event!(Level::TRACE, "Forwarding to next step.");
        second(ctx, output, Vec::new()).await
      })
    });

    Pipe {
      handler,
      interceptor: self.interceptor,
    }
  }
}
