// src/lib.rs

//! Agency: a minimal composition layer for message-transforming workflows.
//!
//! Two independent building blocks are provided:
//!  - [`Operation`]: a single handler bound to a live, mutable configuration
//!    (prompt, message history), configured through fluent setters.
//!  - [`Pipe`]: a handler that can be chained with other pipes via
//!    [`Pipe::then`] into a linear pipeline, with an optional interceptor that
//!    observes each intermediate result.
//!
//! Handlers are supplied by the caller (typically wrapping a call to a model
//! backend). Steps run strictly one after another; the first handler error
//! aborts the chain and is returned unchanged.

pub mod core;
pub mod error;
pub mod operation;
pub mod pipe;

// --- Re-exports for the Public API ---

pub use crate::core::context::{BoxFuture, Context};
pub use crate::core::message::{Message, Role};
pub use crate::core::shared::Shared;
pub use crate::core::step::Step;

pub use crate::operation::{Operation, OperationConfig, OperationHandler};

pub use crate::pipe::{new_pipe_config, with_prompt, Interceptor, Pipe, PipeConfig, PipeHandler, PipeOption};

pub use crate::error::{AgencyError, AgencyResult};

// Re-exported so callers can build a `Context` from their own token without
// depending on tokio-util directly.
pub use tokio_util::sync::CancellationToken;

/*
    Core Workflow:
    1. Write handlers: `|ctx, input, options| async move { ... }` for pipes,
       `|ctx, input, config| async move { ... }` for operations.
    2. Build pipes with `Pipe::new(handler)`; pin options with
       `pipe.with_options([with_prompt("...")])`.
    3. Chain them: `a.intercept(log_fn).then(b).then(c)`.
    4. Await `pipeline.execute(Context::new(), input)`.
*/
