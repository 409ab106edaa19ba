// agency/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Errors surfaced through `Operation::execute` and `Pipe::execute` when the
/// default error type is used.
///
/// The core never originates these itself. `HandlerError` wraps whatever a
/// handler failed with; `Cancelled` and `DeadlineExceeded` come from
/// [`Context::check`](crate::Context::check), which handlers call on their own.
#[derive(Debug, Error)]
pub enum AgencyError {
  #[error("Error in user-provided handler or external operation. Source: {source}")]
  HandlerError {
    #[source]
    source: AnyhowError,
  },

  #[error("Context was cancelled")]
  Cancelled,

  #[error("Context deadline exceeded")]
  DeadlineExceeded,
}

// Lets handlers written against anyhow use `?` and still return AgencyError.
impl From<AnyhowError> for AgencyError {
  fn from(err: AnyhowError) -> Self {
    // Unwrap an AgencyError that was boxed into anyhow along the way so
    // Cancelled/DeadlineExceeded keep their variant.
    match err.downcast::<AgencyError>() {
      Ok(agency_err) => agency_err,
      Err(err) => AgencyError::HandlerError { source: err },
    }
  }
}

impl AgencyError {
  /// Wraps any error into `AgencyError::HandlerError`.
  pub fn handler<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    AgencyError::HandlerError {
      source: AnyhowError::new(err),
    }
  }

  /// Wraps a plain message into `AgencyError::HandlerError`.
  pub fn msg<M>(message: M) -> Self
  where
    M: std::fmt::Display + std::fmt::Debug + Send + Sync + 'static,
  {
    AgencyError::HandlerError {
      source: AnyhowError::msg(message),
    }
  }
}

pub type AgencyResult<T, E = AgencyError> = std::result::Result<T, E>;
