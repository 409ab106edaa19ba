// agency/src/core/context.rs

//! Defines the `Context` threaded through every handler invocation, and the
//! boxed future type handlers are stored as.

use crate::error::{AgencyError, AgencyResult};
use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

/// A boxed, sendable future. Stored handlers return these so composed
/// handlers can be kept behind `dyn Fn`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Cancellation and deadline carrier passed to every handler.
///
/// Operations and pipes never inspect it; they forward it unchanged to the
/// handlers they run. Handlers that talk to slow backends are expected to
/// watch `cancelled()` or call `check()` themselves.
#[derive(Debug, Clone, Default)]
pub struct Context {
  token: CancellationToken,
  deadline: Option<Instant>,
}

impl Context {
  /// A context that is never cancelled and has no deadline, until `cancel()`
  /// is called on it or one of its clones.
  pub fn new() -> Self {
    Self::default()
  }

  /// Uses an existing token, e.g. one owned by the caller's request scope.
  pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
    self.token = token;
    self
  }

  pub fn with_deadline(mut self, deadline: Instant) -> Self {
    self.deadline = Some(deadline);
    self
  }

  /// Sets the deadline `timeout` from now. A timeout too large to represent
  /// as an `Instant` (e.g. `Duration::MAX`) leaves the deadline as it was.
  pub fn with_timeout(self, timeout: Duration) -> Self {
    match Instant::now().checked_add(timeout) {
      Some(deadline) => self.with_deadline(deadline),
      None => self,
    }
  }

  /// Derives a context that is cancelled along with `self` but can also be
  /// cancelled on its own. The deadline is inherited.
  pub fn child(&self) -> Self {
    Self {
      token: self.token.child_token(),
      deadline: self.deadline,
    }
  }

  pub fn cancel(&self) {
    self.token.cancel();
  }

  pub fn is_cancelled(&self) -> bool {
    self.token.is_cancelled()
  }

  /// Resolves once the context is cancelled.
  pub async fn cancelled(&self) {
    self.token.cancelled().await
  }

  pub fn deadline(&self) -> Option<Instant> {
    self.deadline
  }

  pub fn is_expired(&self) -> bool {
    self.deadline.map_or(false, |deadline| Instant::now() >= deadline)
  }

  pub fn token(&self) -> &CancellationToken {
    &self.token
  }

  /// `Err(Cancelled)` after cancellation, `Err(DeadlineExceeded)` past the
  /// deadline, `Ok(())` otherwise. Cancellation is reported first.
  pub fn check(&self) -> AgencyResult<()> {
    if self.is_cancelled() {
      return Err(AgencyError::Cancelled);
    }
    if self.is_expired() {
      return Err(AgencyError::DeadlineExceeded);
    }
    Ok(())
  }
}
