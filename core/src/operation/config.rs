// agency/src/operation/config.rs

//! Defines `OperationConfig<M>`, the per-operation settings a handler reads on
//! every execution.

use crate::core::message::Message;

/// Abstract operation configuration.
///
/// Holds fields for the modalities handlers commonly need, but nothing
/// specific to a concrete model backend. An `Operation` owns exactly one of
/// these for its whole lifetime; setters replace fields, they never merge.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationConfig<M = Message> {
  /// Prompt text, already rendered when it was set.
  pub prompt: String,
  /// Conversation history, oldest first.
  pub messages: Vec<M>,
}

// Manual impl so `M` does not need to be `Default`.
impl<M> Default for OperationConfig<M> {
  fn default() -> Self {
    Self {
      prompt: String::new(),
      messages: Vec::new(),
    }
  }
}
