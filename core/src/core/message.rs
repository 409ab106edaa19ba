// agency/src/core/message.rs

//! The default payload carried between steps.

use std::borrow::Cow;
use std::fmt;

/// Who authored a message in a conversation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
  #[default]
  User,
  System,
  Assistant,
}

impl Role {
  pub fn as_str(&self) -> &'static str {
    match self {
      Role::User => "user",
      Role::System => "system",
      Role::Assistant => "assistant",
    }
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A role plus raw content bytes.
///
/// Content is kept as bytes so the same type can carry text as well as
/// binary payloads (images, audio) produced by model backends. Operations and
/// pipes never look inside it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
  pub role: Role,
  pub content: Vec<u8>,
}

impl Message {
  pub fn new(role: Role, content: impl Into<Vec<u8>>) -> Self {
    Self {
      role,
      content: content.into(),
    }
  }

  pub fn user(content: impl Into<Vec<u8>>) -> Self {
    Self::new(Role::User, content)
  }

  pub fn system(content: impl Into<Vec<u8>>) -> Self {
    Self::new(Role::System, content)
  }

  pub fn assistant(content: impl Into<Vec<u8>>) -> Self {
    Self::new(Role::Assistant, content)
  }

  pub fn role(&self) -> Role {
    self.role
  }

  pub fn content(&self) -> &[u8] {
    &self.content
  }

  /// Content decoded as UTF-8, replacing invalid sequences.
  pub fn text(&self) -> Cow<'_, str> {
    String::from_utf8_lossy(&self.content)
  }

  pub fn into_content(self) -> Vec<u8> {
    self.content
  }

  pub fn is_empty(&self) -> bool {
    self.content.is_empty()
  }
}

impl fmt::Display for Message {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.role, self.text())
  }
}
