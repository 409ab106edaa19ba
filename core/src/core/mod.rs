pub mod context;
pub mod message;
pub mod shared;
pub mod step;

// Re-export key types for easier access from other agency modules (and lib.rs)
pub use context::{BoxFuture, Context};
pub use message::{Message, Role};
pub use shared::Shared;
pub use step::Step;
