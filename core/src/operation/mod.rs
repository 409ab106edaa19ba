// agency/src/operation/mod.rs

//! Defines the `Operation<M, E>` struct: a handler bound to a live, mutable
//! configuration.

pub mod config;
pub mod definition;
pub mod execution;

pub use config::OperationConfig;
pub use definition::{Operation, OperationHandler};
