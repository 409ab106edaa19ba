// agency/src/pipe/mod.rs

//! Defines the composable `Pipe<M, E>` struct, its options, composition and
//! execution logic.

pub mod composition;
pub mod config;
pub mod definition;
pub mod execution;

pub use config::{new_pipe_config, with_prompt, PipeConfig, PipeOption};
pub use definition::{Interceptor, Pipe, PipeHandler};
