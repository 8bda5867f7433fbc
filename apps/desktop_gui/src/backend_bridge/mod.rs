//! Backend worker: owns the tokio runtime and the list controller.

pub mod commands;
pub mod interaction;
pub mod runtime;
