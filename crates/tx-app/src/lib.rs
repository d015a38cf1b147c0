/// Orchestration du pipeline et CLI de textel.
///
/// The library surface is [`pipeline::render`]; the `textel` binary is a
/// thin presentation layer over it (argument gathering, logging, printing).

pub mod cli;
pub mod pipeline;

pub use pipeline::render;
pub use tx_core::{RenderConfig, RenderError};
