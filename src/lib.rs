mod cli;
mod command;
pub mod config;
mod error;
mod forge;
mod path_helpers;
mod publisher;
mod result;

pub use cli::Args;
pub use command::publish;
pub use error::PublishError;
pub use result::Result;
