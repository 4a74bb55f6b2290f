pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{
    http::HttpFetcher,
    mail::{CommandMailer, MailMode},
    mysql::MySqlStore,
    terminal::TerminalPrompt,
};
pub use config::{CliConfig, DbConfig};
pub use core::orchestrator::{BackgroundTasks, Orchestrator};
pub use utils::error::{RelayError, Result};
