pub mod orchestrator;
pub mod steps;

pub use crate::domain::model::{FetchedPayload, InsertStatement, MailMessage, UserInput};
pub use crate::domain::ports::{Fetcher, Mailer, PayloadStore, Prompt};
pub use crate::utils::error::Result;
