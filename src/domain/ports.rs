use crate::domain::model::{FetchedPayload, InsertStatement, MailMessage, UserInput};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Prompt: Send + Sync {
    async fn ask(&self, question: &str) -> Result<UserInput>;
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self) -> Result<FetchedPayload>;
}

/// One connection per call; implementations close it before returning.
#[async_trait]
pub trait PayloadStore: Send + Sync {
    async fn save(&self, statement: &InsertStatement) -> Result<()>;
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &MailMessage) -> Result<()>;
}
