//! The two side-effect steps. Both log their outcome and never fail the run.

use crate::core::{Mailer, PayloadStore};
use crate::domain::model::{FetchedPayload, InsertStatement, MailMessage};
use crate::utils::error::RelayError;

pub async fn persist<S: PayloadStore + ?Sized>(store: &S, payload: &FetchedPayload) {
    let statement = InsertStatement::for_payload(payload);

    match store.save(&statement).await {
        Ok(()) => tracing::info!("Data saved successfully"),
        Err(e @ (RelayError::DbConnectionError(_) | RelayError::QueryError(_))) => {
            tracing::error!("{}", e)
        }
        Err(e) => tracing::error!("Error executing query: {}", e),
    }
}

pub async fn notify<M: Mailer + ?Sized>(mailer: &M, message: &MailMessage) {
    match mailer.send(message).await {
        Ok(()) => tracing::info!("Notified {}", message.to),
        Err(e) => tracing::error!("Failed to send email: {}", e),
    }
}
