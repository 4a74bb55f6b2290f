use crate::core::steps::{notify, persist};
use crate::core::{Fetcher, Mailer, PayloadStore, Prompt};
use crate::domain::model::{MailMessage, NAME_PROMPT};
use crate::utils::error::Result;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Prompt, fetch, then hand the results to the store and the mailer
/// without waiting for either.
pub struct Orchestrator<P, F, S, M> {
    prompt: P,
    fetcher: F,
    store: Arc<S>,
    mailer: Arc<M>,
    admin_email: String,
}

impl<P, F, S, M> Orchestrator<P, F, S, M>
where
    P: Prompt,
    F: Fetcher,
    S: PayloadStore + 'static,
    M: Mailer + 'static,
{
    pub fn new(prompt: P, fetcher: F, store: S, mailer: M, admin_email: impl Into<String>) -> Self {
        Self {
            prompt,
            fetcher,
            store: Arc::new(store),
            mailer: Arc::new(mailer),
            admin_email: admin_email.into(),
        }
    }

    /// Errors from the prompt or the fetch abort the run before any side
    /// effect starts. Persist and notify run as detached tasks; their
    /// handles are returned, not awaited.
    pub async fn run(&self) -> Result<BackgroundTasks> {
        let input = self.prompt.ask(NAME_PROMPT).await?;
        let payload = self.fetcher.fetch().await?;
        tracing::debug!("Fetched {} bytes", payload.0.len());

        let mut tasks = BackgroundTasks::default();

        let store = Arc::clone(&self.store);
        tasks.push(
            "persist",
            tokio::spawn(async move { persist(store.as_ref(), &payload).await }),
        );

        let mailer = Arc::clone(&self.mailer);
        let notice = MailMessage::admin_notice(&self.admin_email, &input);
        tasks.push(
            "notify",
            tokio::spawn(async move { notify(mailer.as_ref(), &notice).await }),
        );

        Ok(tasks)
    }

    /// Top-level error scope: a failed run is logged once and yields no tasks.
    pub async fn execute(&self) -> Option<BackgroundTasks> {
        match self.run().await {
            Ok(tasks) => Some(tasks),
            Err(e) => {
                tracing::error!("Application error: {}", e);
                None
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct BackgroundTasks {
    handles: Vec<(&'static str, JoinHandle<()>)>,
}

impl BackgroundTasks {
    fn push(&mut self, name: &'static str, handle: JoinHandle<()>) {
        self.handles.push((name, handle));
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Waits for every task. A panicked task is logged and skipped.
    pub async fn join(self) {
        for (name, handle) in self.handles {
            if let Err(e) = handle.await {
                tracing::warn!("{} task did not complete: {}", name, e);
            }
        }
    }
}
