use crate::{PersistedSession, SessionError, SessionStorage};

use bp_core::UserProfile;

use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

pub(crate) enum PersistCommand {
    /// Mirror this user. `None` erases the record.
    Store(Option<Arc<UserProfile>>),
    /// Reply once everything queued before this command has been handled,
    /// with the first failure since the previous flush.
    Flush(oneshot::Sender<Option<SessionError>>),
}

/// Background task that applies persistence commands one at a time, in the
/// order the store issued them.
pub(crate) struct PersistenceWriter {
    storage: Arc<dyn SessionStorage>,
    key: String,
    receiver: mpsc::UnboundedReceiver<PersistCommand>,
    pending_error: Option<SessionError>,
}

impl PersistenceWriter {
    pub(crate) fn spawn(
        storage: Arc<dyn SessionStorage>,
        key: String,
    ) -> (mpsc::UnboundedSender<PersistCommand>, JoinHandle<()>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let writer = Self {
            storage,
            key,
            receiver,
            pending_error: None,
        };
        let handle = tokio::spawn(writer.run());
        (sender, handle)
    }

    async fn run(mut self) {
        while let Some(command) = self.receiver.recv().await {
            match command {
                PersistCommand::Store(user) => {
                    if let Err(e) = self.store(user).await {
                        warn!("Session persistence failed for '{}': {e}", self.key);
                        self.pending_error.get_or_insert(e);
                    }
                }
                PersistCommand::Flush(reply) => {
                    // Receiver may have given up waiting
                    let _ = reply.send(self.pending_error.take());
                }
            }
        }

        if let Some(e) = self.pending_error.take() {
            warn!("Session writer stopped with unreported failure: {e}");
        }
        debug!("Session writer for '{}' stopped", self.key);
    }

    async fn store(&self, user: Option<Arc<UserProfile>>) -> crate::Result<()> {
        match user {
            Some(user) => {
                let blob = PersistedSession::new(Some(UserProfile::clone(&user))).encode()?;
                self.storage.write(&self.key, &blob).await?;
                debug!("Persisted session for user {}", user.id);
            }
            None => {
                self.storage.erase(&self.key).await?;
                debug!("Erased persisted session");
            }
        }
        Ok(())
    }
}

/// Map a dropped flush reply to the writer having stopped.
pub(crate) fn flush_result(
    reply: Result<Option<SessionError>, oneshot::error::RecvError>,
) -> crate::Result<()> {
    match reply {
        Ok(None) => Ok(()),
        Ok(Some(e)) => Err(e),
        Err(_) => Err(SessionError::writer_stopped()),
    }
}
