//! One-shot user list fetch

use crate::users::{FetchError, User, UserSource};
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

type FetchOutcome = Result<Vec<User>, FetchError>;

/// Where the fetch currently stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(FetchError),
}

/// State of the users panel.
///
/// The list is requested once, on the first [`FetchList::activate`]. The
/// read runs on a spawned task and its outcome is picked up by
/// [`FetchList::poll`] from the UI loop. A failure is logged and leaves the
/// list empty.
#[derive(Debug, Default)]
pub struct FetchList {
    users: Vec<User>,
    status: FetchStatus,
    selected_index: usize,
    pending: Option<oneshot::Receiver<FetchOutcome>>,
}

impl FetchList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the read. Returns false if the list was already activated.
    ///
    /// Must be called from inside a tokio runtime.
    pub fn activate(&mut self, source: Arc<dyn UserSource>) -> bool {
        if self.status != FetchStatus::Idle {
            return false;
        }

        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let outcome = source.list_users().await;
            let _ = tx.send(outcome);
        });

        self.pending = Some(rx);
        self.status = FetchStatus::Loading;
        true
    }

    /// Take the fetch result if it has arrived. Returns true when this call
    /// delivered it.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };

        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Closed) => Err(FetchError::Dropped),
        };
        self.pending = None;

        match outcome {
            Ok(users) => {
                tracing::info!("Loaded {} users", users.len());
                self.users = users;
                self.status = FetchStatus::Loaded;
            }
            Err(err) => {
                tracing::warn!("Failed to fetch users: {err}");
                self.status = FetchStatus::Failed(err);
            }
        }
        true
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn select_next(&mut self) {
        if !self.users.is_empty() {
            self.selected_index = (self.selected_index + 1).min(self.users.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }
}
