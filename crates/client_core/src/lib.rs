//! In-memory record store and remote directory client.
//!
//! The store lives on the UI thread and is mutated synchronously by user
//! intents. The one asynchronous operation is the directory fetch; its
//! outcome crosses back in through [`RecordStore::complete_load`] /
//! [`RecordStore::fail_load`].

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::{
    domain::{DraftMode, Record, RecordDraft, RecordId},
    error::ValidationError,
    protocol::RemoteUser,
    validate,
};
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

/// Public demo endpoint the app loads its initial directory from.
pub const DEFAULT_DIRECTORY_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("invalid directory endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to reach directory endpoint: {0}")]
    Request(#[source] reqwest::Error),
    #[error("directory endpoint returned HTTP {status}")]
    Status { status: StatusCode },
    #[error("invalid directory response payload: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Where the initial record list comes from.
///
/// The GUI bridge and tests depend on this seam rather than on reqwest.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    async fn fetch_records(&self) -> Result<Vec<Record>, DirectoryError>;
}

/// Directory source backed by a real HTTP endpoint.
#[derive(Debug)]
pub struct HttpDirectory {
    http: Client,
    endpoint: Url,
}

impl HttpDirectory {
    /// Parse and keep the endpoint; the URL is validated once, up front.
    pub fn new(endpoint: &str) -> Result<Self, DirectoryError> {
        let endpoint = Url::parse(endpoint).map_err(|source| DirectoryError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            source,
        })?;
        Ok(Self {
            http: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl DirectorySource for HttpDirectory {
    async fn fetch_records(&self) -> Result<Vec<Record>, DirectoryError> {
        debug!(endpoint = %self.endpoint, "fetching remote directory");
        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(DirectoryError::Request)?;
        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status { status });
        }
        let users: Vec<RemoteUser> = response.json().await.map_err(DirectoryError::Decode)?;
        info!(count = users.len(), "remote directory fetched");
        Ok(users.into_iter().map(Record::from).collect())
    }
}

/// Advisory store error shown in the UI banner. Never fatal; the store stays
/// usable after any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Transport(String),
    #[error("record {0} no longer exists; it may have been deleted")]
    EditTargetMissing(RecordId),
}

/// The record collection, the active form draft, and the load state.
///
/// Invariant: record ids are unique within the collection.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    draft: RecordDraft,
    loading: bool,
    last_error: Option<StoreError>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn draft(&self) -> &RecordDraft {
        &self.draft
    }

    /// The form binds its text fields straight to the draft.
    pub fn draft_mut(&mut self) -> &mut RecordDraft {
        &mut self.draft
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&StoreError> {
        self.last_error.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Mark a directory load as in flight.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.last_error = None;
    }

    /// Replace the entire collection with the fetched directory.
    pub fn complete_load(&mut self, records: Vec<Record>) {
        info!(count = records.len(), "directory load complete");
        self.loading = false;
        self.records = records;
    }

    /// Record a load failure. The collection is left as it was, which at
    /// startup means empty.
    pub fn fail_load(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(error = %message, "directory load failed");
        self.loading = false;
        self.last_error = Some(StoreError::Transport(message));
    }

    /// The whole load operation in one place: flag up, one fetch, flag down.
    pub async fn load_from(&mut self, source: &dyn DirectorySource) {
        self.begin_load();
        match source.fetch_records().await {
            Ok(records) => self.complete_load(records),
            Err(err) => self.fail_load(err.to_string()),
        }
    }

    /// Copy a record into the draft and switch to update-mode. Starting a new
    /// edit implicitly abandons any previous draft. Returns false if the id
    /// is not in the collection.
    pub fn begin_edit(&mut self, id: RecordId) -> bool {
        match self.records.iter().find(|record| record.id == id) {
            Some(record) => {
                self.draft = RecordDraft::from_record(record);
                true
            }
            None => false,
        }
    }

    /// Reset the draft to the empty create-mode form.
    pub fn cancel_edit(&mut self) {
        self.draft.clear();
    }

    /// Remove the record with the given id; no-op if absent.
    pub fn delete(&mut self, id: RecordId) {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        if self.records.len() < before {
            debug!(%id, "record deleted");
        }
    }

    /// Validate the draft and commit it as a create or an update, per the
    /// draft mode. On success the draft resets to empty create-mode; on
    /// failure nothing is mutated and the error is also kept for the banner.
    pub fn submit_draft(&mut self) -> Result<(), StoreError> {
        if let Err(err) = validate::validate_draft(&self.draft) {
            warn!(error = %err, "rejected draft submission");
            let err = StoreError::Validation(err);
            self.last_error = Some(err.clone());
            return Err(err);
        }

        let first_name = self.draft.first_name.trim().to_string();
        let last_name = self.draft.last_name.trim().to_string();
        let email = self.draft.email.trim().to_string();

        match self.draft.mode {
            DraftMode::Create => {
                let id = self.next_record_id();
                info!(%id, "record created");
                self.records.insert(
                    0,
                    Record {
                        id,
                        first_name,
                        last_name,
                        email,
                    },
                );
            }
            DraftMode::Edit(id) => {
                let Some(record) = self.records.iter_mut().find(|record| record.id == id) else {
                    let err = StoreError::EditTargetMissing(id);
                    self.last_error = Some(err.clone());
                    return Err(err);
                };
                info!(%id, "record updated");
                record.first_name = first_name;
                record.last_name = last_name;
                record.email = email;
            }
        }

        self.draft.clear();
        self.last_error = None;
        Ok(())
    }

    /// One past the current numeric maximum, or 1 for an empty collection.
    fn next_record_id(&self) -> RecordId {
        RecordId(
            self.records
                .iter()
                .map(|record| record.id.0)
                .max()
                .map_or(1, |max| max + 1),
        )
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
