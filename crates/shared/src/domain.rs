use serde::{Deserialize, Serialize};

/// Identifier of a record in the in-memory collection.
///
/// Remote records keep their server-assigned id; locally created records get
/// one past the current numeric maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub i64);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A single user/employee entity held in the in-memory collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Record {
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// Whether the form is staging a brand-new record or an edit of an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftMode {
    #[default]
    Create,
    Edit(RecordId),
}

/// The form's staged, not-yet-committed record fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mode: DraftMode,
}

impl RecordDraft {
    pub fn from_record(record: &Record) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            mode: DraftMode::Edit(record.id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, DraftMode::Edit(_))
    }

    /// Reset to the empty create-mode draft after a successful submit or cancel.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
