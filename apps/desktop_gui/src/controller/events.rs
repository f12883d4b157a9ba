//! Events flowing from the backend worker to the UI thread.

use shared::domain::Record;

pub enum UiEvent {
    /// Advisory text for the status line.
    Info(String),
    DirectoryLoaded(Vec<Record>),
    DirectoryLoadFailed(String),
}
