use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Client-side validation failures for a staged record draft.
///
/// These are advisory: the UI shows the message inline and the user corrects
/// and resubmits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("first name, last name, and email are all required")]
    MissingFields,
    #[error("email must look like name@example.com")]
    InvalidEmail,
}
