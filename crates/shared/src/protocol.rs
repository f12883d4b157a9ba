use serde::{Deserialize, Serialize};

use crate::domain::{Record, RecordId};

/// One entry of the remote directory's JSON array.
///
/// The demo endpoint returns more fields (address, company, ...) than we
/// keep; serde drops the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteUser {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Split a combined display name on the first whitespace run.
///
/// A single-token name yields an empty last name.
pub fn split_display_name(name: &str) -> (String, String) {
    let name = name.trim();
    match name.split_once(char::is_whitespace) {
        Some((first, rest)) => (first.to_string(), rest.trim_start().to_string()),
        None => (name.to_string(), String::new()),
    }
}

impl From<RemoteUser> for Record {
    fn from(user: RemoteUser) -> Self {
        let (first_name, last_name) = split_display_name(&user.name);
        Self {
            id: RecordId(user.id),
            first_name,
            last_name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_combined_name_on_first_whitespace() {
        assert_eq!(
            split_display_name("Leanne Graham"),
            ("Leanne".to_string(), "Graham".to_string())
        );
        assert_eq!(
            split_display_name("Mrs. Dennis Schulist"),
            ("Mrs.".to_string(), "Dennis Schulist".to_string())
        );
    }

    #[test]
    fn single_token_name_has_empty_last_name() {
        assert_eq!(
            split_display_name("Prince"),
            ("Prince".to_string(), String::new())
        );
    }

    #[test]
    fn surrounding_and_interior_whitespace_is_folded() {
        assert_eq!(
            split_display_name("  Ervin   Howell "),
            ("Ervin".to_string(), "Howell".to_string())
        );
    }

    #[test]
    fn remote_user_maps_into_record() {
        let record: Record = RemoteUser {
            id: 3,
            name: "Clementine Bauch".to_string(),
            email: "Nathan@yesenia.net".to_string(),
        }
        .into();
        assert_eq!(record.id, RecordId(3));
        assert_eq!(record.first_name, "Clementine");
        assert_eq!(record.last_name, "Bauch");
        assert_eq!(record.email, "Nathan@yesenia.net");
    }
}
