//! Draft validation applied before any create or update mutation.

use crate::domain::RecordDraft;
use crate::error::ValidationError;

/// Accepts `local@domain.tld`-shaped addresses: exactly one `@`, a non-empty
/// local part, a domain with a dot between two non-empty labels, and no
/// whitespace. Deliberately far short of RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Check required fields and email shape, on trimmed values.
pub fn validate_draft(draft: &RecordDraft) -> Result<(), ValidationError> {
    let first_name = draft.first_name.trim();
    let last_name = draft.last_name.trim();
    let email = draft.email.trim();
    if first_name.is_empty() || last_name.is_empty() || email.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(first: &str, last: &str, email: &str) -> RecordDraft {
        RecordDraft {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            ..RecordDraft::default()
        }
    }

    #[test]
    fn accepts_minimal_well_formed_address() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("leanne.graham@april.biz"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@domain."));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
    }

    #[test]
    fn missing_fields_win_over_email_shape() {
        assert_eq!(
            validate_draft(&draft("", "Graham", "a@b.co")),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_draft(&draft("Leanne", "", "not-an-email")),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_draft(&draft("Leanne", "Graham", "   ")),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        assert_eq!(
            validate_draft(&draft("  ", "Graham", "a@b.co")),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn complete_draft_with_shaped_email_passes() {
        assert_eq!(validate_draft(&draft("Leanne", "Graham", "a@b.co")), Ok(()));
        assert_eq!(
            validate_draft(&draft("Leanne", "Graham", "not-an-email")),
            Err(ValidationError::InvalidEmail)
        );
    }
}
