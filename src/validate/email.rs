//! Email address format check

use std::sync::OnceLock;

use regex::Regex;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(concat!(
            r#"(?i)^(?:"[^"]+"|[0-9a-z](?:[-!#$%&'*+/=?^`{}|~\w.]*[0-9a-z])?)@"#,
            r"(?:\[(?:\d{1,3}\.){3}\d{1,3}\]|(?:[0-9a-z][-\w]*[0-9a-z]*\.)+[a-z0-9]{2,17})$",
        ))
        .expect("email pattern is valid")
    })
}

/// Checks if the string looks like a deliverable email address.
///
/// The local part is either quoted or a dot-atom that starts and ends with
/// an alphanumeric and never holds two dots in a row. The domain is a list
/// of labels ending in a 2-17 character top level, or a bracketed IPv4.
/// The address is matched as given: surrounding whitespace fails.
pub fn is_email(value: &str) -> bool {
    if !email_pattern().is_match(value) {
        return false;
    }

    match value.rsplit_once('@') {
        Some((local, _)) if !local.starts_with('"') => !local.contains(".."),
        Some(_) => true,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(is_email("david.jones@proseware.com"));
        assert!(is_email("d.j@server1.proseware.com"));
        assert!(is_email("jones@ms1.proseware.com"));
        assert!(is_email("j@proseware.com9"));
        assert!(is_email("js#internal@proseware.com"));
        assert!(is_email("j_9@[129.126.118.1]"));
        assert!(is_email("\"john smith\"@proseware.com"));
        assert!(is_email("Joe.Bloggs@Example.COM"));
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(!is_email("j.@server1.proseware.com"));
        assert!(!is_email("j..s@proseware.com"));
        assert!(!is_email("js*@proseware.com"));
        assert!(!is_email("js@proseware..com"));
        assert!(!is_email("no-at-sign"));
        assert!(!is_email("@proseware.com"));
        assert!(!is_email(""));
        assert!(!is_email("   "));
    }

    #[test]
    fn test_surrounding_whitespace_rejected() {
        assert!(!is_email(" a@b.com "));
        assert!(!is_email("someone@example.com\n"));
        assert!(is_email("someone@example.com"));
    }
}
