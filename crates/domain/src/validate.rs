//! Pure field validation predicates.
//!
//! No side effects; the entity types call into these from their `validate`
//! methods.

use std::sync::OnceLock;

use regex::Regex;

/// Minimum accepted password length, in characters.
pub const PASSWORD_MIN: usize = 8;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // One non-blank local part, one host part, at least one dot in the
        // host. Anything stricter belongs to a mail server, not this API.
        let pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Whether `value` looks like an email address.
#[must_use]
pub fn valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Whether `value` meets the minimum password length.
#[must_use]
pub fn valid_password(value: &str) -> bool {
    value.chars().count() >= PASSWORD_MIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_plain_addresses() {
        assert!(valid_email("john@example.com"));
        assert!(valid_email("john.doe+tag@mail.example.org"));
    }

    #[test]
    fn should_reject_addresses_without_at_sign() {
        assert!(!valid_email("invalid-email"));
    }

    #[test]
    fn should_reject_addresses_without_host_dot() {
        assert!(!valid_email("john@localhost"));
    }

    #[test]
    fn should_reject_addresses_with_whitespace_or_extra_at() {
        assert!(!valid_email("john doe@example.com"));
        assert!(!valid_email("john@@example.com"));
        assert!(!valid_email(""));
    }

    #[test]
    fn should_accept_password_at_minimum_length() {
        assert!(valid_password("12345678"));
        assert!(valid_password("password123"));
    }

    #[test]
    fn should_reject_password_below_minimum_length() {
        assert!(!valid_password("123"));
        assert!(!valid_password("1234567"));
        assert!(!valid_password(""));
    }

    #[test]
    fn should_count_characters_not_bytes() {
        // Eight multi-byte characters still pass.
        assert!(valid_password("ééééééééé"));
    }
}
