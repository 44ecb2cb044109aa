//! Email address validation, normalization and masking

use once_cell::sync::Lazy;
use regex::Regex;

/// Basic `local@domain.tld` shape. Intentionally permissive: the mail
/// provider is the final authority on deliverability.
static ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
        .expect("address regex must compile")
});

/// Check whether a string looks like a deliverable email address
pub fn is_valid_address(address: &str) -> bool {
    !address.is_empty() && address.len() <= 254 && ADDRESS_REGEX.is_match(address)
}

/// Normalize an address for use as a store or limiter key
///
/// Addresses are trimmed and lower-cased so that `A@B.com` and `a@b.com`
/// share one code slot and one attempt budget.
pub fn normalize_address(address: &str) -> String {
    address.trim().to_lowercase()
}

/// Mask an email address for logging
///
/// Keeps the first character of the local part and the full domain, e.g.
/// `alice@example.com` becomes `a***@example.com`. Local parts shorter than
/// two characters are masked entirely, so the mask never reveals the whole
/// local part.
pub fn mask_address(address: &str) -> String {
    match address.split_once('@') {
        Some((local, domain)) => {
            let mut chars = local.chars();
            match (chars.next(), chars.next()) {
                (Some(head), Some(_)) => format!("{}***@{}", head, domain),
                _ => format!("***@{}", domain),
            }
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(is_valid_address("alice@example.com"));
        assert!(is_valid_address("a.b+tag@sub.domain.co"));
        assert!(is_valid_address("x_%y@host.io"));
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("no-at-sign"));
        assert!(!is_valid_address("missing@tld"));
        assert!(!is_valid_address("@example.com"));
        assert!(!is_valid_address("spaces in@local.com"));
    }

    #[test]
    fn test_normalize_address() {
        assert_eq!(normalize_address("  Alice@Example.COM "), "alice@example.com");
    }

    #[test]
    fn test_mask_address() {
        assert_eq!(mask_address("alice@example.com"), "a***@example.com");
        assert_eq!(mask_address("ab@y.io"), "a***@y.io");
        assert_eq!(mask_address("not-an-address"), "***");
    }

    #[test]
    fn test_mask_address_never_reveals_whole_local_part() {
        assert_eq!(mask_address("x@y.io"), "***@y.io");
        assert_eq!(mask_address("@example.com"), "***@example.com");
    }
}
