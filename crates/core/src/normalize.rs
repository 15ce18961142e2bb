//! Normalization rules for contact data.
//!
//! The duplicate-contact check compares primary and secondary contact info
//! after normalization, so `A@B.com` vs `a@b.com` and `+1 (555) 123-4567`
//! vs `5551234567` both count as duplicates.

/// Normalize an email address for comparison: trim and ASCII-lowercase.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Normalize a phone number for comparison.
///
/// Keeps digits only; an 11-digit number with a leading `1` (NANP country
/// code) is reduced to its 10-digit national form.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 11 && digits.starts_with('1') {
        digits[1..].to_string()
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn email_is_case_insensitive_and_trimmed() {
        assert_eq!(normalize_email("  A@B.com "), "a@b.com");
        assert_eq!(normalize_email("a@b.com"), "a@b.com");
    }

    #[test]
    fn phone_strips_formatting() {
        assert_eq!(normalize_phone("(555) 123-4567"), "5551234567");
    }

    #[test]
    fn phone_strips_nanp_country_code() {
        assert_eq!(normalize_phone("+1 (555) 123-4567"), "5551234567");
        assert_eq!(normalize_phone("15551234567"), "5551234567");
    }

    #[test]
    fn eleven_digits_without_leading_one_are_kept() {
        assert_eq!(normalize_phone("25551234567"), "25551234567");
    }

    proptest! {
        /// Property: normalization is idempotent.
        #[test]
        fn phone_normalization_is_idempotent(raw in "[0-9 ()+.-]{0,20}") {
            let once = normalize_phone(&raw);
            prop_assert_eq!(normalize_phone(&once), once);
        }

        /// Property: the result contains digits only.
        #[test]
        fn phone_normalization_yields_digits(raw in ".{0,30}") {
            prop_assert!(normalize_phone(&raw).chars().all(|c| c.is_ascii_digit()));
        }

        #[test]
        fn email_normalization_is_idempotent(raw in "[ ]?[a-zA-Z0-9@.]{0,20}[ ]?") {
            let once = normalize_email(&raw);
            prop_assert_eq!(normalize_email(&once), once);
        }
    }
}
