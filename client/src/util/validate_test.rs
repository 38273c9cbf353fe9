use super::*;

// =============================================================
// field_len
// =============================================================

#[test]
fn field_len_counts_ascii_bytes() {
    assert_eq!(field_len(""), 0);
    assert_eq!(field_len("12345678"), 8);
}

#[test]
fn field_len_counts_utf16_units() {
    // "é" is one unit, the emoji is a surrogate pair.
    assert_eq!(field_len("é"), 1);
    assert_eq!(field_len("🔒"), 2);
    assert_eq!(field_len("🔒🔒🔒🔒"), 8);
}

// =============================================================
// predicates
// =============================================================

#[test]
fn is_email_only_requires_at_sign() {
    assert!(is_email("jo@x.com"));
    assert!(is_email("@"));
    assert!(!is_email("nodomain"));
    assert!(!is_email(""));
}

#[test]
fn is_name_needs_two_units() {
    assert!(!is_name(""));
    assert!(!is_name("J"));
    assert!(is_name("Jo"));
}

#[test]
fn is_password_boundary_is_eight() {
    assert!(!is_password("1234567"));
    assert!(is_password("12345678"));
    assert!(is_password("🔒🔒🔒🔒"));
    assert!(!is_password("🔒🔒🔒"));
}
