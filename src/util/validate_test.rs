use super::*;

#[test]
fn is_present_rejects_blank() {
    assert!(!is_present(""));
    assert!(!is_present("   \t\n"));
    assert!(is_present(" x "));
}

#[test]
fn is_email_accepts_basic_addresses() {
    assert!(is_email("test@example.com"));
    assert!(is_email("  test@example.com  "));
    assert!(is_email("first.last+tag@sub.example.co"));
}

#[test]
fn is_email_rejects_malformed() {
    for bad in ["", "plain", "no-at.example.com", "a@b", "a @b.com", "@example.com", "a@@b.com"] {
        assert!(!is_email(bad), "expected {bad:?} to be rejected");
    }
}
