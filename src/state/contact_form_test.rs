use super::*;

fn fields(name: &str, email: &str, message: &str) -> ContactFields {
    ContactFields::from_raw(Some(name), Some(email), Some(message))
}

// =============================================================
// Field extraction
// =============================================================

#[test]
fn from_raw_trims_whitespace() {
    let f = fields("  Ana ", "\ta@b.com\n", " hola ");
    assert_eq!(f, ContactFields { name: "Ana".into(), email: "a@b.com".into(), message: "hola".into() });
}

#[test]
fn missing_elements_read_as_empty() {
    let f = ContactFields::from_raw(None, Some("a@b.com"), None);
    assert!(f.name.is_empty());
    assert!(f.message.is_empty());
    assert_eq!(validate(&f), Err(ValidationError::MissingFields));
}

// =============================================================
// Validation order
// =============================================================

#[test]
fn empty_name_fails_as_missing_fields() {
    assert_eq!(validate(&fields("", "a@b.com", "hi")), Err(ValidationError::MissingFields));
}

#[test]
fn whitespace_only_field_counts_as_missing() {
    assert_eq!(validate(&fields("Ana", "a@b.com", "   ")), Err(ValidationError::MissingFields));
}

#[test]
fn missing_fields_checked_before_email_shape() {
    assert_eq!(validate(&fields("", "not-an-email", "hi")), Err(ValidationError::MissingFields));
}

#[test]
fn malformed_email_fails() {
    assert_eq!(validate(&fields("Ana", "not-an-email", "hi")), Err(ValidationError::InvalidEmail));
}

#[test]
fn valid_submission_passes() {
    assert_eq!(validate(&fields("Ana", "a@b.com", "hi")), Ok(()));
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn email_shape_accepts_common_addresses() {
    for email in ["a@b.com", "ana.perez@utpl.edu.ec", "x+tag@sub.domain.io"] {
        assert!(is_email_shaped(email), "{email} should be accepted");
    }
}

#[test]
fn email_shape_rejects_malformed_addresses() {
    for email in ["a@b", "@b.com", "a@.com", "a@b.", "a b@c.com", "a@@b.com", "a@b@c.com", "ab.com"] {
        assert!(!is_email_shaped(email), "{email} should be rejected");
    }
}

// =============================================================
// Outcome
// =============================================================

#[test]
fn failure_outcome_is_error_without_reset() {
    let outcome = submission_outcome(&fields("", "a@b.com", "hi"));
    assert_eq!(outcome.kind, NotificationKind::Error);
    assert_eq!(outcome.message, MISSING_FIELDS_MESSAGE);
    assert!(!outcome.reset);

    let outcome = submission_outcome(&fields("Ana", "not-an-email", "hi"));
    assert_eq!(outcome.kind, NotificationKind::Error);
    assert_eq!(outcome.message, INVALID_EMAIL_MESSAGE);
    assert!(!outcome.reset);
}

#[test]
fn success_outcome_resets_form() {
    let outcome = submission_outcome(&fields("Ana", "a@b.com", "hi"));
    assert_eq!(outcome.kind, NotificationKind::Success);
    assert_eq!(outcome.message, SUCCESS_MESSAGE);
    assert!(outcome.reset);
}

#[test]
fn validation_error_displays_user_facing_copy() {
    assert_eq!(ValidationError::InvalidEmail.to_string(), INVALID_EMAIL_MESSAGE);
    assert_eq!(ValidationError::MissingFields.to_string(), MISSING_FIELDS_MESSAGE);
}

// =============================================================
// Byte-order mark and the email pattern
// =============================================================

#[test]
fn email_pattern_compiles() {
    assert!(LazyLock::force(&EMAIL_SHAPE).is_match("a@b.co"));
}

#[test]
fn bom_only_field_counts_as_missing() {
    let f = fields("\u{feff}", "a@b.com", "hola");
    assert!(f.name.is_empty());
    assert_eq!(validate(&f), Err(ValidationError::MissingFields));
}

#[test]
fn surrounding_bom_is_trimmed() {
    let f = fields("\u{feff} Ana\u{feff}", "a@b.com", "hola");
    assert_eq!(f.name, "Ana");
}

#[test]
fn email_with_inner_bom_is_rejected() {
    assert!(!is_email_shaped("a\u{feff}b@c.com"));
    assert_eq!(validate(&fields("Ana", "a@b\u{feff}x.com", "hola")), Err(ValidationError::InvalidEmail));
}
