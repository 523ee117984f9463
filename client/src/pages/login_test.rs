use super::*;

#[test]
fn validate_login_trims_email() {
    let request = validate_login("  ada@example.com ", "secret").expect("valid");
    assert_eq!(request.email, "ada@example.com");
    assert_eq!(request.password, "secret");
}

#[test]
fn validate_login_keeps_password_whitespace() {
    let request = validate_login("ada@example.com", " pass ").expect("valid");
    assert_eq!(request.password, " pass ");
}

#[test]
fn validate_login_rejects_blank_fields() {
    assert_eq!(validate_login("   ", "secret"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_login("ada@example.com", ""), Err(MISSING_CREDENTIALS));
}
