use super::*;

fn form(name: &str, email: &str, password: &str, confirm: &str) -> RegistrationForm {
    RegistrationForm {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        confirm: confirm.to_owned(),
    }
}

#[test]
fn valid_form_becomes_request() {
    let request = validate_registration(&form(" Ada ", "ada@example.com", "hunter22", "hunter22")).expect("valid");
    assert_eq!(request.name, "Ada");
    assert_eq!(request.email, "ada@example.com");
    assert_eq!(request.password, "hunter22");
}

#[test]
fn blank_fields_are_rejected_first() {
    assert_eq!(validate_registration(&form("", "ada@example.com", "x", "y")), Err(MISSING_FIELDS));
}

#[test]
fn mismatched_confirmation_is_rejected() {
    assert_eq!(
        validate_registration(&form("Ada", "ada@example.com", "hunter22", "hunter23")),
        Err(PASSWORD_MISMATCH)
    );
}

#[test]
fn short_password_is_rejected() {
    assert_eq!(validate_registration(&form("Ada", "ada@example.com", "abc", "abc")), Err(PASSWORD_TOO_SHORT));
}
