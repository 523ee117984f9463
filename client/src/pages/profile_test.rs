use super::*;

fn ada() -> User {
    User { id: "u1".to_owned(), name: "Ada".to_owned(), email: "ada@example.com".to_owned(), role: Role::Reader }
}

#[test]
fn unchanged_profile_needs_no_patch() {
    assert_eq!(profile_changes(&ada(), &ada()), None);
}

#[test]
fn changed_fields_are_patched() {
    let fresh = User { name: "Ada L.".to_owned(), role: Role::Author, ..ada() };
    let patch = profile_changes(&ada(), &fresh).expect("patch");
    assert_eq!(
        patch,
        UserPatch { name: Some("Ada L.".to_owned()), email: None, role: Some(Role::Author) }
    );
}

#[test]
fn different_account_is_ignored() {
    let other = User { id: "u2".to_owned(), ..ada() };
    assert_eq!(profile_changes(&ada(), &other), None);
}
