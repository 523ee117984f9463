use super::*;

#[test]
fn role_update_path_targets_the_account() {
    assert_eq!(role_update_path("65f1c0"), "/auth/update-role/65f1c0");
}

#[test]
fn role_update_path_escapes_the_id() {
    assert_eq!(role_update_path("a/b c"), "/auth/update-role/a%2Fb%20c");
}

#[test]
fn content_paths_are_absolute() {
    assert!(POSTS_PATH.starts_with('/'));
    assert!(USERS_PATH.starts_with("/auth/"));
}
