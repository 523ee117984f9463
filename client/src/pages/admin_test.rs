use super::*;

fn user(id: &str, name: &str, email: &str) -> User {
    User { id: id.to_owned(), name: name.to_owned(), email: email.to_owned(), role: Role::Reader }
}

#[test]
fn empty_search_keeps_everyone() {
    let users = vec![user("1", "Ada", "ada@example.com"), user("2", "Grace", "grace@example.com")];
    assert_eq!(filter_users(&users, "  ").len(), 2);
}

#[test]
fn search_matches_name_or_email_case_insensitively() {
    let users = vec![user("1", "Ada", "ada@example.com"), user("2", "Grace", "hopper@navy.mil")];
    let by_name = filter_users(&users, "GRA");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, "2");
    let by_email = filter_users(&users, "example");
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].id, "1");
}

#[test]
fn parse_role_accepts_wire_names_only() {
    assert_eq!(parse_role("author"), Some(Role::Author));
    assert_eq!(parse_role("admin"), Some(Role::Admin));
    assert_eq!(parse_role("Admin"), None);
    assert_eq!(parse_role("owner"), None);
}
