use super::*;

fn post(id: &str, created_at: Option<&str>, author: &str) -> Post {
    Post {
        id: id.to_owned(),
        title: format!("post {id}"),
        content: String::new(),
        author: Some(AuthorRef::Id(author.to_owned())),
        created_at: created_at.map(str::to_owned),
    }
}

#[test]
fn post_accepts_mongo_style_fields() {
    let raw = r#"{
        "_id": "p1",
        "title": "Hello",
        "content": "World",
        "author": { "_id": "u1", "name": "Ada" },
        "createdAt": "2024-03-01T10:00:00.000Z"
    }"#;
    let parsed: Post = serde_json::from_str(raw).expect("post");
    assert_eq!(parsed.id, "p1");
    assert_eq!(parsed.author.as_ref().map(AuthorRef::display_name), Some("Ada"));
    assert_eq!(parsed.created_at.as_deref(), Some("2024-03-01T10:00:00.000Z"));
}

#[test]
fn author_may_be_a_bare_id() {
    let parsed: Post = serde_json::from_str(r#"{"_id":"p2","author":"u7"}"#).expect("post");
    assert_eq!(parsed.author, Some(AuthorRef::Id("u7".to_owned())));
    assert_eq!(parsed.author.as_ref().map(AuthorRef::display_name), Some("Unknown author"));
}

#[test]
fn lists_decode_bare_or_wrapped() {
    let bare: PostList = serde_json::from_str(r#"[{"_id":"p1"}]"#).expect("bare");
    let wrapped: PostList = serde_json::from_str(r#"{"posts":[{"_id":"p1"}]}"#).expect("wrapped");
    assert_eq!(bare.into_posts(), wrapped.into_posts());

    let users: UserList = serde_json::from_str(r#"{"users":[{"_id":"u1","role":"admin"}]}"#).expect("users");
    assert_eq!(users.into_users()[0].id, "u1");
}

#[test]
fn feed_is_sorted_newest_first() {
    let sorted = newest_first(vec![
        post("old", Some("2024-01-01T00:00:00Z"), "u1"),
        post("undated", None, "u1"),
        post("new", Some("2024-06-01T00:00:00Z"), "u1"),
    ]);
    let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["new", "old", "undated"]);
}

#[test]
fn authored_by_filters_on_author_id() {
    let mine = authored_by(vec![post("a", None, "u1"), post("b", None, "u2")], "u1");
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, "a");
}
