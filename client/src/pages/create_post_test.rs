use super::*;

#[test]
fn validate_post_trims_title() {
    let post = validate_post("  Hello  ", "Body text").expect("valid");
    assert_eq!(post.title, "Hello");
    assert_eq!(post.content, "Body text");
}

#[test]
fn validate_post_requires_both_fields() {
    assert_eq!(validate_post("", "Body"), Err(MISSING_POST_FIELDS));
    assert_eq!(validate_post("Title", "   \n"), Err(MISSING_POST_FIELDS));
}
