//! Payloads for the post and admin endpoints.
//!
//! DESIGN
//! ======
//! The content API names ids `_id` and timestamps `createdAt`, and returns
//! lists either bare or wrapped in an object. Aliases and untagged variants
//! absorb those differences here so pages only see one shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use guardian::User;
use serde::{Deserialize, Serialize};

/// Post author: the API sends either a populated profile or a bare id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorRef {
    Profile {
        #[serde(alias = "_id")]
        id: String,
        #[serde(default)]
        name: String,
    },
    Id(String),
}

impl AuthorRef {
    pub fn id(&self) -> &str {
        match self {
            Self::Profile { id, .. } | Self::Id(id) => id,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::Profile { name, .. } if !name.is_empty() => name,
            Self::Profile { .. } | Self::Id(_) => "Unknown author",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Option<AuthorRef>,
    /// ISO-8601 creation time.
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PostList {
    Bare(Vec<Post>),
    Wrapped { posts: Vec<Post> },
}

impl PostList {
    pub fn into_posts(self) -> Vec<Post> {
        match self {
            Self::Bare(posts) | Self::Wrapped { posts } => posts,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum UserList {
    Bare(Vec<User>),
    Wrapped { users: Vec<User> },
}

impl UserList {
    pub fn into_users(self) -> Vec<User> {
        match self {
            Self::Bare(users) | Self::Wrapped { users } => users,
        }
    }
}

/// Sort newest first. Posts without a timestamp go last.
pub fn newest_first(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    posts
}

pub fn authored_by(posts: Vec<Post>, user_id: &str) -> Vec<Post> {
    posts
        .into_iter()
        .filter(|post| post.author.as_ref().is_some_and(|author| author.id() == user_id))
        .collect()
}
