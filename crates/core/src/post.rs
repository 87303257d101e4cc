//! Blog post data model
//!
//! Wire types for the `GET /api/data` response. Posts are immutable once
//! fetched; every other module borrows them.

use serde::{Deserialize, Serialize};

/// Author of a post
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub avatar: String,
}

/// A category tag attached to a post
///
/// The `name` is the filtering key; `id` is only carried for display.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// A single blog entry
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub publish_date: String,
    pub author: Author,
    pub summary: String,
    pub categories: Vec<Category>,
}

impl Post {
    /// True if any of the post's categories carries `name`
    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }
}

/// Body of the `/api/data` endpoint
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
}
