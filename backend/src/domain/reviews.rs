//! Review carriers for `/movie/{id}/reviews` and `/tv/{id}/reviews`.

use serde::{Deserialize, Serialize};

use super::Pagination;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorDetails {
    pub name: String,
    pub username: String,
    pub avatar_path: Option<String>,
    /// Out of ten. Reviews without a score carry `None`.
    pub rating: Option<f64>,
}

/// One user review. Timestamps are forwarded verbatim (RFC 3339).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    pub author: String,
    pub author_details: AuthorDetails,
    pub content: String,
    pub created_at: String,
    pub id: String,
    pub updated_at: String,
    pub url: String,
}

/// Page of reviews for one title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewPage {
    #[serde(default)]
    pub id: u64,
    #[serde(flatten)]
    pub pagination: Pagination,
    #[serde(default)]
    pub results: Vec<Review>,
}
