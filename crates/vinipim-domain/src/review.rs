//! Film, album and book reviews.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::UnknownVariant;

/// Lowest accepted star rating.
pub const MIN_RATING: i32 = 1;

/// Highest accepted star rating.
pub const MAX_RATING: i32 = 5;

/// Maximum number of entries in [`ReviewStats::top_rated`].
pub const TOP_RATED_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewKind {
    Film,
    Album,
    Book,
}

impl ReviewKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Film => "film",
            Self::Album => "album",
            Self::Book => "book",
        }
    }
}

impl FromStr for ReviewKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "film" => Ok(Self::Film),
            "album" => Ok(Self::Album),
            "book" => Ok(Self::Book),
            other => Err(UnknownVariant::new("review type", other)),
        }
    }
}

/// Column a review listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewSort {
    #[default]
    Date,
    Rating,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ReviewKind,
    pub title: String,
    pub creator: Option<String>,
    pub year: Option<i32>,
    pub rating: i32,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
    pub cover_image: Option<String>,
    pub api_id: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: Option<String>,
}

pub fn is_valid_rating(rating: i32) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReviewCounts {
    pub film: usize,
    pub album: usize,
    pub book: usize,
}

/// Aggregate view over every stored review.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total: usize,
    pub by_type: ReviewCounts,
    pub average_rating: f64,
    pub top_rated: Vec<Review>,
}

impl ReviewStats {
    /// Five-star reviews, newest first, capped at [`TOP_RATED_LIMIT`].
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let mut by_type = ReviewCounts::default();
        for review in reviews {
            match review.kind {
                ReviewKind::Film => by_type.film += 1,
                ReviewKind::Album => by_type.album += 1,
                ReviewKind::Book => by_type.book += 1,
            }
        }

        let average_rating = if reviews.is_empty() {
            0.0
        } else {
            let sum: i64 = reviews.iter().map(|r| i64::from(r.rating)).sum();
            sum as f64 / reviews.len() as f64
        };

        let mut top_rated: Vec<Review> = reviews
            .iter()
            .filter(|r| r.rating == MAX_RATING)
            .cloned()
            .collect();
        top_rated.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        top_rated.truncate(TOP_RATED_LIMIT);

        Self {
            total: reviews.len(),
            by_type,
            average_rating,
            top_rated,
        }
    }
}
