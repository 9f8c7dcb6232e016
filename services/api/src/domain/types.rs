use chrono::{DateTime, Utc};
use serde::Deserialize;

use vinipim_domain::media::FileType;
use vinipim_domain::post::Featured;
use vinipim_domain::review::{self, ReviewKind, ReviewSort, SortOrder};
use vinipim_domain::user::UserRole;

use crate::error::ApiError;

/// Minimum length of a new admin password.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Loose syntactic email check: `local@domain.tld`, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
                && !domain.ends_with('.')
        }
        None => false,
    }
}

fn require_email(field: &str, email: &str) -> Result<(), ApiError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ApiError::InvalidInput(format!("{field}: invalid email")))
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ApiError> {
    if value.is_empty() {
        Err(ApiError::InvalidInput(format!("{field}: must not be empty")))
    } else {
        Ok(())
    }
}

fn require_rating(rating: i32) -> Result<(), ApiError> {
    if review::is_valid_rating(rating) {
        Ok(())
    } else {
        Err(ApiError::InvalidInput(format!(
            "rating: must be between {} and {}",
            review::MIN_RATING,
            review::MAX_RATING
        )))
    }
}

// ── Admin ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl LoginInput {
    pub fn validate(&self) -> Result<(), ApiError> {
        require_email("email", &self.email)?;
        require_non_empty("password", &self.password)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmailInput {
    pub current_email: String,
    pub new_email: String,
}

impl UpdateEmailInput {
    pub fn validate(&self) -> Result<(), ApiError> {
        require_email("currentEmail", &self.current_email)?;
        require_email("newEmail", &self.new_email)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordInput {
    pub email: String,
    pub new_password: String,
}

impl UpdatePasswordInput {
    pub fn validate(&self) -> Result<(), ApiError> {
        require_email("email", &self.email)?;
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::InvalidInput(format!(
                "newPassword: must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        Ok(())
    }
}

// ── Users ─────────────────────────────────────────────────────────────────────

/// Fields written on every OAuth sign-in.
///
/// `role` is only written when explicitly set; otherwise inserts default to
/// `user` and updates leave the stored role alone.
#[derive(Debug, Clone)]
pub struct UpsertUser {
    pub open_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub login_method: Option<String>,
    pub role: Option<UserRole>,
    pub last_signed_in: DateTime<Utc>,
}

/// Identity returned by the OAuth provider's user-info endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthUserInfo {
    #[serde(default)]
    pub open_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub login_method: Option<String>,
    pub platform: Option<String>,
}

// ── Shared ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct IdInput {
    pub id: String,
}

// ── Posts ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct SlugInput {
    pub slug: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostInput {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
    pub category: String,
    #[serde(default)]
    pub featured: Featured,
}

impl CreatePostInput {
    pub fn validate(&self) -> Result<(), ApiError> {
        require_non_empty("title", &self.title)?;
        require_non_empty("slug", &self.slug)?;
        require_non_empty("content", &self.content)?;
        require_non_empty("category", &self.category)
    }
}

/// Partial post update. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostChanges {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub category: Option<String>,
    pub featured: Option<Featured>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePostInput {
    pub id: String,
    #[serde(flatten)]
    pub changes: PostChanges,
}

impl UpdatePostInput {
    pub fn validate(&self) -> Result<(), ApiError> {
        let c = &self.changes;
        for (field, value) in [
            ("title", &c.title),
            ("slug", &c.slug),
            ("content", &c.content),
            ("category", &c.category),
        ] {
            if let Some(value) = value {
                require_non_empty(field, value)?;
            }
        }
        Ok(())
    }
}

// ── Reviews ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewTypeFilter {
    All,
    Film,
    Album,
    Book,
}

impl ReviewTypeFilter {
    pub fn kind(self) -> Option<ReviewKind> {
        match self {
            Self::All => None,
            Self::Film => Some(ReviewKind::Film),
            Self::Album => Some(ReviewKind::Album),
            Self::Book => Some(ReviewKind::Book),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListInput {
    #[serde(rename = "type")]
    pub kind: Option<ReviewTypeFilter>,
    #[serde(default)]
    pub sort_by: ReviewSort,
    #[serde(default)]
    pub order: SortOrder,
}

impl ReviewListInput {
    pub fn kind(&self) -> Option<ReviewKind> {
        self.kind.and_then(ReviewTypeFilter::kind)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewInput {
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
}

impl CreateReviewInput {
    pub fn validate(&self) -> Result<(), ApiError> {
        require_non_empty("title", &self.title)?;
        require_rating(self.rating)
    }
}

/// Partial review update. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewChanges {
    pub title: Option<String>,
    pub creator: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<i32>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
    pub cover_image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReviewInput {
    pub id: String,
    #[serde(flatten)]
    pub changes: ReviewChanges,
}

impl UpdateReviewInput {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(title) = &self.changes.title {
            require_non_empty("title", title)?;
        }
        match self.changes.rating {
            Some(rating) => require_rating(rating),
            None => Ok(()),
        }
    }
}

// ── Media ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMediaInput {
    pub url: String,
    #[serde(default)]
    pub file_type: FileType,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub size: Option<i32>,
    pub storage_key: Option<String>,
    pub thumbnail: Option<String>,
    pub title: Option<String>,
}

impl CreateMediaInput {
    pub fn validate(&self) -> Result<(), ApiError> {
        if url::Url::parse(&self.url).is_err() {
            return Err(ApiError::InvalidInput("url: invalid url".to_owned()));
        }
        if self.size.is_some_and(|size| size < 0) {
            return Err(ApiError::InvalidInput("size: must not be negative".to_owned()));
        }
        Ok(())
    }
}

// ── Upload / system ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlInput {
    pub filename: String,
    pub content_type: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct HealthInput {
    pub timestamp: f64,
}

impl HealthInput {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.timestamp >= 0.0 {
            Ok(())
        } else {
            Err(ApiError::InvalidInput(
                "timestamp: must not be negative".to_owned(),
            ))
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotifyOwnerInput {
    pub title: String,
    pub content: String,
}

impl NotifyOwnerInput {
    pub fn validate(&self) -> Result<(), ApiError> {
        require_non_empty("title", &self.title)?;
        require_non_empty("content", &self.content)
    }
}
