//! Domain fixtures with sensible defaults.

use chrono::Utc;
use uuid::Uuid;
use vinipim_domain::admin::AdminCredential;
use vinipim_domain::media::{FileType, Media};
use vinipim_domain::post::{Featured, Post};
use vinipim_domain::review::{Review, ReviewKind};
use vinipim_domain::user::{User, UserRole};

pub fn user(id: &str, role: UserRole) -> User {
    let now = Utc::now();
    User {
        id: id.to_owned(),
        name: Some(format!("user {id}")),
        email: Some(format!("{id}@example.com")),
        login_method: Some("oauth".to_owned()),
        role,
        created_at: now,
        last_signed_in: now,
    }
}

/// Credential whose stored digest is `hash_password(password)`.
pub fn admin_credential(email: &str, password: &str) -> AdminCredential {
    AdminCredential {
        id: Uuid::new_v4().to_string(),
        email: email.to_owned(),
        password_hash: vinipim_auth_types::password::hash_password(password),
        name: Some("Admin".to_owned()),
        created_at: Utc::now(),
        last_login: None,
    }
}

pub fn post(slug: &str) -> Post {
    let now = Utc::now();
    Post {
        id: Uuid::new_v4().to_string(),
        slug: slug.to_owned(),
        title: format!("Post {slug}"),
        excerpt: None,
        content: "body".to_owned(),
        cover_image: None,
        category: "notes".to_owned(),
        featured: Featured::No,
        published_at: now,
        updated_at: now,
        author_id: None,
    }
}

pub fn review(kind: ReviewKind, title: &str, rating: i32) -> Review {
    let now = Utc::now();
    Review {
        id: Uuid::new_v4().to_string(),
        kind,
        title: title.to_owned(),
        creator: None,
        year: None,
        rating,
        notes: None,
        tags: None,
        cover_image: None,
        api_id: None,
        metadata: None,
        created_at: now,
        updated_at: now,
        user_id: None,
    }
}

pub fn media(url: &str) -> Media {
    let now = Utc::now();
    Media {
        id: Uuid::new_v4().to_string(),
        filename: "photo.jpg".to_owned(),
        file_type: FileType::Image,
        content_type: "image/jpeg".to_owned(),
        size: 0,
        storage_key: url.to_owned(),
        url: url.to_owned(),
        thumbnail: None,
        created_at: now,
        updated_at: now,
        user_id: None,
    }
}
