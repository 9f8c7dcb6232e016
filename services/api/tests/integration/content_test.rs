use vinipim_api::authz::Principal;
use vinipim_api::domain::types::{
    CreateMediaInput, CreatePostInput, CreateReviewInput, PostChanges, ReviewChanges,
    ReviewListInput, ReviewTypeFilter, UpdatePostInput, UpdateReviewInput,
};
use vinipim_api::error::ApiError;
use vinipim_api::usecase::media::{CreateMediaUseCase, DeleteMediaUseCase, ListMediaUseCase};
use vinipim_api::usecase::post::{
    CreatePostUseCase, DeletePostUseCase, GetPostBySlugUseCase, UpdatePostUseCase,
};
use vinipim_api::usecase::review::{
    CreateReviewUseCase, GetReviewUseCase, ListReviewsUseCase, ReviewStatsUseCase,
    UpdateReviewUseCase,
};
use vinipim_auth_types::token::{AdminClaims, now_secs};
use vinipim_domain::media::FileType;
use vinipim_domain::post::Featured;
use vinipim_domain::review::{ReviewKind, ReviewSort, ReviewStats, SortOrder};
use vinipim_domain::user::UserRole;
use vinipim_testing::fixture;

use crate::helpers::{MockMediaRepo, MockPostRepo, MockReviewRepo};

fn admin() -> Principal {
    Principal::PasswordAdmin(AdminClaims::new(
        "admin-1".to_owned(),
        "owner@example.com".to_owned(),
        None,
        now_secs(),
    ))
}

fn member() -> Principal {
    Principal::Member(fixture::user("member-1", UserRole::User))
}

fn new_post(slug: &str) -> CreatePostInput {
    CreatePostInput {
        title: "Hello".to_owned(),
        slug: slug.to_owned(),
        excerpt: None,
        content: "First post".to_owned(),
        cover_image: None,
        category: "notes".to_owned(),
        featured: Featured::default(),
    }
}

fn new_review(rating: i32) -> CreateReviewInput {
    CreateReviewInput {
        kind: ReviewKind::Film,
        title: "Stalker".to_owned(),
        creator: Some("Tarkovsky".to_owned()),
        year: Some(1979),
        rating,
        notes: None,
        tags: Some(vec!["slow".to_owned()]),
        cover_image: None,
        api_id: None,
        metadata: None,
    }
}

// ── Posts ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_post_authored_by_admin() {
    let posts = MockPostRepo::default();

    let id = CreatePostUseCase {
        posts: posts.clone(),
    }
    .execute(&admin(), new_post("hello"))
    .await
    .unwrap();

    let stored = posts.get(&id).unwrap();
    assert_eq!(stored.slug, "hello");
    assert_eq!(stored.featured, Featured::No);
    assert_eq!(stored.author_id.as_deref(), Some("admin-1"));
}

#[tokio::test]
async fn should_forbid_member_from_creating_post() {
    let posts = MockPostRepo::default();

    let result = CreatePostUseCase {
        posts: posts.clone(),
    }
    .execute(&member(), new_post("hello"))
    .await;

    assert!(
        matches!(result, Err(ApiError::AdminRequired)),
        "expected AdminRequired, got {result:?}"
    );
    assert!(posts.posts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_apply_partial_post_update() {
    let post = fixture::post("hello");
    let id = post.id.clone();
    let posts = MockPostRepo::new(vec![post]);

    UpdatePostUseCase {
        posts: posts.clone(),
    }
    .execute(
        &admin(),
        UpdatePostInput {
            id: id.clone(),
            changes: PostChanges {
                title: Some("Renamed".to_owned()),
                featured: Some(Featured::Yes),
                ..PostChanges::default()
            },
        },
    )
    .await
    .unwrap();

    let stored = posts.get(&id).unwrap();
    assert_eq!(stored.title, "Renamed");
    assert_eq!(stored.featured, Featured::Yes);
    assert_eq!(stored.content, "body");
}

#[tokio::test]
async fn should_report_missing_post_on_update_and_delete() {
    let posts = MockPostRepo::default();

    let update = UpdatePostUseCase {
        posts: posts.clone(),
    }
    .execute(
        &admin(),
        UpdatePostInput {
            id: "missing".to_owned(),
            changes: PostChanges::default(),
        },
    )
    .await;
    let delete = DeletePostUseCase { posts }.execute(&admin(), "missing").await;

    assert!(matches!(update, Err(ApiError::PostNotFound)), "got {update:?}");
    assert!(matches!(delete, Err(ApiError::PostNotFound)), "got {delete:?}");
}

#[tokio::test]
async fn should_report_missing_slug_as_not_found() {
    let result = GetPostBySlugUseCase {
        posts: MockPostRepo::new(vec![fixture::post("hello")]),
    }
    .execute("nope")
    .await;

    assert!(matches!(result, Err(ApiError::PostNotFound)), "got {result:?}");
}

// ── Reviews ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_out_of_range_rating() {
    let reviews = MockReviewRepo::default();
    let usecase = CreateReviewUseCase {
        reviews: reviews.clone(),
    };

    for rating in [0, 6] {
        let result = usecase.execute(&admin(), new_review(rating)).await;
        assert!(
            matches!(result, Err(ApiError::InvalidInput(_))),
            "rating {rating}: got {result:?}"
        );
    }
    assert!(reviews.reviews.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_create_review_and_find_it_by_id() {
    let reviews = MockReviewRepo::default();

    let id = CreateReviewUseCase {
        reviews: reviews.clone(),
    }
    .execute(&admin(), new_review(5))
    .await
    .unwrap();

    let found = GetReviewUseCase { reviews }.execute(&id).await.unwrap().unwrap();
    assert_eq!(found.title, "Stalker");
    assert_eq!(found.user_id.as_deref(), Some("admin-1"));
}

#[tokio::test]
async fn should_keep_review_title_when_update_sends_blank() {
    let item = fixture::review(ReviewKind::Book, "Solaris", 4);
    let id = item.id.clone();
    let reviews = MockReviewRepo::new(vec![item]);

    let result = UpdateReviewUseCase {
        reviews: reviews.clone(),
    }
    .execute(UpdateReviewInput {
        id: id.clone(),
        changes: ReviewChanges {
            title: Some(String::new()),
            ..ReviewChanges::default()
        },
    })
    .await;

    assert!(matches!(result, Err(ApiError::InvalidInput(_))), "got {result:?}");
    assert_eq!(reviews.get(&id).unwrap().title, "Solaris");
}

#[tokio::test]
async fn should_filter_and_sort_reviews() {
    let reviews = MockReviewRepo::new(vec![
        fixture::review(ReviewKind::Film, "B film", 3),
        fixture::review(ReviewKind::Book, "A book", 5),
        fixture::review(ReviewKind::Film, "A film", 4),
    ]);

    let listed = ListReviewsUseCase { reviews }
        .execute(ReviewListInput {
            kind: Some(ReviewTypeFilter::Film),
            sort_by: ReviewSort::Title,
            order: SortOrder::Asc,
        })
        .await
        .unwrap();

    let titles: Vec<&str> = listed.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["A film", "B film"]);
}

#[tokio::test]
async fn should_degrade_review_reads_when_datastore_unavailable() {
    let list = ListReviewsUseCase {
        reviews: MockReviewRepo::unavailable(),
    }
    .execute(ReviewListInput::default())
    .await
    .unwrap();
    let found = GetReviewUseCase {
        reviews: MockReviewRepo::unavailable(),
    }
    .execute("any")
    .await
    .unwrap();
    let stats = ReviewStatsUseCase {
        reviews: MockReviewRepo::unavailable(),
    }
    .execute()
    .await
    .unwrap();

    assert!(list.is_empty());
    assert!(found.is_none());
    assert_eq!(stats, ReviewStats::default());
}

#[tokio::test]
async fn should_fail_review_mutation_when_datastore_unavailable() {
    let result = CreateReviewUseCase {
        reviews: MockReviewRepo::unavailable(),
    }
    .execute(&admin(), new_review(4))
    .await;

    assert!(
        matches!(result, Err(ApiError::DatabaseUnavailable)),
        "expected DatabaseUnavailable, got {result:?}"
    );
}

#[tokio::test]
async fn should_compute_review_stats() {
    let stats = ReviewStatsUseCase {
        reviews: MockReviewRepo::new(vec![
            fixture::review(ReviewKind::Film, "One", 5),
            fixture::review(ReviewKind::Album, "Two", 3),
            fixture::review(ReviewKind::Book, "Three", 4),
        ]),
    }
    .execute()
    .await
    .unwrap();

    assert_eq!(stats.total, 3);
    assert_eq!(stats.by_type.film, 1);
    assert_eq!(stats.by_type.album, 1);
    assert_eq!(stats.by_type.book, 1);
    assert!((stats.average_rating - 4.0).abs() < f64::EPSILON);
    assert_eq!(stats.top_rated.len(), 1);
    assert_eq!(stats.top_rated[0].title, "One");
}

// ── Media ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_fill_media_defaults() {
    let media = MockMediaRepo::default();

    let created = CreateMediaUseCase {
        media: media.clone(),
    }
    .execute(
        &admin(),
        CreateMediaInput {
            url: "https://cdn.example.com/a.png".to_owned(),
            file_type: FileType::default(),
            filename: None,
            content_type: None,
            size: None,
            storage_key: None,
            thumbnail: None,
            title: None,
        },
    )
    .await
    .unwrap();

    assert!(created.filename.starts_with("media-"));
    assert_eq!(created.content_type, "application/octet-stream");
    assert_eq!(created.size, 0);
    assert_eq!(created.storage_key, "https://cdn.example.com/a.png");
    assert_eq!(media.media.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_list_no_media_when_datastore_unavailable() {
    let listed = ListMediaUseCase {
        media: MockMediaRepo::unavailable(),
    }
    .execute()
    .await
    .unwrap();

    assert!(listed.is_empty());
}

#[tokio::test]
async fn should_let_member_delete_media() {
    let item = fixture::media("https://cdn.example.com/a.png");
    let id = item.id.clone();
    let media = MockMediaRepo::new(vec![item]);
    let usecase = DeleteMediaUseCase {
        media: media.clone(),
    };

    usecase.execute(&id).await.unwrap();
    assert!(media.media.lock().unwrap().is_empty());

    let again = usecase.execute(&id).await;
    assert!(matches!(again, Err(ApiError::MediaNotFound)), "got {again:?}");
}
