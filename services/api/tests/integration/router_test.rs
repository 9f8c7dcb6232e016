use http::{StatusCode, header};
use serde_json::{Value, json};

use vinipim_auth_types::cookie::{ADMIN_SESSION_COOKIE, SESSION_COOKIE};
use vinipim_domain::user::UserRole;
use vinipim_testing::auth::{MockAuth, cookie_header};
use vinipim_testing::fixture;
use vinipim_testing::http::{body_json, body_text, cookie_pair, get, post_json, send, set_cookies};

use crate::helpers::{InMemoryRepositories, TEST_FORGE_URL, test_app};

const EMAIL: &str = "owner@example.com";
const PASSWORD: &str = "correct horse";

fn with_admin() -> InMemoryRepositories {
    let repos = InMemoryRepositories::default();
    repos
        .admins
        .admins
        .lock()
        .unwrap()
        .push(fixture::admin_credential(EMAIL, PASSWORD));
    repos
}

fn with_member(repos: InMemoryRepositories, open_id: &str, role: UserRole) -> InMemoryRepositories {
    repos.users.users.lock().unwrap().push(fixture::user(open_id, role));
    repos
}

fn admin_cookie_from(set_cookie: &[String]) -> &str {
    set_cookie
        .iter()
        .find(|c| c.starts_with(&format!("{ADMIN_SESSION_COOKIE}=")))
        .expect("admin_session cookie set")
}

async fn error_of(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    (status, body_json(response).await)
}

// ── Health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_answer_root_and_liveness() {
    let app = test_app(InMemoryRepositories::default());

    let root = send(app.clone(), get("/", None)).await;
    assert_eq!(root.status(), StatusCode::OK);
    assert_eq!(body_text(root).await, "Vinipim Portfolio API is running");

    let live = send(app, get("/healthz", None)).await;
    assert_eq!(live.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_report_readiness_from_datastore() {
    let ready = send(test_app(InMemoryRepositories::default()), get("/readyz", None)).await;
    let down = send(test_app(InMemoryRepositories::unavailable()), get("/readyz", None)).await;

    assert_eq!(ready.status(), StatusCode::OK);
    assert_eq!(down.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_echo_request_id() {
    let response = send(test_app(InMemoryRepositories::default()), get("/healthz", None)).await;

    assert!(response.headers().contains_key("x-request-id"));
}

// ── Admin session ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_login_then_report_admin_identity() {
    let repos = with_admin();
    let stored = repos.admins.get(EMAIL).unwrap();
    let app = test_app(repos);

    let response = send(
        app.clone(),
        post_json(
            "/api/trpc/admin.login",
            json!({ "email": EMAIL, "password": PASSWORD }),
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookies = set_cookies(&response);
    let cookie = admin_cookie_from(&cookies).to_owned();
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=None"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=604800"));
    assert!(!cookie.contains("Secure"));

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["admin"]["id"], stored.id.as_str());
    assert_eq!(body["admin"]["email"], EMAIL);

    let me = send(app, get("/api/trpc/admin.me", Some(cookie_pair(&cookie)))).await;
    let me = body_json(me).await;
    assert_eq!(me["adminId"], stored.id.as_str());
    assert_eq!(me["email"], EMAIL);
    assert_eq!(me["name"], "Admin");
}

#[tokio::test]
async fn should_mark_cookie_secure_behind_https_proxy() {
    let app = test_app(with_admin());
    let mut request = post_json(
        "/api/trpc/admin.login",
        json!({ "email": EMAIL, "password": PASSWORD }),
        None,
    );
    request
        .headers_mut()
        .insert("x-forwarded-proto", "http, https".parse().unwrap());

    let response = send(app, request).await;

    let cookies = set_cookies(&response);
    assert!(admin_cookie_from(&cookies).contains("Secure"));
}

#[tokio::test]
async fn should_reject_wrong_password_without_cookie() {
    let response = send(
        test_app(with_admin()),
        post_json(
            "/api/trpc/admin.login",
            json!({ "email": EMAIL, "password": "wrong password" }),
            None,
        ),
    )
    .await;

    assert!(set_cookies(&response).is_empty());
    let (status, body) = error_of(response).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
    assert_eq!(body["message"], "Invalid email or password");
}

#[tokio::test]
async fn should_report_null_after_logout() {
    let app = test_app(with_admin());
    let cookie = MockAuth::default().admin_cookie("a1", EMAIL);

    let logout = send(
        app.clone(),
        post_json("/api/trpc/admin.logout", json!({}), Some(cookie)),
    )
    .await;
    assert_eq!(logout.status(), StatusCode::OK);

    let cookies = set_cookies(&logout);
    let cleared = admin_cookie_from(&cookies).to_owned();
    assert!(cleared.starts_with(&format!("{ADMIN_SESSION_COOKIE}=;")));
    assert_eq!(body_json(logout).await, json!({ "success": true }));

    let me = send(app, get("/api/trpc/admin.me", Some(cookie_pair(&cleared)))).await;
    assert_eq!(body_json(me).await, Value::Null);
}

#[tokio::test]
async fn should_report_null_for_expired_admin_token() {
    let token = MockAuth::default().admin_token_aged("a1", EMAIL, 8 * 24 * 60 * 60);
    let cookie = cookie_header(&[(ADMIN_SESSION_COOKIE, &token)]);

    let me = send(
        test_app(InMemoryRepositories::default()),
        get("/api/trpc/admin.me", Some(cookie)),
    )
    .await;

    assert_eq!(body_json(me).await, Value::Null);
}

#[tokio::test]
async fn should_require_admin_cookie_for_credential_updates() {
    let app = test_app(with_admin());
    let input = json!({ "email": EMAIL, "newPassword": "battery staple" });

    let denied = send(
        app.clone(),
        post_json("/api/trpc/admin.updatePassword", input.clone(), None),
    )
    .await;
    let (status, body) = error_of(denied).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");

    let allowed = send(
        app.clone(),
        post_json(
            "/api/trpc/admin.updatePassword",
            input,
            Some(MockAuth::default().admin_cookie("a1", EMAIL)),
        ),
    )
    .await;
    assert_eq!(allowed.status(), StatusCode::OK);

    let relogin = send(
        app,
        post_json(
            "/api/trpc/admin.login",
            json!({ "email": EMAIL, "password": "battery staple" }),
            None,
        ),
    )
    .await;
    assert_eq!(relogin.status(), StatusCode::OK);
}

// ── General session ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_resolve_session_cookie_to_user() {
    let repos = with_member(InMemoryRepositories::default(), "u1", UserRole::User);
    let app = test_app(repos);

    let anonymous = send(app.clone(), get("/api/trpc/auth.me", None)).await;
    assert_eq!(body_json(anonymous).await, Value::Null);

    let signed_in = send(
        app,
        get("/api/trpc/auth.me", Some(MockAuth::default().session_cookie("u1"))),
    )
    .await;
    let body = body_json(signed_in).await;
    assert_eq!(body["id"], "u1");
    assert_eq!(body["role"], "user");
}

#[tokio::test]
async fn should_treat_session_as_anonymous_when_datastore_unavailable() {
    let response = send(
        test_app(InMemoryRepositories::unavailable()),
        get("/api/trpc/auth.me", Some(MockAuth::default().session_cookie("u1"))),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, Value::Null);
}

#[tokio::test]
async fn should_clear_session_cookie_on_logout() {
    let response = send(
        test_app(InMemoryRepositories::default()),
        post_json("/api/trpc/auth.logout", json!({}), None),
    )
    .await;

    let cookies = set_cookies(&response);
    assert!(
        cookies
            .iter()
            .any(|c| c.starts_with(&format!("{SESSION_COOKIE}=;")))
    );
}

// ── Tiers ────────────────────────────────────────────────────────────────────

fn create_post_body() -> Value {
    json!({
        "title": "Hello",
        "slug": "hello",
        "content": "First post",
        "category": "notes"
    })
}

#[tokio::test]
async fn should_reject_anonymous_mutation_as_unauthorized() {
    let response = send(
        test_app(InMemoryRepositories::default()),
        post_json("/api/trpc/posts.create", create_post_body(), None),
    )
    .await;

    let (status, body) = error_of(response).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn should_forbid_member_from_admin_mutation() {
    let repos = with_member(InMemoryRepositories::default(), "u1", UserRole::User);

    let response = send(
        test_app(repos.clone()),
        post_json(
            "/api/trpc/posts.create",
            create_post_body(),
            Some(MockAuth::default().session_cookie("u1")),
        ),
    )
    .await;

    let (status, body) = error_of(response).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");
    assert_eq!(body["message"], "Admin access required");
    assert!(repos.posts.posts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_forbid_member_from_admin_tier_procedure() {
    let repos = with_member(InMemoryRepositories::default(), "u1", UserRole::User);

    let response = send(
        test_app(repos),
        post_json(
            "/api/trpc/system.notifyOwner",
            json!({ "title": "Hi", "content": "There" }),
            Some(MockAuth::default().session_cookie("u1")),
        ),
    )
    .await;

    let (status, body) = error_of(response).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Not an admin");
}

#[tokio::test]
async fn should_let_oauth_admin_create_and_read_post() {
    let repos = with_member(InMemoryRepositories::default(), "owner", UserRole::Admin);
    let app = test_app(repos);

    let created = send(
        app.clone(),
        post_json(
            "/api/trpc/posts.create",
            create_post_body(),
            Some(MockAuth::default().session_cookie("owner")),
        ),
    )
    .await;
    assert_eq!(created.status(), StatusCode::OK);
    let created = body_json(created).await;
    assert_eq!(created["success"], true);

    let post = send(app, get("/api/trpc/posts.getBySlug?slug=hello", None)).await;
    let post = body_json(post).await;
    assert_eq!(post["id"], created["id"]);
    assert_eq!(post["authorId"], "owner");
    assert_eq!(post["featured"], "no");
}

#[tokio::test]
async fn should_let_password_admin_notify_owner() {
    let response = send(
        test_app(InMemoryRepositories::default()),
        post_json(
            "/api/trpc/system.notifyOwner",
            json!({ "title": "Hi", "content": "There" }),
            Some(MockAuth::default().admin_cookie("a1", EMAIL)),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "success": true }));
}

#[tokio::test]
async fn should_issue_upload_url_to_any_signed_in_user() {
    let repos = with_member(InMemoryRepositories::default(), "u1", UserRole::User);

    let response = send(
        test_app(repos),
        post_json(
            "/api/trpc/upload.getUploadUrl",
            json!({ "filename": "/photos/a.png", "contentType": "image/png" }),
            Some(MockAuth::default().session_cookie("u1")),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["url"],
        format!("{TEST_FORGE_URL}/v1/storage/upload?path=photos%2Fa.png")
    );
}

#[tokio::test]
async fn should_let_member_author_reviews_and_media() {
    let repos = with_member(InMemoryRepositories::default(), "u1", UserRole::User);
    let app = test_app(repos.clone());

    let media = send(
        app.clone(),
        post_json(
            "/api/trpc/media.create",
            json!({ "url": "https://cdn.example.com/a.png" }),
            Some(MockAuth::default().session_cookie("u1")),
        ),
    )
    .await;
    assert_eq!(media.status(), StatusCode::OK);
    assert_eq!(body_json(media).await["userId"], "u1");

    let review = send(
        app.clone(),
        post_json(
            "/api/trpc/reviews.create",
            json!({ "type": "film", "title": "Stalker", "rating": 4 }),
            Some(MockAuth::default().session_cookie("u1")),
        ),
    )
    .await;
    assert_eq!(review.status(), StatusCode::OK);
    let id = body_json(review).await["id"].clone();

    let deleted = send(
        app,
        post_json(
            "/api/trpc/reviews.delete",
            json!({ "id": id }),
            Some(MockAuth::default().session_cookie("u1")),
        ),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::OK);
    assert_eq!(repos.media.media.lock().unwrap().len(), 1);
    assert!(repos.reviews.reviews.lock().unwrap().is_empty());
}

// ── Input and degradation ────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_malformed_json_as_bad_request() {
    let mut request = post_json("/api/trpc/admin.login", json!({}), None);
    *request.body_mut() = axum::body::Body::from("{not json");

    let response = send(test_app(with_admin()), request).await;

    let (status, body) = error_of(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn should_validate_health_timestamp() {
    let app = test_app(InMemoryRepositories::default());

    let ok = send(app.clone(), get("/api/trpc/system.health?timestamp=1700000000", None)).await;
    assert_eq!(body_json(ok).await, json!({ "ok": true }));

    let negative = send(app, get("/api/trpc/system.health?timestamp=-1", None)).await;
    assert_eq!(negative.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_degrade_public_reads_when_datastore_unavailable() {
    let app = test_app(InMemoryRepositories::unavailable());

    let reviews = send(app.clone(), get("/api/trpc/reviews.list?type=film", None)).await;
    assert_eq!(reviews.status(), StatusCode::OK);
    assert_eq!(body_json(reviews).await, json!([]));

    let media = send(app.clone(), get("/api/trpc/media.getAll", None)).await;
    assert_eq!(body_json(media).await, json!([]));

    let review = send(app.clone(), get("/api/trpc/reviews.getById?id=x", None)).await;
    assert_eq!(body_json(review).await, Value::Null);

    let stats = send(app.clone(), get("/api/trpc/reviews.stats", None)).await;
    let stats = body_json(stats).await;
    assert_eq!(stats["total"], 0);
    assert_eq!(stats["topRated"], json!([]));

    let posts = send(app, get("/api/trpc/posts.getAll", None)).await;
    let (status, body) = error_of(posts).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Database not available");
}

#[tokio::test]
async fn should_authorize_before_touching_unavailable_datastore() {
    let response = send(
        test_app(InMemoryRepositories::unavailable()),
        post_json("/api/trpc/media.delete", json!({ "id": "m1" }), None),
    )
    .await;

    let (status, _) = error_of(response).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// ── OAuth callback ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_require_code_and_state_on_callback() {
    let app = test_app(InMemoryRepositories::default());

    let missing = send(app.clone(), get("/api/oauth/callback?code=abc", None)).await;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

    let unconfigured = send(app, get("/api/oauth/callback?code=abc&state=xyz", None)).await;
    assert_eq!(unconfigured.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(unconfigured.headers().get(header::SET_COOKIE).is_none());
    assert_eq!(
        body_json(unconfigured).await,
        json!({ "error": "OAuth callback failed" })
    );
}
