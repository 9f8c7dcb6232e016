use vinipim_api::domain::types::{LoginInput, UpdateEmailInput, UpdatePasswordInput};
use vinipim_api::error::ApiError;
use vinipim_api::usecase::admin::{
    AdminLoginUseCase, ProvisionAdminUseCase, UpdateAdminEmailUseCase, UpdateAdminPasswordUseCase,
    find_admin_by_email, verify_admin_login,
};
use vinipim_auth_types::password::verify_password;
use vinipim_auth_types::token::verify_admin_token;
use vinipim_testing::fixture;

use crate::helpers::{MockAdminRepo, TEST_JWT_SECRET};

const EMAIL: &str = "owner@example.com";
const PASSWORD: &str = "correct horse";

fn seeded() -> MockAdminRepo {
    MockAdminRepo::new(vec![fixture::admin_credential(EMAIL, PASSWORD)])
}

fn login_usecase(admins: MockAdminRepo) -> AdminLoginUseCase<MockAdminRepo> {
    AdminLoginUseCase {
        admins,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    }
}

fn login(email: &str, password: &str) -> LoginInput {
    LoginInput {
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

// ── verify_admin_login ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_verify_correct_credentials_and_stamp_last_login() {
    let admins = seeded();

    let admin = verify_admin_login(&admins, EMAIL, PASSWORD).await.unwrap();

    assert_eq!(admin.email, EMAIL);
    assert!(admin.last_login.is_some());
    assert_eq!(admins.get(EMAIL).unwrap().last_login, admin.last_login);
}

#[tokio::test]
async fn should_not_match_wrong_password_or_unknown_email() {
    let admins = seeded();

    assert!(verify_admin_login(&admins, EMAIL, "wrong password").await.is_none());
    assert!(verify_admin_login(&admins, "nobody@example.com", PASSWORD).await.is_none());
    assert!(admins.get(EMAIL).unwrap().last_login.is_none());
}

#[tokio::test]
async fn should_not_match_when_datastore_unavailable() {
    let admins = MockAdminRepo::unavailable();

    assert!(verify_admin_login(&admins, EMAIL, PASSWORD).await.is_none());
    assert!(find_admin_by_email(&admins, EMAIL).await.is_none());
}

// ── AdminLoginUseCase ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_issue_admin_token_carrying_credential_identity() {
    let admins = seeded();
    let stored = admins.get(EMAIL).unwrap();

    let output = login_usecase(admins).execute(login(EMAIL, PASSWORD)).await.unwrap();

    assert_eq!(output.admin.id, stored.id);
    assert_eq!(output.admin.email, EMAIL);

    let claims = verify_admin_token(&output.token, TEST_JWT_SECRET).unwrap();
    assert_eq!(claims, output.claims);
    assert_eq!(claims.admin_id, stored.id);
    assert_eq!(claims.email, EMAIL);
    assert_eq!(claims.name, stored.name);
    assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
}

#[tokio::test]
async fn should_reject_wrong_password_with_invalid_credentials() {
    let result = login_usecase(seeded())
        .execute(login(EMAIL, "wrong password"))
        .await;

    assert!(
        matches!(result, Err(ApiError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_login_when_datastore_unavailable() {
    let result = login_usecase(MockAdminRepo::unavailable())
        .execute(login(EMAIL, PASSWORD))
        .await;

    assert!(
        matches!(result, Err(ApiError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_malformed_email_before_lookup() {
    let result = login_usecase(seeded())
        .execute(login("not-an-email", PASSWORD))
        .await;

    assert!(
        matches!(result, Err(ApiError::InvalidInput(_))),
        "expected InvalidInput, got {result:?}"
    );
}

// ── UpdateAdminEmailUseCase ──────────────────────────────────────────────────

#[tokio::test]
async fn should_update_admin_email() {
    let admins = seeded();

    UpdateAdminEmailUseCase {
        admins: admins.clone(),
    }
    .execute(UpdateEmailInput {
        current_email: EMAIL.to_owned(),
        new_email: "new@example.com".to_owned(),
    })
    .await
    .unwrap();

    assert!(admins.get(EMAIL).is_none());
    assert!(admins.get("new@example.com").is_some());
}

#[tokio::test]
async fn should_report_email_update_failure_when_datastore_unavailable() {
    let result = UpdateAdminEmailUseCase {
        admins: MockAdminRepo::unavailable(),
    }
    .execute(UpdateEmailInput {
        current_email: EMAIL.to_owned(),
        new_email: "new@example.com".to_owned(),
    })
    .await;

    assert!(
        matches!(result, Err(ApiError::EmailUpdateFailed)),
        "expected EmailUpdateFailed, got {result:?}"
    );
}

// ── UpdateAdminPasswordUseCase ───────────────────────────────────────────────

#[tokio::test]
async fn should_store_new_password_digest() {
    let admins = seeded();

    UpdateAdminPasswordUseCase {
        admins: admins.clone(),
    }
    .execute(UpdatePasswordInput {
        email: EMAIL.to_owned(),
        new_password: "battery staple".to_owned(),
    })
    .await
    .unwrap();

    let stored = admins.get(EMAIL).unwrap();
    assert!(verify_password("battery staple", &stored.password_hash));
    assert!(!verify_password(PASSWORD, &stored.password_hash));
}

#[tokio::test]
async fn should_reject_short_password() {
    let admins = seeded();
    let before = admins.get(EMAIL).unwrap().password_hash;

    let result = UpdateAdminPasswordUseCase {
        admins: admins.clone(),
    }
    .execute(UpdatePasswordInput {
        email: EMAIL.to_owned(),
        new_password: "short".to_owned(),
    })
    .await;

    assert!(
        matches!(result, Err(ApiError::InvalidInput(_))),
        "expected InvalidInput, got {result:?}"
    );
    assert_eq!(admins.get(EMAIL).unwrap().password_hash, before);
}

// ── ProvisionAdminUseCase ────────────────────────────────────────────────────

#[tokio::test]
async fn should_reset_password_when_provisioning_existing_email() {
    let admins = seeded();
    let original_id = admins.get(EMAIL).unwrap().id;

    let admin = ProvisionAdminUseCase {
        admins: admins.clone(),
    }
    .execute(EMAIL, "a brand new secret", Some("Owner".to_owned()))
    .await
    .unwrap();

    assert_eq!(admin.id, original_id);
    assert_eq!(admins.admins.lock().unwrap().len(), 1);
    assert!(verify_admin_login(&admins, EMAIL, "a brand new secret").await.is_some());
}

#[tokio::test]
async fn should_create_admin_for_new_email() {
    let admins = MockAdminRepo::default();

    let admin = ProvisionAdminUseCase {
        admins: admins.clone(),
    }
    .execute("second@example.com", PASSWORD, None)
    .await
    .unwrap();

    assert_eq!(admin.email, "second@example.com");
    assert!(verify_admin_login(&admins, "second@example.com", PASSWORD).await.is_some());
}
