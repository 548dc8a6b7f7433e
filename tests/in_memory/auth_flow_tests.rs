//! Registration, login and logout persisted through blob storage.

use super::helpers::{auth_service, blobs, registration};
use rstest::rstest;
use std::sync::Arc;
use taskboard::account::{
    adapters::blob::ACCOUNTS_KEY,
    domain::{AccountDomainError, RegisterRequest, SessionState},
    services::AuthError,
};
use taskboard::storage::{BlobStore, InMemoryBlobStore};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registered_user_can_log_in_from_a_fresh_service(
    blobs: Arc<InMemoryBlobStore>,
) -> eyre::Result<()> {
    let account = auth_service(&blobs)
        .register(registration("grace", "grace@example.com"))
        .await?;

    let session = auth_service(&blobs).login("grace", "Cobol#1959").await?;

    eyre::ensure!(session.user_id() == account.id());
    eyre::ensure!(session.profile().email() == "grace@example.com");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stored_accounts_never_hold_the_password(
    blobs: Arc<InMemoryBlobStore>,
) -> eyre::Result<()> {
    auth_service(&blobs)
        .register(registration("grace", "grace@example.com"))
        .await?;

    let raw = blobs
        .get(ACCOUNTS_KEY)?
        .ok_or_else(|| eyre::eyre!("accounts blob missing"))?;

    eyre::ensure!(!raw.contains("Cobol#1959"));
    eyre::ensure!(raw.contains("\"username\":\"grace\""));
    Ok(())
}

#[rstest]
#[case("grace", "other@example.com")]
#[case("someone_else", "grace@example.com")]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_username_or_email_is_rejected(
    blobs: Arc<InMemoryBlobStore>,
    #[case] username: &str,
    #[case] email: &str,
) -> eyre::Result<()> {
    let service = auth_service(&blobs);
    service
        .register(registration("grace", "grace@example.com"))
        .await?;

    let result = service.register(registration(username, email)).await;

    eyre::ensure!(
        matches!(result, Err(AuthError::DuplicateAccount)),
        "expected duplicate account, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_form_reports_every_field(blobs: Arc<InMemoryBlobStore>) -> eyre::Result<()> {
    let request = RegisterRequest::new("G", "g!", "not-an-email", "short")
        .with_contact_number("12345")
        .with_confirmation("different");

    let result = auth_service(&blobs).register(request).await;

    let Err(AuthError::Domain(AccountDomainError::Validation(errors))) = result else {
        eyre::bail!("expected validation failure, got {result:?}");
    };
    for field in [
        "name",
        "username",
        "email",
        "contactNumber",
        "password",
        "confirmPassword",
    ] {
        eyre::ensure!(errors.contains(field), "missing error for {field}");
    }
    eyre::ensure!(blobs.is_empty());
    Ok(())
}

#[rstest]
#[case("grace", "wrong#Pass1")]
#[case("nobody", "Cobol#1959")]
#[tokio::test(flavor = "multi_thread")]
async fn bad_credentials_leave_session_signed_out(
    blobs: Arc<InMemoryBlobStore>,
    #[case] identifier: &str,
    #[case] password: &str,
) -> eyre::Result<()> {
    let service = auth_service(&blobs);
    service
        .register(registration("grace", "grace@example.com"))
        .await?;
    let mut state = SessionState::new();

    let result = service.sign_in(&mut state, identifier, password).await;

    eyre::ensure!(matches!(result, Err(AuthError::InvalidCredentials)));
    eyre::ensure!(!state.is_authenticated());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn logout_ends_the_session(blobs: Arc<InMemoryBlobStore>) -> eyre::Result<()> {
    let service = auth_service(&blobs);
    service
        .register(registration("grace", "grace@example.com"))
        .await?;
    let mut state = SessionState::new();
    service
        .sign_in(&mut state, "grace@example.com", "Cobol#1959")
        .await?;

    let ended = service.logout(&mut state);

    eyre::ensure!(ended.is_some());
    eyre::ensure!(!state.is_authenticated());
    eyre::ensure!(service.logout(&mut state).is_none());
    Ok(())
}
