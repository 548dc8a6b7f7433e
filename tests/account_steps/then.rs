//! Then steps for account BDD scenarios.

use super::world::AccountWorld;
use rstest_bdd_macros::then;
use taskboard::account::services::AuthError;
use taskboard::app::View;

#[then("registration succeeds")]
fn registration_succeeds(world: &AccountWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_registration
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration result"))?;

    eyre::ensure!(result.is_ok(), "expected registration to succeed, got {result:?}");
    Ok(())
}

#[then("registration fails because the account exists")]
fn registration_duplicate(world: &AccountWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_registration
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration result"))?;

    eyre::ensure!(
        matches!(result, Err(AuthError::DuplicateAccount)),
        "expected DuplicateAccount, got {result:?}"
    );
    Ok(())
}

#[then("login fails with invalid credentials")]
fn login_invalid(world: &AccountWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_login
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing login result"))?;

    eyre::ensure!(
        matches!(result, Err(AuthError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
    Ok(())
}

#[then("the user is signed in")]
fn signed_in(world: &AccountWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.navigator.session().is_authenticated());
    Ok(())
}

#[then("the user is signed out")]
fn signed_out(world: &AccountWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(!world.navigator.session().is_authenticated());
    Ok(())
}

#[then(r#"the "{path}" view is shown"#)]
fn view_shown(world: &AccountWorld, path: String) -> Result<(), eyre::Report> {
    let shown = world.navigator.current();
    eyre::ensure!(
        shown.path() == path,
        "expected view {path}, found {shown}"
    );
    Ok(())
}
