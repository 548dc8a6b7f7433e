//! Given steps for account BDD scenarios.

use super::world::{AccountWorld, registration, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("no registered accounts")]
fn no_accounts(world: &mut AccountWorld) {
    world.last_registration = None;
}

#[given(r#"an account "{username}" with email "{email}" and password "{password}""#)]
fn existing_account(
    world: &mut AccountWorld,
    username: String,
    email: String,
    password: String,
) -> Result<(), eyre::Report> {
    run_async(
        world
            .auth
            .register(registration(&username, &email, &password)),
    )
    .wrap_err("register account in scenario setup")?;
    Ok(())
}
