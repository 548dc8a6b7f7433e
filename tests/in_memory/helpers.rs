//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use mockable::{Clock, DefaultClock};
use rstest::fixture;
use taskboard::account::{
    adapters::blob::BlobAccountRepository,
    domain::{RegisterRequest, UserId},
    services::AuthService,
};
use taskboard::config::AuthConfig;
use taskboard::storage::InMemoryBlobStore;
use taskboard::task::{adapters::blob::BlobTaskRepository, services::BoardService};

/// Authentication service over shared in-memory blobs.
pub type TestAuth = AuthService<BlobAccountRepository<InMemoryBlobStore>, DefaultClock>;

/// Task repository over shared in-memory blobs.
pub type TestTasks = BlobTaskRepository<InMemoryBlobStore, DefaultClock>;

/// Board service over shared in-memory blobs.
pub type TestBoard = BoardService<TestTasks, DefaultClock>;

/// Provides an empty blob store.
#[fixture]
pub fn blobs() -> Arc<InMemoryBlobStore> {
    Arc::new(InMemoryBlobStore::new())
}

/// Builds an authentication service with the cheapest bcrypt cost.
pub fn auth_service(blobs: &Arc<InMemoryBlobStore>) -> TestAuth {
    AuthService::with_config(
        Arc::new(BlobAccountRepository::new(Arc::clone(blobs))),
        Arc::new(DefaultClock),
        AuthConfig::for_tests(),
    )
}

/// Builds the task repository sharing `blobs`.
pub fn task_repository(blobs: &Arc<InMemoryBlobStore>) -> Arc<TestTasks> {
    Arc::new(BlobTaskRepository::new(
        Arc::clone(blobs),
        Arc::new(DefaultClock),
    ))
}

/// Builds an empty board for `owner` over `blobs`.
pub fn board_for(blobs: &Arc<InMemoryBlobStore>, owner: &UserId) -> TestBoard {
    BoardService::new(task_repository(blobs), Arc::new(DefaultClock), owner.clone())
}

/// A complete, valid registration form.
pub fn registration(username: &str, email: &str) -> RegisterRequest {
    RegisterRequest::new("Grace Hopper", username, email, "Cobol#1959")
        .with_confirmation("Cobol#1959")
}

/// Returns the local date `days` from today.
pub fn days_from_today(days: u64) -> NaiveDate {
    let today = DefaultClock.local().date_naive();
    today.checked_add_days(Days::new(days)).unwrap_or(today)
}
