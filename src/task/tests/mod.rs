
use crate::account::domain::UserId;
use crate::config::TaskRules;
use crate::task::domain::{PersistedTaskData, Priority, Stage, Task, TaskId, TaskName};
use chrono::{NaiveDate, TimeZone, Utc};

/// Builds a stored task owned by `user-1` with a fixed deadline.
fn stored_task(id: &str, stage: Stage) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id).expect("valid task id"),
        name: TaskName::new(&format!("Task {id}"), &TaskRules::default())
            .expect("valid task name"),
        priority: Priority::Medium,
        deadline: NaiveDate::from_ymd_opt(2026, 6, 30).expect("valid date"),
        stage,
        user_id: owner(),
        created_at: Utc
            .with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp"),
    })
}

fn owner() -> UserId {
    UserId::new("user-1").expect("valid user id")
}

fn task_id(raw: &str) -> TaskId {
    TaskId::new(raw).expect("valid task id")
}
