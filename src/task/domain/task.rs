//! Task record, its form input, and partial updates.

use super::{Direction, Stage, TaskDomainError, TaskId};
use crate::{account::domain::UserId, config::TaskRules, validation::FieldErrors};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal urgency, the form default.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(TaskDomainError::InvalidPriority(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task name that satisfied the configured length bounds when created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskName(String);

impl TaskName {
    /// Creates a validated, trimmed task name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::Validation`] with a `name` entry when the
    /// name is blank, too short or too long.
    pub fn new(value: &str, rules: &TaskRules) -> Result<Self, TaskDomainError> {
        let mut errors = FieldErrors::new();
        check_name(value, rules, &mut errors).ok_or(TaskDomainError::Validation(errors))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn check_name(value: &str, rules: &TaskRules, errors: &mut FieldErrors) -> Option<TaskName> {
    let trimmed = value.trim();
    let chars = trimmed.chars().count();
    if trimmed.is_empty() {
        errors.add("name", "Task name is required");
    } else if chars < rules.min_name_chars {
        errors.add(
            "name",
            format!(
                "Task name must be at least {} characters",
                rules.min_name_chars
            ),
        );
    } else if chars > rules.max_name_chars {
        errors.add(
            "name",
            format!(
                "Task name must not exceed {} characters",
                rules.max_name_chars
            ),
        );
    } else {
        return Some(TaskName(trimmed.to_owned()));
    }
    None
}

fn check_deadline(
    deadline: Option<NaiveDate>,
    today: NaiveDate,
    errors: &mut FieldErrors,
) -> Option<NaiveDate> {
    match deadline {
        None => errors.add("deadline", "Deadline is required"),
        Some(date) if date < today => errors.add("deadline", "Deadline must be a future date"),
        Some(date) => return Some(date),
    }
    None
}

/// Raw task form input, as submitted by the create and edit forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    name: String,
    priority: Priority,
    deadline: Option<NaiveDate>,
    stage: Option<Stage>,
}

impl TaskDraft {
    /// Creates a draft with the given name, medium priority and no deadline.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: Priority::default(),
            deadline: None,
            stage: None,
        }
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets a stage on the draft.
    ///
    /// Forms may submit one, but it never decides where a task lands: new
    /// tasks enter the backlog and edits keep the current stage.
    #[must_use]
    pub const fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = Some(stage);
        self
    }

    /// Returns the stage the caller asked for, if any.
    #[must_use]
    pub const fn requested_stage(&self) -> Option<Stage> {
        self.stage
    }

    /// Validates the name and deadline, collecting all failures.
    ///
    /// `today` is the caller's local calendar date; deadlines on `today` are
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::Validation`] listing each failing field.
    pub fn validate(
        &self,
        rules: &TaskRules,
        today: NaiveDate,
    ) -> Result<TaskFields, TaskDomainError> {
        let mut errors = FieldErrors::new();
        let name = check_name(&self.name, rules, &mut errors);
        let deadline = check_deadline(self.deadline, today, &mut errors);
        match (name, deadline) {
            (Some(valid_name), Some(valid_deadline)) => Ok(TaskFields {
                name: valid_name,
                priority: self.priority,
                deadline: valid_deadline,
            }),
            _ => Err(TaskDomainError::Validation(errors)),
        }
    }
}

/// Validated user-editable task fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    name: TaskName,
    priority: Priority,
    deadline: NaiveDate,
}

impl TaskFields {
    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> NaiveDate {
        self.deadline
    }
}

/// Partial update merged into a stored task by the persistence boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    name: Option<TaskName>,
    priority: Option<Priority>,
    deadline: Option<NaiveDate>,
    stage: Option<Stage>,
}

impl TaskPatch {
    /// Creates a patch that only changes the stage.
    #[must_use]
    pub const fn stage(stage: Stage) -> Self {
        Self {
            name: None,
            priority: None,
            deadline: None,
            stage: Some(stage),
        }
    }

    /// Creates a patch replacing every user-editable field.
    #[must_use]
    pub fn fields(fields: TaskFields) -> Self {
        Self {
            name: Some(fields.name),
            priority: Some(fields.priority),
            deadline: Some(fields.deadline),
            stage: None,
        }
    }

    /// Returns the new stage, if the patch changes it.
    #[must_use]
    pub const fn new_stage(&self) -> Option<Stage> {
        self.stage
    }

    /// Returns the new name, if the patch changes it.
    #[must_use]
    pub const fn new_name(&self) -> Option<&TaskName> {
        self.name.as_ref()
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.priority.is_none()
            && self.deadline.is_none()
            && self.stage.is_none()
    }
}

/// A task on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    name: TaskName,
    priority: Priority,
    deadline: NaiveDate,
    stage: Stage,
    user_id: UserId,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted name.
    pub name: TaskName,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted deadline.
    pub deadline: NaiveDate,
    /// Persisted stage.
    pub stage: Stage,
    /// Owning user.
    pub user_id: UserId,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in the backlog.
    ///
    /// There is no way to pick the initial stage: every task starts in
    /// [`Stage::Backlog`].
    #[must_use]
    pub fn create(
        id: TaskId,
        owner: UserId,
        fields: TaskFields,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: fields.name,
            priority: fields.priority,
            deadline: fields.deadline,
            stage: Stage::Backlog,
            user_id: owner,
            created_at,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            priority: data.priority,
            deadline: data.deadline,
            stage: data.stage,
            user_id: data.user_id,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    /// Returns the current stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Computes the stage one step away in `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::StageOutOfRange`] when the task already
    /// sits in the first or last stage.
    pub fn next_stage(&self, direction: Direction) -> Result<Stage, TaskDomainError> {
        self.stage
            .step(direction)
            .ok_or_else(|| TaskDomainError::StageOutOfRange {
                task_id: self.id.clone(),
                from: self.stage,
                direction,
            })
    }

    /// Merges `patch` into this task. Identity, owner and creation time are
    /// never changed.
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(deadline) = patch.deadline {
            self.deadline = deadline;
        }
        if let Some(stage) = patch.stage {
            self.stage = stage;
        }
    }
}
