use serde::{Deserialize, Serialize};

/// Store-assigned task identifier. Positive, unique for the lifetime of
/// the process, never reused after deletion.
pub type TaskId = u64;

/// A task record. `id`, `title`, `description` and `created_at` are fixed
/// at creation; only `status` (and its `updated_at` stamp) ever changes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// Task lifecycle status. Every status may transition to every other,
/// including itself; there is no terminal state.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// The wire names accepted by `from_str`, for error messages.
    pub const ALL: [&'static str; 3] = ["pending", "in_progress", "completed"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = crate::StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => Err(crate::StoreError::Validation(format!(
                "status must be one of {:?}, got {other:?}",
                Self::ALL
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_round_trips_through_str() {
        for name in TaskStatus::ALL {
            let status = TaskStatus::from_str(name).unwrap();
            assert_eq!(status.as_str(), name);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = TaskStatus::from_str("bogus").unwrap_err();
        assert_eq!(err.error_kind(), "validation_error");
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn status_serializes_as_snake_case() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");

        let back: TaskStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(back, TaskStatus::Completed);
    }
}
