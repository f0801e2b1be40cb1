#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of executing a tree node for one walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    Running,
    Success,
    Failure,
}

impl Status {
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Swap `Success` and `Failure`; `Running` is left as is.
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }
}

/// Status as it appears in an execution history.
///
/// `NotEvaluated` marks a tick in which the node was not visited. Nodes never
/// return it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SampleStatus {
    Running,
    Success,
    Failure,
    NotEvaluated,
}

impl From<Status> for SampleStatus {
    fn from(value: Status) -> Self {
        match value {
            Status::Running => SampleStatus::Running,
            Status::Success => SampleStatus::Success,
            Status::Failure => SampleStatus::Failure,
        }
    }
}

impl SampleStatus {
    pub fn status(self) -> Option<Status> {
        match self {
            SampleStatus::Running => Some(Status::Running),
            SampleStatus::Success => Some(Status::Success),
            SampleStatus::Failure => Some(Status::Failure),
            SampleStatus::NotEvaluated => None,
        }
    }
}
