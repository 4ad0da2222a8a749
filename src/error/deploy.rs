//! Convenience constructors for file placement/removal errors

use super::ModkeepError;

pub fn placement_failed(name: impl Into<String>, reason: impl Into<String>) -> ModkeepError {
    ModkeepError::Placement {
        name: name.into(),
        reason: reason.into(),
    }
}

pub fn removal_failed(name: impl Into<String>, reason: impl Into<String>) -> ModkeepError {
    ModkeepError::Removal {
        name: name.into(),
        reason: reason.into(),
    }
}
