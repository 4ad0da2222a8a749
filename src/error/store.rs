//! Convenience constructors for bundle store errors

use super::ModkeepError;

pub fn duplicate_bundle(name: impl Into<String>) -> ModkeepError {
    ModkeepError::DuplicateBundle { name: name.into() }
}

pub fn unknown_bundle(name: impl Into<String>) -> ModkeepError {
    ModkeepError::UnknownBundle { name: name.into() }
}
