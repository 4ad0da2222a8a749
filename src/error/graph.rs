//! Convenience constructors for dependency graph errors

use super::ModkeepError;

pub fn self_dependency(name: impl Into<String>) -> ModkeepError {
    ModkeepError::SelfDependency { name: name.into() }
}

pub fn cyclic_dependency(
    dependant: impl Into<String>,
    dependency: impl Into<String>,
) -> ModkeepError {
    ModkeepError::CyclicDependency {
        dependant: dependant.into(),
        dependency: dependency.into(),
    }
}

pub fn has_dependants(name: impl Into<String>, dependants: &[String]) -> ModkeepError {
    ModkeepError::HasDependants {
        name: name.into(),
        dependants: dependants.to_vec(),
    }
}
