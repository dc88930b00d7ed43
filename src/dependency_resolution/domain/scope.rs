use crate::shared::error::TangleError;
use crate::shared::Result;

/// Release and relationship-type labels that every edge query is scoped to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryScope {
    release: String,
    dependency_types: Vec<String>,
}

impl QueryScope {
    /// Creates a scope; duplicate labels are dropped, order of first
    /// occurrence is kept.
    ///
    /// # Errors
    /// Returns a validation error if the release is blank, no labels are
    /// given, or a label is blank.
    pub fn new(release: String, dependency_types: Vec<String>) -> Result<Self> {
        if release.trim().is_empty() {
            return Err(TangleError::Validation {
                message: "release must not be empty".to_string(),
            }
            .into());
        }

        if dependency_types.is_empty() {
            return Err(TangleError::Validation {
                message: "at least one dependency type is required".to_string(),
            }
            .into());
        }

        let mut unique: Vec<String> = Vec::with_capacity(dependency_types.len());
        for label in dependency_types {
            if label.trim().is_empty() {
                return Err(TangleError::Validation {
                    message: "dependency type labels must not be empty".to_string(),
                }
                .into());
            }
            if !unique.contains(&label) {
                unique.push(label);
            }
        }

        Ok(Self {
            release,
            dependency_types: unique,
        })
    }

    pub fn release(&self) -> &str {
        &self.release
    }

    pub fn dependency_types(&self) -> &[String] {
        &self.dependency_types
    }
}
