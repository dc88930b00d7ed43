use crate::shared::error::TangleError;
use crate::shared::Result;

/// Maximum length for component names (security limit)
const MAX_COMPONENT_NAME_LENGTH: usize = 255;

/// NewType wrapper for a PDC component name with validation
///
/// Component names end up in query strings, so anything that cannot be a
/// real RPM/component name (empty, whitespace, control characters, absurd
/// length) is rejected here, before a request is ever built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentName(String);

impl ComponentName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            return Err(Self::invalid(name, "name cannot be empty"));
        }

        // Security: Length limit to prevent oversized requests
        if name.len() > MAX_COMPONENT_NAME_LENGTH {
            let reason = format!(
                "name is too long ({} bytes, maximum {} bytes)",
                name.len(),
                MAX_COMPONENT_NAME_LENGTH
            );
            return Err(Self::invalid(name, &reason));
        }

        // RPM names use '+', '~' and friends ("gtk+", "libstdc++"), so only
        // whitespace and control characters are refused.
        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(Self::invalid(
                name,
                "name contains whitespace or control characters",
            ));
        }

        Ok(Self(name))
    }

    fn invalid(name: String, reason: &str) -> anyhow::Error {
        TangleError::InvalidComponentName {
            name,
            reason: reason.to_string(),
        }
        .into()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComponentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ComponentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
