use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts can tell a missing artifact apart from an unreachable PDC
/// instance without parsing the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The tree (or the "no dependencies" message) was printed
    Success = 0,
    /// The requested artifact is not registered in PDC
    ArtifactNotFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// The PDC instance could not be contacted or answered garbage
    ConnectivityFailure = 3,
    /// Any other failure (config file, output file, validation)
    ApplicationError = 4,
    /// Resolution was interrupted by the user
    Interrupted = 130,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Classifies an error returned from the application layer.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<TangleError>() {
            Some(TangleError::ArtifactNotFound { .. }) => ExitCode::ArtifactNotFound,
            Some(TangleError::Connectivity(_)) | Some(TangleError::ResolutionFailed { .. }) => {
                ExitCode::ConnectivityFailure
            }
            Some(TangleError::Cancelled) => ExitCode::Interrupted,
            _ if error.downcast_ref::<ConnectivityError>().is_some() => {
                ExitCode::ConnectivityFailure
            }
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ArtifactNotFound => write!(f, "Artifact Not Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ConnectivityFailure => write!(f, "Connectivity Failure (3)"),
            ExitCode::ApplicationError => write!(f, "Application Error (4)"),
            ExitCode::Interrupted => write!(f, "Interrupted (130)"),
        }
    }
}

/// Failure talking to the edge provider.
///
/// Both variants abort whatever operation was in progress. Neither is
/// retried: retry policy belongs to whoever drives the provider.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConnectivityError {
    #[error("The PDC instance \"{server}\" could not be contacted ({details})")]
    Unreachable { server: String, details: String },

    #[error("The PDC instance \"{server}\" returned an unusable response ({details})")]
    UnexpectedResponse { server: String, details: String },
}

impl ConnectivityError {
    pub fn server(&self) -> &str {
        match self {
            ConnectivityError::Unreachable { server, .. }
            | ConnectivityError::UnexpectedResponse { server, .. } => server,
        }
    }
}

/// Application-specific errors for dependency tree resolution.
///
/// Every message is a single line: the CLI prints it verbatim.
#[derive(Debug, Error)]
pub enum TangleError {
    #[error("Invalid component name \"{name}\": {reason}")]
    InvalidComponentName { name: String, reason: String },

    #[error("\"{artifact}\" is not in PDC")]
    ArtifactNotFound { artifact: String },

    #[error(transparent)]
    Connectivity(#[from] ConnectivityError),

    #[error("Failed to resolve the dependencies of \"{artifact}\": {source}")]
    ResolutionFailed {
        artifact: String,
        #[source]
        source: ConnectivityError,
    },

    #[error("Dependency resolution was interrupted")]
    Cancelled,

    #[error("Failed to write to file: {path} ({details})")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration and request values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable() -> ConnectivityError {
        ConnectivityError::Unreachable {
            server: "pdc.example.org".to_string(),
            details: "connection refused".to_string(),
        }
    }

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ArtifactNotFound.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ConnectivityFailure.as_i32(), 3);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 4);
        assert_eq!(ExitCode::Interrupted.as_i32(), 130);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ArtifactNotFound),
            "Artifact Not Found (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ConnectivityFailure),
            "Connectivity Failure (3)"
        );
    }

    #[test]
    fn test_exit_code_for_not_found() {
        let error: anyhow::Error = TangleError::ArtifactNotFound {
            artifact: "python".to_string(),
        }
        .into();
        assert_eq!(ExitCode::for_error(&error), ExitCode::ArtifactNotFound);
    }

    #[test]
    fn test_exit_code_for_connectivity_failures() {
        let during_check: anyhow::Error = TangleError::Connectivity(unreachable()).into();
        assert_eq!(
            ExitCode::for_error(&during_check),
            ExitCode::ConnectivityFailure
        );

        let during_resolution: anyhow::Error = TangleError::ResolutionFailed {
            artifact: "python".to_string(),
            source: unreachable(),
        }
        .into();
        assert_eq!(
            ExitCode::for_error(&during_resolution),
            ExitCode::ConnectivityFailure
        );

        let bare: anyhow::Error = unreachable().into();
        assert_eq!(ExitCode::for_error(&bare), ExitCode::ConnectivityFailure);
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        let error = anyhow::anyhow!("something else");
        assert_eq!(ExitCode::for_error(&error), ExitCode::ApplicationError);

        let cancelled: anyhow::Error = TangleError::Cancelled.into();
        assert_eq!(ExitCode::for_error(&cancelled), ExitCode::Interrupted);
    }

    #[test]
    fn test_not_found_display() {
        let error = TangleError::ArtifactNotFound {
            artifact: "python".to_string(),
        };
        assert_eq!(format!("{}", error), "\"python\" is not in PDC");
    }

    #[test]
    fn test_connectivity_display_names_server() {
        let display = format!("{}", TangleError::Connectivity(unreachable()));
        assert!(display.contains("pdc.example.org"));
        assert!(display.contains("could not be contacted"));
        assert!(!display.contains('\n'));
    }

    #[test]
    fn test_resolution_failed_display_is_single_line() {
        let error = TangleError::ResolutionFailed {
            artifact: "python".to_string(),
            source: unreachable(),
        };
        let display = format!("{}", error);
        assert!(display.contains("\"python\""));
        assert!(display.contains("pdc.example.org"));
        assert!(!display.contains('\n'));
    }

    #[test]
    fn test_connectivity_error_server() {
        assert_eq!(unreachable().server(), "pdc.example.org");

        let bad = ConnectivityError::UnexpectedResponse {
            server: "other.example.org".to_string(),
            details: "HTTP 500".to_string(),
        };
        assert_eq!(bad.server(), "other.example.org");
    }

    #[test]
    fn test_file_write_error_display() {
        let error = TangleError::FileWriteError {
            path: PathBuf::from("/test/tree.txt"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/tree.txt"));
        assert!(display.contains("Permission denied"));
    }
}
