use super::types::SectrackError;

/// Process exit status for successful commands and empty results.
pub const EXIT_OK: u8 = 0;
/// Exit status for validation and storage failures.
pub const EXIT_FAILURE: u8 = 1;
/// Exit status for usage and configuration errors.
pub const EXIT_USAGE: u8 = 2;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub exit_code: u8,
}

impl SectrackError {
    /// Classify this error to determine its type and the process exit code it maps to.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            // Fatal before or instead of running a command
            SectrackError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                exit_code: EXIT_USAGE,
            },
            SectrackError::Usage(_) => ErrorClassification {
                error_type: "UsageError",
                exit_code: EXIT_USAGE,
            },

            // User input rejected
            SectrackError::Validation(_) => ErrorClassification {
                error_type: "ValidationError",
                exit_code: EXIT_FAILURE,
            },
            SectrackError::Prompt(_) => ErrorClassification {
                error_type: "PromptError",
                exit_code: EXIT_FAILURE,
            },

            // Storage and output
            SectrackError::Constraint(_) => ErrorClassification {
                error_type: "ConstraintError",
                exit_code: EXIT_FAILURE,
            },
            SectrackError::Database(_) => ErrorClassification {
                error_type: "DatabaseError",
                exit_code: EXIT_FAILURE,
            },
            SectrackError::Export(_) => ErrorClassification {
                error_type: "ExportError",
                exit_code: EXIT_FAILURE,
            },
            SectrackError::Io(_) => ErrorClassification {
                error_type: "IoError",
                exit_code: EXIT_FAILURE,
            },
            SectrackError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                exit_code: EXIT_FAILURE,
            },
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.classify().exit_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_usage_exit() {
        let err = SectrackError::Config("missing [app] section".into());
        let class = err.classify();
        assert_eq!(class.exit_code, EXIT_USAGE);
        assert_eq!(class.error_type, "ConfigError");
    }

    #[test]
    fn test_usage_error_exit_two() {
        let err = SectrackError::Usage("Nothing to do. Use --csv or --xlsx.".into());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_validation_error_exit_one() {
        let err = SectrackError::Validation("Invalid severity".into());
        let class = err.classify();
        assert_eq!(class.exit_code, EXIT_FAILURE);
        assert_eq!(class.error_type, "ValidationError");
    }

    #[test]
    fn test_constraint_error_exit_one() {
        let err = SectrackError::Constraint("FOREIGN KEY constraint failed".into());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_validation_message_is_bare() {
        let err = SectrackError::Validation("Invalid host ID".into());
        assert_eq!(err.to_string(), "Invalid host ID");
    }

    #[test]
    fn test_io_error_exit_one() {
        let err = SectrackError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }
}
