//! Error types for payroll.
//!
//! Errors the menu loop reports on screen (see [`Error::is_recoverable`]) carry
//! the Portuguese messages shown to the user. Infrastructure failures (I/O,
//! configuration, end of input) carry English diagnostics meant for logs and
//! the process exit path.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for payroll operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Roster Errors ===
    /// An employee with this registration number is already on the roster.
    #[error(
        "Não foi possível realizar o cadastro.\nFuncionário com a matrícula {registration} já está cadastrado."
    )]
    DuplicateRegistration {
        /// The conflicting registration number.
        registration: i64,
    },

    /// No employee carries this registration number.
    #[error("Mátricula {registration} não encontrada.")]
    RegistrationNotFound {
        /// The registration number that was looked up.
        registration: i64,
    },

    /// The roster holds no employees.
    #[error("Nenhum funcionário cadastrado.")]
    EmptyRoster,

    /// A salary must be strictly positive when a record is created.
    #[error("Salário deve ser maior que 0.")]
    NonPositiveSalary {
        /// The rejected salary.
        salary: f64,
    },

    // === Input Errors ===
    /// Standard input reached end of stream.
    #[error("input stream closed")]
    InputClosed,

    /// The user exhausted the configured number of attempts for a prompt.
    /// Shown on the menu screen like the roster errors.
    #[error("Número máximo de tentativas ({attempts}) atingido em \"{}\".", .prompt.trim_end_matches([':', ' ']))]
    TooManyAttempts {
        /// The prompt text.
        prompt: String,
        /// Number of attempts made.
        attempts: u32,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// The configuration file does not exist.
    #[error("configuration file not found: {path}")]
    ConfigMissing {
        /// Path that was checked.
        path: PathBuf,
    },

    // === I/O Errors ===
    /// Console read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for payroll operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a registration-not-found error.
    #[must_use]
    pub fn not_found(registration: i64) -> Self {
        Self::RegistrationNotFound { registration }
    }

    /// Check if the menu loop can report this error and carry on.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::DuplicateRegistration { .. }
                | Self::RegistrationNotFound { .. }
                | Self::EmptyRoster
                | Self::NonPositiveSalary { .. }
                | Self::TooManyAttempts { .. }
        )
    }

    /// Check if this error means the input stream has ended.
    #[must_use]
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_registration_display() {
        let err = Error::DuplicateRegistration { registration: 2 };
        assert_eq!(
            err.to_string(),
            "Não foi possível realizar o cadastro.\nFuncionário com a matrícula 2 já está cadastrado."
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::not_found(42);
        assert_eq!(err.to_string(), "Mátricula 42 não encontrada.");
    }

    #[test]
    fn test_empty_roster_display() {
        assert_eq!(
            Error::EmptyRoster.to_string(),
            "Nenhum funcionário cadastrado."
        );
    }

    #[test]
    fn test_business_errors_are_recoverable() {
        assert!(Error::EmptyRoster.is_recoverable());
        assert!(Error::not_found(1).is_recoverable());
        assert!(Error::DuplicateRegistration { registration: 1 }.is_recoverable());
        assert!(Error::NonPositiveSalary { salary: 0.0 }.is_recoverable());
        assert!(Error::TooManyAttempts {
            prompt: "Salário: ".to_string(),
            attempts: 3,
        }
        .is_recoverable());
    }

    #[test]
    fn test_infrastructure_errors_are_not_recoverable() {
        assert!(!Error::InputClosed.is_recoverable());
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        assert!(!Error::from(io_err).is_recoverable());
        assert!(!Error::ConfigValidation {
            message: "bad".to_string()
        }
        .is_recoverable());
    }

    #[test]
    fn test_is_input_closed() {
        assert!(Error::InputClosed.is_input_closed());
        assert!(!Error::EmptyRoster.is_input_closed());
    }

    #[test]
    fn test_too_many_attempts_display() {
        let err = Error::TooManyAttempts {
            prompt: "Matrícula: ".to_string(),
            attempts: 5,
        };
        assert_eq!(
            err.to_string(),
            "Número máximo de tentativas (5) atingido em \"Matrícula\"."
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "stdin gone");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("stdin gone"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_config_missing_display() {
        let err = Error::ConfigMissing {
            path: PathBuf::from("/tmp/payroll.toml"),
        };
        assert!(err.to_string().contains("/tmp/payroll.toml"));
    }
}
