//! Structured error types for the Vanguard Protocol runtime.

use thiserror::Error;

/// Main error type for the audit service.
///
/// The scoring core itself is total over its inputs; these variants cover
/// the collaborators around it (ledger, serialization, configuration) and
/// the request boundary.
#[derive(Error, Debug)]
pub enum VanguardError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Ledger operation failed: {operation} - {message}")]
    Ledger { operation: String, message: String },

    #[error("Serialization failed: {context}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O operation failed: {operation}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Resource not found: {resource} - {id}")]
    NotFound { resource: String, id: String },

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Mutex lock failed: {resource}")]
    LockPoisoned { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Shorthand for Result with VanguardError.
pub type VanguardResult<T> = Result<T, VanguardError>;

impl VanguardError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn ledger(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Ledger {
            operation: operation.into(),
            message: message.into(),
        }
    }

    pub fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }

    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }

    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn lock_poisoned(resource: impl Into<String>) -> Self {
        Self::LockPoisoned {
            resource: resource.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
