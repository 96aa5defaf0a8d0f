use thiserror::Error;

/// The main error type for Slurm controller operations.
///
/// This enum represents all possible errors that can occur while talking
/// to the controller: connection establishment, transport failures on an
/// already-open connection, protocol-level surprises, and client-side
/// validation failures.
#[derive(Error, Debug)]
pub enum SlurmError {
    /// Could not establish a connection to the controller.
    ///
    /// Not retried by the client; surfaced immediately to the caller.
    #[error("Connection error: {0}")]
    Connection(String),

    /// A send or receive failed on an already-open connection.
    ///
    /// The connection's post-error usability is undefined; callers must
    /// not reuse it.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The controller answered with a message type this operation does
    /// not understand.
    ///
    /// # Fields
    /// * `msg_type` - The offending type tag, kept for diagnostics
    #[error("Unexpected message type from controller: {msg_type}")]
    UnexpectedMessage { msg_type: u16 },

    /// A response carried a known message type but its payload could not
    /// be decoded.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Represents validation failures with detailed context.
    #[error("Validation error: {source}")]
    Validation {
        #[from]
        source: ValidationError,
    },
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    ///
    /// # Fields
    /// * `0` - Description of the format violation
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    ///
    /// # Fields
    /// * `0` - Description of the constraint violation
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a SlurmError
pub type SlurmResult<T> = Result<T, SlurmError>;
