use crate::core::domain::error::{SlurmResult, ValidationError};

/// Well-known port the controller listens on.
pub const DEFAULT_CONTROLLER_PORT: u16 = 6817;

/// A validated controller port number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlurmPort(u16);

impl SlurmPort {
    /// Creates a new port after validating it.
    ///
    /// # Errors
    /// Returns `SlurmError::Validation` if the port is 0.
    pub fn new(port: u16) -> SlurmResult<Self> {
        validate_port(port)?;
        Ok(Self(port))
    }

    /// Creates a new port without validation.
    #[allow(unused)]
    pub(crate) fn new_unchecked(port: u16) -> Self {
        Self(port)
    }

    /// Returns the port number.
    pub fn get(&self) -> u16 {
        self.0
    }
}

/// Validates a port number.
pub(crate) fn validate_port(port: u16) -> Result<(), ValidationError> {
    if port == 0 {
        return Err(ValidationError::Field {
            field: "port".to_string(),
            message: "Port cannot be 0".to_string(),
        });
    }
    // All ports 1-65535 are valid.
    Ok(())
}
