//! Wire-level message envelope and type tags for the controller protocol.
//!
//! Every exchange with the controller is a typed envelope: a `u16` tag
//! identifying what kind of payload the message carries, and the payload
//! itself as JSON. The tag stays a raw integer rather than an enum so that
//! a response with a tag this client does not know about can still be
//! received intact and reported in diagnostics.

use crate::core::domain::error::{SlurmError, SlurmResult};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Request the controller's node inventory.
pub const REQUEST_NODE_INFO: u16 = 2007;
/// Response carrying a full node inventory snapshot.
pub const RESPONSE_NODE_INFO: u16 = 2008;
/// Generic response carrying only a return code.
pub const RESPONSE_SLURM_RC: u16 = 8001;

/// A typed message as it travels on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WireMessage {
    /// Discriminator identifying what kind of payload this message carries.
    pub msg_type: u16,
    /// The payload, encoded as JSON.
    pub payload: serde_json::Value,
}

impl WireMessage {
    /// Builds a message from a tag and a serializable payload.
    ///
    /// # Errors
    /// Returns `SlurmError::Protocol` if the payload cannot be encoded.
    pub fn new<P: Serialize>(msg_type: u16, payload: &P) -> SlurmResult<Self> {
        let payload = serde_json::to_value(payload)
            .map_err(|e| SlurmError::Protocol(format!("Failed to encode payload: {}", e)))?;
        Ok(Self { msg_type, payload })
    }

    /// Decodes the payload into a concrete message body.
    ///
    /// # Errors
    /// Returns `SlurmError::Protocol` if the payload does not match `P`.
    pub fn decode_payload<P: DeserializeOwned>(&self) -> SlurmResult<P> {
        serde_json::from_value(self.payload.clone()).map_err(|e| {
            SlurmError::Protocol(format!(
                "Failed to decode payload of message type {}: {}",
                self.msg_type, e
            ))
        })
    }
}
