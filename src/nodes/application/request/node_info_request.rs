use crate::core::domain::error::SlurmResult;
use crate::core::infrastructure::protocol::{REQUEST_NODE_INFO, WireMessage};
use serde::{Deserialize, Serialize};

/// Request payload asking for the node inventory.
///
/// `last_update` is the caller's last-known update time (Unix seconds);
/// `0` means "no prior data, return everything". The controller may use it
/// to skip work, but this client always receives the full record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfoRequest {
    pub last_update: i64,
}

impl NodeInfoRequest {
    pub fn new(last_update: i64) -> Self {
        Self { last_update }
    }

    /// Wraps the request in a `REQUEST_NODE_INFO` envelope.
    pub fn into_message(self) -> SlurmResult<WireMessage> {
        WireMessage::new(REQUEST_NODE_INFO, &self)
    }
}
