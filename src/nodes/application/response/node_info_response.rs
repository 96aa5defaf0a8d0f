use crate::core::domain::error::{SlurmError, SlurmResult};
use crate::core::domain::model::NodeInventory;
use crate::core::infrastructure::protocol::{RESPONSE_NODE_INFO, RESPONSE_SLURM_RC, WireMessage};
use serde::{Deserialize, Serialize};

/// Payload of a `RESPONSE_SLURM_RC` message: a bare return code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnCodeMsg {
    pub return_code: i32,
}

/// The two well-formed outcomes of a node-inventory query.
///
/// The controller either answers with a full snapshot or with a bare
/// status code (for example when nothing changed since the requested
/// timestamp). Both are successful completions of the round trip; the
/// status value is surfaced here instead of being folded into a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeInfoReply {
    /// A complete inventory snapshot.
    Inventory(NodeInventory),
    /// No inventory; the controller's return code instead.
    Status(i32),
}

impl NodeInfoReply {
    /// Classifies a response envelope by its type tag.
    ///
    /// # Errors
    /// * `SlurmError::UnexpectedMessage` for a tag this operation does not
    ///   understand, carrying the observed tag.
    /// * `SlurmError::Protocol` if a known tag arrives with an
    ///   undecodable payload.
    pub fn from_message(msg: &WireMessage) -> SlurmResult<Self> {
        match msg.msg_type {
            RESPONSE_NODE_INFO => {
                let inventory: NodeInventory = msg.decode_payload()?;
                Ok(NodeInfoReply::Inventory(inventory))
            }
            RESPONSE_SLURM_RC => {
                let rc: ReturnCodeMsg = msg.decode_payload()?;
                Ok(NodeInfoReply::Status(rc.return_code))
            }
            other => Err(SlurmError::UnexpectedMessage { msg_type: other }),
        }
    }

    /// Returns the snapshot, if this reply carries one.
    pub fn inventory(&self) -> Option<&NodeInventory> {
        match self {
            NodeInfoReply::Inventory(inventory) => Some(inventory),
            NodeInfoReply::Status(_) => None,
        }
    }

    /// Returns the status code, if this reply carries one.
    pub fn status(&self) -> Option<i32> {
        match self {
            NodeInfoReply::Inventory(_) => None,
            NodeInfoReply::Status(code) => Some(*code),
        }
    }
}
