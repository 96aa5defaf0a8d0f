//! Domain model for one node-inventory snapshot.

use crate::core::domain::model::node_record::NodeRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The node inventory as of a specific point in time.
///
/// Records are kept in the order the controller sent them; no sorting is
/// applied. The snapshot is immutable after construction and exclusively
/// owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NodeInventory {
    /// Unix time (seconds) the controller's data reflects.
    pub last_update: i64,
    /// One entry per node, in controller order.
    pub records: Vec<NodeRecord>,
}

impl NodeInventory {
    /// Returns the number of node records in the snapshot.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

impl fmt::Display for NodeInventory {
    /// Renders a header line followed by one line per record.
    ///
    /// An empty snapshot renders as exactly the header line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Nodes updated at {}, record count {}",
            self.last_update,
            self.records.len()
        )?;
        for record in &self.records {
            write!(f, "\n{}", record)?;
        }
        Ok(())
    }
}
