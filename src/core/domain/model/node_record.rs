//! Domain model for a single compute node as reported by the controller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One compute node's attributes as known to the controller.
///
/// The state code is opaque to this crate: it is whatever bitfield the
/// controller tracks (up/down/drained and friends) and is passed through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NodeRecord {
    /// The node name (e.g., "node01"). Unique within a snapshot.
    pub name: String,
    /// Number of processors on the node.
    pub cpus: u32,
    /// Real memory size, in megabytes.
    pub real_memory: u64,
    /// Temporary disk space, in megabytes.
    pub tmp_disk: u64,
    /// Controller-defined state code. Opaque pass-through.
    pub node_state: u16,
    /// Scheduling weight; preference order is a site convention.
    pub weight: u32,
    /// Comma-separated capability labels. May be empty.
    #[serde(default)]
    pub features: String,
    /// Name of the partition the node belongs to.
    #[serde(default)]
    pub partition: String,
}

impl fmt::Display for NodeRecord {
    /// Renders the record on a single line with a fixed field order.
    ///
    /// Every field is always present; unset strings render as empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NodeName={} CPUs={} RealMemory={} TmpDisk={} State={} Weight={} Features={} Partition={}",
            self.name,
            self.cpus,
            self.real_memory,
            self.tmp_disk,
            self.node_state,
            self.weight,
            self.features,
            self.partition,
        )
    }
}
