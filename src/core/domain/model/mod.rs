mod controller_endpoint;
mod node_inventory;
mod node_record;

pub use controller_endpoint::ControllerEndpoint;
pub use node_inventory::NodeInventory;
pub use node_record::NodeRecord;
