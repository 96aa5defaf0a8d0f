pub mod node_info_request;
