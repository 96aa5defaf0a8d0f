pub mod node_info_service;
