mod core;
mod nodes;

pub use crate::core::domain::error::{SlurmError, SlurmResult, ValidationError};
pub use crate::core::domain::model::{ControllerEndpoint, NodeInventory, NodeRecord};
pub use crate::core::domain::value_object::{DEFAULT_CONTROLLER_PORT, SlurmHost, SlurmPort};
pub use crate::core::infrastructure::protocol::{
    REQUEST_NODE_INFO, RESPONSE_NODE_INFO, RESPONSE_SLURM_RC, WireMessage,
};
pub use crate::core::infrastructure::transport::{Connection, Connector, TcpConnector};
pub use crate::nodes::application::response::node_info_response::{NodeInfoReply, ReturnCodeMsg};

use crate::nodes::application::service::node_info_service::NodeInfoService;
use std::sync::Arc;

/// A client for querying a Slurm controller's node inventory.
///
/// Each query is one connect/send/receive/shutdown round trip on its own
/// connection; the client keeps no state between calls. Callers that want
/// incremental refresh hold on to the snapshot's `last_update` themselves
/// and thread it into the next call.
///
/// # Examples
///
/// ```no_run
/// use slurm_client::{NodeInfoReply, SlurmClient, SlurmResult};
///
/// #[tokio::main]
/// async fn main() -> SlurmResult<()> {
///     let client = SlurmClient::builder()
///         .host("slurmctl.example.com")?
///         .port(6817)?
///         .build()?;
///
///     match client.load_node_info(0).await? {
///         NodeInfoReply::Inventory(snapshot) => println!("{}", snapshot),
///         NodeInfoReply::Status(code) => println!("controller returned code {}", code),
///     }
///     Ok(())
/// }
/// ```
pub struct SlurmClient {
    endpoint: ControllerEndpoint,
    connector: Arc<dyn Connector>,
    service: NodeInfoService,
}

/// Builder for SlurmClient configuration
#[derive(Default)]
pub struct SlurmClientBuilder {
    host: Option<String>,
    port: Option<u16>,
    connector: Option<Arc<dyn Connector>>,
}

impl SlurmClientBuilder {
    pub fn host(mut self, host: impl Into<String>) -> SlurmResult<Self> {
        self.host = Some(host.into());
        Ok(self)
    }

    pub fn port(mut self, port: u16) -> SlurmResult<Self> {
        self.port = Some(port);
        Ok(self)
    }

    /// Replaces the TCP transport with a custom [`Connector`].
    pub fn connector(mut self, connector: Arc<dyn Connector>) -> Self {
        self.connector = Some(connector);
        self
    }

    /// Validates the configuration and builds the client.
    ///
    /// The port defaults to [`DEFAULT_CONTROLLER_PORT`] when unset.
    ///
    /// # Errors
    /// Returns `SlurmError::Validation` if the host is missing or invalid,
    /// or the port is invalid.
    pub fn build(self) -> SlurmResult<SlurmClient> {
        let host = SlurmHost::new(self.host.ok_or_else(|| SlurmError::Validation {
            source: ValidationError::Field {
                field: "host".to_string(),
                message: "Host is required".to_string(),
            },
        })?)?;

        let port = SlurmPort::new(self.port.unwrap_or(DEFAULT_CONTROLLER_PORT))?;

        Ok(SlurmClient {
            endpoint: ControllerEndpoint::new(host, port),
            connector: self
                .connector
                .unwrap_or_else(|| Arc::new(TcpConnector::new())),
            service: NodeInfoService::new(),
        })
    }
}

impl SlurmClient {
    /// Creates a new builder for SlurmClient configuration
    pub fn builder() -> SlurmClientBuilder {
        SlurmClientBuilder::default()
    }

    /// Returns the controller endpoint this client talks to.
    pub fn endpoint(&self) -> &ControllerEndpoint {
        &self.endpoint
    }

    /// Queries the controller for its node inventory.
    ///
    /// `last_update` is the caller's last-known update time (Unix
    /// seconds); pass `0` for "no prior data". The controller answers
    /// either with a full snapshot or with a bare status code, both of
    /// which are successful completions.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The controller cannot be reached (`SlurmError::Connection`)
    /// - The send or receive fails (`SlurmError::Transport`)
    /// - The response carries an unknown message type
    ///   (`SlurmError::UnexpectedMessage`)
    /// - A known response payload cannot be decoded (`SlurmError::Protocol`)
    pub async fn load_node_info(&self, last_update: i64) -> SlurmResult<NodeInfoReply> {
        self.service
            .execute(self.connector.as_ref(), &self.endpoint, last_update)
            .await
    }
}
