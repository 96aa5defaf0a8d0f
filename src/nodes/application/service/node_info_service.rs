use crate::core::domain::error::SlurmResult;
use crate::core::domain::model::ControllerEndpoint;
use crate::core::infrastructure::transport::{Connection, Connector};
use crate::nodes::application::{
    request::node_info_request::NodeInfoRequest, response::node_info_response::NodeInfoReply,
};
use tracing::{debug, warn};

/// Executes one node-inventory query against the controller.
///
/// Each call is a single blocking round trip on its own connection:
/// open, send `REQUEST_NODE_INFO`, wait for the response, close, classify.
/// The service holds no state between calls, so concurrent queries are
/// independent.
pub struct NodeInfoService;

impl NodeInfoService {
    pub fn new() -> Self {
        Self
    }

    /// Loads the node inventory as of `last_update`.
    ///
    /// `last_update` is passed through to the controller unchanged; `0`
    /// means "no prior data". The controller may answer with a bare
    /// return code instead of a snapshot, see [`NodeInfoReply`].
    ///
    /// A successfully opened connection is closed exactly once on every
    /// path. A close failure never overrides the primary outcome: after a
    /// successful receive it is logged at `warn`, after a send/receive
    /// failure at `debug`.
    ///
    /// # Errors
    ///
    /// * `SlurmError::Connection` if the controller cannot be reached;
    ///   nothing is sent in that case.
    /// * `SlurmError::Transport` if the send or receive fails.
    /// * `SlurmError::UnexpectedMessage` if the response tag is unknown.
    /// * `SlurmError::Protocol` if a known response payload is malformed.
    pub async fn execute(
        &self,
        connector: &dyn Connector,
        endpoint: &ControllerEndpoint,
        last_update: i64,
    ) -> SlurmResult<NodeInfoReply> {
        let mut conn = connector.open(endpoint).await?;

        let request = NodeInfoRequest::new(last_update).into_message()?;
        if let Err(err) = conn.send(&request).await {
            Self::close_after_failure(conn.as_mut()).await;
            return Err(err);
        }

        let response = match conn.receive().await {
            Ok(msg) => msg,
            Err(err) => {
                Self::close_after_failure(conn.as_mut()).await;
                return Err(err);
            }
        };

        // The round trip is complete; the reply is classified after the
        // connection is released.
        if let Err(close_err) = conn.close().await {
            warn!(error = %close_err, "failed to shut down controller connection");
        }

        debug!(msg_type = response.msg_type, "received controller response");
        NodeInfoReply::from_message(&response)
    }

    /// Best-effort close after a transport failure. The primary error has
    /// already been decided, so a secondary close error is only logged.
    async fn close_after_failure(conn: &mut dyn Connection) {
        if let Err(close_err) = conn.close().await {
            debug!(error = %close_err, "close after transport failure also failed");
        }
    }
}

impl Default for NodeInfoService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::error::SlurmError;
    use crate::core::domain::model::{NodeInventory, NodeRecord};
    use crate::core::domain::value_object::{SlurmHost, SlurmPort};
    use crate::core::infrastructure::protocol::{
        REQUEST_NODE_INFO, RESPONSE_NODE_INFO, RESPONSE_SLURM_RC, WireMessage,
    };
    use crate::core::infrastructure::transport::{MockConnection, MockConnector};
    use crate::nodes::application::response::node_info_response::ReturnCodeMsg;

    fn test_endpoint() -> ControllerEndpoint {
        ControllerEndpoint::new(
            SlurmHost::new_unchecked("slurmctl.example.com".to_string()),
            SlurmPort::new_unchecked(6817),
        )
    }

    fn record(name: &str) -> NodeRecord {
        NodeRecord {
            name: name.to_string(),
            cpus: 4,
            real_memory: 8192,
            tmp_disk: 0,
            node_state: 1,
            weight: 1,
            features: String::new(),
            partition: "debug".to_string(),
        }
    }

    fn connector_yielding(conn: MockConnection) -> MockConnector {
        let mut connector = MockConnector::new();
        connector
            .expect_open()
            .times(1)
            .return_once(move |_| Ok(Box::new(conn) as Box<dyn Connection>));
        connector
    }

    #[tokio::test]
    async fn test_round_trip_returns_snapshot_in_order() {
        let inventory = NodeInventory {
            last_update: 1234,
            records: vec![record("node01"), record("node02"), record("node03")],
        };
        let response = WireMessage::new(RESPONSE_NODE_INFO, &inventory).unwrap();

        let mut conn = MockConnection::new();
        conn.expect_send()
            .times(1)
            .withf(|msg| {
                msg.msg_type == REQUEST_NODE_INFO
                    && msg.payload["last_update"] == serde_json::json!(0)
            })
            .returning(|_| Ok(()));
        conn.expect_receive()
            .times(1)
            .returning(move || Ok(response.clone()));
        conn.expect_close().times(1).returning(|| Ok(()));

        let connector = connector_yielding(conn);
        let reply = NodeInfoService::new()
            .execute(&connector, &test_endpoint(), 0)
            .await
            .unwrap();

        let snapshot = reply.inventory().unwrap();
        assert_eq!(snapshot.last_update, 1234);
        assert_eq!(snapshot.record_count(), 3);
        let names: Vec<&str> = snapshot.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["node01", "node02", "node03"]);
    }

    #[tokio::test]
    async fn test_status_code_passes_through_exactly() {
        let response =
            WireMessage::new(RESPONSE_SLURM_RC, &ReturnCodeMsg { return_code: -7 }).unwrap();

        let mut conn = MockConnection::new();
        conn.expect_send().times(1).returning(|_| Ok(()));
        conn.expect_receive()
            .times(1)
            .returning(move || Ok(response.clone()));
        conn.expect_close().times(1).returning(|| Ok(()));

        let connector = connector_yielding(conn);
        let reply = NodeInfoService::new()
            .execute(&connector, &test_endpoint(), 1700000000)
            .await
            .unwrap();

        assert_eq!(reply.status(), Some(-7));
    }

    #[tokio::test]
    async fn test_unexpected_message_type_fails_after_close() {
        let response = WireMessage {
            msg_type: 9999,
            payload: serde_json::Value::Null,
        };

        let mut conn = MockConnection::new();
        conn.expect_send().times(1).returning(|_| Ok(()));
        conn.expect_receive()
            .times(1)
            .returning(move || Ok(response.clone()));
        conn.expect_close().times(1).returning(|| Ok(()));

        let connector = connector_yielding(conn);
        let result = NodeInfoService::new()
            .execute(&connector, &test_endpoint(), 0)
            .await;

        assert!(matches!(
            result,
            Err(SlurmError::UnexpectedMessage { msg_type: 9999 })
        ));
    }

    #[tokio::test]
    async fn test_connection_failure_short_circuits() {
        let mut connector = MockConnector::new();
        connector
            .expect_open()
            .times(1)
            .return_once(|_| Err(SlurmError::Connection("connection refused".to_string())));

        let result = NodeInfoService::new()
            .execute(&connector, &test_endpoint(), 0)
            .await;

        // No connection was handed out, so no send/receive/close happened.
        assert!(matches!(result, Err(SlurmError::Connection(_))));
    }

    #[tokio::test]
    async fn test_send_failure_still_closes_exactly_once() {
        let mut conn = MockConnection::new();
        conn.expect_send()
            .times(1)
            .returning(|_| Err(SlurmError::Transport("broken pipe".to_string())));
        conn.expect_receive().times(0);
        conn.expect_close().times(1).returning(|| Ok(()));

        let connector = connector_yielding(conn);
        let result = NodeInfoService::new()
            .execute(&connector, &test_endpoint(), 0)
            .await;

        assert!(matches!(result, Err(SlurmError::Transport(_))));
    }

    #[tokio::test]
    async fn test_receive_failure_still_closes_exactly_once() {
        let mut conn = MockConnection::new();
        conn.expect_send().times(1).returning(|_| Ok(()));
        conn.expect_receive()
            .times(1)
            .returning(|| Err(SlurmError::Transport("connection reset".to_string())));
        conn.expect_close().times(1).returning(|| Ok(()));

        let connector = connector_yielding(conn);
        let result = NodeInfoService::new()
            .execute(&connector, &test_endpoint(), 0)
            .await;

        assert!(matches!(result, Err(SlurmError::Transport(_))));
    }

    #[tokio::test]
    async fn test_primary_error_wins_over_close_error() {
        let mut conn = MockConnection::new();
        conn.expect_send().times(1).returning(|_| Ok(()));
        conn.expect_receive()
            .times(1)
            .returning(|| Err(SlurmError::Transport("connection reset".to_string())));
        conn.expect_close()
            .times(1)
            .returning(|| Err(SlurmError::Transport("already gone".to_string())));

        let connector = connector_yielding(conn);
        let err = NodeInfoService::new()
            .execute(&connector, &test_endpoint(), 0)
            .await
            .unwrap_err();

        assert!(matches!(err, SlurmError::Transport(msg) if msg.contains("connection reset")));
    }

    #[tokio::test]
    async fn test_close_error_after_success_does_not_overturn_result() {
        let response =
            WireMessage::new(RESPONSE_SLURM_RC, &ReturnCodeMsg { return_code: 0 }).unwrap();

        let mut conn = MockConnection::new();
        conn.expect_send().times(1).returning(|_| Ok(()));
        conn.expect_receive()
            .times(1)
            .returning(move || Ok(response.clone()));
        conn.expect_close()
            .times(1)
            .returning(|| Err(SlurmError::Transport("lingering close".to_string())));

        let connector = connector_yielding(conn);
        let reply = NodeInfoService::new()
            .execute(&connector, &test_endpoint(), 0)
            .await
            .unwrap();

        assert_eq!(reply.status(), Some(0));
    }
}
