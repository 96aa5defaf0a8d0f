use crate::core::domain::value_object::{SlurmHost, SlurmPort};

/// The controller's well-known network endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerEndpoint {
    host: SlurmHost,
    port: SlurmPort,
}

impl ControllerEndpoint {
    pub fn new(host: SlurmHost, port: SlurmPort) -> Self {
        Self { host, port }
    }

    pub fn host(&self) -> &SlurmHost {
        &self.host
    }

    pub fn port(&self) -> SlurmPort {
        self.port
    }

    /// Returns the `host:port` address string used to dial the controller.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host.as_str(), self.port.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_joins_host_and_port() {
        let endpoint = ControllerEndpoint::new(
            SlurmHost::new_unchecked("slurmctl.example.com".to_string()),
            SlurmPort::new_unchecked(6817),
        );
        assert_eq!(endpoint.address(), "slurmctl.example.com:6817");
    }
}
