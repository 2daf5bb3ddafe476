//! Proxy model definitions
//!
//! Contains the core data structures for parsed VLESS Reality endpoints.

/// Transport carried inside the encrypted tunnel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Network {
    Tcp,
    Ws,
    Grpc,
    /// Any other `type` query value is carried through verbatim.
    Other(String),
}

impl Network {
    pub fn from_query(value: &str) -> Self {
        match value {
            "tcp" => Network::Tcp,
            "ws" => Network::Ws,
            "grpc" => Network::Grpc,
            other => Network::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Network::Tcp => "tcp",
            Network::Ws => "ws",
            Network::Grpc => "grpc",
            Network::Other(value) => value,
        }
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::Tcp
    }
}

/// Reality key material taken from the link query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RealityOptions {
    pub public_key: String,
    pub short_id: String,
}

/// gRPC transport settings, present only for `grpc` networks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrpcOptions {
    pub service_name: String,
}

/// WebSocket transport settings, present only for `ws` networks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WsOptions {
    pub path: String,
    /// Value of the `Host` header sent during the upgrade.
    pub host_header: String,
}

/// Represents one accepted Reality endpoint.
///
/// The name stays mutable after parsing: the subscription loop suffixes
/// it until it is unique within the run's collection.
#[derive(Debug, Clone)]
pub struct VlessProxy {
    pub name: String,
    pub server: String,
    pub port: u16,
    pub uuid: String,
    pub udp: bool,
    pub tls: bool,
    pub network: Network,
    pub server_name: String,
    pub client_fingerprint: String,
    pub reality_opts: RealityOptions,
    pub grpc_opts: Option<GrpcOptions>,
    pub ws_opts: Option<WsOptions>,
    pub flow: Option<String>,
}
