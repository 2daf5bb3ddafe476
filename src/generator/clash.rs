//! Clash/Mihomo configuration output
//!
//! Serde types mirroring the YAML document Mihomo consumes, plus the
//! assembler that wraps accepted proxies in the fixed group and rule
//! scaffolding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::VlessProxy;

/// Health-check endpoint used by the url-test group.
pub const HEALTH_CHECK_URL: &str = "http://www.gstatic.com/generate_204";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to serialize configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Represents a complete Clash configuration output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClashConfig {
    pub port: u16,
    pub socks_port: u16,
    pub allow_lan: bool,
    pub mode: String,
    pub log_level: String,
    pub external_controller: String,
    pub proxies: Vec<ClashProxy>,
    pub proxy_groups: Vec<ClashProxyGroup>,
    pub rules: Vec<String>,
}

/// A single VLESS entry in the proxies list.
///
/// Field order is the document key order; Mihomo does not care, but the
/// output stays diffable against hand-written configs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClashProxy {
    pub name: String,
    #[serde(rename = "type")]
    pub proxy_type: String,
    pub server: String,
    pub port: u16,
    pub uuid: String,
    pub udp: bool,
    pub tls: bool,
    pub network: String,
    pub servername: String,
    pub client_fingerprint: String,
    pub reality_opts: RealityOpts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grpc_opts: Option<GrpcOpts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ws_opts: Option<WsOpts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RealityOpts {
    pub public_key: String,
    pub short_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GrpcOpts {
    pub grpc_service_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WsOpts {
    pub path: String,
    pub headers: WsHeaders,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WsHeaders {
    #[serde(rename = "Host")]
    pub host: String,
}

impl From<&VlessProxy> for ClashProxy {
    fn from(proxy: &VlessProxy) -> Self {
        ClashProxy {
            name: proxy.name.clone(),
            proxy_type: "vless".to_string(),
            server: proxy.server.clone(),
            port: proxy.port,
            uuid: proxy.uuid.clone(),
            udp: proxy.udp,
            tls: proxy.tls,
            network: proxy.network.as_str().to_string(),
            servername: proxy.server_name.clone(),
            client_fingerprint: proxy.client_fingerprint.clone(),
            reality_opts: RealityOpts {
                public_key: proxy.reality_opts.public_key.clone(),
                short_id: proxy.reality_opts.short_id.clone(),
            },
            grpc_opts: proxy.grpc_opts.as_ref().map(|grpc| GrpcOpts {
                grpc_service_name: grpc.service_name.clone(),
            }),
            ws_opts: proxy.ws_opts.as_ref().map(|ws| WsOpts {
                path: ws.path.clone(),
                headers: WsHeaders {
                    host: ws.host_header.clone(),
                },
            }),
            flow: proxy.flow.clone(),
        }
    }
}

/// A named selection strategy over proxies or other groups
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClashProxyGroup {
    #[serde(rename = "url-test")]
    UrlTest {
        name: String,
        url: String,
        interval: u32,
        tolerance: u32,
        proxies: Vec<String>,
    },
    #[serde(rename = "select")]
    Select { name: String, proxies: Vec<String> },
}

impl ClashProxyGroup {
    pub fn name(&self) -> &str {
        match self {
            ClashProxyGroup::UrlTest { name, .. } => name,
            ClashProxyGroup::Select { name, .. } => name,
        }
    }

    pub fn proxies(&self) -> &[String] {
        match self {
            ClashProxyGroup::UrlTest { proxies, .. } => proxies,
            ClashProxyGroup::Select { proxies, .. } => proxies,
        }
    }
}

/// Build the full configuration document around the accepted proxies.
///
/// Pure function of the record collection. An empty list still yields a
/// complete document; the groups then contain only their fixed members.
pub fn assemble(proxies: &[VlessProxy]) -> ClashConfig {
    let proxy_names: Vec<String> = proxies.iter().map(|p| p.name.clone()).collect();

    let mut reality_members = vec!["Auto-Select".to_string()];
    reality_members.extend(proxy_names.iter().cloned());

    ClashConfig {
        port: 7890,
        socks_port: 7891,
        allow_lan: true,
        mode: "rule".to_string(),
        log_level: "info".to_string(),
        external_controller: "127.0.0.1:9090".to_string(),
        proxies: proxies.iter().map(ClashProxy::from).collect(),
        proxy_groups: vec![
            ClashProxyGroup::UrlTest {
                name: "Auto-Select".to_string(),
                url: HEALTH_CHECK_URL.to_string(),
                interval: 300,
                tolerance: 50,
                proxies: proxy_names,
            },
            ClashProxyGroup::Select {
                name: "Reality-Only".to_string(),
                proxies: reality_members,
            },
            ClashProxyGroup::Select {
                name: "Final".to_string(),
                proxies: vec!["Reality-Only".to_string(), "DIRECT".to_string()],
            },
        ],
        rules: vec!["GEOIP,CN,DIRECT".to_string(), "MATCH,Final".to_string()],
    }
}

/// Serialize the document to YAML text.
///
/// serde_yaml keeps map keys in declaration order and emits non-ASCII
/// proxy names verbatim, so no post-processing is needed.
pub fn to_yaml(config: &ClashConfig) -> Result<String, GenerateError> {
    Ok(serde_yaml::to_string(config)?)
}
