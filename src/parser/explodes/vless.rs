use std::collections::HashMap;

use log::warn;
use url::Url;

use crate::models::{GrpcOptions, Network, RealityOptions, VlessProxy, WsOptions};
use crate::utils::url::url_decode;

/// Parse a VLESS link into a proxy record.
///
/// Only Reality endpoints are accepted: the query must carry
/// `security=reality` or a `pbk` public key. Anything else returns None
/// without a report, same as a foreign scheme. A malformed URI is
/// reported and skipped; it never aborts the surrounding run.
pub fn explode_vless(vless: &str) -> Option<VlessProxy> {
    // Check if the link starts with vless://
    if !vless.starts_with("vless://") {
        return None;
    }

    // Try to parse as URL
    let url = match Url::parse(vless) {
        Ok(url) => url,
        Err(e) => {
            warn!("Error parsing link: {}", e);
            return None;
        }
    };
    if url.scheme() != "vless" {
        return None;
    }

    // Extract uuid
    let uuid = url.username();
    if uuid.is_empty() {
        return None;
    }

    // Extract host and port
    let host = match url.host_str() {
        Some(host) => host,
        None => {
            warn!("Error parsing link: missing host");
            return None;
        }
    };
    let port = match url.port() {
        Some(port) if port != 0 => port,
        _ => {
            warn!("Error parsing link: missing or zero port");
            return None;
        }
    };

    // Extract parameters from the query string; first occurrence wins
    let mut params: HashMap<String, String> = HashMap::new();
    for (key, value) in url.query_pairs() {
        params
            .entry(key.to_string())
            .or_insert_with(|| value.to_string());
    }

    // Check for Reality (security=reality or presence of pbk)
    let is_reality = params.get("security").map(String::as_str) == Some("reality")
        || params.contains_key("pbk");
    if !is_reality {
        return None;
    }

    // Remark from the fragment, falling back to the hostname
    let remark = url.fragment().map(url_decode).unwrap_or_default();
    let name = if remark.is_empty() {
        host.to_string()
    } else {
        remark
    };

    let network = params
        .get("type")
        .map(|s| Network::from_query(s))
        .unwrap_or_default();

    let grpc_opts = if network == Network::Grpc {
        Some(GrpcOptions {
            service_name: params.get("serviceName").cloned().unwrap_or_default(),
        })
    } else {
        None
    };

    let ws_opts = if network == Network::Ws {
        Some(WsOptions {
            path: params
                .get("path")
                .cloned()
                .unwrap_or_else(|| "/".to_string()),
            host_header: params
                .get("host")
                .cloned()
                .unwrap_or_else(|| host.to_string()),
        })
    } else {
        None
    };

    Some(VlessProxy {
        name,
        server: host.to_string(),
        port,
        uuid: uuid.to_string(),
        udp: true,
        tls: true,
        network,
        server_name: params.get("sni").cloned().unwrap_or_default(),
        client_fingerprint: params
            .get("fp")
            .cloned()
            .unwrap_or_else(|| "chrome".to_string()),
        reality_opts: RealityOptions {
            public_key: params.get("pbk").cloned().unwrap_or_default(),
            short_id: params.get("sid").cloned().unwrap_or_default(),
        },
        grpc_opts,
        ws_opts,
        flow: params.get("flow").cloned(),
    })
}
