use std::fs;

use realitysub::generator::clash::{assemble, to_yaml, ClashConfig};
use realitysub::parser::subparser::parse_subscription;

const SAMPLE_LINK: &str =
    "vless://uuid@host.example:443?security=reality&pbk=ABC&sid=01&type=ws&path=%2Fws&host=cdn.example#MyNode";

#[test]
fn test_empty_collection_still_assembles() {
    let config = assemble(&[]);

    assert_eq!(config.port, 7890);
    assert_eq!(config.socks_port, 7891);
    assert!(config.allow_lan);
    assert_eq!(config.mode, "rule");
    assert_eq!(config.log_level, "info");
    assert_eq!(config.external_controller, "127.0.0.1:9090");

    assert!(config.proxies.is_empty());
    assert_eq!(config.proxy_groups.len(), 3);
    assert_eq!(config.proxy_groups[0].name(), "Auto-Select");
    assert!(config.proxy_groups[0].proxies().is_empty());
    assert_eq!(config.proxy_groups[1].proxies(), ["Auto-Select"]);
    assert_eq!(config.proxy_groups[2].proxies(), ["Reality-Only", "DIRECT"]);
    assert_eq!(config.rules, ["GEOIP,CN,DIRECT", "MATCH,Final"]);

    // An empty document still serializes
    to_yaml(&config).unwrap();
}

#[test]
fn test_single_node_group_membership() {
    let proxies = parse_subscription(SAMPLE_LINK);
    assert_eq!(proxies.len(), 1);

    let config = assemble(&proxies);
    assert_eq!(config.proxies[0].name, "MyNode");
    assert_eq!(config.proxies[0].network, "ws");
    assert_eq!(config.proxies[0].reality_opts.public_key, "ABC");
    assert_eq!(config.proxies[0].reality_opts.short_id, "01");
    let ws = config.proxies[0].ws_opts.as_ref().unwrap();
    assert_eq!(ws.path, "/ws");
    assert_eq!(ws.headers.host, "cdn.example");

    assert_eq!(config.proxy_groups[0].proxies(), ["MyNode"]);
    assert_eq!(config.proxy_groups[1].proxies(), ["Auto-Select", "MyNode"]);
    assert_eq!(config.proxy_groups[2].proxies(), ["Reality-Only", "DIRECT"]);
}

#[test]
fn test_yaml_key_order_is_preserved() {
    let proxies = parse_subscription(SAMPLE_LINK);
    let yaml = to_yaml(&assemble(&proxies)).unwrap();

    assert!(yaml.starts_with(
        "port: 7890\nsocks-port: 7891\nallow-lan: true\nmode: rule\nlog-level: info\n"
    ));
    assert!(yaml.contains("external-controller: 127.0.0.1:9090"));

    // Proxy keys come out in construction order, not alphabetized
    let name_pos = yaml.find("- name: MyNode").unwrap();
    let type_pos = yaml.find("type: vless").unwrap();
    let server_pos = yaml.find("server: host.example").unwrap();
    assert!(name_pos < type_pos);
    assert!(type_pos < server_pos);
}

#[test]
fn test_yaml_keeps_non_ascii_names_verbatim() {
    let proxies = parse_subscription(
        "vless://u@h.example:443?pbk=K#%D0%9C%D0%BE%D1%81%D0%BA%D0%B2%D0%B0",
    );
    assert_eq!(proxies[0].name, "Москва");

    let yaml = to_yaml(&assemble(&proxies)).unwrap();
    assert!(yaml.contains("Москва"));
}

#[test]
fn test_yaml_omits_absent_optional_fields() {
    let proxies = parse_subscription("vless://u@h.example:443?security=reality#plain");
    let yaml = to_yaml(&assemble(&proxies)).unwrap();

    assert!(!yaml.contains("ws-opts"));
    assert!(!yaml.contains("grpc-opts"));
    assert!(!yaml.contains("flow"));
    // Always-present fields stay even when empty
    assert!(yaml.contains("servername: ''"));
}

#[test]
fn test_generated_document_round_trips_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("links.txt");
    fs::write(&input, format!("# nodes\n{}\n", SAMPLE_LINK)).unwrap();

    let content = fs::read_to_string(&input).unwrap();
    let proxies = parse_subscription(&content);
    let yaml = to_yaml(&assemble(&proxies)).unwrap();

    let output = dir.path().join("config.yaml");
    fs::write(&output, &yaml).unwrap();

    let parsed: ClashConfig = serde_yaml::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(parsed.proxies.len(), 1);
    assert_eq!(parsed.proxies[0].name, "MyNode");
    assert_eq!(parsed.proxies[0].proxy_type, "vless");
    assert_eq!(parsed.proxy_groups.len(), 3);
    assert_eq!(parsed.rules, ["GEOIP,CN,DIRECT", "MATCH,Final"]);
}
