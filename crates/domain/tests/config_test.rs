use dns_edge_domain::{Config, SelectionStrategy};

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.base_path, "/api/v1");
    assert_eq!(config.upstream.fan_out, 3);
    assert_eq!(config.upstream.strategy, SelectionStrategy::Random);
    assert_eq!(config.cache.max_entries, 10_000);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_parse_full_document() {
    let config: Config = toml::from_str(
        r#"
        [server]
        bind_address = "127.0.0.1"
        port = 9000
        base_path = "/api/v1"

        [upstream]
        instances = ["http://10.0.0.5:8080", "http://10.0.0.6:8080"]
        fan_out = 2
        strategy = "round_robin"

        [cache]
        max_entries = 500

        [logging]
        level = "debug"
        "#,
    )
    .unwrap();

    assert_eq!(config.server.port, 9000);
    assert_eq!(config.upstream.instances.len(), 2);
    assert_eq!(config.upstream.fan_out, 2);
    assert_eq!(config.upstream.strategy, SelectionStrategy::RoundRobin);
    assert_eq!(config.cache.max_entries, 500);
    assert_eq!(config.logging.level, "debug");
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_document_falls_back_to_defaults() {
    let config: Config = toml::from_str(
        r#"
        [upstream]
        instances = ["http://10.0.0.5:8080"]
        "#,
    )
    .unwrap();

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.upstream.fan_out, 3);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_empty_pool() {
    let config = Config::default();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_zero_fan_out() {
    let mut config = Config::default();
    config.upstream.instances = vec!["http://10.0.0.5:8080".to_string()];
    config.upstream.fan_out = 0;
    assert!(config.validate().is_err());
}
