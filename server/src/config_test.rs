use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_environment_uses_defaults() {
    let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.port, 3000);
    assert_eq!(config.register_latency, Duration::from_millis(1100));
    assert_eq!(config.sign_in_latency, Duration::from_millis(900));
}

#[test]
fn overrides_are_applied() {
    let config = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("REGISTER_LATENCY_MS", "0"),
        ("SIGN_IN_LATENCY_MS", " 25 "),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.register_latency, Duration::ZERO);
    assert_eq!(config.sign_in_latency, Duration::from_millis(25));
}

#[test]
fn malformed_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
}

#[test]
fn negative_latency_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("SIGN_IN_LATENCY_MS", "-1")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid SIGN_IN_LATENCY_MS: \"-1\"");
}

#[test]
fn from_env_reads_process_environment() {
    // No test sets these, so the process defaults apply unless the runner exports them.
    if std::env::var_os("PORT").is_none()
        && std::env::var_os("REGISTER_LATENCY_MS").is_none()
        && std::env::var_os("SIGN_IN_LATENCY_MS").is_none()
    {
        assert_eq!(ServerConfig::from_env(), Ok(ServerConfig::default()));
    }
}
