use apigw_bridge::core::config::{AdapterConfig, DEFAULT_PATH_PREFIX};
use apigw_bridge::errors::AdapterError;

#[test]
fn test_default_prefix_is_root() {
    let config = AdapterConfig::default();
    assert_eq!(config.path_prefix, DEFAULT_PATH_PREFIX);
    assert_eq!(config.path_prefix, "/");
}

#[test]
fn test_new_accepts_absolute_prefix() {
    let config = AdapterConfig::new("/prod").unwrap();
    assert_eq!(config.path_prefix, "/prod");
}

// The only test in this binary touching PATH_PREFIX, so the steps run in order.
#[test]
fn test_from_env_reads_path_prefix() {
    unsafe { std::env::remove_var("PATH_PREFIX") };
    assert_eq!(AdapterConfig::from_env().unwrap(), AdapterConfig::default());

    unsafe { std::env::set_var("PATH_PREFIX", "/stage") };
    assert_eq!(AdapterConfig::from_env().unwrap().path_prefix, "/stage");

    unsafe { std::env::set_var("PATH_PREFIX", "stage") };
    assert!(matches!(AdapterConfig::from_env(), Err(AdapterError::Config(_))));

    unsafe { std::env::remove_var("PATH_PREFIX") };
}

#[test]
fn test_new_rejects_relative_prefix() {
    let result = AdapterConfig::new("prod");
    assert!(matches!(result, Err(AdapterError::Config(_))));
}
