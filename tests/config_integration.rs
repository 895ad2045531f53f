use edumarket::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("EDU_SERVER__PORT");
        env::remove_var("EDU_SERVER__HOST");
        env::remove_var("EDU_DEMO__SIMULATED_LATENCY_MS");
        env::remove_var("CONFIG_FILE");
    }
}

// Parse from a fixed argv so the test runner's own arguments never leak in.
fn load() -> Result<AppConfig, config::ConfigError> {
    AppConfig::load_from_args(["edumarket"])
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = load().expect("defaults should load without any sources");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.demo.simulated_latency_ms, 800);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("EDU_SERVER__PORT", "9090");
        env::set_var("EDU_DEMO__SIMULATED_LATENCY_MS", "0");
    }

    let config = load().expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.demo.simulated_latency_ms, 0);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_override_wins() {
    clear_env_vars();
    unsafe {
        env::set_var("EDU_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args(["edumarket", "--port", "4444"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 4444);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let config_content = r"
server:
  port: 7070
";

    let file_path = "test_config.yaml";
    fs::write(file_path, config_content).expect("Failed to write temp config");

    let config = AppConfig::load_from_args(["edumarket", "--config", file_path])
        .expect("Failed to load config from file");

    fs::remove_file(file_path).unwrap();

    assert_eq!(config.server.port, 7070);
    // Unspecified sections fall back to defaults.
    assert_eq!(config.demo.simulated_latency_ms, 800);

    clear_env_vars();
}
