use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_ADDR");
    }
}

#[test]
fn parse_port_defaults_when_absent() {
    assert_eq!(parse_port(None), Ok(3000));
}

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(parse_port(Some("eighty")), Err(ConfigError::Port("eighty".to_owned())));
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn parse_bind_addr_accepts_ipv4_and_ipv6() {
    assert_eq!(parse_bind_addr(Some("127.0.0.1")).unwrap().to_string(), "127.0.0.1");
    assert_eq!(parse_bind_addr(Some("::1")).unwrap().to_string(), "::1");
    assert!(parse_bind_addr(Some("localhost")).is_err());
}

#[test]
fn from_env_uses_defaults_and_overrides() {
    unsafe {
        clear_server_env();
    }
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.addr.to_string(), "0.0.0.0:3000");

    unsafe {
        std::env::set_var("PORT", "8080");
        std::env::set_var("BIND_ADDR", "127.0.0.1");
    }
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.addr.to_string(), "127.0.0.1:8080");

    unsafe {
        clear_server_env();
    }
}
