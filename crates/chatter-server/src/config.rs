use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Read `CHATTER_DB_PATH`, `CHATTER_HOST` and `CHATTER_PORT`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let db_path = lookup("CHATTER_DB_PATH").unwrap_or_else(|| "chatter.db".into());
        let host = lookup("CHATTER_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match lookup("CHATTER_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("CHATTER_PORT is not a valid port: {raw:?}"))?,
            None => 8080,
        };

        Ok(Self {
            db_path: db_path.into(),
            host,
            port,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("chatter.db"));
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.addr().unwrap().port(), 8080);
    }

    #[test]
    fn overrides_from_env() {
        let cfg = config(&[
            ("CHATTER_DB_PATH", "/tmp/x.db"),
            ("CHATTER_HOST", "127.0.0.1"),
            ("CHATTER_PORT", " 9000 "),
        ])
        .unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/x.db"));
        assert_eq!(cfg.addr().unwrap(), "127.0.0.1:9000".parse().unwrap());
    }

    #[test]
    fn bad_port_is_an_error() {
        assert!(config(&[("CHATTER_PORT", "http")]).is_err());
        assert!(config(&[("CHATTER_PORT", "70000")]).is_err());
    }

    #[test]
    fn bad_host_fails_at_addr() {
        let cfg = config(&[("CHATTER_HOST", "not a host")]).unwrap();
        assert!(cfg.addr().is_err());
    }
}
