use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_address: String,
    pub frontend_origin: String,
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Missing or unparsable values
    /// fall back to defaults.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_body_bytes = var("MAX_BODY_BYTES")
            .unwrap_or_else(|| "262144".to_string())
            .parse()
            .unwrap_or(262_144);

        Self {
            server_address: var("SERVER_ADDRESS").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            frontend_origin: var("FRONTEND_ORIGIN")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            max_body_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let c = config(&[]);
        assert_eq!(c.server_address, "0.0.0.0:8080");
        assert_eq!(c.frontend_origin, "http://localhost:3000");
        assert_eq!(c.max_body_bytes, 262_144);
    }

    #[test]
    fn unparsable_body_limit_falls_back() {
        assert_eq!(config(&[("MAX_BODY_BYTES", "lots")]).max_body_bytes, 262_144);
        assert_eq!(config(&[("MAX_BODY_BYTES", "-1")]).max_body_bytes, 262_144);
    }

    #[test]
    fn values_are_read() {
        let c = config(&[
            ("SERVER_ADDRESS", "127.0.0.1:9000"),
            ("FRONTEND_ORIGIN", "https://todo.example"),
            ("MAX_BODY_BYTES", "1024"),
        ]);
        assert_eq!(c.server_address, "127.0.0.1:9000");
        assert_eq!(c.frontend_origin, "https://todo.example");
        assert_eq!(c.max_body_bytes, 1024);
    }
}
