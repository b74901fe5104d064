//! Process configuration from environment variables.

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the finance API
    pub api_base_url: String,
    /// Whether every reduced action is logged with its state snapshots
    pub debug_actions: bool,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `FINBOARD_API_BASE_URL` defaults to a local server;
    /// `FINBOARD_DEBUG_ACTIONS` accepts `1` or `true`.
    #[must_use]
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("FINBOARD_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let debug_actions = std::env::var("FINBOARD_DEBUG_ACTIONS")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            api_base_url,
            debug_actions,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim(), "1" | "true" | "TRUE" | "True")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_parsing_accepts_common_truthy_spellings() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag(" True "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("yes"));
    }
}
