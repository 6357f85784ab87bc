//! Mapping options shared by adapters and the batch processor.

use serde::{Deserialize, Serialize};

/// Behavior switches for a mapping run.
///
/// Read once at process start (CLI flag or environment) and passed by
/// reference to every adapter call; never re-read per row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapOptions {
    /// Drop rows that fail schema validation instead of writing them through.
    pub skip_invalid: bool,
}

impl MapOptions {
    #[must_use]
    pub fn with_skip_invalid(mut self, enable: bool) -> Self {
        self.skip_invalid = enable;
        self
    }

    /// Reads the `YAM_SKIP_INVALID` environment fallback used when the CLI
    /// flag is absent. Accepts `true`/`1`/`yes`, case-insensitive.
    pub fn skip_invalid_from_env() -> bool {
        std::env::var("YAM_SKIP_INVALID")
            .map(|value| {
                matches!(
                    value.trim().to_lowercase().as_str(),
                    "true" | "1" | "yes"
                )
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_pass_through() {
        assert!(!MapOptions::default().skip_invalid);
        assert!(MapOptions::default().with_skip_invalid(true).skip_invalid);
    }
}
