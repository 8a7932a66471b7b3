//! Application configuration.
//!
//! Centralized constants for the Zipslides screens plus [`AppConfig`], the
//! handful of tunables the simulation reads at runtime. The browser build
//! always uses the defaults; the CLI can override them from the environment
//! (`.env` supported) and from flags.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Product name shown in headers and the loading screen.
pub const APP_NAME: &str = "Zipslides";

/// Base URL that share links are synthesized under.
///
/// Nothing is served there.
pub const SHARE_BASE_URL: &str = "https://zipslides.com";

/// Maximum file size for upload (in bytes).
///
/// 50 MB limit.
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Stand-in for a real transfer, per accepted file.
pub const UPLOAD_DELAY: Duration = Duration::from_millis(2000);

/// Stand-in for an auth round trip.
pub const AUTH_DELAY: Duration = Duration::from_millis(1000);

/// Length of the random token in a share link.
pub const SHARE_TOKEN_LEN: usize = 12;

/// Minimum signup password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(4000);

/// Maximum toasts kept on screen at once.
pub const MAX_TOASTS: usize = 5;

/// Runtime tunables for the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Share link base, without trailing slash.
    pub share_base_url: String,
    /// Per-file upload delay.
    #[serde(with = "millis")]
    pub upload_delay: Duration,
    /// Login/signup delay.
    #[serde(with = "millis")]
    pub auth_delay: Duration,
    /// Share token length.
    pub share_token_len: usize,
    /// Size ceiling in bytes.
    pub max_file_size: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            share_base_url: SHARE_BASE_URL.to_string(),
            upload_delay: UPLOAD_DELAY,
            auth_delay: AUTH_DELAY,
            share_token_len: SHARE_TOKEN_LEN,
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

impl AppConfig {
    /// Same config with a different share base; a trailing `/` is dropped.
    pub fn with_share_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.share_base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Same config with a different upload delay.
    pub fn with_upload_delay(mut self, delay: Duration) -> Self {
        self.upload_delay = delay;
        self
    }

    /// Build from a key lookup, falling back to defaults for anything
    /// missing or unparsable.
    ///
    /// Recognized keys: `ZIPSLIDES_SHARE_BASE_URL`,
    /// `ZIPSLIDES_UPLOAD_DELAY_MS`, `ZIPSLIDES_AUTH_DELAY_MS`,
    /// `ZIPSLIDES_SHARE_TOKEN_LEN`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("ZIPSLIDES_SHARE_BASE_URL") {
            if !url.trim().is_empty() {
                config = config.with_share_base_url(url.trim());
            }
        }
        if let Some(ms) = parse_number::<u64>(&lookup, "ZIPSLIDES_UPLOAD_DELAY_MS") {
            config.upload_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_number::<u64>(&lookup, "ZIPSLIDES_AUTH_DELAY_MS") {
            config.auth_delay = Duration::from_millis(ms);
        }
        if let Some(len) = parse_number::<usize>(&lookup, "ZIPSLIDES_SHARE_TOKEN_LEN") {
            if len > 0 {
                config.share_token_len = len;
            } else {
                log::warn!("ZIPSLIDES_SHARE_TOKEN_LEN must be positive, keeping {}", SHARE_TOKEN_LEN);
            }
        }

        config
    }

    /// Load `.env` (if present) and read the process environment.
    #[cfg(feature = "cli")]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring {}={:?}: not a number", key, raw);
            None
        }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.max_file_size, 52_428_800);
        assert_eq!(config.upload_delay, Duration::from_secs(2));
        assert_eq!(config.auth_delay, Duration::from_secs(1));
        assert_eq!(config.share_base_url, "https://zipslides.com");
    }

    #[test]
    fn test_lookup_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("ZIPSLIDES_SHARE_BASE_URL", "http://localhost:8080/"),
            ("ZIPSLIDES_UPLOAD_DELAY_MS", "10"),
            ("ZIPSLIDES_SHARE_TOKEN_LEN", "20"),
        ]));
        assert_eq!(config.share_base_url, "http://localhost:8080");
        assert_eq!(config.upload_delay, Duration::from_millis(10));
        assert_eq!(config.share_token_len, 20);
        assert_eq!(config.auth_delay, AUTH_DELAY);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("ZIPSLIDES_UPLOAD_DELAY_MS", "soon"),
            ("ZIPSLIDES_SHARE_TOKEN_LEN", "0"),
        ]));
        assert_eq!(config.upload_delay, UPLOAD_DELAY);
        assert_eq!(config.share_token_len, SHARE_TOKEN_LEN);
    }

    #[test]
    fn test_serializes_delays_as_millis() {
        let json = serde_json::to_value(AppConfig::default()).unwrap();
        assert_eq!(json["uploadDelay"], 2000);
        assert_eq!(json["shareTokenLen"], 12);
    }
}
