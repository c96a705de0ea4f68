use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::path::PathBuf;

use axum::http::HeaderValue;
use nonzero_ext::nonzero;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";
const DEFAULT_FRONTEND_DIST: &str = "../frontend/dist";
const DEFAULT_CONTACT_FROM: &str = "Ethovia Website <no-reply@ethovia.com>";
const DEFAULT_CONTACT_RATE_PER_MINUTE: NonZeroU32 = nonzero!(5u32);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has an invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("{key} must be set when {because} is set")]
    Missing {
        key: &'static str,
        because: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host: String,
    /// Username and password, when the relay wants them.
    pub credentials: Option<(String, String)>,
}

/// Where accepted contact submissions go. Absent means log only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    pub inbox: String,
    pub from: String,
    pub smtp: SmtpSettings,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub frontend_dist: PathBuf,
    /// Allowed CORS origin. `None` allows any origin, as in development.
    pub frontend_url: Option<HeaderValue>,
    pub mail: Option<MailSettings>,
    pub contact_rate_per_minute: NonZeroU32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Empty values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = {
            let value = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
            value.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                key: "BIND_ADDR",
                reason: e.to_string(),
                value,
            })?
        };

        let frontend_dist = PathBuf::from(
            get("FRONTEND_DIST").unwrap_or_else(|| DEFAULT_FRONTEND_DIST.to_string()),
        );

        let frontend_url = match get("FRONTEND_URL") {
            Some(value) => Some(HeaderValue::from_str(&value).map_err(|e| ConfigError::Invalid {
                key: "FRONTEND_URL",
                reason: e.to_string(),
                value: value.clone(),
            })?),
            None => None,
        };

        let contact_rate_per_minute = match get("CONTACT_RATE_PER_MINUTE") {
            Some(value) => value
                .parse::<NonZeroU32>()
                .map_err(|e| ConfigError::Invalid {
                    key: "CONTACT_RATE_PER_MINUTE",
                    reason: e.to_string(),
                    value: value.clone(),
                })?,
            None => DEFAULT_CONTACT_RATE_PER_MINUTE,
        };

        let mail = match get("CONTACT_INBOX") {
            Some(inbox) => {
                let host = get("SMTP_HOST").ok_or(ConfigError::Missing {
                    key: "SMTP_HOST",
                    because: "CONTACT_INBOX",
                })?;
                let credentials = match (get("SMTP_USERNAME"), get("SMTP_PASSWORD")) {
                    (Some(username), Some(password)) => Some((username, password)),
                    (None, None) => None,
                    (Some(_), None) => {
                        return Err(ConfigError::Missing {
                            key: "SMTP_PASSWORD",
                            because: "SMTP_USERNAME",
                        })
                    }
                    (None, Some(_)) => {
                        return Err(ConfigError::Missing {
                            key: "SMTP_USERNAME",
                            because: "SMTP_PASSWORD",
                        })
                    }
                };
                Some(MailSettings {
                    inbox,
                    from: get("CONTACT_FROM").unwrap_or_else(|| DEFAULT_CONTACT_FROM.to_string()),
                    smtp: SmtpSettings { host, credentials },
                })
            }
            None => None,
        };

        Ok(Self {
            bind_addr,
            frontend_dist,
            frontend_url,
            mail,
            contact_rate_per_minute,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3001".parse().unwrap());
        assert_eq!(config.frontend_dist, PathBuf::from("../frontend/dist"));
        assert_eq!(config.frontend_url, None);
        assert_eq!(config.mail, None);
        assert_eq!(config.contact_rate_per_minute.get(), 5);
    }

    #[test]
    fn test_mail_settings() {
        let config = Config::from_lookup(lookup(&[
            ("CONTACT_INBOX", "hello@ethovia.com"),
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USERNAME", "mailer"),
            ("SMTP_PASSWORD", "secret"),
        ]))
        .unwrap();
        let mail = config.mail.unwrap();
        assert_eq!(mail.inbox, "hello@ethovia.com");
        assert_eq!(mail.from, DEFAULT_CONTACT_FROM);
        assert_eq!(
            mail.smtp.credentials,
            Some(("mailer".to_string(), "secret".to_string()))
        );
    }

    #[test]
    fn test_inbox_without_smtp_host_is_rejected() {
        let err = Config::from_lookup(lookup(&[("CONTACT_INBOX", "hello@ethovia.com")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Missing {
                key: "SMTP_HOST",
                because: "CONTACT_INBOX"
            }
        );
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(matches!(
            Config::from_lookup(lookup(&[("CONTACT_RATE_PER_MINUTE", "0")])),
            Err(ConfigError::Invalid { key: "CONTACT_RATE_PER_MINUTE", .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("BIND_ADDR", "localhost")])),
            Err(ConfigError::Invalid { key: "BIND_ADDR", .. })
        ));
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config = Config::from_lookup(lookup(&[("CONTACT_INBOX", "  "), ("FRONTEND_URL", "")])).unwrap();
        assert_eq!(config.mail, None);
        assert_eq!(config.frontend_url, None);
    }
}
