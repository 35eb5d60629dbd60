use crate::utils::IdStrategy;
use eyre::Result;
use std::{fmt::Display, net::SocketAddr, str::FromStr, time::Duration};

pub const LISTEN_ADDR: &str = "LISTEN_ADDR";
pub const MODEL_NAME: &str = "MODEL_NAME";
pub const COMPLETION_TOKENS: &str = "COMPLETION_TOKENS";
pub const STREAM_CHUNKS: &str = "STREAM_CHUNKS";
pub const STREAM_INTERVAL_MS: &str = "STREAM_INTERVAL_MS";
pub const STREAMING_ENABLED: &str = "STREAMING_ENABLED";
pub const ID_STRATEGY: &str = "ID_STRATEGY";

#[derive(Debug, Clone)]
pub struct Env {
    pub listen_addr: SocketAddr,
    pub model_name: String,
    pub completion_tokens: usize,
    pub stream_chunks: usize,
    pub stream_interval: Duration,
    pub streaming_enabled: bool,
    pub id_strategy: IdStrategy,
}

impl Default for Env {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            model_name: "gpt-3.5-turbo".to_owned(),
            completion_tokens: 100,
            stream_chunks: 10,
            stream_interval: Duration::from_secs(1),
            streaming_enabled: true,
            id_strategy: IdStrategy::Uuid,
        }
    }
}

impl Env {
    /// Loads settings from the process environment, falling back to defaults.
    pub fn new() -> Result<Self> {
        let env = Self::from_lookup(|key| std::env::var(key).ok())?;
        tracing::info!("Environment Loaded");
        Ok(env)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            listen_addr: parse_or(&lookup, LISTEN_ADDR, defaults.listen_addr)?,
            model_name: lookup(MODEL_NAME).unwrap_or(defaults.model_name),
            completion_tokens: parse_or(&lookup, COMPLETION_TOKENS, defaults.completion_tokens)?,
            stream_chunks: parse_or(&lookup, STREAM_CHUNKS, defaults.stream_chunks)?,
            stream_interval: match lookup(STREAM_INTERVAL_MS) {
                Some(ms) => Duration::from_millis(parse_value(STREAM_INTERVAL_MS, &ms)?),
                None => defaults.stream_interval,
            },
            streaming_enabled: parse_or(&lookup, STREAMING_ENABLED, defaults.streaming_enabled)?,
            id_strategy: parse_or(&lookup, ID_STRATEGY, defaults.id_strategy)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(value) => parse_value(key, &value),
        None => Ok(default),
    }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| eyre::eyre!("Invalid {} {:?}: {}", key, value, e))
}
