use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::{fmt::Display, str::FromStr};
use tokio::sync::Mutex;
use uuid::Uuid;

pub const ID_PREFIX: &str = "chat.completion-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    #[default]
    Uuid,
    /// 63-bit random integer rendered as lowercase hex.
    Hex,
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "uuid" => Ok(Self::Uuid),
            "hex" => Ok(Self::Hex),
            other => Err(format!("unknown id strategy `{other}`, expected `uuid` or `hex`")),
        }
    }
}

impl Display for IdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uuid => write!(f, "uuid"),
            Self::Hex => write!(f, "hex"),
        }
    }
}

/// Hands out response ids. The rng is seeded once and shared across requests.
pub struct IdGenerator {
    strategy: IdStrategy,
    rng: Mutex<SmallRng>,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            rng: Mutex::new(SmallRng::from_os_rng()),
        }
    }

    pub async fn next_id(&self) -> String {
        match self.strategy {
            IdStrategy::Uuid => format!("{}{}", ID_PREFIX, Uuid::new_v4()),
            IdStrategy::Hex => {
                let value = self.rng.lock().await.random::<u64>() >> 1;
                format!("{}{:x}", ID_PREFIX, value)
            }
        }
    }
}
