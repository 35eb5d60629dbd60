use crate::{
    env::Env,
    utils::{IdGenerator, MessageCounter, TokenCounter},
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub struct AppState {
    pub env: Env,
    pub ids: IdGenerator,
    pub tokens: Arc<dyn TokenCounter>,
    /// Cancelled on shutdown; every open stream listens on a child token.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(env: Env) -> Self {
        let tokens = Arc::new(MessageCounter::new(env.completion_tokens));
        Self::with_counter(env, tokens)
    }

    pub fn with_counter(env: Env, tokens: Arc<dyn TokenCounter>) -> Self {
        Self {
            ids: IdGenerator::new(env.id_strategy),
            env,
            tokens,
            shutdown: CancellationToken::new(),
        }
    }
}
