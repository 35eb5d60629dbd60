mod data_types;
mod id_generator;
mod stream_body;
mod token_counter;

pub use data_types::{ChatMessage, ChatRequest, ChatResponse, Choice, Usage};
pub use id_generator::{IdGenerator, IdStrategy, ID_PREFIX};
pub use stream_body::get_event_stream;
pub use token_counter::{MessageCounter, TokenCounter};
