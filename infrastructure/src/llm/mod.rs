//! Language model adapters

mod openai;

pub use openai::OpenAiCompletionGateway;
