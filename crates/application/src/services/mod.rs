mod query_resolver;
mod response_synthesizer;

pub use query_resolver::QueryResolver;
pub use response_synthesizer::{AnswerBuilder, ResponseSynthesizer};
