pub mod answer_mapper;
pub mod reporter;
pub mod server;

pub use answer_mapper::AnswerMapper;
pub use reporter::TracingMalformedRecordReporter;
pub use server::DnsServerHandler;
