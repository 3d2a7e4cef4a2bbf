pub mod dns;
pub mod web;

pub use dns::{bind_dns_server, run_dns_server};
pub use web::{bind_web_server, run_web_server};
