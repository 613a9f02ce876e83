pub mod client;

pub use client::{Answer, AnswerService, ApiClient, TransportError};
