//! MailPilot — email productivity backend with a deterministic mock LLM.

pub mod config;
pub mod engine;
pub mod error;
pub mod llm;
pub mod prompts;
pub mod server;
pub mod store;
