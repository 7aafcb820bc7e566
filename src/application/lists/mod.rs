//! Lists module — list lifecycle and overview queries

pub mod service;

pub use service::ListService;
