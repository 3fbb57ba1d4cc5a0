//! Sourcing: the orchestration layer over analysis, query, search and
//! evaluation: the interactive pipeline, the batch runner and their HTTP handlers.

pub mod batch;
pub mod handlers;
pub mod pipeline;
