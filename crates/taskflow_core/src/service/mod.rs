//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate collection mutations into full mutate -> persist -> derive
//!   cycles for callers.
//! - Keep presentation layers decoupled from storage details.

pub mod task_service;
