//! Thinking Studio - Structured product-thinking frameworks
//!
//! This crate turns the answers to five guided frameworks (problem framing,
//! root cause, risk assessment, tradeoff evaluation, next steps) into
//! deterministic plain-text reports, and offers a guided long-form decision
//! analysis over a REST API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
