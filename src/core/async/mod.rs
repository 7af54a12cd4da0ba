//! Asynchronous access to the authorization engine
//!
//! This module provides a task-safe handle around the synchronous engine.
//! Authorization itself stays synchronous; the handle only serializes
//! concurrent callers so each decision runs as one critical section.

pub mod engine;

pub use engine::AsyncAuthorizationEngine;
