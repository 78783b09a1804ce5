//! Observability concerns: tracing/logging setup for classtrack hosts.

pub mod tracing;
