//! `classtrack-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error taxonomy, the entity trait, and the index types that anchor the
//! "positions are relative to what the user last saw" contract.

pub mod entity;
pub mod error;
pub mod index;

pub use entity::Entity;
pub use error::{RosterError, RosterResult};
pub use index::{Index, IndexSet};
