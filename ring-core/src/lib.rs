//! Core layered ring-diagram library.
//!
//! Main components:
//! - [`point`] — immutable 2-D coordinates.
//! - [`vector`] — oriented segments with an always-fresh derived target.
//! - [`label`] — fraction and decimal value labels.
//! - [`config`] — engine parameters and seed vectors.
//! - [`error`] — configuration errors rejected before generation.
//! - [`phases`] — the per-ring steps of the layer algorithm.
//! - [`engine`] — drives the phases and collects a [`engine::Diagram`].
//! - [`types`] — shared type aliases.

pub mod config;
pub mod engine;
pub mod error;
pub mod label;
pub mod phases;
pub mod point;
pub mod types;
pub mod vector;
