//! Core types, configuration, and geometry shared by every subsystem

pub mod config;
pub mod error;
pub mod geometry;
pub mod types;

pub use error::{Result, SimError};
