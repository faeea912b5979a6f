//! Core components of the `yf-income-export` crate.
//!
//! This module contains the foundational building blocks, including:
//! - The [`YfClient`] and its builder.
//! - The primary [`YfError`] type.
//! - Internal networking and authentication logic.

/// The client (`YfClient`), builder, and configuration.
pub mod client;
/// The primary error type (`YfError`) for the crate.
pub mod error;
pub(crate) mod net;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::YfClient`
pub use client::{YfClient, YfClientBuilder};
pub use error::YfError;
