//! Core components of the `iress-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`IressClient`] and its builder.
//! - The primary [`IressError`] type.
//! - Shared request vocabulary ([`Frequency`], [`IntradayFrequency`]).
//! - The SOAP envelope codec and HTTP plumbing.

/// The main client (`IressClient`), builder, and configuration.
pub mod client;
/// The primary error type (`IressError`) for the crate.
pub mod error;
/// Shared request/response vocabulary used across API modules.
pub mod models;

pub(crate) mod net;
pub(crate) mod soap;

#[cfg(feature = "dataframe")]
/// Conversion of result rows into polars `DataFrame`s.
pub mod dataframe;

// convenient re-exports so most code can just `use crate::core::IressClient`
pub use client::{IressClient, IressClientBuilder};
pub use error::IressError;
pub use models::{Frequency, IntradayFrequency, Session};

#[cfg(feature = "dataframe")]
pub use dataframe::ToDataFrame;
