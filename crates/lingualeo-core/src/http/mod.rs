//! HTTP client implementation for the Lingualeo API
//!
//! This module provides:
//! - The [`LookupClient`] capability consumed by the lookup pipeline
//! - A reqwest-backed [`LingualeoClient`] with session cookies
//! - Error classification and normalization

pub mod client;
pub mod error;

pub use client::{ClientConfig, LingualeoClient, LookupClient, DEFAULT_API_URL};
pub use error::{ErrorClassification, HttpError};
