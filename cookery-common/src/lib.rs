//! # Cookery Common Library
//!
//! Shared code for the cooking platform services:
//! - Database schema creation, corruption recovery and first-run seeding
//! - Row models and their JSON wire shapes
//! - Configuration loading
//! - Common error type

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
