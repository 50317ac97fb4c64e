#![forbid(unsafe_code)]

//! Core domain model and business logic for the Stride workout tracker.
//!
//! This crate provides:
//! - Calculation strategies (running, walking, swimming)
//! - Sensor package decoding
//! - Report formatting
//! - Batch processing and JSONL input
//! - Configuration and logging

pub mod error;
pub mod training;
pub mod factory;
pub mod report;
pub mod batch;
pub mod packages;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use batch::process_packages;
pub use config::Config;
pub use factory::read_package;
pub use packages::{load_packages, sample_packages, SensorPackage};
pub use report::WorkoutReport;
pub use training::{Running, Swimming, Training, Walking, Workout};
