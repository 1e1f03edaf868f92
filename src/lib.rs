//! # Component Packager
//!
//! A reliable tool for packaging a Vue component library into
//! per-component npm packages. This library provides functionality to
//! discover component sources, drive an external bundler CLI, relocate the
//! emitted bundles into a package-per-component directory tree, and
//! scaffold each package with a source snapshot and re-export stubs.
//!
//! ## Features
//!
//! - Deterministic component discovery and aggregation-file regeneration
//! - Bundler invocation per entry point with fatal error propagation
//! - Plan-first bundle relocation with source-map reference fixup
//! - Package scaffolding with nested nickname directories
//! - Optional end-to-end fixture synchronization
//!
//! ## Example
//!
//! ```no_run
//! use component_packager::{config::Config, core::Pipeline};
//!
//! let config = Config::default();
//! let summary = Pipeline::new(config)?.run()?;
//! println!("{summary}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
