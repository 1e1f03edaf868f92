//! Core functionality for library packaging
//!
//! Contains the main logic for discovering components, invoking the
//! bundler, relocating build output, and scaffolding package directories.

pub mod builder;
pub mod components;
pub mod fixtures;
pub mod index_file;
pub mod pipeline;
pub mod relocate;
pub mod scaffold;

pub use builder::BundleBuilder;
pub use components::ComponentDiscovery;
pub use fixtures::FixtureSynchronizer;
pub use index_file::IndexFileGenerator;
pub use pipeline::{Pipeline, PipelineSummary};
pub use relocate::{BUNDLE_FORMATS, BundleFormat, RelocationPlan, RelocationStep};
pub use scaffold::PackageScaffolder;
