//! Command implementations for the CLI

use crate::{
    cli::Command,
    config::Config,
    core::{
        components::ComponentDiscovery, pipeline::Pipeline, relocate::RelocationPlan,
        scaffold::PackageScaffolder,
    },
};
use anyhow::Context;
use tracing::{info, instrument};

/// Execute the appropriate command based on CLI arguments
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Build { .. } => execute_build_command(config),
        Command::Components => execute_components_command(config),
        Command::Plan => execute_plan_command(config),
    }
}

/// Execute the build command
#[instrument(skip(config))]
fn execute_build_command(config: &Config) -> anyhow::Result<()> {
    info!("Packaging library '{}'", config.library.name);

    let pipeline = Pipeline::new(config.clone()).context("Failed to initialize pipeline")?;
    let summary = pipeline.run().context("Packaging pipeline failed")?;

    info!("{summary}");
    Ok(())
}

/// Execute the components command
#[instrument(skip(config))]
fn execute_components_command(config: &Config) -> anyhow::Result<()> {
    let discovery = ComponentDiscovery::from_config(config);
    let components = discovery
        .discover()
        .context("Failed to discover components")?;

    for name in &components {
        println!("{name}");
    }

    Ok(())
}

/// Execute the plan command
#[instrument(skip(config))]
fn execute_plan_command(config: &Config) -> anyhow::Result<()> {
    let discovery = ComponentDiscovery::from_config(config);
    let components = discovery
        .discover()
        .context("Failed to discover components")?;
    let scaffolder = PackageScaffolder::new(config).context("Failed to prepare scaffolder")?;

    let mut targets: Vec<Option<&str>> = vec![None];
    targets.extend(components.iter().map(|name| Some(name.as_str())));

    for component in targets {
        let plan = RelocationPlan::for_package(config, component);
        println!("package {}", plan.package_dir.display());
        for step in &plan.steps {
            println!("  {step}");
        }
        for line in scaffolder.describe(component) {
            println!("  {line}");
        }
    }

    Ok(())
}
