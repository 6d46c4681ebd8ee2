//! # Archimedes
//!
//! Walks through block placement into a fluid basin using the configured pool
//! settings. Pass a fluid name (`water`, `lava`) as the first argument.
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    clippy::unwrap_used
)]
#![allow(
    clippy::single_call_fn,
    clippy::multiple_inherent_impl,
    clippy::shadow_unrelated,
    clippy::missing_errors_doc
)]

use std::{env, path::Path};

use anyhow::Context;
use archimedes_core::PoolConfig;
use archimedes_registry::FluidRegistry;

mod basin;
mod logger;

const CONFIG_PATH: &str = "config/archimedes.json5";

fn main() -> anyhow::Result<()> {
    let config = PoolConfig::load_or_create(Path::new(CONFIG_PATH))
        .with_context(|| format!("loading {CONFIG_PATH}"))?;
    logger::init(&config.log.level)?;

    let registry = FluidRegistry::new_vanilla();
    let fluid_name = env::args().nth(1).unwrap_or_else(|| "water".to_string());
    let fluid = registry
        .get_by_name(&fluid_name)
        .filter(|fluid| !fluid.is_empty())
        .with_context(|| format!("unknown fluid {fluid_name}"))?;

    log::info!(
        "Using batch size {} and search limit {:?}",
        config.batch_size,
        config.search_limit
    );
    let report = basin::run(fluid, &config);
    log::info!(
        "Placed {} blocks, refused {}, {} units of {fluid_name} left",
        report.placed,
        report.refused,
        report.remaining
    );
    Ok(())
}
