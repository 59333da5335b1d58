// SPDX-License-Identifier: Apache-2.0

//! Optional TOML configuration for the driver.
//!
//! ```toml
//! [resyn]
//! verbose = true
//! ```

use std::path::Path;

use anyhow::Context;
use clap::ArgMatches;
use serde::Deserialize;
use xag_npn::resyn::XagNpnResynthesisParams;

#[derive(Debug, Default, Deserialize)]
pub struct DriverConfig {
    pub resyn: Option<ResynConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResynConfig {
    /// Log engine statistics when the engine is torn down.
    pub verbose: Option<bool>,
}

pub fn load_config(path: &Path) -> anyhow::Result<DriverConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    parse_config(&text).with_context(|| format!("parsing config file {}", path.display()))
}

pub fn parse_config(text: &str) -> anyhow::Result<DriverConfig> {
    Ok(toml::from_str(text)?)
}

/// Engine parameters: a `--verbose` flag wins over the config file, which wins
/// over the defaults.
pub fn get_resyn_params(
    matches: &ArgMatches,
    config: &Option<DriverConfig>,
) -> XagNpnResynthesisParams {
    let mut params = XagNpnResynthesisParams::default();
    if let Some(verbose) = config
        .as_ref()
        .and_then(|c| c.resyn.as_ref())
        .and_then(|r| r.verbose)
    {
        params.verbose = verbose;
    }
    if matches.get_flag("verbose") {
        params.verbose = true;
    }
    params
}
