// SPDX-License-Identifier: Apache-2.0

//! Builds the engine over the built-in library and reports its statistics.

use clap::ArgMatches;
use xag_npn::resyn::{XagNpnResynthesis, XagNpnResynthesisParams};

#[derive(Debug, serde::Serialize)]
struct StatsOutput {
    npn_classes: usize,
    db_size: usize,
    covered_classes: usize,
    library_signals: usize,
    time_classes_secs: f64,
    time_db_secs: f64,
}

fn collect_stats(params: XagNpnResynthesisParams) -> StatsOutput {
    let engine = XagNpnResynthesis::new(params);
    let stats = engine.stats();
    StatsOutput {
        npn_classes: engine.canon_table().num_classes(),
        db_size: stats.db_size,
        covered_classes: stats.covered_classes,
        library_signals: engine.class_index().num_signals(),
        time_classes_secs: stats.time_classes.as_secs_f64(),
        time_db_secs: stats.time_db.as_secs_f64(),
    }
}

pub fn handle_stats(matches: &ArgMatches, params: XagNpnResynthesisParams) -> anyhow::Result<()> {
    let output = collect_stats(params);
    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("npn classes:      {}", output.npn_classes);
        println!("db size:          {}", output.db_size);
        println!("covered classes:  {}", output.covered_classes);
        println!("library signals:  {}", output.library_signals);
        println!("build classes:    {:.2} secs", output.time_classes_secs);
        println!("build db:         {:.2} secs", output.time_db_secs);
    }
    Ok(())
}
