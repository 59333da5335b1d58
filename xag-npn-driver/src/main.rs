// SPDX-License-Identifier: Apache-2.0

//! Command line driver for XAG NPN resynthesis.
//!
//! Commands are given like:
//!
//! ```text
//! xag-npn-driver <global-options> <command> <command-args-and-options>
//! ```
//!
//! Commands are:
//!
//! - stats: Builds the engine over the built-in library and prints its
//!   statistics.
//! - query: Resynthesizes a truth table and verifies every candidate.
//!
//! Sample usage:
//!
//! ```shell
//! $ cargo run -- stats --json
//! $ cargo run -- --config=$HOME/xag-npn.toml query 0x8 --num_inputs=2 --show
//! ```

mod driver_config;
mod query;
mod report_cli_error;
mod stats;

use clap::{Arg, ArgAction};
use driver_config::{get_resyn_params, load_config, DriverConfig};
use report_cli_error::report_cli_error_and_exit;

trait AppExt {
    fn add_bool_arg(self, long: &'static str, help: &'static str) -> Self;
}

impl AppExt for clap::Command {
    fn add_bool_arg(self, long: &'static str, help: &'static str) -> Self {
        (self as clap::Command).arg(
            Arg::new(long)
                .long(long)
                .help(help)
                .action(ArgAction::SetTrue),
        )
    }
}

fn command() -> clap::Command {
    clap::Command::new("xag-npn-driver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Command line driver for XAG NPN resynthesis")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("CONFIG")
                .help("Path to a xag-npn.toml file")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Log engine statistics on teardown")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(clap::Command::new("version").about("Prints the version of the driver"))
        .subcommand(
            clap::Command::new("stats")
                .about("Prints statistics of the built-in library")
                .add_bool_arg("json", "Emit statistics as JSON"),
        )
        .subcommand(
            clap::Command::new("query")
                .about("Resynthesizes a truth table from the library")
                .arg(
                    Arg::new("truth_table")
                        .help("Truth table in hex, bit i is the output for assignment i")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("num_inputs")
                        .long("num_inputs")
                        .value_name("NUM_INPUTS")
                        .help("Number of function inputs")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("4")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("max_candidates")
                        .long("max_candidates")
                        .value_name("N")
                        .help("Stop after N candidates")
                        .value_parser(clap::value_parser!(usize))
                        .action(ArgAction::Set),
                )
                .add_bool_arg("show", "Print each candidate's gates")
                .add_bool_arg("json", "Emit candidate reports as JSON"),
        )
}

fn main() {
    let _ = env_logger::try_init();

    log::info!(
        "xag-npn-driver starting; version: {}",
        env!("CARGO_PKG_VERSION")
    );

    let matches = command().get_matches();

    let mut config_path: Option<String> = matches.get_one::<String>("config").cloned();

    // Fall back to xag-npn.toml in the working directory.
    if config_path.is_none() {
        if let Ok(cwd) = std::env::current_dir() {
            let cwd_toml_path = cwd.join("xag-npn.toml");
            if cwd_toml_path.exists() {
                log::info!(
                    "Using xag-npn.toml in current directory: {}",
                    cwd_toml_path.display()
                );
                config_path = Some(cwd_toml_path.display().to_string());
            }
        }
    }

    let config: Option<DriverConfig> = config_path.map(|path| {
        match load_config(std::path::Path::new(&path)) {
            Ok(config) => config,
            Err(e) => report_cli_error_and_exit(
                "could not load config",
                None,
                vec![("path", path.as_str()), ("error", format!("{:#}", e).as_str())],
            ),
        }
    });

    let result = if let Some(sub) = matches.subcommand_matches("stats") {
        stats::handle_stats(sub, get_resyn_params(sub, &config))
            .map_err(|e| ("stats", e))
    } else if let Some(sub) = matches.subcommand_matches("query") {
        query::handle_query(sub, get_resyn_params(sub, &config))
            .map_err(|e| ("query", e))
    } else if matches.subcommand_matches("version").is_some() {
        println!("{}", env!("CARGO_PKG_VERSION"));
        Ok(())
    } else {
        report_cli_error_and_exit("No valid subcommand provided.", None, vec![]);
    };

    if let Err((subcommand, e)) = result {
        report_cli_error_and_exit(&format!("{:#}", e), Some(subcommand), vec![]);
    }
}
