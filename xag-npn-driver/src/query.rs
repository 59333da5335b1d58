// SPDX-License-Identifier: Apache-2.0

//! Resynthesizes one truth table and checks every candidate by simulation.

use anyhow::{bail, Context};
use clap::ArgMatches;
use xag_npn::aig::gate_sim::simulate_tt16;
use xag_npn::aig::{AigOperand, GateBuilder, GateBuilderOptions, GateFn, Output};
use xag_npn::resyn::{XagNpnResynthesis, XagNpnResynthesisParams};
use xag_npn::tt::{TruthTable, TruthTable16};

#[derive(Debug, serde::Serialize)]
struct CandidateReport {
    index: usize,
    and_gates: usize,
}

fn candidate_gate_fn(gb: &GateBuilder, index: usize, operand: AigOperand) -> GateFn {
    GateFn {
        name: format!("candidate_{}", index),
        inputs: gb.inputs.clone(),
        outputs: vec![Output {
            name: "o".to_string(),
            operand,
        }],
        gates: gb.gates.clone(),
    }
}

pub fn handle_query(matches: &ArgMatches, params: XagNpnResynthesisParams) -> anyhow::Result<()> {
    let text = matches
        .get_one::<String>("truth_table")
        .context("truth table argument is required")?;
    let num_inputs = *matches
        .get_one::<usize>("num_inputs")
        .context("num_inputs has a default")?;
    let max_candidates = matches.get_one::<usize>("max_candidates").copied();
    let show = matches.get_flag("show");

    let function = TruthTable::from_hex(num_inputs, text)
        .with_context(|| format!("parsing truth table {:?}", text))?;
    log::info!("query: function={} inputs={}", function, num_inputs);

    let engine = XagNpnResynthesis::new(params);
    let mut gb = GateBuilder::new("query".to_string(), GateBuilderOptions::opt());
    let leaves: Vec<AigOperand> = (0..num_inputs)
        .map(|i| gb.add_input(format!("x{}", i)))
        .collect();

    let mut found = Vec::new();
    engine.resynthesize(&mut gb, &function, &leaves, |candidate| {
        found.push(candidate);
        max_candidates.map_or(true, |max| found.len() < max)
    });

    let Some(expected) = function.extend_to_4() else {
        println!("{}-input functions are not supported; no candidates", num_inputs);
        return Ok(());
    };
    let vars: Vec<TruthTable16> = (0..num_inputs).map(TruthTable16::var).collect();

    let mut reports = Vec::with_capacity(found.len());
    for (index, &candidate) in found.iter().enumerate() {
        let actual = simulate_tt16(&gb.gates, &gb.inputs, &vars, candidate);
        if actual != expected {
            bail!(
                "candidate {} computes {} but {} was requested",
                index,
                actual,
                expected
            );
        }
        let gate_fn = candidate_gate_fn(&gb, index, candidate);
        if show {
            println!("{}", gate_fn);
        }
        reports.push(CandidateReport {
            index,
            and_gates: gate_fn.live_and_count(),
        });
    }

    if reports.is_empty() {
        println!("no candidates for {}", function);
    }
    for report in &reports {
        println!("candidate {}: and_gates={}", report.index, report.and_gates);
    }
    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}
