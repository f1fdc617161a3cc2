use clap::Args;
use serde_json::Value;
use tracing::debug;

use finlib_core::discounting::npv::{self, NpvInput};

use crate::input;

/// Arguments for net present value
#[derive(Args)]
pub struct NpvArgs {
    /// Discount rate per period
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<f64>,

    /// Cash flows in order, first at the end of period 1 (e.g. "-100,30,30,130")
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub cash_flows: Option<Vec<f64>>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_npv(args: NpvArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let npv_input: NpvInput = match input::load(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => NpvInput {
            rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            cash_flows: args.cash_flows.unwrap_or_default(),
        },
    };
    debug!(?npv_input, "npv");

    let result = npv::calculate_npv(&npv_input);
    Ok(serde_json::to_value(result)?)
}
