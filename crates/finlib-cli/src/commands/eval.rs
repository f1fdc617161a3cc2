use clap::Args;
use serde_json::Value;
use tracing::debug;

use finlib_core::request::{self, TvmRequest};

use crate::input;

/// Arguments for evaluating a JSON request
#[derive(Args)]
pub struct EvalArgs {
    /// Path to a JSON request, e.g. {"function": "pmt", "rate": 0.005, "nper": 360, "pv": 250000}
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_eval(args: EvalArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let raw: Value = if let Some(ref path) = args.input {
        input::file::read_json_value(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        data
    } else {
        return Err("--input <request.json> or stdin required for eval".into());
    };

    let req = TvmRequest::from_value(raw)?;
    debug!(function = req.function_name(), "eval");

    Ok(request::evaluate(&req)?)
}
