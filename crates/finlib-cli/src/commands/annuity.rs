use clap::Args;
use serde_json::Value;
use tracing::debug;

use finlib_core::annuity::payments::{self, IpmtInput, PmtInput};
use finlib_core::annuity::periods::{self, NperInput};
use finlib_core::annuity::schedule::{self, ScheduleInput};
use finlib_core::annuity::values::{self, FvInput, PvInput};
use finlib_core::PaymentTiming;

use crate::input;

fn timing_flag(begin: bool) -> Option<PaymentTiming> {
    begin.then_some(PaymentTiming::Begin)
}

/// Arguments for future value
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct FvArgs {
    /// Interest rate per period (e.g. 0.005 for 0.5% a month)
    #[arg(long)]
    pub rate: Option<f64>,

    /// Total number of payment periods
    #[arg(long)]
    pub nper: Option<f64>,

    /// Payment made each period (negative when paid out)
    #[arg(long)]
    pub pmt: Option<f64>,

    /// Lump sum today [default: 0]
    #[arg(long)]
    pub pv: Option<f64>,

    /// Payments at the start of each period (annuity-due)
    #[arg(long)]
    pub begin: bool,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_fv(args: FvArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fv_input: FvInput = match input::load(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => FvInput {
            rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            nper: args.nper.ok_or("--nper is required (or provide --input)")?,
            pmt: args.pmt.ok_or("--pmt is required (or provide --input)")?,
            pv: args.pv,
            timing: timing_flag(args.begin),
        },
    };
    debug!(?fv_input, "fv");

    let result = values::calculate_fv(&fv_input);
    Ok(serde_json::to_value(result)?)
}

/// Arguments for present value
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct PvArgs {
    /// Interest rate per period
    #[arg(long)]
    pub rate: Option<f64>,

    /// Total number of payment periods
    #[arg(long)]
    pub nper: Option<f64>,

    /// Payment made each period (negative when paid out)
    #[arg(long)]
    pub pmt: Option<f64>,

    /// Balance to reach after the last payment [default: 0]
    #[arg(long)]
    pub fv: Option<f64>,

    /// Payments at the start of each period (annuity-due)
    #[arg(long)]
    pub begin: bool,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_pv(args: PvArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let pv_input: PvInput = match input::load(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => PvInput {
            rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            nper: args.nper.ok_or("--nper is required (or provide --input)")?,
            pmt: args.pmt.ok_or("--pmt is required (or provide --input)")?,
            fv: args.fv,
            timing: timing_flag(args.begin),
        },
    };
    debug!(?pv_input, "pv");

    let result = values::calculate_pv(&pv_input);
    Ok(serde_json::to_value(result)?)
}

/// Arguments for level payment
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct PmtArgs {
    /// Interest rate per period
    #[arg(long)]
    pub rate: Option<f64>,

    /// Total number of payment periods
    #[arg(long)]
    pub nper: Option<f64>,

    /// Present value (loan principal)
    #[arg(long)]
    pub pv: Option<f64>,

    /// Balance to reach after the last payment [default: 0]
    #[arg(long)]
    pub fv: Option<f64>,

    /// Payments at the start of each period (annuity-due)
    #[arg(long)]
    pub begin: bool,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_pmt(args: PmtArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let pmt_input: PmtInput = match input::load(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => PmtInput {
            rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            nper: args.nper.ok_or("--nper is required (or provide --input)")?,
            pv: args.pv.ok_or("--pv is required (or provide --input)")?,
            fv: args.fv,
            timing: timing_flag(args.begin),
        },
    };
    debug!(?pmt_input, "pmt");

    let result = payments::calculate_pmt(&pmt_input);
    Ok(serde_json::to_value(result)?)
}

/// Arguments for number of periods
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct NperArgs {
    /// Interest rate per period
    #[arg(long)]
    pub rate: Option<f64>,

    /// Payment made each period (negative when paid out)
    #[arg(long)]
    pub pmt: Option<f64>,

    /// Present value
    #[arg(long)]
    pub pv: Option<f64>,

    /// Balance to reach after the last payment [default: 0]
    #[arg(long)]
    pub fv: Option<f64>,

    /// Payments at the start of each period (annuity-due)
    #[arg(long)]
    pub begin: bool,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_nper(args: NperArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let nper_input: NperInput = match input::load(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => NperInput {
            rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            pmt: args.pmt.ok_or("--pmt is required (or provide --input)")?,
            pv: args.pv.ok_or("--pv is required (or provide --input)")?,
            fv: args.fv,
            timing: timing_flag(args.begin),
        },
    };
    debug!(?nper_input, "nper");

    let result = periods::calculate_nper(&nper_input);
    Ok(serde_json::to_value(result)?)
}

/// Arguments for the interest portion of one payment
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct IpmtArgs {
    /// Interest rate per period
    #[arg(long)]
    pub rate: Option<f64>,

    /// Period to inspect, 1-indexed
    #[arg(long)]
    pub per: Option<i64>,

    /// Total number of payment periods
    #[arg(long)]
    pub nper: Option<f64>,

    /// Present value (loan principal)
    #[arg(long)]
    pub pv: Option<f64>,

    /// Balance to reach after the last payment [default: 0]
    #[arg(long)]
    pub fv: Option<f64>,

    /// Payments at the start of each period (annuity-due)
    #[arg(long)]
    pub begin: bool,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_ipmt(args: IpmtArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let ipmt_input: IpmtInput = match input::load(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => IpmtInput {
            rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            per: args.per.ok_or("--per is required (or provide --input)")?,
            nper: args.nper.ok_or("--nper is required (or provide --input)")?,
            pv: args.pv.ok_or("--pv is required (or provide --input)")?,
            fv: args.fv,
            timing: timing_flag(args.begin),
        },
    };
    debug!(?ipmt_input, "ipmt");

    let result = payments::calculate_ipmt(&ipmt_input);
    Ok(serde_json::to_value(result)?)
}

/// Arguments for the per-period interest schedule
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ScheduleArgs {
    /// Interest rate per period
    #[arg(long)]
    pub rate: Option<f64>,

    /// Total number of payment periods
    #[arg(long)]
    pub nper: Option<f64>,

    /// Present value (loan principal)
    #[arg(long)]
    pub pv: Option<f64>,

    /// Balance to reach after the last payment [default: 0]
    #[arg(long)]
    pub fv: Option<f64>,

    /// Payments at the start of each period (annuity-due)
    #[arg(long)]
    pub begin: bool,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let schedule_input: ScheduleInput = match input::load(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => ScheduleInput {
            rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            nper: args.nper.ok_or("--nper is required (or provide --input)")?,
            pv: args.pv.ok_or("--pv is required (or provide --input)")?,
            fv: args.fv,
            timing: timing_flag(args.begin),
        },
    };
    debug!(?schedule_input, "schedule");

    let result = schedule::calculate_interest_schedule(&schedule_input)?;
    Ok(serde_json::to_value(result)?)
}
