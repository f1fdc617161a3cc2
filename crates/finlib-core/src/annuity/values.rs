use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value;
use crate::types::{
    warn_if_not_finite, with_metadata, ComputationOutput, Money, PaymentTiming, Periods, Rate,
};

// ---------------------------------------------------------------------------
// Future value
// ---------------------------------------------------------------------------

/// Input parameters for a future value calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FvInput {
    /// Interest rate per period (e.g. 0.06 / 4 for quarterly at 6% APR)
    pub rate: Rate,
    /// Total number of payment periods
    pub nper: Periods,
    /// Payment made each period
    pub pmt: Money,
    /// Lump sum today; 0 when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pv: Option<Money>,
    /// Payment timing; end of period when absent
    #[serde(default, alias = "type", skip_serializing_if = "Option::is_none")]
    pub timing: Option<PaymentTiming>,
}

impl FvInput {
    /// Evaluate the formula with defaults applied to absent fields.
    pub fn value(&self) -> Money {
        time_value::fv(
            self.rate,
            self.nper,
            self.pmt,
            self.pv.unwrap_or(0.0),
            self.timing.unwrap_or_default(),
        )
    }
}

/// Output of the future value calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FvOutput {
    pub future_value: Money,
}

/// Future value of constant payments plus a lump sum, compounded per period.
pub fn calculate_fv(input: &FvInput) -> ComputationOutput<FvOutput> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let future_value = input.value();
    warn_if_not_finite(&mut warnings, "future_value", future_value);

    let methodology = if input.rate == 0.0 {
        "Future value, zero rate: -(pv + nper * pmt)"
    } else {
        "Future value, compound growth of payment stream and lump sum"
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        methodology,
        input,
        warnings,
        elapsed,
        FvOutput { future_value },
    )
}

// ---------------------------------------------------------------------------
// Present value
// ---------------------------------------------------------------------------

/// Input parameters for a present value calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PvInput {
    /// Interest rate per period
    pub rate: Rate,
    /// Total number of payment periods
    pub nper: Periods,
    /// Payment made each period
    pub pmt: Money,
    /// Balance to reach after the last payment; 0 when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fv: Option<Money>,
    /// Payment timing; end of period when absent
    #[serde(default, alias = "type", skip_serializing_if = "Option::is_none")]
    pub timing: Option<PaymentTiming>,
}

impl PvInput {
    pub fn value(&self) -> Money {
        time_value::pv(
            self.rate,
            self.nper,
            self.pmt,
            self.fv.unwrap_or(0.0),
            self.timing.unwrap_or_default(),
        )
    }
}

/// Output of the present value calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PvOutput {
    pub present_value: Money,
}

/// Present value of a payment stream plus a target future balance.
pub fn calculate_pv(input: &PvInput) -> ComputationOutput<PvOutput> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let present_value = input.value();
    warn_if_not_finite(&mut warnings, "present_value", present_value);

    let methodology = if input.rate == 0.0 {
        "Present value, zero rate: -(nper * pmt + fv)"
    } else {
        "Present value, discounted payment stream and future balance"
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        methodology,
        input,
        warnings,
        elapsed,
        PvOutput { present_value },
    )
}
