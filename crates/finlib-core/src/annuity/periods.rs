use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value;
use crate::types::{
    warn_if_not_finite, with_metadata, ComputationOutput, Money, PaymentTiming, Periods, Rate,
};

/// Input parameters for a number-of-periods calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NperInput {
    /// Interest rate per period
    pub rate: Rate,
    /// Payment made each period
    pub pmt: Money,
    /// Present value (lump sum today)
    pub pv: Money,
    /// Balance to reach after the last payment; 0 when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fv: Option<Money>,
    /// Payment timing; end of period when absent
    #[serde(default, alias = "type", skip_serializing_if = "Option::is_none")]
    pub timing: Option<PaymentTiming>,
}

impl NperInput {
    pub fn value(&self) -> Periods {
        time_value::nper(
            self.rate,
            self.pmt,
            self.pv,
            self.fv.unwrap_or(0.0),
            self.timing.unwrap_or_default(),
        )
    }
}

/// Output of the number-of-periods calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NperOutput {
    /// Periods needed; fractional when the target falls mid-period
    pub periods: Periods,
}

/// Number of periods for `pmt` to carry `pv` to `fv`.
///
/// NaN comes back (with a warning) when no positive period count exists,
/// e.g. payments too small to ever cover the interest.
pub fn calculate_nper(input: &NperInput) -> ComputationOutput<NperOutput> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let periods = input.value();
    warn_if_not_finite(&mut warnings, "periods", periods);

    let methodology = if input.rate == 0.0 {
        "Number of periods, zero rate: -(fv + pv) / pmt"
    } else {
        "Number of periods, ratio of logarithms over ln(1 + rate)"
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(methodology, input, warnings, elapsed, NperOutput { periods })
}
