use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value;
use crate::types::{warn_if_not_finite, with_metadata, ComputationOutput, Money, Rate};

/// Input parameters for a net present value calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpvInput {
    /// Discount rate per period
    pub rate: Rate,
    /// Equally spaced flows, the first at the end of period 1. Payments are
    /// negative, income positive.
    #[serde(default, alias = "values")]
    pub cash_flows: Vec<Money>,
}

impl NpvInput {
    pub fn value(&self) -> Money {
        time_value::npv(self.rate, &self.cash_flows)
    }
}

/// Output of the net present value calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpvOutput {
    pub net_present_value: Money,
    /// Number of flows discounted (the last one by `(1 + rate)^flow_count`)
    pub flow_count: usize,
}

/// Net present value of a series of future cash flows.
pub fn calculate_npv(input: &NpvInput) -> ComputationOutput<NpvOutput> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.cash_flows.is_empty() {
        warnings.push("No cash flows supplied; NPV is 0".into());
    }

    let net_present_value = input.value();
    warn_if_not_finite(&mut warnings, "net_present_value", net_present_value);

    let output = NpvOutput {
        net_present_value,
        flow_count: input.cash_flows.len(),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "NPV, flows discounted from the end of period 1",
        input,
        warnings,
        elapsed,
        output,
    )
}
