use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::time_value;
use crate::types::{
    warn_if_not_finite, with_metadata, ComputationOutput, Money, PaymentTiming, Periods, Rate,
};

// ---------------------------------------------------------------------------
// Payment
// ---------------------------------------------------------------------------

/// Input parameters for a level payment calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PmtInput {
    /// Interest rate per period
    pub rate: Rate,
    /// Total number of payment periods
    pub nper: Periods,
    /// Present value (loan principal or lump sum today)
    pub pv: Money,
    /// Balance to reach after the last payment; 0 when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fv: Option<Money>,
    /// Payment timing; end of period when absent
    #[serde(default, alias = "type", skip_serializing_if = "Option::is_none")]
    pub timing: Option<PaymentTiming>,
}

impl PmtInput {
    pub fn value(&self) -> Money {
        time_value::pmt(
            self.rate,
            self.nper,
            self.pv,
            self.fv.unwrap_or(0.0),
            self.timing.unwrap_or_default(),
        )
    }
}

/// Output of the payment calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PmtOutput {
    pub payment: Money,
}

/// Constant payment per period that amortises `pv` down (or up) to `fv`.
pub fn calculate_pmt(input: &PmtInput) -> ComputationOutput<PmtOutput> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let payment = input.value();
    warn_if_not_finite(&mut warnings, "payment", payment);

    let methodology = if input.rate == 0.0 {
        "Level payment, zero rate: -(fv + pv) / nper"
    } else {
        "Level payment, annuity amortisation"
    };

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(methodology, input, warnings, elapsed, PmtOutput { payment })
}

// ---------------------------------------------------------------------------
// Interest portion of a payment
// ---------------------------------------------------------------------------

/// Input parameters for the interest portion of one payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpmtInput {
    /// Interest rate per period
    pub rate: Rate,
    /// Period of interest, 1-indexed
    pub per: i64,
    /// Total number of payment periods
    pub nper: Periods,
    /// Present value (loan principal or lump sum today)
    pub pv: Money,
    /// Balance to reach after the last payment; 0 when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fv: Option<Money>,
    /// Payment timing; end of period when absent
    #[serde(default, alias = "type", skip_serializing_if = "Option::is_none")]
    pub timing: Option<PaymentTiming>,
}

impl IpmtInput {
    pub fn value(&self) -> Money {
        time_value::ipmt(
            self.rate,
            self.per,
            self.nper,
            self.pv,
            self.fv.unwrap_or(0.0),
            self.timing.unwrap_or_default(),
        )
    }
}

/// Output of the interest-portion calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpmtOutput {
    /// Interest component of the payment in period `per`
    pub interest: Money,
    /// Full level payment (same every period)
    pub payment: Money,
    /// Principal component: payment minus interest
    pub principal: Money,
}

/// Split the payment made in period `per` into interest and principal.
///
/// An out-of-range `per` is evaluated anyway and flagged in the warnings.
pub fn calculate_ipmt(input: &IpmtInput) -> ComputationOutput<IpmtOutput> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let timing = input.timing.unwrap_or_default();
    let fv = input.fv.unwrap_or(0.0);
    let payment = time_value::pmt(input.rate, input.nper, input.pv, fv, timing);
    let interest = time_value::ipmt(input.rate, input.per, input.nper, input.pv, fv, timing);
    let principal = payment - interest;

    if input.per < 1 || (input.per as f64) > input.nper {
        warnings.push(format!(
            "per = {} lies outside 1..={}; the split has no amortisation meaning",
            input.per, input.nper
        ));
    }
    warn_if_not_finite(&mut warnings, "interest", interest);

    let elapsed = start.elapsed().as_micros() as u64;
    with_metadata(
        "Interest portion of period payment via balance carried forward",
        input,
        warnings,
        elapsed,
        IpmtOutput {
            interest,
            payment,
            principal,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loan(per: i64, timing: Option<PaymentTiming>) -> IpmtInput {
        IpmtInput {
            rate: 0.1 / 12.0,
            per,
            nper: 24.0,
            pv: 100000.0,
            fv: Some(1000000.0),
            timing,
        }
    }

    #[test]
    fn test_pmt_defaults_when_absent() {
        let input: PmtInput =
            serde_json::from_str(r#"{"rate": 0, "nper": 4, "pv": 1000}"#).unwrap();
        assert_eq!(input.value(), -250.0);
    }

    #[test]
    fn test_pmt_zero_periods_warns() {
        let input = PmtInput {
            rate: 0.05,
            nper: 0.0,
            pv: 1000.0,
            fv: None,
            timing: None,
        };
        let out = calculate_pmt(&input);
        assert!(!out.result.payment.is_finite());
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_ipmt_first_period_ordinary() {
        let out = calculate_ipmt(&loan(1, None));
        assert!((out.result.interest - -833.3333333333334).abs() < 1e-9);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_ipmt_split_adds_up() {
        let out = calculate_ipmt(&loan(6, Some(PaymentTiming::Begin)));
        let r = &out.result;
        assert!((r.interest - 921.1473439736042).abs() < 1e-9);
        assert!((r.interest + r.principal - r.payment).abs() < 1e-9);
    }

    #[test]
    fn test_ipmt_out_of_range_period_still_evaluates() {
        let out = calculate_ipmt(&loan(30, None));
        assert!(out.result.interest.is_finite());
        assert_eq!(out.warnings.len(), 1);
        assert!(out.warnings[0].contains("per = 30"));
    }
}
