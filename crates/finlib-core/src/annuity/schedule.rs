use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinlibError;
use crate::time_value;
use crate::types::{
    warn_if_not_finite, with_metadata, ComputationOutput, Money, PaymentTiming, Periods, Rate,
};
use crate::FinlibResult;

/// Upper bound on rows in one schedule (100 years of monthly payments).
pub const MAX_SCHEDULE_PERIODS: u32 = 1200;

/// Input parameters for a per-period interest/principal schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    /// Interest rate per period
    pub rate: Rate,
    /// Total number of payment periods; rows are produced for whole periods
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

/// One period of the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub period: u32,
    pub interest: Money,
    pub principal: Money,
}

/// Output of the schedule calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOutput {
    pub payment: Money,
    pub periods: Vec<ScheduleRow>,
    pub total_interest: Money,
    pub total_principal: Money,
}

/// Build the interest/principal split for every whole period `1..=nper`.
///
/// Unlike the single-period formulas this allocates one row per period, so
/// the period count is bounded: it must be finite and in
/// `1..=MAX_SCHEDULE_PERIODS` after truncation.
pub fn calculate_interest_schedule(
    input: &ScheduleInput,
) -> FinlibResult<ComputationOutput<ScheduleOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let count = validate_period_count(input.nper)?;
    if input.nper.fract() != 0.0 {
        warnings.push(format!(
            "nper = {} is fractional; schedule stops after period {count}",
            input.nper
        ));
    }

    let timing = input.timing.unwrap_or_default();
    let fv = input.fv.unwrap_or(0.0);
    let payment = time_value::pmt(input.rate, input.nper, input.pv, fv, timing);
    warn_if_not_finite(&mut warnings, "payment", payment);

    let mut periods = Vec::with_capacity(count as usize);
    let mut total_interest = 0.0;
    let mut total_principal = 0.0;

    for period in 1..=count {
        let interest =
            time_value::ipmt(input.rate, i64::from(period), input.nper, input.pv, fv, timing);
        let principal = payment - interest;
        total_interest += interest;
        total_principal += principal;
        periods.push(ScheduleRow {
            period,
            interest,
            principal,
        });
    }

    let output = ScheduleOutput {
        payment,
        periods,
        total_interest,
        total_principal,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Per-period interest and principal split of a level payment",
        input,
        warnings,
        elapsed,
        output,
    ))
}

fn validate_period_count(nper: Periods) -> FinlibResult<u32> {
    if !nper.is_finite() {
        return Err(FinlibError::InvalidInput {
            field: "nper".into(),
            reason: format!("Schedule needs a finite number of periods, got {nper}"),
        });
    }

    let whole = nper.trunc();
    if !(1.0..=f64::from(MAX_SCHEDULE_PERIODS)).contains(&whole) {
        return Err(FinlibError::InvalidInput {
            field: "nper".into(),
            reason: format!(
                "Schedule covers 1 to {MAX_SCHEDULE_PERIODS} whole periods, got {nper}"
            ),
        });
    }

    Ok(whole as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn twelve_month_loan() -> ScheduleInput {
        ScheduleInput {
            rate: 0.01,
            nper: 12.0,
            pv: 10000.0,
            fv: None,
            timing: None,
        }
    }

    #[test]
    fn test_schedule_amortises_principal() {
        let out = calculate_interest_schedule(&twelve_month_loan()).unwrap();
        let s = &out.result;
        assert_eq!(s.periods.len(), 12);
        assert!((s.payment - -888.4878867834169).abs() < 1e-9);
        // First period interest is a full period on the opening balance.
        assert!((s.periods[0].interest - -100.0).abs() < 1e-9);
        assert!((s.total_principal - -10000.0).abs() < 1e-6);
        assert!((s.total_interest - -661.8546414010045).abs() < 1e-6);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_schedule_rows_match_ipmt() {
        let input = twelve_month_loan();
        let out = calculate_interest_schedule(&input).unwrap();
        for row in &out.result.periods {
            let expected = time_value::ipmt(
                input.rate,
                i64::from(row.period),
                input.nper,
                input.pv,
                0.0,
                PaymentTiming::End,
            );
            assert_eq!(row.interest, expected);
        }
    }

    #[test]
    fn test_schedule_fractional_nper_warns() {
        let mut input = twelve_month_loan();
        input.nper = 12.5;
        let out = calculate_interest_schedule(&input).unwrap();
        assert_eq!(out.result.periods.len(), 12);
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn test_schedule_rejects_unbounded_nper() {
        let mut input = twelve_month_loan();
        input.nper = f64::INFINITY;
        assert!(matches!(
            calculate_interest_schedule(&input),
            Err(FinlibError::InvalidInput { .. })
        ));

        input.nper = 0.5;
        assert!(calculate_interest_schedule(&input).is_err());

        input.nper = 5000.0;
        assert!(calculate_interest_schedule(&input).is_err());
    }
}
