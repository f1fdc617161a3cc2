//! Closed-form time-value-of-money formulas with spreadsheet semantics.
//!
//! Sign convention: cash paid out is negative, cash received is positive.
//! None of these functions validate their inputs. Singular inputs (a rate of
//! -100%, zero periods, logarithms of non-positive numbers) produce the
//! corresponding IEEE-754 infinities or NaN.

use crate::types::{Money, PaymentTiming, Periods, Rate};

/// Future value of a constant payment stream plus a lump sum today.
///
/// rate = 0: FV = -(pv + nper * pmt)
/// otherwise: FV = (1 - r1^n) * k * pmt / rate - pv * r1^n,
/// where r1 = 1 + rate and k = r1 for annuity-due, 1 otherwise.
pub fn fv(rate: Rate, nper: Periods, pmt: Money, pv: Money, timing: PaymentTiming) -> Money {
    if rate == 0.0 {
        return -(pv + nper * pmt);
    }

    let r1 = rate + 1.0;
    let growth = r1.powf(nper);

    (1.0 - growth) * timing.factor(r1) * pmt / rate - pv * growth
}

/// Present value of a constant payment stream plus a target future balance.
pub fn pv(rate: Rate, nper: Periods, pmt: Money, fv: Money, timing: PaymentTiming) -> Money {
    if rate == 0.0 {
        return -(nper * pmt + fv);
    }

    let r1 = rate + 1.0;
    let growth = r1.powf(nper);

    ((1.0 - growth) / rate * timing.factor(r1) * pmt - fv) / growth
}

/// Constant per-period payment that takes `pv` to `fv` over `nper` periods.
///
/// Degenerate inputs (`nper == 0`, or `r1^nper == 1` with a non-zero rate)
/// divide by zero and return inf/NaN.
pub fn pmt(rate: Rate, nper: Periods, pv: Money, fv: Money, timing: PaymentTiming) -> Money {
    if rate == 0.0 {
        return -(fv + pv) / nper;
    }

    let r1 = rate + 1.0;
    let growth = r1.powf(nper);

    (fv + pv * growth) * rate / (timing.factor(r1) * (1.0 - growth))
}

/// Net present value of equally spaced cash flows.
///
/// The first flow is discounted by one full period, the second by two, and
/// so on. An empty slice is worth 0.
pub fn npv(rate: Rate, cash_flows: &[Money]) -> Money {
    let r1 = rate + 1.0;
    let mut trate = r1;
    let mut total = 0.0;

    for cf in cash_flows {
        total += cf / trate;
        trate *= r1;
    }

    total
}

/// Number of periods needed to move `pv` to `fv` with payment `pmt`.
pub fn nper(rate: Rate, pmt: Money, pv: Money, fv: Money, timing: PaymentTiming) -> Periods {
    if rate == 0.0 {
        return -(fv + pv) / pmt;
    }

    let r1 = rate + 1.0;
    let ryr = timing.factor(r1) * pmt / rate;

    // Pick the sign that keeps both log arguments positive. Note the pv sign
    // flips together with the fv/ryr order; this pairing is load-bearing.
    let (a1, a2) = if ryr - fv < 0.0 {
        ((fv - ryr).ln(), (-pv - ryr).ln())
    } else {
        ((ryr - fv).ln(), (pv + ryr).ln())
    };
    let a3 = r1.ln();

    (a1 - a2) / a3
}

/// Interest portion of the payment made in period `per` (1-indexed).
///
/// `per` is not range-checked; values outside `1..=nper` still evaluate.
pub fn ipmt(
    rate: Rate,
    per: i64,
    nper: Periods,
    pv: Money,
    fv: Money,
    timing: PaymentTiming,
) -> Money {
    let payment = pmt(rate, nper, pv, fv, timing);

    let interest = if per == 1 {
        match timing {
            // Nothing has accrued when the first payment lands at the start.
            PaymentTiming::Begin => 0.0,
            PaymentTiming::End => -pv,
        }
    } else {
        match timing {
            PaymentTiming::Begin => {
                self::fv(rate, (per - 2) as f64, payment, pv, PaymentTiming::Begin) - payment
            }
            PaymentTiming::End => {
                self::fv(rate, (per - 1) as f64, payment, pv, PaymentTiming::End)
            }
        }
    };

    interest * rate
}
