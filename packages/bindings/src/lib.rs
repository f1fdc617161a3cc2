use napi::Result as NapiResult;
use napi_derive::napi;

use finlib_core::{time_value, PaymentTiming};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// `undefined` and `false` both mean end-of-period payments.
fn timing(at_start: Option<bool>) -> PaymentTiming {
    PaymentTiming::from(at_start.unwrap_or(false))
}

// ---------------------------------------------------------------------------
// Formulas. Trailing optional arguments may be omitted from the right, as
// in the spreadsheet functions.
// ---------------------------------------------------------------------------

#[napi]
pub fn fv(rate: f64, nper: f64, pmt: f64, pv: Option<f64>, payment_type: Option<bool>) -> f64 {
    time_value::fv(rate, nper, pmt, pv.unwrap_or(0.0), timing(payment_type))
}

#[napi]
pub fn pv(rate: f64, nper: f64, pmt: f64, fv: Option<f64>, payment_type: Option<bool>) -> f64 {
    time_value::pv(rate, nper, pmt, fv.unwrap_or(0.0), timing(payment_type))
}

#[napi]
pub fn pmt(rate: f64, nper: f64, pv: f64, fv: Option<f64>, payment_type: Option<bool>) -> f64 {
    time_value::pmt(rate, nper, pv, fv.unwrap_or(0.0), timing(payment_type))
}

#[napi]
pub fn nper(rate: f64, pmt: f64, pv: f64, fv: Option<f64>, payment_type: Option<bool>) -> f64 {
    time_value::nper(rate, pmt, pv, fv.unwrap_or(0.0), timing(payment_type))
}

/// Cash flows arrive as one array rather than as rest arguments.
#[napi]
pub fn npv(rate: f64, cash_flows: Vec<f64>) -> f64 {
    time_value::npv(rate, &cash_flows)
}

#[napi]
pub fn ipmt(
    rate: f64,
    per: i64,
    nper: f64,
    pv: f64,
    fv: Option<f64>,
    payment_type: Option<bool>,
) -> f64 {
    time_value::ipmt(rate, per, nper, pv, fv.unwrap_or(0.0), timing(payment_type))
}

// ---------------------------------------------------------------------------
// JSON request interface
// ---------------------------------------------------------------------------

/// Evaluate a `{"function": ..., ...}` request and return the full envelope.
#[napi]
pub fn evaluate(input_json: String) -> NapiResult<String> {
    finlib_core::request::evaluate_json(&input_json).map_err(to_napi_error)
}

#[napi]
pub fn interest_schedule(input_json: String) -> NapiResult<String> {
    let input: finlib_core::annuity::schedule::ScheduleInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = finlib_core::annuity::schedule::calculate_interest_schedule(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
