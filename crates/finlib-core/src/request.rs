//! JSON request dispatch over the calculators.
//!
//! A request names its formula in a `function` field and carries that
//! formula's input fields alongside it:
//!
//! ```json
//! { "function": "pmt", "rate": 0.005, "nper": 360, "pv": 250000 }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::annuity::payments::{self, IpmtInput, PmtInput};
use crate::annuity::periods::{self, NperInput};
use crate::annuity::schedule::{self, ScheduleInput};
use crate::annuity::values::{self, FvInput, PvInput};
use crate::discounting::npv::{self, NpvInput};
use crate::error::FinlibError;
use crate::FinlibResult;

/// Function names accepted in the `function` field (case-insensitive).
pub const SUPPORTED_FUNCTIONS: [&str; 7] = [
    "fv",
    "pv",
    "pmt",
    "nper",
    "npv",
    "ipmt",
    "interest_schedule",
];

/// A single formula evaluation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "function", rename_all = "snake_case")]
pub enum TvmRequest {
    Fv(FvInput),
    Pv(PvInput),
    Pmt(PmtInput),
    Nper(NperInput),
    Npv(NpvInput),
    Ipmt(IpmtInput),
    InterestSchedule(ScheduleInput),
}

impl TvmRequest {
    /// Decode a request, reporting an unknown `function` separately from
    /// malformed input fields.
    pub fn from_value(mut value: Value) -> FinlibResult<Self> {
        let name = match value.get("function").and_then(Value::as_str) {
            Some(name) => name.to_ascii_lowercase(),
            None => {
                return Err(FinlibError::InvalidInput {
                    field: "function".into(),
                    reason: format!(
                        "Request must name one of: {}",
                        SUPPORTED_FUNCTIONS.join(", ")
                    ),
                })
            }
        };

        if !SUPPORTED_FUNCTIONS.contains(&name.as_str()) {
            return Err(FinlibError::UnsupportedFunction(name));
        }

        if let Some(obj) = value.as_object_mut() {
            obj.insert("function".into(), Value::String(name));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn function_name(&self) -> &'static str {
        match self {
            TvmRequest::Fv(_) => "fv",
            TvmRequest::Pv(_) => "pv",
            TvmRequest::Pmt(_) => "pmt",
            TvmRequest::Nper(_) => "nper",
            TvmRequest::Npv(_) => "npv",
            TvmRequest::Ipmt(_) => "ipmt",
            TvmRequest::InterestSchedule(_) => "interest_schedule",
        }
    }
}

/// Run the requested calculator and return its envelope as JSON.
pub fn evaluate(request: &TvmRequest) -> FinlibResult<Value> {
    let value = match request {
        TvmRequest::Fv(input) => serde_json::to_value(values::calculate_fv(input))?,
        TvmRequest::Pv(input) => serde_json::to_value(values::calculate_pv(input))?,
        TvmRequest::Pmt(input) => serde_json::to_value(payments::calculate_pmt(input))?,
        TvmRequest::Nper(input) => serde_json::to_value(periods::calculate_nper(input))?,
        TvmRequest::Npv(input) => serde_json::to_value(npv::calculate_npv(input))?,
        TvmRequest::Ipmt(input) => serde_json::to_value(payments::calculate_ipmt(input))?,
        TvmRequest::InterestSchedule(input) => {
            serde_json::to_value(schedule::calculate_interest_schedule(input)?)?
        }
    };
    Ok(value)
}

/// String-in, string-out wrapper around [`evaluate`] for FFI callers.
pub fn evaluate_json(input_json: &str) -> FinlibResult<String> {
    let raw: Value = serde_json::from_str(input_json)?;
    let request = TvmRequest::from_value(raw)?;
    let output = evaluate(&request)?;
    Ok(serde_json::to_string(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_function_name_is_case_insensitive() {
        let req =
            TvmRequest::from_value(json!({"function": "FV", "rate": 0, "nper": 3, "pmt": 2}))
                .unwrap();
        assert_eq!(req.function_name(), "fv");
    }

    #[test]
    fn test_unknown_function() {
        let err = TvmRequest::from_value(json!({"function": "irr", "values": [1, 2]})).unwrap_err();
        assert!(matches!(err, FinlibError::UnsupportedFunction(ref f) if f == "irr"));
    }

    #[test]
    fn test_missing_function() {
        let err = TvmRequest::from_value(json!({"rate": 0.1})).unwrap_err();
        assert!(matches!(err, FinlibError::InvalidInput { ref field, .. } if field == "function"));
    }

    #[test]
    fn test_malformed_fields() {
        let err = TvmRequest::from_value(json!({"function": "pmt", "rate": "high"})).unwrap_err();
        assert!(matches!(err, FinlibError::SerializationError(_)));
    }
}
