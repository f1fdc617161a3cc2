use serde::{Deserialize, Serialize};

/// Monetary amounts. Plain binary64 so singular inputs surface as inf/NaN.
pub type Money = f64;

/// Rates expressed as decimals per period (0.005 = 0.5% per month).
pub type Rate = f64;

/// Period counts. Fractional counts are allowed.
pub type Periods = f64;

/// When payments fall within each period.
///
/// Deserialises from the spreadsheet `type` flag (`true` = beginning of the
/// period) or from the names `"begin"` / `"end"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "TimingRepr")]
pub enum PaymentTiming {
    /// Ordinary annuity: payment at the end of each period.
    #[default]
    End,
    /// Annuity-due: payment at the start of each period.
    Begin,
}

impl PaymentTiming {
    pub fn is_begin(self) -> bool {
        matches!(self, PaymentTiming::Begin)
    }

    /// Growth factor applied to the payment stream: `1 + rate` for
    /// annuity-due, `1` otherwise.
    pub(crate) fn factor(self, r1: f64) -> f64 {
        if self.is_begin() {
            r1
        } else {
            1.0
        }
    }
}

impl From<bool> for PaymentTiming {
    fn from(at_start: bool) -> Self {
        if at_start {
            PaymentTiming::Begin
        } else {
            PaymentTiming::End
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TimingRepr {
    Flag(bool),
    Named(NamedTiming),
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum NamedTiming {
    #[serde(alias = "start", alias = "due")]
    Begin,
    #[serde(alias = "ordinary")]
    End,
}

impl From<TimingRepr> for PaymentTiming {
    fn from(repr: TimingRepr) -> Self {
        match repr {
            TimingRepr::Flag(flag) => PaymentTiming::from(flag),
            TimingRepr::Named(NamedTiming::Begin) => PaymentTiming::Begin,
            TimingRepr::Named(NamedTiming::End) => PaymentTiming::End,
        }
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "ieee754_binary64".to_string(),
        },
    }
}

/// Push a warning when `value` is infinite or NaN.
///
/// Singular inputs are not errors; the caller still gets the IEEE value.
pub fn warn_if_not_finite(warnings: &mut Vec<String>, field: &str, value: f64) {
    if !value.is_finite() {
        warnings.push(format!(
            "{field} is {value}: inputs sit on a singularity of the formula"
        ));
    }
}
