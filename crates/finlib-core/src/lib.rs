pub mod error;
pub mod time_value;
pub mod types;

#[cfg(feature = "annuity")]
pub mod annuity;

#[cfg(feature = "discounting")]
pub mod discounting;

#[cfg(all(feature = "annuity", feature = "discounting"))]
pub mod request;

pub use error::FinlibError;
pub use time_value::{fv, ipmt, nper, npv, pmt, pv};
pub use types::*;

/// Standard result type for the fallible finlib layers.
///
/// The formulas in [`time_value`] never fail; only input decoding and the
/// schedule builder return this.
pub type FinlibResult<T> = Result<T, FinlibError>;
