//! Annuity calculators: FV, PV, PMT, NPER, IPMT and the interest schedule,
//! each wrapped in the standard computation envelope.

pub mod payments;
pub mod periods;
pub mod schedule;
pub mod values;
