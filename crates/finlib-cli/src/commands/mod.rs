pub mod annuity;
pub mod discounting;
pub mod eval;
