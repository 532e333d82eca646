pub mod error;
pub mod time_value;
pub mod types;

#[cfg(feature = "fixed_income")]
pub mod fixed_income;

#[cfg(feature = "curves")]
pub mod curves;

pub use error::BondCurveError;
pub use types::*;

#[cfg(feature = "fixed_income")]
pub use fixed_income::bond::Bond;

#[cfg(feature = "curves")]
pub use curves::yield_curve::{RatePair, RateType, YieldCurve};

/// Standard result type for all bondcurve operations
pub type BondCurveResult<T> = Result<T, BondCurveError>;
