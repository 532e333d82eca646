pub mod query;
pub mod yield_curve;
