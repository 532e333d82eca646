pub mod bond;
pub mod schedule;
pub mod valuation;
