pub mod leadsheet;
pub mod valuation;
