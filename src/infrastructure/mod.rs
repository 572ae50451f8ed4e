//! Infrastructure layer: concrete implementations of the domain's
//! repository contracts.

pub mod persistence;
