//! Service layer providing business-oriented supply operations on top of models.
//! - Separates business logic from data access.
//! - Validates typed inputs at the service boundary.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod supply_service;
#[cfg(test)]
pub mod test_support;
