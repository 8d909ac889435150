//! Canned mint configurations and the free-form custom one

/// Closed-loop token
pub mod closed_loop;
/// Free-form composition
pub mod custom;
/// `TokenTemplate` trait definition and shared parameters
pub mod interface;
/// Restricted-transfer token with confidential balances
pub mod restricted_transfer;
/// Scaled-amount security token
pub mod scaled_security;
