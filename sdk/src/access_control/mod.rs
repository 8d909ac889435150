//! Access control: allow/block lists enforced through permissionless freeze
//! and thaw

/// Gating program interface
pub mod gate;
/// Allow/block list program interface
pub mod list;
/// List updates interleaved with freeze and thaw
pub mod operations;
/// Access-control state derived from a mint
pub mod state;
