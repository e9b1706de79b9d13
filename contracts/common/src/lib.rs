//! Shared types for the health records contract suite.
//!
//! This crate provides:
//! - [`Role`]: the roles recognised across the suite.
//! - [`RoleAuthority`]: the cross-contract interface any role authority
//!   must expose, together with the generated [`RoleAuthorityClient`].
//! - [`RoleError`]: error codes returned by a role authority.
//! - TTL constants used when extending persistent storage entries.

#![no_std]

pub mod roles;

pub use roles::*;

// ── Storage TTL ──────────────────────────────────────────────────────────────

/// Ledger count below which a persistent entry's TTL gets extended.
pub const TTL_THRESHOLD: u32 = 5184000;

/// Ledger count a persistent entry's TTL is extended to.
pub const TTL_EXTEND_TO: u32 = 10368000;
