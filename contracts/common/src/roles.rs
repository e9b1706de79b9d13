use soroban_sdk::{contractclient, contracterror, contracttype, Address, Env};

/// Roles a principal may hold in the suite.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    /// May register patients and doctors and configure contracts.
    Admin = 1,
    /// Owns a record sequence and controls who may read it.
    Patient = 2,
    /// May request and be granted read access to patient records.
    Doctor = 3,
}

/// Errors returned by a role authority contract.
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum RoleError {
    /// The role authority has not been initialised yet.
    NotInitialized = 1,

    /// `initialize` was called more than once.
    AlreadyInitialized = 2,

    /// The caller does not hold the `Admin` role.
    Unauthorized = 3,

    /// The requested change is not allowed (e.g. stripping the bootstrap
    /// admin of its `Admin` role).
    InvalidInput = 4,
}

/// Capability interface the record contracts query for role membership.
///
/// Any deployed contract exposing these functions can serve as the role
/// authority; consumers only hold its address and talk to it through
/// [`RoleAuthorityClient`].
#[contractclient(name = "RoleAuthorityClient")]
pub trait RoleAuthority {
    /// Returns `true` if `principal` currently holds `role`.
    fn has_role(env: Env, principal: Address, role: Role) -> bool;

    /// Grants `role` to `principal`. `caller` must hold `Admin`.
    fn grant_role(env: Env, caller: Address, principal: Address, role: Role)
        -> Result<(), RoleError>;

    /// Revokes `role` from `principal`. `caller` must hold `Admin`.
    fn revoke_role(
        env: Env,
        caller: Address,
        principal: Address,
        role: Role,
    ) -> Result<(), RoleError>;
}
