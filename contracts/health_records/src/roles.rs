//! Bridge to the configured role authority contract.

use crate::ContractError;
use common::{Role, RoleAuthorityClient};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

const ROLE_AUTHORITY: Symbol = symbol_short!("ROLE_AUTH");

pub fn set_authority(env: &Env, authority: &Address) {
    env.storage().instance().set(&ROLE_AUTHORITY, authority);
}

pub fn authority(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&ROLE_AUTHORITY)
        .ok_or(ContractError::NotInitialized)
}

/// Asks the role authority whether `principal` currently holds `role`.
pub fn has_role(env: &Env, principal: &Address, role: Role) -> Result<bool, ContractError> {
    let client = RoleAuthorityClient::new(env, &authority(env)?);
    match client.try_has_role(principal, &role) {
        Ok(Ok(held)) => Ok(held),
        _ => Err(ContractError::RoleAuthorityFailure),
    }
}

pub fn require_role(env: &Env, principal: &Address, role: Role) -> Result<(), ContractError> {
    if !has_role(env, principal, role)? {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Delegates a role assignment to the role authority on behalf of `caller`.
pub fn grant_role(
    env: &Env,
    caller: &Address,
    principal: &Address,
    role: Role,
) -> Result<(), ContractError> {
    let client = RoleAuthorityClient::new(env, &authority(env)?);
    match client.try_grant_role(caller, principal, &role) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::RoleAuthorityFailure),
    }
}
