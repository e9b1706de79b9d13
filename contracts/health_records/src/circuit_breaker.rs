use crate::{events, roles, ContractError};
use common::Role;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ── Types ─────────────────────────────────────────────────────

/// Defines the scope of the pause mechanism
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PauseScope {
    /// Halts every state-changing operation
    Global,
    /// Halts a single operation, identified by its pause symbol
    Function(Symbol),
}

// ── Operation symbols ────────────────────────────────────────

pub const ADD_RECORD: Symbol = symbol_short!("ADD_REC");
pub const REQUEST_ACCESS: Symbol = symbol_short!("REQ_ACC");
pub const GRANT_ACCESS: Symbol = symbol_short!("GRT_ACC");
pub const REVOKE_ACCESS: Symbol = symbol_short!("REV_ACC");
pub const REGISTER_PATIENT: Symbol = symbol_short!("REG_PAT");
pub const REGISTER_DOCTOR: Symbol = symbol_short!("REG_DOC");

// ── Storage Keys ─────────────────────────────────────────────

pub fn global_pause_key() -> Symbol {
    symbol_short!("P_GLOB")
}

pub fn function_pause_key(func: &Symbol) -> (Symbol, Symbol) {
    (symbol_short!("P_FUNC"), func.clone())
}

// ── Core Logistics ───────────────────────────────────────────

pub fn is_paused(env: &Env, scope: &PauseScope) -> bool {
    match scope {
        PauseScope::Global => env
            .storage()
            .instance()
            .get(&global_pause_key())
            .unwrap_or(false),
        PauseScope::Function(func_name) => env
            .storage()
            .instance()
            .get(&function_pause_key(func_name))
            .unwrap_or(false),
    }
}

/// Fails with `Paused` if either the whole contract or `func` is halted.
pub fn require_not_paused(env: &Env, func: &Symbol) -> Result<(), ContractError> {
    if is_paused(env, &PauseScope::Global)
        || is_paused(env, &PauseScope::Function(func.clone()))
    {
        return Err(ContractError::Paused);
    }
    Ok(())
}

fn set_paused(env: &Env, scope: &PauseScope, paused: bool) {
    match scope {
        PauseScope::Global => {
            env.storage().instance().set(&global_pause_key(), &paused);
        }
        PauseScope::Function(func_name) => {
            env.storage()
                .instance()
                .set(&function_pause_key(func_name), &paused);
        }
    }
}

/// Engages a circuit breaker for the specified scope. Requires `Admin`.
pub fn pause_contract(env: &Env, caller: &Address, scope: PauseScope) -> Result<(), ContractError> {
    roles::require_role(env, caller, Role::Admin)?;

    set_paused(env, &scope, true);
    events::publish_contract_paused(env, caller.clone(), scope);

    Ok(())
}

/// Releases a circuit breaker for the specified scope. Requires `Admin`.
pub fn resume_contract(
    env: &Env,
    caller: &Address,
    scope: PauseScope,
) -> Result<(), ContractError> {
    roles::require_role(env, caller, Role::Admin)?;

    set_paused(env, &scope, false);
    events::publish_contract_resumed(env, caller.clone(), scope);

    Ok(())
}
