#![no_std]

//! Patient-owned health record references with doctor access governance.
//!
//! Patients append opaque data references to their own record sequence and
//! decide which doctors may read it. Doctors announce interest through
//! rate-limited access requests. Role membership (admin, patient, doctor) is
//! answered by an external role authority contract whose address is fixed at
//! initialization. Every successful state change publishes one audit event.

pub mod access;
pub mod circuit_breaker;
pub mod errors;
pub mod events;
pub mod records;
pub mod roles;
pub mod validation;

use circuit_breaker::PauseScope;
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol, Vec};

pub use access::DEFAULT_COOLDOWN_SECS;
pub use common::Role;
pub use errors::{ContractError, ErrorCategory, ErrorSeverity};
pub use records::DataRecord;

/// Storage keys for the contract
const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");

#[contract]
pub struct HealthRecordsContract;

#[contractimpl]
impl HealthRecordsContract {
    /// Initialize the contract with an admin and the role authority to consult.
    pub fn initialize(env: Env, admin: Address, role_authority: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();

        validation::validate_identity(&env, &admin)?;
        validation::validate_identity(&env, &role_authority)?;

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);
        roles::set_authority(&env, &role_authority);

        events::publish_initialized(&env, admin, role_authority);

        Ok(())
    }

    /// Get the admin address
    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)
    }

    /// Get the role authority contract address
    pub fn get_role_authority(env: Env) -> Result<Address, ContractError> {
        roles::authority(&env)
    }

    /// Check if the contract is initialized
    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    // ======================== Records ========================

    /// Append a data record to the caller's own sequence.
    /// Returns the new record's position in the sequence.
    pub fn add_data_record(
        env: Env,
        caller: Address,
        data_hash: String,
        description: String,
    ) -> Result<u32, ContractError> {
        circuit_breaker::require_not_paused(&env, &circuit_breaker::ADD_RECORD)?;
        caller.require_auth();

        roles::require_role(&env, &caller, Role::Patient)?;

        let now = env.ledger().timestamp();
        let index = records::append(&env, &caller, data_hash.clone(), description.clone(), now)?;

        events::publish_data_added(&env, caller, data_hash, description, index, now);

        Ok(index)
    }

    /// Read `subject`'s records in `[start, end)`, clamping `end` to the
    /// sequence length. The caller must be the subject or hold a grant.
    pub fn view_data_records(
        env: Env,
        caller: Address,
        subject: Address,
        start: u32,
        end: u32,
    ) -> Result<Vec<DataRecord>, ContractError> {
        caller.require_auth();
        Self::require_initialized(&env)?;

        if caller != subject && !access::is_granted(&env, &subject, &caller) {
            return Err(ContractError::Unauthorized);
        }

        records::read_range(&env, &subject, start, end)
    }

    /// Number of records in `subject`'s sequence.
    pub fn get_record_count(env: Env, subject: Address) -> u32 {
        records::len(&env, &subject)
    }

    // ======================== Access ========================

    /// A doctor asks `subject` for access. Rate limited per doctor; does not
    /// grant anything by itself.
    pub fn request_access(env: Env, caller: Address, subject: Address) -> Result<(), ContractError> {
        circuit_breaker::require_not_paused(&env, &circuit_breaker::REQUEST_ACCESS)?;
        caller.require_auth();

        roles::require_role(&env, &caller, Role::Doctor)?;

        let now = env.ledger().timestamp();
        access::request_access(&env, &caller, &subject, now)?;

        events::publish_access_requested(&env, caller, subject, now);

        Ok(())
    }

    /// The calling patient grants `grantee` read access to its records.
    /// `grantee` must hold the doctor role at the time of the grant.
    pub fn grant_access(env: Env, caller: Address, grantee: Address) -> Result<(), ContractError> {
        circuit_breaker::require_not_paused(&env, &circuit_breaker::GRANT_ACCESS)?;
        caller.require_auth();

        roles::require_role(&env, &caller, Role::Patient)?;
        validation::validate_identity(&env, &grantee)?;
        roles::require_role(&env, &grantee, Role::Doctor)?;

        let now = env.ledger().timestamp();
        access::grant(&env, &caller, &grantee);
        events::publish_access_granted(&env, caller, grantee, now);

        Ok(())
    }

    /// The calling patient revokes `grantee`'s read access. Succeeds even if
    /// no access was ever granted.
    pub fn revoke_access(env: Env, caller: Address, grantee: Address) -> Result<(), ContractError> {
        circuit_breaker::require_not_paused(&env, &circuit_breaker::REVOKE_ACCESS)?;
        caller.require_auth();

        roles::require_role(&env, &caller, Role::Patient)?;
        validation::validate_identity(&env, &grantee)?;

        let now = env.ledger().timestamp();
        access::revoke(&env, &caller, &grantee);
        events::publish_access_revoked(&env, caller, grantee, now);

        Ok(())
    }

    /// Check whether `grantee` may currently read `subject`'s records.
    pub fn is_granted(env: Env, subject: Address, grantee: Address) -> bool {
        access::is_granted(&env, &subject, &grantee)
    }

    /// Ledger timestamp of `requester`'s last accepted access request.
    pub fn get_last_request(env: Env, requester: Address) -> Option<u64> {
        access::last_request(&env, &requester)
    }

    // ======================== Administration ========================

    /// Register `patient` with the role authority. Requires `Admin`.
    pub fn register_patient(env: Env, caller: Address, patient: Address) -> Result<(), ContractError> {
        circuit_breaker::require_not_paused(&env, &circuit_breaker::REGISTER_PATIENT)?;
        Self::register(&env, &caller, &patient, Role::Patient)
    }

    /// Register `doctor` with the role authority. Requires `Admin`.
    pub fn register_doctor(env: Env, caller: Address, doctor: Address) -> Result<(), ContractError> {
        circuit_breaker::require_not_paused(&env, &circuit_breaker::REGISTER_DOCTOR)?;
        Self::register(&env, &caller, &doctor, Role::Doctor)
    }

    /// Configure the minimum time between a doctor's access requests.
    pub fn set_cooldown_window(
        env: Env,
        caller: Address,
        window_seconds: u64,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        roles::require_role(&env, &caller, Role::Admin)?;

        access::set_cooldown_window(&env, window_seconds)?;
        events::publish_cooldown_updated(&env, caller, window_seconds);

        Ok(())
    }

    pub fn get_cooldown_window(env: Env) -> u64 {
        access::cooldown_window(&env)
    }

    /// Number of audit events published so far.
    pub fn get_audit_sequence(env: Env) -> u64 {
        events::audit_sequence(&env)
    }

    pub fn pause_contract(env: Env, caller: Address, scope: PauseScope) -> Result<(), ContractError> {
        caller.require_auth();
        circuit_breaker::pause_contract(&env, &caller, scope)
    }

    pub fn resume_contract(env: Env, caller: Address, scope: PauseScope) -> Result<(), ContractError> {
        caller.require_auth();
        circuit_breaker::resume_contract(&env, &caller, scope)
    }

    pub fn is_paused(env: Env, scope: PauseScope) -> bool {
        circuit_breaker::is_paused(&env, &scope)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }

    // ======================== Internal helpers ========================

    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    fn register(env: &Env, caller: &Address, target: &Address, role: Role) -> Result<(), ContractError> {
        caller.require_auth();

        roles::require_role(env, caller, Role::Admin)?;
        validation::validate_identity(env, target)?;

        roles::grant_role(env, caller, target, role)
    }
}


#[cfg(test)]
mod test_pause;
