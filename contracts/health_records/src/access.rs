//! Grant relation and access request cooldowns.
//!
//! The grant relation is a sparse `(subject, grantee) → bool` map where an
//! absent entry means "not granted". The cooldown tracker remembers the
//! ledger timestamp of each requester's last accepted access request.

use crate::{validation, ContractError};
use common::{TTL_EXTEND_TO, TTL_THRESHOLD};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ── Storage keys ──────────────────────────────────────────────

const ACCESS: Symbol = symbol_short!("ACCESS");
const LAST_REQUEST: Symbol = symbol_short!("LAST_REQ");
const COOLDOWN: Symbol = symbol_short!("COOLDOWN");

/// Five minutes, measured on the ledger clock.
pub const DEFAULT_COOLDOWN_SECS: u64 = 300;

fn access_key(subject: &Address, grantee: &Address) -> (Symbol, Address, Address) {
    (ACCESS, subject.clone(), grantee.clone())
}

fn last_request_key(requester: &Address) -> (Symbol, Address) {
    (LAST_REQUEST, requester.clone())
}

fn extend_ttl_access_key(env: &Env, key: &(Symbol, Address, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn extend_ttl_address_key(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Cooldown ─────────────────────────────────────────────────

pub fn cooldown_window(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&COOLDOWN)
        .unwrap_or(DEFAULT_COOLDOWN_SECS)
}

pub fn set_cooldown_window(env: &Env, window_seconds: u64) -> Result<(), ContractError> {
    if window_seconds == 0 {
        return Err(ContractError::InvalidInput);
    }
    env.storage().instance().set(&COOLDOWN, &window_seconds);
    Ok(())
}

/// Timestamp of `requester`'s last accepted request, if any.
pub fn last_request(env: &Env, requester: &Address) -> Option<u64> {
    env.storage().persistent().get(&last_request_key(requester))
}

/// Accepts a request from `requester` for `subject`'s records at `now` if
/// strictly more than the cooldown window has passed since the requester's
/// previous accepted request. The first request is always accepted. The
/// cooldown is tracked per requester, not per subject.
pub fn request_access(
    env: &Env,
    requester: &Address,
    subject: &Address,
    now: u64,
) -> Result<(), ContractError> {
    validation::validate_identity(env, subject)?;

    if let Some(last) = last_request(env, requester) {
        if now.saturating_sub(last) <= cooldown_window(env) {
            return Err(ContractError::CooldownActive);
        }
    }

    let key = last_request_key(requester);
    env.storage().persistent().set(&key, &now);
    extend_ttl_address_key(env, &key);

    Ok(())
}

// ── Grant relation ───────────────────────────────────────────

pub fn is_granted(env: &Env, subject: &Address, grantee: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&access_key(subject, grantee))
        .unwrap_or(false)
}

pub fn grant(env: &Env, subject: &Address, grantee: &Address) {
    let key = access_key(subject, grantee);
    env.storage().persistent().set(&key, &true);
    extend_ttl_access_key(env, &key);
}

/// Revoking a pair that was never granted is a no-op.
pub fn revoke(env: &Env, subject: &Address, grantee: &Address) {
    env.storage()
        .persistent()
        .remove(&access_key(subject, grantee));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HealthRecordsContract;
    use soroban_sdk::testutils::Address as _;

    #[test]
    fn test_first_request_is_accepted_then_throttled() {
        let env = Env::default();
        let contract_id = env.register(HealthRecordsContract, ());
        let doctor = Address::generate(&env);
        let patient = Address::generate(&env);

        env.as_contract(&contract_id, || {
            assert_eq!(last_request(&env, &doctor), None);
            assert_eq!(request_access(&env, &doctor, &patient, 1_000), Ok(()));
            assert_eq!(last_request(&env, &doctor), Some(1_000));

            assert_eq!(
                request_access(&env, &doctor, &patient, 1_000 + DEFAULT_COOLDOWN_SECS),
                Err(ContractError::CooldownActive)
            );
            // A rejected request leaves the clock untouched
            assert_eq!(last_request(&env, &doctor), Some(1_000));

            assert_eq!(
                request_access(&env, &doctor, &patient, 1_001 + DEFAULT_COOLDOWN_SECS),
                Ok(())
            );
            assert_eq!(last_request(&env, &doctor), Some(1_001 + DEFAULT_COOLDOWN_SECS));
        });
    }

    #[test]
    fn test_cooldown_is_tracked_per_requester() {
        let env = Env::default();
        let contract_id = env.register(HealthRecordsContract, ());
        let doctor_a = Address::generate(&env);
        let doctor_b = Address::generate(&env);
        let patient = Address::generate(&env);

        env.as_contract(&contract_id, || {
            request_access(&env, &doctor_a, &patient, 50).unwrap();
            assert_eq!(
                request_access(&env, &doctor_a, &patient, 60),
                Err(ContractError::CooldownActive)
            );
            assert_eq!(request_access(&env, &doctor_b, &patient, 60), Ok(()));
        });
    }

    #[test]
    fn test_request_for_contract_address_is_rejected() {
        let env = Env::default();
        let contract_id = env.register(HealthRecordsContract, ());
        let doctor = Address::generate(&env);

        env.as_contract(&contract_id, || {
            assert_eq!(
                request_access(&env, &doctor, &contract_id, 1_000),
                Err(ContractError::InvalidInput)
            );
            // Identity is checked before the cooldown clock is touched
            assert_eq!(last_request(&env, &doctor), None);
        });
    }

    #[test]
    fn test_cooldown_window_configuration() {
        let env = Env::default();
        let contract_id = env.register(HealthRecordsContract, ());

        env.as_contract(&contract_id, || {
            assert_eq!(cooldown_window(&env), DEFAULT_COOLDOWN_SECS);
            assert_eq!(set_cooldown_window(&env, 0), Err(ContractError::InvalidInput));
            set_cooldown_window(&env, 60).unwrap();
            assert_eq!(cooldown_window(&env), 60);
        });
    }

    #[test]
    fn test_grant_and_revoke_are_idempotent() {
        let env = Env::default();
        let contract_id = env.register(HealthRecordsContract, ());
        let patient = Address::generate(&env);
        let doctor = Address::generate(&env);

        env.as_contract(&contract_id, || {
            assert!(!is_granted(&env, &patient, &doctor));

            revoke(&env, &patient, &doctor);
            assert!(!is_granted(&env, &patient, &doctor));

            grant(&env, &patient, &doctor);
            grant(&env, &patient, &doctor);
            assert!(is_granted(&env, &patient, &doctor));
            // The relation is directional
            assert!(!is_granted(&env, &doctor, &patient));

            revoke(&env, &patient, &doctor);
            assert!(!is_granted(&env, &patient, &doctor));
        });
    }
}
