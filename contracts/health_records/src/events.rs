//! Audit log for the health records contract.
//!
//! Every successful state-changing operation publishes exactly one audit
//! event. Audit events carry a contract-wide sequence number so consumers
//! can detect gaps and replay them in application order. A rejected
//! invocation is rolled back by the host, so neither its events nor its
//! sequence bump are ever observable.

use crate::circuit_breaker::PauseScope;
use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

const AUDIT_SEQ: Symbol = symbol_short!("AUD_SEQ");

/// Event published when the contract is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub role_authority: Address,
    pub timestamp: u64,
}

/// Audit event published when a subject appends a data record.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DataAddedEvent {
    pub subject: Address,
    pub data_hash: String,
    pub description: String,
    pub index: u32,
    pub timestamp: u64,
    pub seq: u64,
}

/// Audit event published when a doctor's access request is accepted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessRequestedEvent {
    pub requester: Address,
    pub subject: Address,
    pub timestamp: u64,
    pub seq: u64,
}

/// Audit event published when a subject grants read access.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessGrantedEvent {
    pub subject: Address,
    pub grantee: Address,
    pub timestamp: u64,
    pub seq: u64,
}

/// Audit event published when a subject revokes read access.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessRevokedEvent {
    pub subject: Address,
    pub grantee: Address,
    pub timestamp: u64,
    pub seq: u64,
}

/// Event published when the access request cooldown window changes.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CooldownUpdatedEvent {
    pub updated_by: Address,
    pub window_seconds: u64,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseChangedEvent {
    pub caller: Address,
    pub scope: PauseScope,
    pub timestamp: u64,
}

/// Returns the number of audit events published so far.
pub fn audit_sequence(env: &Env) -> u64 {
    env.storage().instance().get(&AUDIT_SEQ).unwrap_or(0)
}

fn next_sequence(env: &Env) -> u64 {
    let seq = audit_sequence(env).saturating_add(1);
    env.storage().instance().set(&AUDIT_SEQ, &seq);
    seq
}

pub fn publish_initialized(env: &Env, admin: Address, role_authority: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        admin,
        role_authority,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes the audit event for an appended data record.
pub fn publish_data_added(
    env: &Env,
    subject: Address,
    data_hash: String,
    description: String,
    index: u32,
    timestamp: u64,
) {
    let topics = (symbol_short!("DATA_ADD"), subject.clone());
    let data = DataAddedEvent {
        subject,
        data_hash,
        description,
        index,
        timestamp,
        seq: next_sequence(env),
    };
    env.events().publish(topics, data);
}

/// Publishes the audit event for an accepted access request.
pub fn publish_access_requested(env: &Env, requester: Address, subject: Address, timestamp: u64) {
    let topics = (symbol_short!("ACC_REQ"), requester.clone(), subject.clone());
    let data = AccessRequestedEvent {
        requester,
        subject,
        timestamp,
        seq: next_sequence(env),
    };
    env.events().publish(topics, data);
}

/// Publishes the audit event for a granted access.
pub fn publish_access_granted(env: &Env, subject: Address, grantee: Address, timestamp: u64) {
    let topics = (symbol_short!("ACC_GRT"), subject.clone(), grantee.clone());
    let data = AccessGrantedEvent {
        subject,
        grantee,
        timestamp,
        seq: next_sequence(env),
    };
    env.events().publish(topics, data);
}

/// Publishes the audit event for a revoked access.
pub fn publish_access_revoked(env: &Env, subject: Address, grantee: Address, timestamp: u64) {
    let topics = (symbol_short!("ACC_REV"), subject.clone(), grantee.clone());
    let data = AccessRevokedEvent {
        subject,
        grantee,
        timestamp,
        seq: next_sequence(env),
    };
    env.events().publish(topics, data);
}

pub fn publish_cooldown_updated(env: &Env, updated_by: Address, window_seconds: u64) {
    let topics = (symbol_short!("CD_UPD"),);
    let data = CooldownUpdatedEvent {
        updated_by,
        window_seconds,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_contract_paused(env: &Env, caller: Address, scope: PauseScope) {
    let topics = (symbol_short!("PAUSED"), caller.clone());
    let data = PauseChangedEvent {
        caller,
        scope,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_contract_resumed(env: &Env, caller: Address, scope: PauseScope) {
    let topics = (symbol_short!("RESUMED"), caller.clone());
    let data = PauseChangedEvent {
        caller,
        scope,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
