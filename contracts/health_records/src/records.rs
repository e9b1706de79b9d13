//! Per-subject, append-only record sequences.
//!
//! Each record lives in its own persistent entry keyed by `(subject, index)`
//! next to a per-subject length counter. Entries are written once and never
//! rewritten or removed, so a sequence only ever grows at its end.

use crate::{validation, ContractError};
use common::{TTL_EXTEND_TO, TTL_THRESHOLD};
use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol, Vec};

// ── Storage keys ──────────────────────────────────────────────

const RECORD: Symbol = symbol_short!("REC");
const RECORD_COUNT: Symbol = symbol_short!("REC_CNT");

fn record_key(subject: &Address, index: u32) -> (Symbol, Address, u32) {
    (RECORD, subject.clone(), index)
}

fn count_key(subject: &Address) -> (Symbol, Address) {
    (RECORD_COUNT, subject.clone())
}

fn extend_ttl_record_key(env: &Env, key: &(Symbol, Address, u32)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn extend_ttl_count_key(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Types ─────────────────────────────────────────────────────

/// An opaque reference to off-chain data owned by a subject.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DataRecord {
    pub data_hash: String,
    pub description: String,
    pub created_at: u64,
}

// ── Storage Functions ────────────────────────────────────────

/// Number of records in `subject`'s sequence.
pub fn len(env: &Env, subject: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&count_key(subject))
        .unwrap_or(0)
}

/// Appends a record to `subject`'s sequence and returns its index.
pub fn append(
    env: &Env,
    subject: &Address,
    data_hash: String,
    description: String,
    timestamp: u64,
) -> Result<u32, ContractError> {
    validation::validate_data_hash(&data_hash)?;
    validation::validate_description(&description)?;

    let index = len(env, subject);
    let next_len = index.checked_add(1).ok_or(ContractError::InvalidInput)?;

    let record = DataRecord {
        data_hash,
        description,
        created_at: timestamp,
    };

    let key = record_key(subject, index);
    env.storage().persistent().set(&key, &record);
    extend_ttl_record_key(env, &key);

    let key = count_key(subject);
    env.storage().persistent().set(&key, &next_len);
    extend_ttl_count_key(env, &key);

    Ok(index)
}

/// Returns the records in `[start, end)`, with `end` clamped to the sequence
/// length. `end <= start` is rejected before any clamping happens.
pub fn read_range(
    env: &Env,
    subject: &Address,
    start: u32,
    end: u32,
) -> Result<Vec<DataRecord>, ContractError> {
    if end <= start {
        return Err(ContractError::InvalidRange);
    }

    let end = end.min(len(env, subject));
    let mut records = Vec::new(env);

    for index in start..end {
        // Every index below the length counter has an entry
        let record: DataRecord = env
            .storage()
            .persistent()
            .get(&record_key(subject, index))
            .ok_or(ContractError::StorageCorrupted)?;
        records.push_back(record);
    }

    Ok(records)
}
