use crate::ContractError;
use soroban_sdk::{Address, Env, String};

pub const MAX_DATA_HASH_LEN: u32 = 256;
pub const MAX_DESCRIPTION_LEN: u32 = 1024;

fn validate_text(value: &String, max_len: u32) -> Result<(), ContractError> {
    if value.is_empty() || value.len() > max_len {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

/// A data hash is an opaque, non-empty reference to off-chain data.
pub fn validate_data_hash(data_hash: &String) -> Result<(), ContractError> {
    validate_text(data_hash, MAX_DATA_HASH_LEN)
}

pub fn validate_description(description: &String) -> Result<(), ContractError> {
    validate_text(description, MAX_DESCRIPTION_LEN)
}

/// Rejects the contract's own address, which can never act as a subject,
/// requester or grantee.
pub fn validate_identity(env: &Env, identity: &Address) -> Result<(), ContractError> {
    if *identity == env.current_contract_address() {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}
