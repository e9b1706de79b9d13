#![cfg(test)]

use crate::{
    circuit_breaker::{self, PauseScope},
    ContractError, HealthRecordsContract, HealthRecordsContractClient,
};
use role_authority::{RoleAuthorityContract, RoleAuthorityContractClient};
use soroban_sdk::{testutils::Address as _, Address, Env, String};

fn setup_test() -> (Env, HealthRecordsContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let authority_id = env.register(RoleAuthorityContract, ());
    let authority = RoleAuthorityContractClient::new(&env, &authority_id);

    let contract_id = env.register(HealthRecordsContract, ());
    let client = HealthRecordsContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    authority.initialize(&admin);
    client.initialize(&admin, &authority_id);

    (env, client, admin)
}

#[test]
fn test_global_pause() {
    let (env, client, admin) = setup_test();

    let patient = Address::generate(&env);

    // Admin pauses globally
    client.pause_contract(&admin, &PauseScope::Global);
    assert!(client.is_paused(&PauseScope::Global));

    let res = client.try_register_patient(&admin, &patient);
    assert_eq!(res.unwrap_err().unwrap(), ContractError::Paused);

    // Reads keep working while paused
    assert!(!client.is_granted(&patient, &admin));
    assert_eq!(client.get_record_count(&patient), 0);

    client.resume_contract(&admin, &PauseScope::Global);
    assert!(!client.is_paused(&PauseScope::Global));

    client.register_patient(&admin, &patient);
}

#[test]
fn test_granular_pause() {
    let (env, client, admin) = setup_test();

    let patient = Address::generate(&env);
    let doctor = Address::generate(&env);
    client.register_patient(&admin, &patient);
    client.register_doctor(&admin, &doctor);

    // Admin pauses ONLY record additions
    let add_rec_scope = PauseScope::Function(circuit_breaker::ADD_RECORD);
    client.pause_contract(&admin, &add_rec_scope);

    let hash = String::from_str(&env, "QmHash");
    let description = String::from_str(&env, "ECG");
    let res = client.try_add_data_record(&patient, &hash, &description);
    assert_eq!(res.unwrap_err().unwrap(), ContractError::Paused);

    // Granting access is a different operation and still works
    client.grant_access(&patient, &doctor);
    assert!(client.is_granted(&patient, &doctor));

    client.resume_contract(&admin, &add_rec_scope);

    client.add_data_record(&patient, &hash, &description);
    assert_eq!(client.get_record_count(&patient), 1);
}

#[test]
fn test_paused_operation_emits_no_audit_event() {
    let (env, client, admin) = setup_test();

    let patient = Address::generate(&env);
    let doctor = Address::generate(&env);
    client.register_patient(&admin, &patient);
    client.register_doctor(&admin, &doctor);

    client.pause_contract(&admin, &PauseScope::Function(circuit_breaker::GRANT_ACCESS));

    let before = client.get_audit_sequence();
    assert!(client.try_grant_access(&patient, &doctor).is_err());
    assert_eq!(client.get_audit_sequence(), before);
    assert!(!client.is_granted(&patient, &doctor));
}

#[test]
fn test_unauthorized_pause() {
    let (env, client, admin) = setup_test();

    let doctor = Address::generate(&env);
    client.register_doctor(&admin, &doctor);

    let res = client.try_pause_contract(&doctor, &PauseScope::Global);
    assert_eq!(res.unwrap_err().unwrap(), ContractError::Unauthorized);
    assert!(!client.is_paused(&PauseScope::Global));

    let res = client.try_resume_contract(&doctor, &PauseScope::Global);
    assert_eq!(res.unwrap_err().unwrap(), ContractError::Unauthorized);
}
