//! Integration tests for the typed vault wrapper.

use serde::{Deserialize, Serialize};
use secvault::errors::VaultError;
use secvault::{TypedVault, Vault};
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct DbConfig {
    host: String,
    port: u16,
    replicas: Vec<String>,
}

fn sample_config() -> DbConfig {
    DbConfig {
        host: "db.internal".to_string(),
        port: 5432,
        replicas: vec!["replica-1".to_string(), "replica-2".to_string()],
    }
}

// ---------------------------------------------------------------------------
// Typed round-trips
// ---------------------------------------------------------------------------

#[test]
fn add_and_get_struct_roundtrip() {
    let mut vault: TypedVault<DbConfig> = TypedVault::new();
    let config = sample_config();

    vault.add("primary", &config, "pw").unwrap();
    let recovered = vault.get("primary", "pw").unwrap();
    assert_eq!(recovered, config);
}

#[test]
fn primitive_payloads_roundtrip() {
    let mut numbers: TypedVault<Vec<i64>> = TypedVault::new();
    numbers.add("fib", &vec![1, 1, 2, 3, 5, 8], "pw").unwrap();
    assert_eq!(numbers.get("fib", "pw").unwrap(), vec![1, 1, 2, 3, 5, 8]);
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

#[test]
fn get_missing_entry_is_an_error_unlike_string_vault() {
    let vault: TypedVault<DbConfig> = TypedVault::new();
    let err = vault.get("missing", "pw").unwrap_err();
    assert!(matches!(err, VaultError::EntryNotFound(ref name) if name == "missing"));
}

#[test]
fn non_json_payload_is_a_serialization_error() {
    // Store raw text through the string vault, then read it back typed.
    let mut inner = Vault::new();
    inner.add("entry", "definitely not json", "pw").unwrap();

    let typed: TypedVault<DbConfig> = TypedVault::from_vault(inner);
    let err = typed.get("entry", "pw").unwrap_err();
    assert!(matches!(err, VaultError::SerializationError(_)));
}

#[test]
fn type_mismatch_is_a_serialization_error() {
    let mut inner = Vault::new();
    inner.add("entry", "[1, 2, 3]", "pw").unwrap();

    // Valid JSON, wrong shape for DbConfig.
    let typed: TypedVault<DbConfig> = TypedVault::from_vault(inner);
    assert!(matches!(
        typed.get("entry", "pw"),
        Err(VaultError::SerializationError(_))
    ));
}

#[test]
fn duplicate_add_is_rejected() {
    let mut vault: TypedVault<DbConfig> = TypedVault::new();
    vault.add("cfg", &sample_config(), "pw").unwrap();

    let err = vault.add("cfg", &sample_config(), "pw").unwrap_err();
    assert!(matches!(err, VaultError::EntryAlreadyExists(_)));
}

#[test]
fn wrong_password_surfaces_from_inner_vault() {
    let mut vault: TypedVault<DbConfig> = TypedVault::new();
    vault.add("cfg", &sample_config(), "correct").unwrap();

    // Either the decryption fails outright or the garbage bytes do not
    // parse as DbConfig; the stored value must never come back.
    match vault.get("cfg", "wrong") {
        Err(VaultError::DecryptionFailed) | Err(VaultError::SerializationError(_)) => {}
        Err(err) => panic!("unexpected error kind: {err}"),
        Ok(value) => assert_ne!(value, sample_config()),
    }
}

// ---------------------------------------------------------------------------
// Pass-throughs and persistence
// ---------------------------------------------------------------------------

#[test]
fn remove_and_clear_pass_through() {
    let mut vault: TypedVault<DbConfig> = TypedVault::new();
    vault.add("a", &sample_config(), "pw").unwrap();
    vault.add("b", &sample_config(), "pw").unwrap();
    assert_eq!(vault.len(), 2);

    vault.remove("a");
    assert!(!vault.contains("a"));

    // Removing again is a no-op.
    vault.remove("a");

    vault.clear();
    assert!(vault.is_empty());
}

#[test]
fn typed_persistence_roundtrip() {
    let dir = TempDir::new().unwrap();
    let config = sample_config();

    let mut vault: TypedVault<DbConfig> = TypedVault::new();
    vault.set_location(dir.path());
    vault.set_file_name("typed.vault.json");
    vault.add("primary", &config, "pw").unwrap();
    vault.save().unwrap();

    let mut fresh: TypedVault<DbConfig> = TypedVault::new();
    fresh.set_location(dir.path());
    fresh.set_file_name("typed.vault.json");
    fresh.load().unwrap();

    assert_eq!(fresh.get("primary", "pw").unwrap(), config);
}

#[test]
fn refresh_discards_unsaved_typed_entries() {
    let dir = TempDir::new().unwrap();

    let mut vault: TypedVault<Vec<String>> = TypedVault::new();
    vault.set_location(dir.path());
    vault.set_file_name("v.json");
    vault.add("saved", &vec!["x".to_string()], "pw").unwrap();
    vault.save().unwrap();

    vault.add("unsaved", &vec!["y".to_string()], "pw").unwrap();
    vault.refresh().unwrap();

    assert!(vault.contains("saved"));
    assert!(!vault.contains("unsaved"));
}

#[test]
fn into_inner_exposes_the_string_vault() {
    let mut vault: TypedVault<Vec<u8>> = TypedVault::new();
    vault.add("bytes", &vec![1u8, 2, 3], "pw").unwrap();

    let inner = vault.into_inner();
    // The underlying entry is JSON text, readable as a plain string.
    assert_eq!(inner.get("bytes", "pw").unwrap().as_deref(), Some("[1,2,3]"));
}
