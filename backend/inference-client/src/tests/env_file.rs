use crate::credential::load_env_files;

use std::fs;

use serial_test::serial;
use tempfile::TempDir;

const FILE_VAR: &str = "INFERENCE_CLIENT_ENV_FILE_TEST_KEY";

/// **VALUE**: A `.env` file next to the binary supplies the credential.
#[test]
#[serial]
fn given_dotenv_file_when_loaded_then_sets_variable() {
    // GIVEN: A directory with a .env file
    unsafe { std::env::remove_var(FILE_VAR) };
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), format!("{FILE_VAR}=from_dotenv\n")).unwrap();

    // WHEN: Loading env files from it
    let result = load_env_files(dir.path());

    // THEN: The variable is now set
    assert!(result.any_loaded());
    assert_eq!(std::env::var(FILE_VAR).unwrap(), "from_dotenv");

    unsafe { std::env::remove_var(FILE_VAR) };
}

/// **VALUE**: A variable exported in the shell beats the file, and `.env` beats `config.env`.
///
/// **BUG THIS CATCHES**: Would catch a switch to `dotenvy::from_path_override`, which would
/// make a stale file silently replace the key the operator just exported.
#[test]
#[serial]
fn given_existing_variable_when_env_files_loaded_then_not_overridden() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), format!("{FILE_VAR}=from_dotenv\n")).unwrap();
    fs::write(dir.path().join("config.env"), format!("{FILE_VAR}=from_config\n")).unwrap();

    unsafe { std::env::set_var(FILE_VAR, "from_shell") };
    let result = load_env_files(dir.path());
    assert_eq!(result.loaded.len(), 2);
    assert_eq!(std::env::var(FILE_VAR).unwrap(), "from_shell");

    unsafe { std::env::remove_var(FILE_VAR) };
    load_env_files(dir.path());
    assert_eq!(std::env::var(FILE_VAR).unwrap(), "from_dotenv");

    unsafe { std::env::remove_var(FILE_VAR) };
}

#[test]
#[serial]
fn given_empty_directory_when_env_files_loaded_then_nothing_loaded() {
    let dir = TempDir::new().unwrap();

    let result = load_env_files(dir.path());

    assert!(!result.any_loaded());
}
