mod common;
use common::{temp_home, write_remote_config};
use rattendance::config::migrate::{migrate_config_file, missing_keys};
use rattendance::config::{BackendConfig, CONFIG_FILE_NAME, Config, DOCUMENT_STORE_FILE_NAME};
use rattendance::environment::{Backend, DEMO_APP_ID, Environment};
use rattendance::models::Profile;
use std::fs;

#[test]
fn test_missing_config_gives_defaults() {
    let home = temp_home("config_defaults");
    let cfg = Config::load(&home).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(cfg.backend.is_placeholder());
    assert_eq!(cfg.departments.len(), 6);
}

#[test]
fn test_init_writes_config_once() {
    let home = temp_home("config_init");
    let (path, created) = Config::init_all(&home).unwrap();
    assert!(created);
    assert_eq!(path, home.join(CONFIG_FILE_NAME));

    fs::write(&path, "profile: class\n").unwrap();
    let (_, created) = Config::init_all(&home).unwrap();
    assert!(!created);
    assert_eq!(Config::load(&home).unwrap().profile, Profile::Class);
}

#[test]
fn test_placeholder_credentials_select_demo_mode() {
    let home = temp_home("config_demo");
    for backend in [
        BackendConfig::default(),
        BackendConfig {
            api_key: String::new(),
            project_id: "school".into(),
            database: String::new(),
        },
        BackendConfig {
            api_key: "real-key".into(),
            project_id: "demo-project".into(),
            database: String::new(),
        },
    ] {
        let cfg = Config {
            backend,
            ..Config::default()
        };
        let env = Environment::from_config(&cfg, &home);
        assert!(env.is_demo());
        assert_eq!(env.backend, Backend::Local);
        assert_eq!(env.app_id, DEMO_APP_ID);
    }
}

#[test]
fn test_configured_backend_selects_document_store() {
    let home = temp_home("config_remote");
    let cfg = write_remote_config(&home, "school-a");
    let env = Environment::from_config(&Config::load(&home).unwrap(), &home);

    assert!(!env.is_demo());
    assert_eq!(
        env.backend,
        Backend::Remote {
            project_id: "test-project".into(),
            database: home.join(DOCUMENT_STORE_FILE_NAME),
        }
    );
    assert_eq!(
        env.records_collection(),
        "artifacts/school-a/public/data/attendance_records"
    );
    assert_eq!(cfg.admin_password, env.admin_password);
}

#[test]
fn test_relative_database_path_is_under_home() {
    let home = temp_home("config_db_path");
    let mut cfg = Config::default();
    cfg.backend.database = "shared/store.sqlite".into();
    assert_eq!(cfg.database_path(&home), home.join("shared/store.sqlite"));
}

#[test]
fn test_blank_bootstrap_token_is_ignored() {
    let home = temp_home("config_token");
    let cfg = Config {
        initial_auth_token: Some("   ".into()),
        ..Config::default()
    };
    assert_eq!(Environment::from_config(&cfg, &home).bootstrap_token, None);

    let cfg = Config {
        initial_auth_token: Some(" abc ".into()),
        ..Config::default()
    };
    assert_eq!(
        Environment::from_config(&cfg, &home).bootstrap_token.as_deref(),
        Some("abc")
    );
}

#[test]
fn test_malformed_config_is_an_error() {
    let home = temp_home("config_malformed");
    fs::write(home.join(CONFIG_FILE_NAME), "departments: [unclosed\n").unwrap();
    assert!(Config::load(&home).is_err());
}

#[test]
fn test_migrate_adds_missing_keys_and_keeps_values() {
    let home = temp_home("config_migrate");
    let path = home.join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        "backend:\n  api_key: my-key\nadmin_password: s3cret\n",
    )
    .unwrap();

    let missing = missing_keys(&path).unwrap();
    assert!(missing.contains(&"backend.project_id".to_string()));
    assert!(missing.contains(&"departments".to_string()));
    assert!(!missing.contains(&"admin_password".to_string()));

    let added = migrate_config_file(&path).unwrap();
    assert_eq!(added, missing);
    assert!(missing_keys(&path).unwrap().is_empty());
    assert!(migrate_config_file(&path).unwrap().is_empty());

    let cfg = Config::load(&home).unwrap();
    assert_eq!(cfg.backend.api_key, "my-key");
    assert_eq!(cfg.admin_password, "s3cret");
    assert_eq!(cfg.years, Config::default().years);
}
