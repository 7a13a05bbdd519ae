//! Configuration file upgrades: detect keys missing from an older
//! configuration file and add them with their default values.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Top-level keys every current configuration file carries, with defaults.
fn expected_keys() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config(
            "default configuration is not a mapping".into(),
        )),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{}: top level is not a mapping",
            path.display()
        ))),
    }
}

/// Keys (dotted for nested sections) missing from the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let mut out = Vec::new();
    collect_missing("", &expected_keys()?, &current, &mut out);
    Ok(out)
}

fn collect_missing(prefix: &str, expected: &Mapping, current: &Mapping, out: &mut Vec<String>) {
    for (k, v) in expected {
        let name = match k.as_str() {
            Some(s) if prefix.is_empty() => s.to_string(),
            Some(s) => format!("{prefix}.{s}"),
            None => continue,
        };

        match (current.get(k), v) {
            (None, _) => out.push(name),
            (Some(Value::Mapping(cur)), Value::Mapping(exp)) => {
                collect_missing(&name, exp, cur, out)
            }
            _ => {}
        }
    }
}

/// Add every missing key with its default value.
/// Returns the keys that were added (empty → file already current).
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<String>> {
    let added = missing_keys(path)?;
    if added.is_empty() {
        return Ok(added);
    }

    let mut current = read_mapping(path)?;
    fill_missing(&expected_keys()?, &mut current);

    fs::write(path, serde_yaml::to_string(&Value::Mapping(current))?)?;
    Ok(added)
}

fn fill_missing(expected: &Mapping, current: &mut Mapping) {
    for (k, v) in expected {
        match current.get_mut(k) {
            None => {
                current.insert(k.clone(), v.clone());
            }
            Some(Value::Mapping(cur)) => {
                if let Value::Mapping(exp) = v {
                    fill_missing(exp, cur);
                }
            }
            Some(_) => {}
        }
    }
}
