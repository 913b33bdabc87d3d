
use crate::{Error, Result};
use std::{env, path::PathBuf};

pub const DATA_FILE_ENV: &str = "STUDENT_RECORDS_FILE";
pub const DEFAULT_DATA_FILE: &str = "students.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_file: PathBuf,
}

impl Config {
    /// `--file` wins over the environment, which wins over the default.
    pub fn resolve(file_override: Option<PathBuf>) -> Config {
        match file_override {
            Some(data_file) => Config { data_file },
            None => Config::load_from_env(),
        }
    }

    pub fn load_from_env() -> Config {
        Config {
            data_file: get_env(DATA_FILE_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

fn get_env(name: &'static str) -> Result<String> {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or(Error::ConfigMissingEnv(name))
}

#[cfg(test)]
mod tests {
    use super::{get_env, Config, DATA_FILE_ENV, DEFAULT_DATA_FILE};
    use crate::Error;
    use serial_test::serial;
    use std::{env, path::PathBuf};

    #[test]
    #[serial]
    fn default_when_env_unset() {
        env::remove_var(DATA_FILE_ENV);
        assert_eq!(Config::load_from_env().data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert!(matches!(get_env(DATA_FILE_ENV), Err(Error::ConfigMissingEnv(DATA_FILE_ENV))));
        assert_eq!(Config::load_from_env(), Config::default());
    }

    #[test]
    #[serial]
    fn env_then_override() {
        env::set_var(DATA_FILE_ENV, "/tmp/class_a.txt");
        assert_eq!(Config::resolve(None).data_file, PathBuf::from("/tmp/class_a.txt"));
        assert_eq!(
            Config::resolve(Some(PathBuf::from("other.txt"))).data_file,
            PathBuf::from("other.txt")
        );
        env::remove_var(DATA_FILE_ENV);
    }

    #[test]
    #[serial]
    fn blank_env_falls_back_to_default() {
        env::set_var(DATA_FILE_ENV, "  ");
        assert_eq!(Config::resolve(None), Config::default());
        env::remove_var(DATA_FILE_ENV);
    }
}
