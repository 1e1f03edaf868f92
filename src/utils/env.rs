//! Environment variable utilities
//!
//! The pipeline reads the environment in exactly one place (configuration
//! construction); these helpers keep that read and the test setup uniform.

use std::env;

/// Environment variable utilities
#[derive(Debug)]
pub struct EnvUtils;

impl EnvUtils {
    /// Get an environment variable with a default value
    pub fn get_var_or_default(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    /// Interpret an environment variable as a boolean-ish flag.
    ///
    /// Set and non-empty counts as enabled, except the explicit negatives
    /// `0` and `false`.
    pub fn flag_enabled(key: &str) -> bool {
        match env::var(key) {
            Ok(value) => {
                let value = value.trim();
                !value.is_empty() && value != "0" && !value.eq_ignore_ascii_case("false")
            }
            Err(_) => false,
        }
    }

    /// Set environment variable (mainly for testing)
    pub fn set_var<K, V>(key: K, value: V)
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        unsafe { env::set_var(key.as_ref(), value.as_ref()) }
    }

    /// Remove environment variable (mainly for testing)
    pub fn remove_var<K: AsRef<str>>(key: K) {
        unsafe { env::remove_var(key.as_ref()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_var_or_default() {
        let value = EnvUtils::get_var_or_default("NONEXISTENT_VAR", "default");
        assert_eq!(value, "default");

        EnvUtils::set_var("PACKAGER_TEST_VAR", "test_value");
        let value = EnvUtils::get_var_or_default("PACKAGER_TEST_VAR", "default");
        assert_eq!(value, "test_value");
        EnvUtils::remove_var("PACKAGER_TEST_VAR");
    }

    #[test]
    fn test_flag_enabled() {
        assert!(!EnvUtils::flag_enabled("PACKAGER_TEST_FLAG"));

        for (value, expected) in [
            ("1", true),
            ("true", true),
            ("anything", true),
            ("0", false),
            ("false", false),
            ("FALSE", false),
            ("", false),
        ] {
            EnvUtils::set_var("PACKAGER_TEST_FLAG", value);
            assert_eq!(EnvUtils::flag_enabled("PACKAGER_TEST_FLAG"), expected);
        }
        EnvUtils::remove_var("PACKAGER_TEST_FLAG");
    }
}
