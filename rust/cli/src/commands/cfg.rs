//! Configuration command handler.
//!
//! Prints the resolved configuration with the source of every value
//! (`default`, `file` or `env`).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "difficulty": {
//!     "value": "medium",
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "difficulty": {
            "value": config.difficulty,
            "source": sources.difficulty,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "bot_delay_ms": {
            "value": config.bot_delay_ms,
            "source": sources.bot_delay_ms,
        },
        "records": {
            "value": config.records,
            "source": sources.records,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "MINDSHIFT_CONFIG",
            "MINDSHIFT_SEED",
            "MINDSHIFT_DIFFICULTY",
            "MINDSHIFT_BOT_DELAY_MS",
            "MINDSHIFT_RECORDS",
        ] {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn test_cfg_displays_json_with_sources() {
        clear_env();
        let mut out = Vec::new();
        let mut err = Vec::new();

        handle_cfg_command(&mut out, &mut err).expect("cfg command should succeed");

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&output).expect("cfg output should be valid JSON");
        assert_eq!(json["difficulty"]["value"], "medium");
        assert_eq!(json["difficulty"]["source"], "default");
        assert_eq!(json["bot_delay_ms"]["value"], 900);
        assert!(json["seed"]["value"].is_null());
        assert!(json["records"]["value"].is_null());
        assert!(err.is_empty(), "should not write to stderr on success");
    }

    #[test]
    #[serial]
    fn test_cfg_reports_env_source() {
        clear_env();
        unsafe {
            std::env::set_var("MINDSHIFT_DIFFICULTY", "easy");
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        clear_env();

        assert!(result.is_ok());
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["difficulty"]["value"], "easy");
        assert_eq!(json["difficulty"]["source"], "env");
    }

    #[test]
    #[serial]
    fn test_cfg_handles_config_error() {
        clear_env();
        unsafe {
            std::env::set_var("MINDSHIFT_CONFIG", "/nonexistent/mindshift.toml");
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_cfg_command(&mut out, &mut err);
        clear_env();

        assert!(matches!(result, Err(CliError::Config(_))));
        let error_output = String::from_utf8(err).unwrap();
        assert!(error_output.contains("Invalid configuration"));
    }
}
