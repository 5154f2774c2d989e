//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the current
//! handscope configuration settings with their sources (default, environment,
//! or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "format": {
//!     "value": "text",
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config::ConfigResolved;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// Displays the already resolved configuration as pretty JSON.
pub fn handle_cfg_command(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "format": {
            "value": config.format,
            "source": sources.format,
        },
        "unicode": {
            "value": config.unicode,
            "source": sources.unicode,
        },
        "log": {
            "value": config.log,
            "source": sources.log,
        }
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&display)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSources, ValueSource};

    #[test]
    fn test_cfg_displays_json_output() {
        let resolved = ConfigResolved {
            config: Default::default(),
            sources: ConfigSources::default(),
        };
        let mut out = Vec::new();
        handle_cfg_command(&resolved, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&output).expect("cfg output should be valid JSON");
        assert_eq!(json["format"]["value"], "text");
        assert_eq!(json["format"]["source"], "default");
        assert_eq!(json["unicode"]["value"], true);
        assert_eq!(json["log"]["value"], "warn");
        assert!(output.contains("\n  "), "output should be pretty-printed");
    }

    #[test]
    fn test_cfg_reports_sources() {
        let mut resolved = ConfigResolved {
            config: Default::default(),
            sources: ConfigSources::default(),
        };
        resolved.sources.log = ValueSource::Env;
        resolved.sources.unicode = ValueSource::File;
        let mut out = Vec::new();
        handle_cfg_command(&resolved, &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["log"]["source"], "env");
        assert_eq!(json["unicode"]["source"], "file");
    }
}
