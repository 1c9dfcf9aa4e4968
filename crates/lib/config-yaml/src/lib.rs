//! YAML configuration parsing for mail-biff.

use config_core::Config;

/// Parse configuration from a YAML document.
///
/// Accepts both the plain key spelling and the `:key` spelling found in
/// `~/.imapbiffrc`.
pub fn parse_str(contents: &str) -> Result<Config, serde_yaml_bw::Error> {
    serde_yaml_bw::from_str(contents)
}
