//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct
//! fields. Starts from `ConfigFile::default()` and overlays any values
//! found in the INI.

use ini::Ini;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [dataset] section
    if let Some(section) = ini.section(Some("dataset")) {
        if let Some(v) = section.get("url") {
            let v = v.trim();
            if !v.is_empty() {
                config.dataset.url = v.to_string();
            }
        }
        if let Some(v) = section.get("name_property") {
            let v = v.trim();
            if !v.is_empty() {
                config.dataset.name_property = v.to_string();
            }
        }
    }

    // [style] section
    if let Some(section) = ini.section(Some("style")) {
        if let Some(v) = section.get("border_color") {
            config.style.border_color = parse_color("style", "border_color", v)?;
        }
        if let Some(v) = section.get("fill_color") {
            config.style.fill_color = parse_color("style", "fill_color", v)?;
        }
        if let Some(v) = section.get("fill_opacity") {
            config.style.fill_opacity = parse_opacity("style", "fill_opacity", v)?;
        }
        if let Some(v) = section.get("highlight_color") {
            config.style.highlight_color = parse_color("style", "highlight_color", v)?;
        }
        if let Some(v) = section.get("highlight_opacity") {
            config.style.highlight_opacity = parse_opacity("style", "highlight_opacity", v)?;
        }
        if let Some(v) = section.get("marker_color") {
            config.style.marker_color = parse_color("style", "marker_color", v)?;
        }
        if let Some(v) = section.get("marker_opacity") {
            config.style.marker_opacity = parse_opacity("style", "marker_opacity", v)?;
        }
    }

    // [probe] section
    if let Some(section) = ini.section(Some("probe")) {
        if let Some(v) = section.get("timeout") {
            let timeout: u64 = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "probe".to_string(),
                key: "timeout".to_string(),
                value: v.to_string(),
                reason: "must be a positive integer (seconds)".to_string(),
            })?;
            if timeout == 0 {
                return Err(ConfigFileError::InvalidValue {
                    section: "probe".to_string(),
                    key: "timeout".to_string(),
                    value: v.to_string(),
                    reason: "must be a positive integer (seconds)".to_string(),
                });
            }
            config.probe.timeout = timeout;
        }
        if let Some(v) = section.get("servers") {
            let servers: Vec<String> = v
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if !servers.is_empty() {
                config.probe.servers = servers;
            }
        }
    }

    Ok(config)
}

/// Validate a `#rgb` or `#rrggbb` hex color.
fn parse_color(section: &str, key: &str, raw: &str) -> Result<String, ConfigFileError> {
    let v = raw.trim();
    let hex = v.strip_prefix('#');
    let valid = matches!(hex, Some(digits) if (digits.len() == 3 || digits.len() == 6)
        && digits.chars().all(|c| c.is_ascii_hexdigit()));
    if !valid {
        return Err(ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: v.to_string(),
            reason: "must be a hex color like '#1f6feb'".to_string(),
        });
    }
    Ok(v.to_lowercase())
}

/// Validate an opacity fraction in [0, 1].
fn parse_opacity(section: &str, key: &str, raw: &str) -> Result<f64, ConfigFileError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: raw.to_string(),
            reason: "must be a number between 0 and 1".to_string(),
        })?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: raw.to_string(),
            reason: "must be a number between 0 and 1".to_string(),
        });
    }
    Ok(value)
}
