//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file. These
//! are pure data types; parsing lives in [`super::parser`].

/// Default commune dataset URL (French open-data communes export).
pub const DEFAULT_DATASET_URL: &str =
    "https://france-geojson.gregoiredavid.fr/repo/departements/988-nouvelle-caledonie/communes-988-nouvelle-caledonie.geojson";

/// Default feature property carrying the commune name.
pub const DEFAULT_NAME_PROPERTY: &str = "nom";

/// Default tile servers probed in order.
pub const DEFAULT_TILE_SERVERS: [&str; 2] = [
    "https://a.tile.openstreetmap.org",
    "https://b.tile.openstreetmap.org",
];

/// Default probe timeout in seconds.
pub const DEFAULT_PROBE_TIMEOUT: u64 = 5;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    /// Dataset settings
    pub dataset: DatasetSettings,
    /// Region style settings
    pub style: StyleSettings,
    /// Tile-server probe settings
    pub probe: ProbeSettings,
}

/// Commune dataset configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSettings {
    /// URL of the GeoJSON feature collection.
    pub url: String,
    /// Feature property holding the commune name.
    pub name_property: String,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATASET_URL.to_string(),
            name_property: DEFAULT_NAME_PROPERTY.to_string(),
        }
    }
}

/// Region and marker style configuration.
///
/// These are the runtime-adjustable defaults that the selection machine's
/// style-reset restores; the renderer reads them live rather than baking
/// them in.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSettings {
    /// Region border color (hex, e.g. `#1f6feb`).
    pub border_color: String,
    /// Region fill color.
    pub fill_color: String,
    /// Region fill opacity, 0 to 1.
    pub fill_opacity: f64,
    /// Highlight color applied to the selected region or point.
    pub highlight_color: String,
    /// Highlight fill opacity, 0 to 1.
    pub highlight_opacity: f64,
    /// Locate/user marker color.
    pub marker_color: String,
    /// Marker opacity, 0 to 1.
    pub marker_opacity: f64,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            border_color: "#1f6feb".to_string(),
            fill_color: "#1f6feb".to_string(),
            fill_opacity: 0.15,
            highlight_color: "#d29922".to_string(),
            highlight_opacity: 0.35,
            marker_color: "#e5534b".to_string(),
            marker_opacity: 0.9,
        }
    }
}

/// Tile-server probe configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeSettings {
    /// Per-candidate timeout in seconds.
    pub timeout: u64,
    /// Candidate tile servers, probed in order.
    pub servers: Vec<String>,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_PROBE_TIMEOUT,
            servers: DEFAULT_TILE_SERVERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
