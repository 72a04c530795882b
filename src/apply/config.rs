#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Settings for a [`PaintApplier`](crate::PaintApplier).
pub struct ApplierConfig {
    /// Write `AntiAlias true` into linear and radial shadings.
    pub anti_alias: bool,
    /// Foreign paint origins whose linear gradients keep their coordinates in paint space.
    pub compat_origins: Vec<String>,
}

impl Default for ApplierConfig {
    fn default() -> Self {
        Self {
            anti_alias: true,
            compat_origins: Vec::new(),
        }
    }
}

impl ApplierConfig {
    /// Parse settings from JSON; missing keys take their defaults.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
