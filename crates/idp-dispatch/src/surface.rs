use idp_config::{DispatchConfig, Surface, SurfaceRule};

/// Maps a request path to the surface whose contract applies
///
/// Rules are evaluated top to bottom; the first prefix match wins and
/// unmatched paths fall back to the default surface.
#[derive(Debug, Clone)]
pub struct SurfaceClassifier {
    rules: Vec<SurfaceRule>,
    default: Surface,
}

impl SurfaceClassifier {
    pub const fn new(rules: Vec<SurfaceRule>, default: Surface) -> Self {
        Self { rules, default }
    }

    pub fn classify(&self, path: &str) -> Surface {
        self.rules
            .iter()
            .find(|rule| path.starts_with(&rule.prefix))
            .map_or(self.default, |rule| rule.surface)
    }
}

impl Default for SurfaceClassifier {
    fn default() -> Self {
        Self::from(&DispatchConfig::default())
    }
}

impl From<&DispatchConfig> for SurfaceClassifier {
    fn from(config: &DispatchConfig) -> Self {
        Self::new(config.rules.clone(), config.default)
    }
}
