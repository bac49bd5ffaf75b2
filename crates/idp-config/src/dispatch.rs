use serde::Deserialize;

/// Response contract applied to a failed request
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, strum::Display, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Surface {
    /// Management API: errors wrapped in a 200 envelope
    #[default]
    Internal,
    /// OAuth2/OIDC API: single `{error, error_description}` with 4xx/5xx
    #[serde(rename = "oauth")]
    #[strum(serialize = "oauth")]
    OAuth,
    /// UserInfo: bare 401 with a `WWW-Authenticate` challenge
    Challenge,
}

/// Requests whose path starts with `prefix` are answered on `surface`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurfaceRule {
    pub prefix: String,
    pub surface: Surface,
}

impl SurfaceRule {
    pub fn new(prefix: impl Into<String>, surface: Surface) -> Self {
        Self {
            prefix: prefix.into(),
            surface,
        }
    }
}

/// Ordered path-prefix rules; the first match wins
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DispatchConfig {
    #[serde(default = "default_rules")]
    pub rules: Vec<SurfaceRule>,
    /// Surface for paths no rule matches
    #[serde(default)]
    pub default: Surface,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            default: Surface::Internal,
        }
    }
}

/// Standard classification; internal prefixes are checked first
///
/// Client management mounted under `/oauth/` stays on the internal surface.
pub fn default_rules() -> Vec<SurfaceRule> {
    vec![
        SurfaceRule::new("/authorization", Surface::Internal),
        SurfaceRule::new("/client-mgmt/", Surface::Internal),
        SurfaceRule::new("/oauth/client-mgmt/", Surface::Internal),
        SurfaceRule::new("/oidc/userinfo", Surface::Challenge),
        SurfaceRule::new("/oauth/", Surface::OAuth),
    ]
}
