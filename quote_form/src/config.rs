use lazy_static::lazy_static;
use secrecy::Secret;
use serde::Deserialize;
use shared_kernel::configuration::config;

#[derive(Deserialize)]
pub struct Settings {
    pub site: SiteConfig,
    pub provider: SubmissionsProviderConfig,
}

/// Host serving the `/api/form-submissions` endpoint the browser-facing
/// client posts to.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub host: String,
}

/// Content provider the server-side relay forwards submissions to. The
/// api key is only needed when the provider restricts the collection.
#[derive(Deserialize, Clone)]
pub struct SubmissionsProviderConfig {
    pub host: String,
    pub api_key: Option<Secret<String>>,
}

lazy_static! {
    pub static ref SETTINGS_CONFIG: Settings = config::<Settings>().unwrap();
}
