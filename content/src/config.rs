use lazy_static::lazy_static;
use serde::Deserialize;
use shared_kernel::configuration::config;

#[derive(Deserialize)]
pub struct Settings {
    pub provider: ContentProviderConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContentProviderConfig {
    pub host: String,
}

lazy_static! {
    pub static ref SETTINGS_CONFIG: Settings = config::<Settings>().unwrap();
}
