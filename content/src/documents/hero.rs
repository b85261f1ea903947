use serde::{Deserialize, Serialize};
use shared_kernel::DocumentId;

use super::media::Media;
use super::{Document, Linked};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Banner {
    pub image: Linked<Media>,
    /// Overrides the hero-wide title when set.
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

/// Auto-advance settings for the hero carousel. The provider applies these
/// defaults for documents saved before the group existed.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AutoScrollConfig {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    /// Time between slides, in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval: u64,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        AutoScrollConfig {
            enabled: true,
            interval: 5000,
        }
    }
}

fn enabled_by_default() -> bool {
    true
}

fn default_interval_ms() -> u64 {
    5000
}

fn show_dots_by_default() -> bool {
    true
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Hero {
    pub id: DocumentId,
    pub title: String,
    pub subtitle: Option<String>,
    #[serde(rename = "callToAction")]
    pub call_to_action: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub banners: Vec<Banner>,
    #[serde(rename = "autoScroll", default)]
    pub auto_scroll: AutoScrollConfig,
    #[serde(rename = "showDotIndicators", default = "show_dots_by_default")]
    pub show_dot_indicators: bool,
    #[serde(rename = "qrCode")]
    pub qr_code: Option<Linked<Media>>,
    #[serde(rename = "qrCodeText")]
    pub qr_code_text: Option<String>,
}

impl Document for Hero {
    fn id(&self) -> &DocumentId {
        &self.id
    }
}
