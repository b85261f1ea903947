pub mod browser;
pub mod visibility;

pub use browser::FacilityBrowser;
pub use visibility::visible_facilities;
