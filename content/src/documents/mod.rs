mod linked;

pub mod facilities;
pub mod forms;
pub mod hero;
pub mod home_page;
pub mod locations;
pub mod media;
pub mod site;
pub mod size_estimator;

pub use linked::{Document, Linked};
