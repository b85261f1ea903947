mod auto_scroll;
mod slider;

pub use auto_scroll::AutoScroll;
pub use slider::Slider;
