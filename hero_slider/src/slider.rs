/// Position within the hero carousel. Navigation wraps in both
/// directions, so the slides form a cycle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Slider {
    slide_count: usize,
    current: usize,
}

impl Slider {
    pub fn new(slide_count: usize) -> Self {
        Slider {
            slide_count,
            current: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Advances one slide, wrapping from the last back to the first.
    /// With no slides there is nothing to do.
    pub fn next(&mut self) {
        if self.slide_count == 0 {
            return;
        }
        self.current = (self.current + 1) % self.slide_count;
    }

    /// Steps back one slide, wrapping from the first to the last.
    pub fn previous(&mut self) {
        if self.slide_count == 0 {
            return;
        }
        if self.current == 0 {
            self.current = self.slide_count - 1;
        } else {
            self.current -= 1;
        }
    }

    /// Jumps to the slide behind a dot indicator. Out-of-range indices are
    /// ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.slide_count {
            self.current = index;
        }
    }
}
