use content::documents::size_estimator::SizeOption;

/// Selection state over the estimator's size options.
///
/// One option is always selected: the one flagged as default, or the first
/// option when none is flagged. Construction fails only when there are no
/// options at all, in which case the estimator is not shown.
#[derive(Debug)]
pub struct SizePicker {
    options: Vec<SizeOption>,
    selected: usize,
}

impl SizePicker {
    pub fn new(options: Vec<SizeOption>) -> Option<Self> {
        if options.is_empty() {
            return None;
        }
        let selected = options
            .iter()
            .position(|option| option.is_default)
            .unwrap_or(0);
        Some(SizePicker { options, selected })
    }

    pub fn options(&self) -> &[SizeOption] {
        &self.options
    }

    pub fn selected(&self) -> &SizeOption {
        &self.options[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Selects the option at `index`. Out-of-range indices are ignored,
    /// and re-selecting the current option changes nothing.
    pub fn select(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected = index;
        }
    }
}
