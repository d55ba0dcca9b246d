//! Presentation state types

/// Which pane currently receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// The entry form on the left
    #[default]
    Form,
    /// The submissions table on the right
    Entries,
}

impl FocusPane {
    pub fn toggled(self) -> FocusPane {
        match self {
            FocusPane::Form => FocusPane::Entries,
            FocusPane::Entries => FocusPane::Form,
        }
    }
}
