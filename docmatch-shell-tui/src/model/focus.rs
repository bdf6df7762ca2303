//! Focus state

/// Which panel receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// Left side panel
    #[default]
    Navigation,
    /// Routed page
    Content,
}

impl FocusPanel {
    /// Switch to the other panel
    pub fn toggle(&self) -> Self {
        match self {
            FocusPanel::Navigation => FocusPanel::Content,
            FocusPanel::Content => FocusPanel::Navigation,
        }
    }

    pub fn is_navigation(&self) -> bool {
        matches!(self, FocusPanel::Navigation)
    }

    pub fn is_content(&self) -> bool {
        matches!(self, FocusPanel::Content)
    }
}
