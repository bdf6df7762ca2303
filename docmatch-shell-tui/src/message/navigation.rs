//! Side panel messages

#[derive(Debug, Clone)]
pub enum NavigationMessage {
    /// Move the cursor up
    SelectPrevious,
    /// Move the cursor down
    SelectNext,
    /// Navigate to the entry under the cursor
    Confirm,
    /// Jump to the first entry
    SelectFirst,
    /// Jump to the last entry
    SelectLast,
}
