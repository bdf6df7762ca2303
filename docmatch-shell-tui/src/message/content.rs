//! Routed page messages

#[derive(Debug, Clone)]
pub enum ContentMessage {
    ScrollUp,
    ScrollDown,
    ScrollTop,
}
