//!
//! src/util/mod.rs
//! Util layer: infrastructure with no shell logic in it
//!
//!     src/util/mod.rs
//!         mod terminal;       // raw mode + alternate screen
//!         mod text;           // display-width helpers
//!
//!     init_terminal()     enable raw mode, enter the alternate screen
//!     restore_terminal()  the reverse; main.rs calls it whether or not the
//!                         main loop failed, otherwise the user's shell stays
//!                         in raw mode
//!

mod terminal;
mod text;

pub use terminal::{init_terminal, restore_terminal, Term};
pub use text::tail_fit;
