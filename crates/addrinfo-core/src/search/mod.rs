//! Byte-level search primitives: exact signature matching and free space
//! location, both scoped by bounds-checked windows.

mod matcher;
mod space;
mod window;

pub use matcher::{Horspool, find};
pub use space::{SENTINEL, align_up, find_space};
pub use window::SearchWindow;
