//! Interactive terminal plumbing

mod console;

pub use console::Console;
