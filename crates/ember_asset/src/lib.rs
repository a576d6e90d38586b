mod cursor;
mod entry;
mod path;
mod walker;

pub mod io;

pub use cursor::*;
pub use entry::*;
pub use path::*;
pub use walker::*;
