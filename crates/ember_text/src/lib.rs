mod catalog;
mod ttf;

#[cfg(test)]
mod test_font;

pub use catalog::*;
pub use ttf::*;
