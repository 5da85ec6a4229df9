#![doc = include_str!("../README.md")]

mod error;
mod format;
mod load;
mod sample;
mod types;

pub use error::{Error, Result};
pub use format::{BULLET, REPORT_WIDTH, center, format_report};
pub use load::load;
pub use sample::{Picker, RngPicker, sample};
pub use types::{
    Categories, Category, DEFAULT_TITLE, Definition, Item, NamedMap, Pick, Results, default_label,
};
