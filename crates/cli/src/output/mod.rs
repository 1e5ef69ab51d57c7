pub mod banner;
pub mod confirm;
mod format;
pub mod spinner;
pub(crate) mod table;
pub mod theme;

pub use format::{OutputMode, print_json, print_success};
pub use table::filters_table;
