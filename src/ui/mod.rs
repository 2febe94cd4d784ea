pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{dim, error, header, info, key_value, muted, success, summary_row};
pub use table::{entries_table, TableBuilder};
pub use theme::{theme, Theme};
