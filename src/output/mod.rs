pub mod formatter;

pub use formatter::{
    format_breakdown, format_catalog, format_multiplier, format_number, format_result,
    should_use_colors,
};
