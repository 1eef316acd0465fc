pub mod formatter;

pub use formatter::{
    format_band, format_breakdown, format_json, format_summary, should_use_colors,
};
