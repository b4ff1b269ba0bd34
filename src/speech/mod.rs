//! Speech markup and card text for outbound replies

pub mod formatter;
pub mod ssml;

pub use formatter::{
    format_goodbye, format_help, format_next_page, format_page, format_summary, format_welcome,
};
