mod presenter;

pub use presenter::{format_listing, format_result_line, format_summary};

use console::style;

pub fn present_error(error: anyhow::Error) {
    let error_text = style("ERROR:").red().bold();
    eprintln!("\n{error_text} {error:#}");
}
