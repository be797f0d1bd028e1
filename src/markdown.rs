//! Markdown Rendering
//!
//! Renders the static marketing copy with pulldown-cmark.

use pulldown_cmark::{html::push_html, Options, Parser};

/// Parse markdown into an HTML string
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_headings_and_tables() {
        let html = parse_markdown("## Miksi drone?\n\n| A | B |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<h2>"));
        assert!(html.contains("<table>"));
    }
}
