use pulldown_cmark::{html, Options, Parser};

/// Render newsletter markdown to HTML for the preview pane.
pub fn markdown_to_html(source: &str) -> String {
    let parser = Parser::new_ext(source, parser_options());
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

fn parser_options() -> Options {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_TASKLISTS);
    opts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_headings_and_emphasis() {
        let html = markdown_to_html("# Weekly Deals\n\nGet **20% off** today.");
        assert!(html.contains("<h1>Weekly Deals</h1>"));
        assert!(html.contains("<strong>20% off</strong>"));
    }

    #[test]
    fn test_plain_text_becomes_paragraph() {
        let html = markdown_to_html("hello subscribers");
        assert_eq!(html.trim(), "<p>hello subscribers</p>");
    }

    #[test]
    fn test_raw_angle_brackets_survive_as_markup() {
        // pulldown-cmark passes inline HTML through untouched; the preview
        // pane renders whatever the template author wrote.
        let html = markdown_to_html("a <em>direct</em> tag");
        assert!(html.contains("<em>direct</em>"));
    }
}
