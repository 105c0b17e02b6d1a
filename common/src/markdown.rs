//! Markdown本文のHTML化（プロジェクト詳細モーダル用）
//!
//! 本文中の生HTMLはタグとして出力せず、テキストとしてエスケープする

use pulldown_cmark::{html, Event, Options, Parser};

pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_heading_and_list() {
        let html = render_html("## Features\n\n- fast\n- small\n");
        assert!(html.contains("<h2>Features</h2>"));
        assert!(html.contains("<li>fast</li>"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_html(""), "");
    }

    #[test]
    fn test_render_table() {
        let html = render_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_html("Intro <img src=x onerror=alert(1)> text\n\n<script>alert(1)</script>\n");
        assert!(!html.contains("<img"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
