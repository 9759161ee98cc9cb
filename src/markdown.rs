//! Article Markdown Renderer
//!
//! Renders article bodies with pulldown-cmark. Bodies come from the backend,
//! so the output is restricted:
//! - raw HTML (block and inline) is dropped
//! - images are dropped along with their alt text
//! - links keep their text but lose unsafe targets (only http, https, mailto
//!   and in-page anchors survive)

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Render markdown to an HTML string safe to inject into the page
pub fn render_article(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = sanitize_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

// State for the event filter
enum State {
    Normal,
    InImage { dropped_depth: usize },
}

fn sanitize_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;
    // Links whose Start was dropped must drop their End too
    let mut link_stack: Vec<bool> = Vec::new();

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Html(_) | Event::InlineHtml(_) => {}

                Event::Start(Tag::Image { .. }) => {
                    state = State::InImage { dropped_depth: 0 };
                }

                Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
                    let keep = is_safe_url(&dest_url);
                    link_stack.push(keep);
                    if keep {
                        events.push(Event::Start(Tag::Link { link_type, dest_url, title, id }));
                    }
                }
                Event::End(TagEnd::Link) => {
                    if link_stack.pop().unwrap_or(false) {
                        events.push(Event::End(TagEnd::Link));
                    }
                }

                other => events.push(other),
            },

            State::InImage { ref mut dropped_depth } => match event {
                Event::Start(_) => *dropped_depth += 1,
                Event::End(_) => {
                    if *dropped_depth == 0 {
                        state = State::Normal;
                    } else {
                        *dropped_depth -= 1;
                    }
                }
                _ => {}
            },
        }
    }

    events
}

fn is_safe_url(url: &CowStr) -> bool {
    let lower = url.trim().to_lowercase();
    lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("mailto:")
        || lower.starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paragraphs() {
        let html = render_article("First paragraph.\n\nSecond **bold** one.");
        assert_eq!(html, "<p>First paragraph.</p>\n<p>Second <strong>bold</strong> one.</p>\n");
    }

    #[test]
    fn test_raw_html_is_dropped() {
        let html = render_article("Hello <script>alert(1)</script> world\n\n<div onclick=\"x()\">block</div>");
        assert!(!html.contains("<script"));
        assert!(!html.contains("onclick"));
        assert!(html.contains("Hello"));
    }

    #[test]
    fn test_unsafe_link_keeps_text_only() {
        let html = render_article("[click](javascript:alert(1)) and [site](https://procorp.com)");
        assert!(!html.contains("javascript:"));
        assert!(html.contains("click"));
        assert!(html.contains(r#"<a href="https://procorp.com">site</a>"#));
    }

    #[test]
    fn test_images_are_dropped() {
        let html = render_article("Before ![tracking *pixel*](https://x.test/p.gif) after");
        assert!(!html.contains("<img"));
        assert!(!html.contains("pixel"));
        assert!(html.contains("Before"));
        assert!(html.contains("after"));
    }
}
