//! Server-side rendering helpers for component tests.

use dioxus::prelude::*;

/// Render an element tree to HTML.
pub fn render(element: Element) -> String {
    dioxus_ssr::render_element(element)
}

/// Text content of rendered HTML, with tags and comments removed.
pub fn visible_text(html: &str) -> String {
    let mut text = String::new();
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}

pub fn count(html: &str, class: &str) -> usize {
    html.matches(class).count()
}
