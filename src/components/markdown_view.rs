use leptos::prelude::*;

use crate::markdown::parse_markdown;

/// Renders Markdown text as HTML
#[component]
pub fn MarkdownView(#[prop(into)] text: String) -> impl IntoView {
    let html = parse_markdown(&text);
    view! { <div class="markdown-body" inner_html=html></div> }
}
