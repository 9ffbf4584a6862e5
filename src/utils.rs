use pulldown_cmark::{html, Event as MdEvent, Options, Parser};
use yew::{AttrValue, Html};

pub fn set_panic_hook() {
    // Panics show up in the browser console instead of as "unreachable".
    console_error_panic_hook::set_once();
}

/// Shows a blocking browser alert. Without a window this does nothing.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn markdown_to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options).map(|event| match event {
        MdEvent::SoftBreak => MdEvent::HardBreak,
        _ => event,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Renders generated text (description, chef tip) which may contain markdown.
pub fn render_markdown(text: &str) -> Html {
    let styled_html = format!(r#"<div class="markdown-body">{}</div>"#, markdown_to_html(text));
    Html::from_html_unchecked(AttrValue::from(styled_html))
}
