//! Drive a widget through a short editing session and print both surfaces after each step.
//!
//! ```text
//! RUST_LOG=chalk=debug cargo run -p chalk-html --example sync_session
//! ```

use chalk_core::{
    ChalkConfig, FormatCommand, HostElement, Key, KeyInput, PlainTextSurface, RenderedSurface,
    SelectionRange, TextBuffer, ToolbarAction, Widget,
};
use chalk_html::HtmlFrame;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chalk=debug")),
        )
        .init();

    let host = HostElement::text_area("<ul>\n  <li>first</li>").with_size(800, 600);
    let mut widget = Widget::assemble(
        host,
        TextBuffer::new(""),
        HtmlFrame::new()?,
        ChalkConfig::spaces(2),
    )?;
    println!("classes: {}", widget.layout().css_classes().join(" "));
    show("assembled", &widget);

    let bridge = widget.bridge_mut();
    let end = bridge.plain().char_len();
    bridge.plain_mut().set_selection(SelectionRange::caret(end));
    let _ = bridge.handle_key_down(KeyInput::new(Key::Enter));
    bridge.plain_mut().replace_selection("<li>second</li>");
    let _ = bridge.push_plain_text_to_rendered();
    show("enter + typing", &widget);

    let bridge = widget.bridge_mut();
    let all = SelectionRange::new(0, bridge.plain().char_len());
    bridge.plain_mut().set_selection(all);
    let _ = bridge.handle_key_down(KeyInput::new(Key::Tab));
    let _ = bridge.push_plain_text_to_rendered();
    show("tab over everything", &widget);

    let bridge = widget.bridge_mut();
    bridge.rendered_mut().type_text("\n</ul>")?;
    let _ = bridge.pull_rendered_into_plain_text();
    show("typed in rendered view", &widget);

    widget.bridge_mut().rendered_mut().select(15..20);
    let outcome = widget.toolbar_action(ToolbarAction::Format(FormatCommand::Bold));
    println!("bold: {outcome:?}");
    show("bold", &widget);

    widget.bridge_mut().rendered_mut().detach();
    let outcome = widget.bridge_mut().push_plain_text_to_rendered();
    println!("push while detached: {outcome:?}");
    show("detached", &widget);

    Ok(())
}

fn show(step: &str, widget: &Widget<TextBuffer, HtmlFrame>) {
    let bridge = widget.bridge();
    let rendered = bridge
        .rendered()
        .body_content()
        .unwrap_or_else(|err| format!("<{err}>"));
    println!("== {step}");
    println!("plain:\n{}", bridge.plain().text());
    println!("rendered:\n{rendered}\n");
}
