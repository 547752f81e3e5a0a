//! Click and hover event payloads.
//!
//! Events are opaque tagged payloads: the engine recognizes their shape
//! but never interprets or executes them.

use crate::component::Component;

/// What happens when styled text is clicked.
///
/// Every action carries an uninterpreted string payload.
#[derive(Clone, Debug, PartialEq)]
pub enum ClickEvent {
    OpenUrl { url: String },
    RunCommand { command: String },
    SuggestCommand { command: String },
    ChangePage { page: String },
    CopyToClipboard { value: String },
}

impl ClickEvent {
    /// The action keyword for this event.
    pub fn action(&self) -> &'static str {
        match self {
            ClickEvent::OpenUrl { .. } => "open_url",
            ClickEvent::RunCommand { .. } => "run_command",
            ClickEvent::SuggestCommand { .. } => "suggest_command",
            ClickEvent::ChangePage { .. } => "change_page",
            ClickEvent::CopyToClipboard { .. } => "copy_to_clipboard",
        }
    }

    /// The payload string.
    pub fn value(&self) -> &str {
        match self {
            ClickEvent::OpenUrl { url } => url,
            ClickEvent::RunCommand { command } => command,
            ClickEvent::SuggestCommand { command } => command,
            ClickEvent::ChangePage { page } => page,
            ClickEvent::CopyToClipboard { value } => value,
        }
    }

    /// Build an event from an action keyword and payload.
    pub fn from_parts(action: &str, value: &str) -> Option<ClickEvent> {
        let value = value.to_string();
        match action {
            "open_url" => Some(ClickEvent::OpenUrl { url: value }),
            "run_command" => Some(ClickEvent::RunCommand { command: value }),
            "suggest_command" => Some(ClickEvent::SuggestCommand { command: value }),
            "change_page" => Some(ClickEvent::ChangePage { page: value }),
            "copy_to_clipboard" => Some(ClickEvent::CopyToClipboard { value }),
            _ => None,
        }
    }
}

/// What is shown when styled text is hovered.
#[derive(Clone, Debug, PartialEq)]
pub enum HoverEvent {
    /// Show another component as a tooltip.
    ShowText { value: Component },
    /// Show an item stack.
    ShowItem {
        id: String,
        count: Option<i32>,
        nbt: Option<String>,
    },
    /// Show an entity reference.
    ShowEntity {
        kind: String,
        uuid: String,
        name: Option<Component>,
    },
}

impl HoverEvent {
    /// The action keyword for this event.
    pub fn action(&self) -> &'static str {
        match self {
            HoverEvent::ShowText { .. } => "show_text",
            HoverEvent::ShowItem { .. } => "show_item",
            HoverEvent::ShowEntity { .. } => "show_entity",
        }
    }
}
