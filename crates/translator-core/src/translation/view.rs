//! Detail view projection.
//!
//! Rendering is a pure function of the direction and the flow state.

use serde::Serialize;

use translator_types::{Direction, ViewState};

/// Action offered alongside a finished translation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewAction {
    CopyToClipboard { title: String, content: String },
    Paste { title: String, content: String },
}

impl ViewAction {
    pub fn title(&self) -> &str {
        match self {
            Self::CopyToClipboard { title, .. } | Self::Paste { title, .. } => title,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Self::CopyToClipboard { content, .. } | Self::Paste { content, .. } => content,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DetailView {
    pub markdown: String,
    pub is_loading: bool,
    pub actions: Vec<ViewAction>,
}

pub fn render(direction: Direction, state: &ViewState) -> DetailView {
    match state {
        ViewState::Loading => {
            DetailView { markdown: String::new(), is_loading: true, actions: Vec::new() }
        }
        ViewState::Error(message) => DetailView {
            markdown: format!("# Error\n\n{}", message),
            is_loading: false,
            actions: Vec::new(),
        },
        ViewState::Result(text) => {
            let profile = direction.profile();
            let actions = if text.is_empty() {
                Vec::new()
            } else {
                vec![
                    ViewAction::CopyToClipboard {
                        title: profile.copy_title.to_string(),
                        content: text.clone(),
                    },
                    ViewAction::Paste { title: profile.paste_title.to_string(), content: text.clone() },
                ]
            };
            DetailView { markdown: text.clone(), is_loading: false, actions }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_has_no_actions() {
        let view = render(Direction::ToEnglish, &ViewState::Loading);
        assert!(view.is_loading);
        assert!(view.actions.is_empty());
        assert!(view.markdown.is_empty());
    }

    #[test]
    fn test_error_markdown() {
        let view = render(Direction::ToJapanese, &ViewState::Error("No Text Selected".to_string()));
        assert_eq!(view.markdown, "# Error\n\nNo Text Selected");
        assert!(!view.is_loading);
        assert!(view.actions.is_empty());
    }

    #[test]
    fn test_result_exposes_copy_and_paste() {
        let view = render(Direction::ToJapanese, &ViewState::Result("こんにちは".to_string()));
        assert_eq!(view.markdown, "こんにちは");
        assert_eq!(view.actions.len(), 2);
        assert_eq!(view.actions[0].title(), "Copy Japanese Translation");
        assert_eq!(view.actions[1].title(), "Paste Japanese Translation");
        assert!(view.actions.iter().all(|a| a.content() == "こんにちは"));
    }

    #[test]
    fn test_json_shape() {
        let view = render(Direction::ToEnglish, &ViewState::Result("ok".to_string()));
        let value = serde_json::to_value(&view).expect("serialize");
        assert_eq!(value["actions"][0]["kind"], "copy_to_clipboard");
        assert_eq!(value["actions"][1]["kind"], "paste");
        assert_eq!(value["is_loading"], false);
    }
}
