use std::path::PathBuf;

/// What pressing a dialog button asks the host to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    Close,
    OpenUrl(String),
    OpenFolder(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogButton {
    pub label: String,
    pub action: DialogAction,
}

/// One collapsible chapter of a help dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionItem {
    pub title: String,
    pub content: String,
}

/// Message dialog model consumed by the rendering layer. Buttons keep their
/// insertion order; the first one gets initial focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDialog {
    pub title: String,
    pub chapters: Vec<AccordionItem>,
    pub buttons: Vec<DialogButton>,
}

impl MessageDialog {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            chapters: Vec::new(),
            buttons: Vec::new(),
        }
    }

    pub fn add_chapter(&mut self, title: &str, content: &str) {
        self.chapters.push(AccordionItem {
            title: title.to_string(),
            content: content.to_string(),
        });
    }

    pub fn add_button(&mut self, label: &str, action: DialogAction) {
        self.buttons.push(DialogButton {
            label: label.to_string(),
            action,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chapters_and_buttons_keep_insertion_order() {
        let mut dialog = MessageDialog::new("Help");
        dialog.add_chapter("First", "a");
        dialog.add_chapter("Second", "b");
        dialog.add_button("Close", DialogAction::Close);
        dialog.add_button("Docs", DialogAction::OpenUrl("https://example.com".into()));

        assert_eq!(dialog.chapters[0].title, "First");
        assert_eq!(dialog.chapters[1].title, "Second");
        assert_eq!(dialog.buttons[0].label, "Close");
        assert_eq!(
            dialog.buttons[1].action,
            DialogAction::OpenUrl("https://example.com".to_string())
        );
    }
}
