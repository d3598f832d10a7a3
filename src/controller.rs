// src/controller.rs
use crate::types::{ButtonFace, UiCommand, UiEvent};

const STATUS_LINES: usize = 8;

/// Transient widget state for the chart window.
pub struct WindowController {
    toggle_checked: bool,
    face: ButtonFace,
    checkboxes: Vec<bool>,
    status: Vec<String>,
}

impl WindowController {
    pub fn new(series_count: usize) -> Self {
        Self {
            toggle_checked: false,
            face: ButtonFace::START,
            checkboxes: vec![true; series_count],
            status: Vec::new(),
        }
    }

    /// Translate one widget event into the commands it implies.
    pub fn dispatch(&mut self, event: UiEvent) -> Vec<UiCommand> {
        match event {
            UiEvent::ToggleClicked => {
                self.toggle_checked = !self.toggle_checked;
                if self.toggle_checked {
                    self.face = ButtonFace::STOP;
                    vec![UiCommand::Start]
                } else {
                    self.face = ButtonFace::START;
                    vec![UiCommand::Stop]
                }
            }
            UiEvent::CheckboxToggled { index, checked } => {
                if let Some(slot) = self.checkboxes.get_mut(index) {
                    *slot = checked;
                }
                vec![UiCommand::SetVisible {
                    index,
                    visible: checked,
                }]
            }
            UiEvent::SaveSnapshot => vec![UiCommand::SaveSnapshot],
        }
    }

    pub fn is_toggle_checked(&self) -> bool {
        self.toggle_checked
    }

    pub fn face(&self) -> ButtonFace {
        self.face
    }

    pub fn checkbox(&self, index: usize) -> Option<bool> {
        self.checkboxes.get(index).copied()
    }

    pub fn checkbox_count(&self) -> usize {
        self.checkboxes.len()
    }

    pub fn log(&mut self, msg: &str) {
        self.status.push(format!("> {}", msg));
        if self.status.len() > STATUS_LINES {
            self.status.remove(0);
        }
    }

    pub fn status(&self) -> &[String] {
        &self.status
    }
}
