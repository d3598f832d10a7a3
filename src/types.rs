// src/types.rs

// Events raised by the window's widgets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    ToggleClicked,
    CheckboxToggled { index: usize, checked: bool },
    SaveSnapshot,
}

// Commands the controller hands to the app context
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiCommand {
    Start,
    Stop,
    SetVisible { index: usize, visible: bool },
    SaveSnapshot,
}

// Label and icon shown on the start/stop toggle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonFace {
    pub icon: &'static str,
    pub label: &'static str,
}

impl ButtonFace {
    pub const START: ButtonFace = ButtonFace { icon: "▶", label: "start" };
    pub const STOP: ButtonFace = ButtonFace { icon: "⏹", label: "stop" };

    pub fn text(&self) -> String {
        format!("{} {}", self.icon, self.label)
    }
}
