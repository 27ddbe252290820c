//! Input dispatch
//!
//! Every device funnels into one logical action. Button sources also stop the
//! event from bubbling so the canvas click underneath doesn't fire twice.

use serde::{Deserialize, Serialize};

/// Raw input from the host page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Keyboard `code` (e.g. "Space")
    Key { code: String },
    /// Click/tap on the game surface
    PointerClick,
    /// Click on an overlay button (start, restart)
    Button,
}

/// Logical actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Flap / start / restart
    Activate,
}

/// What the host should do with an event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dispatch {
    pub action: Option<Action>,
    /// Suppress the browser default (page scroll on Space)
    pub prevent_default: bool,
    /// Keep the event from reaching the canvas
    pub stop_propagation: bool,
}

/// Keys that trigger Activate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub activate: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            activate: vec!["Space".to_string()],
        }
    }
}

impl KeyBindings {
    pub fn is_activate(&self, code: &str) -> bool {
        self.activate.iter().any(|k| k == code)
    }
}

pub fn dispatch(event: &InputEvent, bindings: &KeyBindings) -> Dispatch {
    match event {
        InputEvent::Key { code } if bindings.is_activate(code) => Dispatch {
            action: Some(Action::Activate),
            prevent_default: true,
            stop_propagation: false,
        },
        InputEvent::Key { .. } => Dispatch::default(),
        InputEvent::PointerClick => Dispatch {
            action: Some(Action::Activate),
            ..Dispatch::default()
        },
        InputEvent::Button => Dispatch {
            action: Some(Action::Activate),
            prevent_default: false,
            stop_propagation: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: &str) -> InputEvent {
        InputEvent::Key {
            code: code.to_string(),
        }
    }

    #[test]
    fn test_space_activates_without_scrolling() {
        let d = dispatch(&key("Space"), &KeyBindings::default());
        assert_eq!(d.action, Some(Action::Activate));
        assert!(d.prevent_default);
        assert!(!d.stop_propagation);
    }

    #[test]
    fn test_unbound_key_ignored() {
        let d = dispatch(&key("KeyA"), &KeyBindings::default());
        assert_eq!(d, Dispatch::default());
    }

    #[test]
    fn test_custom_binding() {
        let bindings = KeyBindings {
            activate: vec!["ArrowUp".into(), "KeyW".into()],
        };
        assert_eq!(dispatch(&key("KeyW"), &bindings).action, Some(Action::Activate));
        assert_eq!(dispatch(&key("Space"), &bindings).action, None);
    }

    #[test]
    fn test_button_stops_propagation() {
        let d = dispatch(&InputEvent::Button, &KeyBindings::default());
        assert_eq!(d.action, Some(Action::Activate));
        assert!(d.stop_propagation);
        let d = dispatch(&InputEvent::PointerClick, &KeyBindings::default());
        assert_eq!(d.action, Some(Action::Activate));
        assert!(!d.stop_propagation);
    }
}
