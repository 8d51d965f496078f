//! Input events consumed by the interaction controller

use egui::Pos2;

/// Mouse buttons the editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// One event in the host's ordered input stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { button: PointerButton, pos: Pos2 },
    PointerUp { button: PointerButton, pos: Pos2 },
    PointerMove(Pos2),
    Quit,
}

impl InputEvent {
    pub fn down(button: PointerButton, pos: Pos2) -> Self {
        Self::PointerDown { button, pos }
    }

    pub fn up(button: PointerButton, pos: Pos2) -> Self {
        Self::PointerUp { button, pos }
    }

    /// Translates a raw egui event; buttons other than primary and secondary are dropped
    pub fn from_egui(event: &egui::Event) -> Option<Self> {
        match event {
            egui::Event::PointerMoved(pos) => Some(Self::PointerMove(*pos)),
            egui::Event::PointerButton {
                pos,
                button,
                pressed,
                ..
            } => {
                let button = match button {
                    egui::PointerButton::Primary => PointerButton::Primary,
                    egui::PointerButton::Secondary => PointerButton::Secondary,
                    _ => return None,
                };
                Some(if *pressed {
                    Self::down(button, *pos)
                } else {
                    Self::up(button, *pos)
                })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_egui_pointer_events() {
        let pos = Pos2::new(3.0, 4.0);
        let pressed = egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Secondary,
            pressed: true,
            modifiers: egui::Modifiers::default(),
        };
        assert_eq!(
            InputEvent::from_egui(&pressed),
            Some(InputEvent::down(PointerButton::Secondary, pos))
        );

        let middle = egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Middle,
            pressed: false,
            modifiers: egui::Modifiers::default(),
        };
        assert_eq!(InputEvent::from_egui(&middle), None);

        assert_eq!(
            InputEvent::from_egui(&egui::Event::PointerMoved(pos)),
            Some(InputEvent::PointerMove(pos))
        );
    }
}
