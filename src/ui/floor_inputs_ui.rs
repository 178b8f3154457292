use gtk::prelude::*;
use gtk::{Label, Orientation, SpinButton};

use crate::events::EventEmitter;
use crate::model::DesignerCommand;

use super::layout::{MAX_FLOOR_SIDE_FT, SPACING_LARGE, SPACING_SMALL};

/// Width and length entry. Every change is sent to the session as a new
/// floor request; the session decides whether it is acceptable.
pub struct FloorInputsUI {
    pub container: gtk::Box,
    width: SpinButton,
    length: SpinButton,
    command_emitter: EventEmitter<DesignerCommand>,
}

fn feet_input(value: f64) -> SpinButton {
    let spin = SpinButton::with_range(0.0, MAX_FLOOR_SIDE_FT, 0.5);
    spin.set_digits(1);
    spin.set_value(value);
    spin
}

fn labelled(text: &str, spin: &SpinButton) -> gtk::Box {
    let row = gtk::Box::new(Orientation::Horizontal, SPACING_SMALL);
    row.append(&Label::new(Some(text)));
    row.append(spin);
    row
}

impl FloorInputsUI {
    pub fn new(
        command_emitter: EventEmitter<DesignerCommand>,
        width_ft: f64,
        length_ft: f64,
    ) -> Self {
        let width = feet_input(width_ft);
        let length = feet_input(length_ft);

        let container = gtk::Box::new(Orientation::Horizontal, SPACING_LARGE);
        container.append(&labelled("Width (ft)", &width));
        container.append(&labelled("Length (ft)", &length));

        // connected after the initial values are set so construction sends nothing
        for spin in [&width, &length] {
            let command_emitter = command_emitter.clone();
            let width = width.clone();
            let length = length.clone();
            spin.connect_value_changed(move |_| {
                command_emitter.emit(DesignerCommand::SetDimensions {
                    width: width.value(),
                    length: length.value(),
                });
            });
        }

        Self {
            container,
            width,
            length,
            command_emitter,
        }
    }

    /// Sends the current field values, used once the session is listening.
    pub fn submit(&self) {
        self.command_emitter.emit(DesignerCommand::SetDimensions {
            width: self.width.value(),
            length: self.length.value(),
        });
    }
}
