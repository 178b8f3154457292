use gtk::prelude::*;
use gtk::Button;

use crate::events::EventEmitter;
use crate::model::{DesignerCommand, PanelFinish};

use super::layout::PANEL_BUTTON_SIZE;

/// One clickable floor panel. Clicking asks the session to flip it; the
/// button only changes appearance when the session publishes the new pattern.
pub struct PanelButtonUI {
    pub button: Button,
    row: usize,
    col: usize,
    finish: Option<PanelFinish>,
}

impl PanelButtonUI {
    pub fn new(command_emitter: EventEmitter<DesignerCommand>, row: usize, col: usize) -> Self {
        let button = Button::builder()
            .width_request(PANEL_BUTTON_SIZE)
            .height_request(PANEL_BUTTON_SIZE)
            .hexpand(false)
            .vexpand(false)
            .build();
        button.connect_clicked(move |_| {
            command_emitter.emit(DesignerCommand::TogglePanel(row, col));
        });

        let mut panel = Self {
            button,
            row,
            col,
            finish: None,
        };
        panel.set_finish(PanelFinish::Opaque);
        panel
    }

    pub fn set_finish(&mut self, finish: PanelFinish) {
        if self.finish == Some(finish) {
            return;
        }
        if let Some(previous) = self.finish {
            self.button.remove_css_class(css_class(previous));
        }
        self.button.add_css_class(css_class(finish));
        self.button.set_label(&finish.symbol().to_string());
        self.button.set_tooltip_text(Some(&format!(
            "Row {}, column {}: {}",
            self.row + 1,
            self.col + 1,
            finish
        )));
        self.finish = Some(finish);
    }
}

fn css_class(finish: PanelFinish) -> &'static str {
    match finish {
        PanelFinish::Opaque => "panel-opaque",
        PanelFinish::Mirror => "panel-mirror",
    }
}
