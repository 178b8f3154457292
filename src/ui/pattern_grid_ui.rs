use gtk::prelude::*;
use gtk::Grid;
use log::trace;
use std::{cell::RefCell, rc::Rc};

use crate::destroyable::Destroyable;
use crate::events::{EventEmitter, EventObserver, Unsubscriber};
use crate::model::{DesignerCommand, DesignerEvent, GridDimensions, PatternGrid};

use super::layout::SPACING_SMALL;
use super::panel_button_ui::PanelButtonUI;

pub struct PatternGridUI {
    pub grid: Grid,
    dimensions: GridDimensions,
    panels: Vec<Vec<PanelButtonUI>>,
    command_emitter: EventEmitter<DesignerCommand>,
    subscription: Option<Unsubscriber<DesignerEvent>>,
}

impl Destroyable for PatternGridUI {
    fn destroy(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl PatternGridUI {
    pub fn new(
        command_emitter: EventEmitter<DesignerCommand>,
        event_observer: EventObserver<DesignerEvent>,
    ) -> Rc<RefCell<Self>> {
        let grid = Grid::builder()
            .row_spacing(SPACING_SMALL as u32)
            .column_spacing(SPACING_SMALL as u32)
            .halign(gtk::Align::Center)
            .valign(gtk::Align::Start)
            .css_classes(["pattern-grid"])
            .build();

        let pattern_grid_ui = Rc::new(RefCell::new(Self {
            grid,
            dimensions: GridDimensions::default(),
            panels: vec![],
            command_emitter,
            subscription: None,
        }));

        Self::connect_observer(pattern_grid_ui.clone(), event_observer);
        pattern_grid_ui
    }

    fn connect_observer(
        pattern_grid_ui: Rc<RefCell<Self>>,
        event_observer: EventObserver<DesignerEvent>,
    ) {
        let weak_ui = Rc::downgrade(&pattern_grid_ui);
        let subscription = event_observer.subscribe_with_unsubscriber(move |event| {
            if let DesignerEvent::PatternUpdated { grid, .. } = event {
                if let Some(pattern_grid_ui) = weak_ui.upgrade() {
                    pattern_grid_ui.borrow_mut().show_pattern(grid);
                }
            }
        });
        pattern_grid_ui.borrow_mut().subscription = Some(subscription);
    }

    fn show_pattern(&mut self, pattern: &PatternGrid) {
        self.maybe_resize(pattern.dimensions());
        for (row, col, finish) in pattern.cells() {
            if let Some(panel) = self.panels.get_mut(row).and_then(|row| row.get_mut(col)) {
                panel.set_finish(finish);
            }
        }
    }

    /// Rebuilds the buttons only when the panel grid changes shape.
    pub fn maybe_resize(&mut self, dimensions: GridDimensions) {
        if dimensions == self.dimensions {
            return;
        }
        trace!(target: "window", "Rebuilding panel buttons for {} grid", dimensions);

        for panel in self.panels.iter().flatten() {
            self.grid.remove(&panel.button);
        }
        self.panels.clear();

        for row in 0..dimensions.rows {
            let mut row_panels = Vec::with_capacity(dimensions.cols);
            for col in 0..dimensions.cols {
                let panel = PanelButtonUI::new(self.command_emitter.clone(), row, col);
                self.grid.attach(&panel.button, col as i32, row as i32, 1, 1);
                row_panels.push(panel);
            }
            self.panels.push(row_panels);
        }
        self.dimensions = dimensions;
    }
}
