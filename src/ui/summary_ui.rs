use gtk::prelude::*;
use gtk::{Label, Orientation};
use std::{cell::RefCell, rc::Rc};

use crate::destroyable::Destroyable;
use crate::events::{EventObserver, Unsubscriber};
use crate::model::{DesignSummary, DesignerEvent, FloorPlan};

use super::layout::SPACING_SMALL;

/// Labels for the quote: actual size, panel count, cost and the per-finish
/// counts, plus a line for rejected input.
pub struct SummaryUI {
    pub container: gtk::Box,
    actual_size: Label,
    panels_needed: Label,
    total_cost: Label,
    mirror_panels: Label,
    opaque_panels: Label,
    rejection: Label,
    plan: Option<FloorPlan>,
    subscription: Option<Unsubscriber<DesignerEvent>>,
}

impl Destroyable for SummaryUI {
    fn destroy(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

fn summary_label(css_class: &str) -> Label {
    Label::builder()
        .xalign(0.0)
        .css_classes([css_class])
        .build()
}

impl SummaryUI {
    pub fn new(event_observer: EventObserver<DesignerEvent>) -> Rc<RefCell<Self>> {
        let container = gtk::Box::new(Orientation::Vertical, SPACING_SMALL);
        let actual_size = summary_label("summary-size");
        let panels_needed = summary_label("summary-panels");
        let total_cost = summary_label("summary-cost");
        let mirror_panels = summary_label("summary-mirror");
        let opaque_panels = summary_label("summary-opaque");
        let rejection = summary_label("summary-error");
        rejection.set_visible(false);

        for label in [
            &actual_size,
            &panels_needed,
            &total_cost,
            &mirror_panels,
            &opaque_panels,
            &rejection,
        ] {
            container.append(label);
        }

        let summary_ui = Rc::new(RefCell::new(Self {
            container,
            actual_size,
            panels_needed,
            total_cost,
            mirror_panels,
            opaque_panels,
            rejection,
            plan: None,
            subscription: None,
        }));

        let weak_ui = Rc::downgrade(&summary_ui);
        let subscription = event_observer.subscribe_with_unsubscriber(move |event| {
            if let Some(summary_ui) = weak_ui.upgrade() {
                summary_ui.borrow_mut().handle_event(event);
            }
        });
        summary_ui.borrow_mut().subscription = Some(subscription);

        summary_ui
    }

    fn handle_event(&mut self, event: &DesignerEvent) {
        match event {
            DesignerEvent::PlanUpdated(plan) => {
                self.plan = Some(*plan);
                self.rejection.set_visible(false);
            }
            DesignerEvent::PatternUpdated { tally, .. } => {
                if let Some(plan) = &self.plan {
                    self.show(&DesignSummary::new(plan, tally));
                }
            }
            DesignerEvent::RequestRejected { reason, .. } => {
                self.rejection.set_text(reason);
                self.rejection.set_visible(true);
            }
        }
    }

    fn show(&self, summary: &DesignSummary) {
        self.actual_size.set_text(&summary.actual_size);
        self.panels_needed.set_text(&summary.panels_needed);
        self.total_cost.set_text(&summary.total_cost);
        self.mirror_panels.set_text(&summary.mirror_panels);
        self.opaque_panels.set_text(&summary.opaque_panels);
    }
}
