use log::{error, info, trace, warn};
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

use super::planner::plan_floor;
use super::settings::Settings;
use super::tally::tally;
use crate::destroyable::Destroyable;
use crate::error::Result;
use crate::events::{EventEmitter, EventHandler, EventObserver, Unsubscriber};
use crate::model::{
    DesignSummary, DesignerCommand, DesignerEvent, FloorPlan, PanelFinish, PanelSpec,
    PatternGrid, Tally,
};

/// One customer's design: the latest floor plan and the pattern laid on it.
///
/// The session owns its grid outright; nothing is shared with other sessions.
/// Every successful change is published on the event emitter so the host can
/// redraw, and a rejected request leaves both plan and grid as they were.
pub struct DesignSession {
    id: Uuid,
    spec: PanelSpec,
    plan: Option<FloorPlan>,
    grid: PatternGrid,
    debug_mode: bool,
    event_emitter: EventEmitter<DesignerEvent>,
    subscription: Option<Unsubscriber<DesignerCommand>>,
}

impl Destroyable for DesignSession {
    fn destroy(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl EventHandler<DesignerCommand> for DesignSession {
    fn handle_event(&mut self, event: &DesignerCommand) {
        self.handle_command(event.clone());
    }
}

impl DesignSession {
    pub fn detached(spec: PanelSpec, event_emitter: EventEmitter<DesignerEvent>) -> Self {
        let id = Uuid::new_v4();
        info!(target: "session", "Starting design session {}", id);
        Self {
            id,
            spec,
            plan: None,
            grid: PatternGrid::default(),
            debug_mode: Settings::is_debug_mode(),
            event_emitter,
            subscription: None,
        }
    }

    /// Creates a session that applies every command sent on `command_observer`.
    pub fn new(
        command_observer: EventObserver<DesignerCommand>,
        event_emitter: EventEmitter<DesignerEvent>,
        spec: PanelSpec,
    ) -> Rc<RefCell<Self>> {
        let session = Rc::new(RefCell::new(Self::detached(spec, event_emitter)));
        Self::wire_subscription(session.clone(), command_observer);
        session
    }

    fn wire_subscription(
        session: Rc<RefCell<Self>>,
        command_observer: EventObserver<DesignerCommand>,
    ) {
        let weak_session = Rc::downgrade(&session);
        let subscription = command_observer.subscribe_with_unsubscriber(move |command| {
            if let Some(session) = weak_session.upgrade() {
                session.borrow_mut().handle_event(command);
            }
        });
        session.borrow_mut().subscription = Some(subscription);
    }

    pub fn handle_command(&mut self, command: DesignerCommand) {
        trace!(target: "session", "Handling command: {:?}", command);
        let result = match command {
            DesignerCommand::SetDimensions { width, length } => {
                self.set_dimensions(width, length).map(|_| ())
            }
            DesignerCommand::TogglePanel(row, col) => self.toggle_panel(row, col).map(|_| ()),
            DesignerCommand::ResetPattern => {
                self.reset_pattern();
                Ok(())
            }
            DesignerCommand::FillCheckerboard => {
                self.fill_checkerboard();
                Ok(())
            }
            DesignerCommand::InitDisplay => {
                self.sync_display();
                Ok(())
            }
        };

        if let Err(err) = result {
            if err.is_programming_error() {
                error!(target: "session", "Session {}: {}", self.id, err);
            } else {
                warn!(target: "session", "Session {}: {}", self.id, err);
            }
        }
    }

    /// Plans the floor and fits the pattern grid to it. The pattern survives
    /// only if the panel grid keeps its shape.
    pub fn set_dimensions(&mut self, width: f64, length: f64) -> Result<FloorPlan> {
        let plan = match plan_floor(width, length, &self.spec) {
            Ok(plan) => plan,
            Err(err) => {
                if let Some((axis, value)) = err.rejected_request() {
                    self.event_emitter.emit(DesignerEvent::RequestRejected {
                        axis,
                        value,
                        reason: err.to_string(),
                    });
                }
                return Err(err);
            }
        };

        self.plan = Some(plan);
        if self.grid.resize(plan.dimensions) {
            info!(
                target: "session",
                "Session {}: pattern reset for new {} grid",
                self.id,
                plan.dimensions
            );
        }

        self.event_emitter.emit(DesignerEvent::PlanUpdated(plan));
        self.sync_pattern();
        Ok(plan)
    }

    pub fn toggle_panel(&mut self, row: usize, col: usize) -> Result<PanelFinish> {
        let finish = self.grid.toggle(row, col)?;
        trace!(target: "session", "Panel ({}, {}) is now {}", row, col, finish);
        self.sync_pattern();
        Ok(finish)
    }

    pub fn reset_pattern(&mut self) {
        self.grid.reset();
        self.sync_pattern();
    }

    pub fn fill_checkerboard(&mut self) {
        self.grid.fill_checkerboard();
        self.sync_pattern();
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn spec(&self) -> &PanelSpec {
        &self.spec
    }

    pub fn plan(&self) -> Option<&FloorPlan> {
        self.plan.as_ref()
    }

    pub fn grid(&self) -> &PatternGrid {
        &self.grid
    }

    pub fn tally(&self) -> Tally {
        tally(&self.grid, self.spec.case_capacity())
    }

    pub fn summary(&self) -> Option<DesignSummary> {
        self.plan
            .as_ref()
            .map(|plan| DesignSummary::new(plan, &self.tally()))
    }

    fn sync_display(&mut self) {
        if let Some(plan) = self.plan {
            self.event_emitter.emit(DesignerEvent::PlanUpdated(plan));
        }
        self.sync_pattern();
    }

    fn sync_pattern(&mut self) {
        if self.debug_mode {
            log::debug!(target: "session", "Pattern: {:?}", self.grid);
        }
        self.event_emitter.emit(DesignerEvent::PatternUpdated {
            grid: self.grid.clone(),
            tally: self.tally(),
        });
    }
}
