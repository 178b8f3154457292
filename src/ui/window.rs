use gio::{Menu, SimpleAction};
use gtk::prelude::*;
use gtk::{Application, ApplicationWindow, Button, HeaderBar, MenuButton, Orientation};
use std::cell::RefCell;
use std::rc::Rc;

use crate::designer::{DesignSession, Settings};
use crate::destroyable::Destroyable;
use crate::events::{Channel, EventEmitter};
use crate::model::{DesignerCommand, DesignerEvent, PanelSpec};

use super::floor_inputs_ui::FloorInputsUI;
use super::layout::SPACING_LARGE;
use super::pattern_grid_ui::PatternGridUI;
use super::summary_ui::SummaryUI;

fn command_action(
    name: &str,
    command: DesignerCommand,
    command_emitter: &EventEmitter<DesignerCommand>,
) -> SimpleAction {
    let action = SimpleAction::new(name, None);
    let command_emitter = command_emitter.clone();
    action.connect_activate(move |_, _| {
        log::trace!(target: "window", "Action {:?}", command);
        command_emitter.emit(command.clone());
    });
    action
}

fn command_button(
    label: &str,
    command: DesignerCommand,
    command_emitter: &EventEmitter<DesignerCommand>,
) -> Button {
    let button = Button::with_label(label);
    let command_emitter = command_emitter.clone();
    button.connect_clicked(move |_| command_emitter.emit(command.clone()));
    button
}

fn load_panel_spec(settings: &Settings) -> PanelSpec {
    match settings.panel_spec() {
        Ok(spec) => spec,
        Err(err) => {
            log::warn!(target: "window", "{}; using the standard panel spec", err);
            PanelSpec::default()
        }
    }
}

pub fn build_ui(app: &Application) {
    let (command_emitter, command_observer) = Channel::<DesignerCommand>::new();
    let (event_emitter, event_observer) = Channel::<DesignerEvent>::new();

    let settings = Settings::load_from(&Settings::default_path());
    let spec = load_panel_spec(&settings);
    log::info!(
        target: "window",
        "Panel size {:.3} ft, ${:.2}/sqft, {} panels per case",
        spec.panel_size_ft(),
        spec.cost_per_sqft(),
        spec.case_capacity()
    );

    let session = DesignSession::new(command_observer, event_emitter, spec);

    let window = ApplicationWindow::builder()
        .application(app)
        .title("LED Dance Floor Designer")
        .resizable(true)
        .default_width(900)
        .default_height(800)
        .build();

    let floor_inputs = FloorInputsUI::new(
        command_emitter.clone(),
        settings.default_width_ft,
        settings.default_length_ft,
    );
    let summary_ui = SummaryUI::new(event_observer.clone());
    let pattern_grid_ui = PatternGridUI::new(command_emitter.clone(), event_observer.clone());

    let controls_box = gtk::Box::new(Orientation::Horizontal, SPACING_LARGE);
    controls_box.append(&command_button(
        "Reset Pattern",
        DesignerCommand::ResetPattern,
        &command_emitter,
    ));
    controls_box.append(&command_button(
        "Checkerboard",
        DesignerCommand::FillCheckerboard,
        &command_emitter,
    ));

    let top_level_box = gtk::Box::builder()
        .orientation(Orientation::Vertical)
        .spacing(SPACING_LARGE)
        .margin_start(SPACING_LARGE)
        .margin_end(SPACING_LARGE)
        .margin_top(SPACING_LARGE)
        .margin_bottom(SPACING_LARGE)
        .build();
    top_level_box.append(&floor_inputs.container);
    top_level_box.append(&summary_ui.borrow().container);
    top_level_box.append(&controls_box);
    top_level_box.append(&gtk::Label::new(Some(
        "Click on panels to toggle Mirror/Opaque:",
    )));
    top_level_box.append(&pattern_grid_ui.borrow().grid);

    let scrolled_window = gtk::ScrolledWindow::builder()
        .hexpand(true)
        .vexpand(true)
        .child(&top_level_box)
        .build();
    window.set_child(Some(&scrolled_window));

    // Header bar menu
    let menu = Menu::new();
    menu.append(Some("Reset Pattern"), Some("win.reset-pattern"));
    menu.append(Some("Checkerboard"), Some("win.checkerboard"));
    let menu_button = MenuButton::builder()
        .icon_name("open-menu-symbolic")
        .menu_model(&menu)
        .build();
    let header_bar = HeaderBar::new();
    header_bar.pack_end(&menu_button);
    window.set_titlebar(Some(&header_bar));

    window.add_action(&command_action(
        "reset-pattern",
        DesignerCommand::ResetPattern,
        &command_emitter,
    ));
    window.add_action(&command_action(
        "checkerboard",
        DesignerCommand::FillCheckerboard,
        &command_emitter,
    ));
    app.set_accels_for_action("win.reset-pattern", &["<Control>r"]);
    app.set_accels_for_action("win.checkerboard", &["<Control>k"]);

    // first plan for the default floor
    floor_inputs.submit();

    let components: Vec<Rc<RefCell<dyn Destroyable>>> = vec![
        session.clone() as Rc<RefCell<dyn Destroyable>>,
        summary_ui.clone() as Rc<RefCell<dyn Destroyable>>,
        pattern_grid_ui.clone() as Rc<RefCell<dyn Destroyable>>,
    ];
    let teardown = RefCell::new(components);
    window.connect_close_request(move |_| {
        log::info!(target: "window", "Closing design session {}", session.borrow().id());
        for component in teardown.borrow_mut().drain(..) {
            component.borrow_mut().destroy();
        }
        glib::Propagation::Proceed
    });

    window.present();
}
