use dancefloor::ui::window::build_ui;
use gtk::prelude::*;
use gtk::Application;

const APP_ID: &str = "org.dancefloor.Designer";

fn init_logging() {
    env_logger::init();
}

fn main() -> glib::ExitCode {
    init_logging();

    let app = Application::builder().application_id(APP_ID).build();
    app.connect_activate(build_ui);
    app.run()
}
