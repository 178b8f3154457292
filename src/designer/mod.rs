pub mod planner;
pub mod session;
pub mod settings;
pub mod tally;

pub use planner::{plan, plan_floor};
pub use session::DesignSession;
pub use settings::Settings;
pub use tally::tally;
