mod banner;
pub mod setup;
mod state;

pub use banner::print_banner;
pub use setup::{build_pingora_server, run};
pub use state::{build_app_state, build_visitor_store};
