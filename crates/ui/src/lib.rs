pub mod app;
pub mod context;
pub mod routes;
pub mod shell;
pub mod speech;
pub mod vm;
pub mod views;

pub use app::App;
pub use context::{AppConfig, AppContext, UiApp, build_app_context};
pub use shell::Shell;
