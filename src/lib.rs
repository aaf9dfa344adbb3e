mod app;
mod config;
pub mod context;
pub mod document;
pub mod error;
pub mod logging;
pub mod state;
pub mod storage;
pub mod store;
pub mod theme;
pub mod ui;
pub use context::{ThemeBinding, ThemeContext, ThemeProvider};
pub use error::{AppError, AppResult};
pub use store::{ThemeHandle, ThemeStore};
pub use theme::ThemePreference;

/// Entrypoint used by the CLI binary.
pub fn run<I>(args: I) -> AppResult<()>
where
    I: IntoIterator<Item = String>,
{
    logging::init();
    let options = app::StartupOptions::parse(args)?;
    tracing::debug!(?options, "parsed startup options");

    let app = app::App::new(options, config::load_app_config());
    let stdout = std::io::stdout();
    app.execute(&mut stdout.lock())
}
