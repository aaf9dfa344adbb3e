use std::io::Write;

use crate::config::AppConfig;
use crate::context::ThemeProvider;
use crate::document::RootElement;
use crate::error::AppResult;
use crate::storage::{
    FileStorage, MemoryStorage, PersistenceSink, PreferenceStorage, UnavailableStorage,
};
use crate::store::ThemeStore;
use crate::theme::{render_marker_stylesheet, ColorSchemeSignal, EnvColorScheme, FixedColorScheme};
use crate::ui::ThemeToggleControl;

mod startup;

pub use startup::{Command, StartupOptions, USAGE};

const ROOT_BASE_CLASS: &str = "antialiased";

/// One page load: a server render followed by the client mount.
pub(crate) struct App {
    options: StartupOptions,
    config: AppConfig,
}

/// Root markup at each stage of a page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub server: String,
    pub first_paint: String,
    pub hydrated: String,
}

impl RenderReport {
    pub fn hydration_matches(&self) -> bool {
        self.server == self.first_paint
    }
}

impl App {
    pub(crate) fn new(options: StartupOptions, config: AppConfig) -> Self {
        Self { options, config }
    }

    /// What the server emits: the store is never mounted and has neither
    /// storage nor an environment signal to consult.
    pub fn server_render(&self) -> String {
        let provider = self.provider(Box::new(UnavailableStorage), Box::new(FixedColorScheme(false)));
        provider.store().render_root()
    }

    /// Builds the client-side provider without mounting it.
    pub fn client_provider(&self) -> ThemeProvider {
        self.provider(self.storage(), self.signal())
    }

    pub fn render_report(&self) -> RenderReport {
        let server = self.server_render();
        let provider = self.client_provider();
        let first_paint = provider.store().render_root();
        provider.mount();
        RenderReport {
            server,
            first_paint,
            hydrated: provider.store().render_root(),
        }
    }

    pub fn execute<W: Write>(&self, out: &mut W) -> AppResult<()> {
        match self.options.command {
            Command::Help => writeln!(out, "{USAGE}")?,
            Command::Css => write!(out, "{}", render_marker_stylesheet(self.config.dark_marker()))?,
            Command::Render => {
                let report = self.render_report();
                if !report.hydration_matches() {
                    tracing::error!(
                        server = %report.server,
                        first_paint = %report.first_paint,
                        "hydration mismatch"
                    );
                }
                writeln!(out, "server:      {}", report.server)?;
                writeln!(out, "first paint: {}", report.first_paint)?;
                writeln!(out, "hydrated:    {}", report.hydrated)?;
            }
            Command::Show => {
                let provider = self.client_provider();
                provider.mount();
                writeln!(out, "{}", provider.context().read_theme())?;
            }
            Command::Toggle => {
                let provider = self.client_provider();
                provider.mount();
                let control = ThemeToggleControl::new(provider.context());
                control.click();
                writeln!(out, "{}", control.theme())?;
            }
        }
        Ok(())
    }

    fn provider(
        &self,
        storage: Box<dyn PreferenceStorage>,
        signal: Box<dyn ColorSchemeSignal>,
    ) -> ThemeProvider {
        let sink = PersistenceSink::new(storage, self.config.storage_key());
        let document = RootElement::new(self.config.dark_marker()).with_class(ROOT_BASE_CLASS);
        ThemeProvider::new(ThemeStore::new(sink, Box::new(document), signal))
    }

    fn storage(&self) -> Box<dyn PreferenceStorage> {
        let explicit = self
            .options
            .storage_path
            .as_ref()
            .or(self.config.storage_path.as_ref());
        if let Some(path) = explicit {
            return Box::new(FileStorage::with_path(path));
        }
        match FileStorage::with_default_path() {
            Ok(storage) => {
                tracing::debug!(path = %storage.path().display(), "using file storage");
                Box::new(storage)
            }
            Err(err) => {
                tracing::warn!(?err, "no durable storage location; theme will not persist");
                Box::new(MemoryStorage::default())
            }
        }
    }

    fn signal(&self) -> Box<dyn ColorSchemeSignal> {
        match self.options.prefers_dark {
            Some(dark) => Box::new(FixedColorScheme(dark)),
            None => Box::new(EnvColorScheme::from_env(self.config.prefers_dark)),
        }
    }
}
