//! Application bootstrap
//!
//! [`App::start`] installs the tracing subscriber, runs the asset loader
//! once, opens the session store, wires the screens' collaborators together
//! and mounts the entry screen.
//! Afterwards [`App::sync`] keeps the mounted screen in step with the
//! current route: leaving a form screen drops it, which aborts any
//! submission still in flight.

use std::sync::Arc;

use app_core::{AuthError, SessionService};
use app_state::{ActionError, FormError};
use app_ui::screens::{EntryScreen, FormScreen, HomeShell, ScreenContext, ScreenForm};
use app_ui::{
    NavigationHandle, Navigator, Route, SharedToastQueue, Theme, ThemeName, ThemeState, Toast,
    ToastQueue,
};
use async_trait::async_trait;
use storage::{KeyValueStore, KvError, KvStore, MemoryStore};
use thiserror::Error;

use crate::config::{AppConfig, ConfigError};
use crate::logging;

/// Application errors
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] KvError),

    /// Session error
    #[error("Session error: {0}")]
    Session(#[from] AuthError),

    /// Form error
    #[error("Form error: {0}")]
    Form(#[from] FormError),

    /// Fonts or images failed to load
    #[error("Asset loading failed: {0}")]
    Assets(String),

    /// The current route shows no form
    #[error("No form mounted for route {0}")]
    NoForm(Route),
}

/// Result type for application operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Loads fonts and images before the first screen mounts
#[async_trait]
pub trait AssetLoader: Send + Sync {
    /// Load every asset; called exactly once per start
    async fn load(&self) -> Result<()>;
}

/// Loader for builds without bundled assets
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAssets;

#[async_trait]
impl AssetLoader for NoAssets {
    async fn load(&self) -> Result<()> {
        Ok(())
    }
}

/// A running application
pub struct App {
    kv: Option<KvStore>,
    navigation: NavigationHandle,
    theme: ThemeState,
    ctx: ScreenContext,
    screen: Option<FormScreen>,
    shell: Option<HomeShell>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("route", &self.navigation.current_route())
            .field("theme", &self.theme.theme_name)
            .field("screen", &self.screen.as_ref().map(FormScreen::kind))
            .finish_non_exhaustive()
    }
}

impl App {
    /// Start the application
    pub async fn start(config: AppConfig, assets: &dyn AssetLoader) -> Result<Self> {
        logging::init_tracing(config.log_filter.as_deref());

        assets.load().await?;
        tracing::info!("Assets loaded");

        let (kv, store): (Option<KvStore>, Arc<dyn KeyValueStore>) = if config.storage.in_memory {
            (None, Arc::new(MemoryStore::new()))
        } else {
            let kv = KvStore::new(config.storage.kv_config())?;
            (Some(kv.clone()), Arc::new(kv))
        };

        let navigation = NavigationHandle::new();
        let ctx = ScreenContext::new(
            SessionService::new(store),
            Arc::new(navigation.clone()),
            ToastQueue::shared(),
        )
        .with_delays(config.session_delay(), config.notice_delay())
        .with_entry_delay(config.entry_delay())
        .with_policy_override(config.form_policy);

        let route = EntryScreen::mount(&ctx).await?;
        tracing::info!(route = route.name(), "Startup route resolved");

        let mut app = Self {
            kv,
            navigation,
            theme: ThemeState::new(config.theme),
            ctx,
            screen: None,
            shell: None,
        };
        app.sync()?;
        Ok(app)
    }

    /// Route currently shown
    pub fn current_route(&self) -> Route {
        self.navigation.current_route()
    }

    /// Navigation state shared with the screens
    pub fn navigation(&self) -> &NavigationHandle {
        &self.navigation
    }

    /// Collaborators shared by the screens
    pub fn context(&self) -> &ScreenContext {
        &self.ctx
    }

    /// Transient notices
    pub fn notices(&self) -> SharedToastQueue {
        Arc::clone(&self.ctx.notices)
    }

    /// Current theme
    pub fn theme(&self) -> &Theme {
        self.theme.current_theme()
    }

    /// Switch theme
    pub fn set_theme(&mut self, name: ThemeName) {
        self.theme.set_theme(name);
    }

    /// Mount whatever the current route shows
    ///
    /// A form screen stays mounted while its route is current; anything
    /// else unmounts it.
    pub fn sync(&mut self) -> Result<()> {
        let route = self.current_route();

        match ScreenForm::for_route(route) {
            Some(kind) if self.screen.as_ref().map(FormScreen::kind) == Some(kind) => {}
            Some(kind) => self.screen = Some(kind.mount(&self.ctx)?),
            None => self.screen = None,
        }

        match route {
            Route::Main => {
                if self.shell.is_none() {
                    self.shell = Some(HomeShell::new(self.ctx.clone()));
                }
            }
            _ => self.shell = None,
        }
        Ok(())
    }

    /// Push a route and mount its screen
    pub fn navigate(&mut self, route: Route) -> Result<()> {
        self.navigation.navigate(route);
        self.sync()
    }

    /// Pop the current route; returns false at the root
    pub fn back(&mut self) -> Result<bool> {
        let popped = self.navigation.back();
        self.sync()?;
        Ok(popped)
    }

    /// Navigate to a form screen and return it
    pub fn open_form(&mut self, form: ScreenForm) -> Result<&mut FormScreen> {
        self.navigate(form.route())?;
        self.screen
            .as_mut()
            .ok_or(AppError::NoForm(form.route()))
    }

    /// The mounted form screen, if the current route shows one
    pub fn form_screen(&mut self) -> Option<&mut FormScreen> {
        self.screen.as_mut()
    }

    /// The main section, if it is showing
    pub fn shell(&mut self) -> Option<&mut HomeShell> {
        self.shell.as_mut()
    }

    /// Wait for the mounted screen's submission, then follow any navigation it made
    ///
    /// A failed submission is reported as an error notice.
    pub async fn settle(&mut self) -> Result<()> {
        if let Some(screen) = self.screen.as_mut() {
            match screen.settle().await {
                Some(Err(ActionError::Cancelled)) => {
                    tracing::debug!("Submission was cancelled");
                }
                Some(Err(e)) => {
                    tracing::warn!("Submission did not complete: {}", e);
                    self.ctx
                        .notices
                        .lock()
                        .push(Toast::error(format!("Something went wrong: {e}")));
                }
                _ => {}
            }
        }
        self.sync()
    }

    /// Sign out from the main section
    pub async fn logout(&mut self) -> Result<()> {
        match self.shell.as_ref() {
            Some(shell) => shell.logout().await?,
            None => {
                self.ctx.sessions.end().await?;
                self.navigation.replace(Route::Welcome);
            }
        }
        self.sync()
    }

    /// Tear down screens and flush the store
    pub async fn shutdown(mut self) -> Result<()> {
        self.screen = None;
        self.shell = None;
        if let Some(kv) = self.kv.take() {
            kv.flush()?;
        }
        tracing::info!("Shut down");
        Ok(())
    }
}
