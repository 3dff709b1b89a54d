//! Portico
//!
//! Sign-in, registration and password-reset screens in front of a tabbed
//! main section. The workspace is split by concern:
//!
//! - `storage` - key-value persistence (sled, or in memory)
//! - `app-state` - field and form state, validation, the submit runner
//! - `app-core` - the stored session marker
//! - `app-ui` - navigation, theme, components and screens
//!
//! This crate wires them together: [`config`] loads settings, [`logging`]
//! installs the tracing subscriber and [`app`] starts the application.
//!
//! # Example
//!
//! ```rust
//! use portico::app::{App, NoAssets};
//! use portico::config::AppConfig;
//! use app_ui::Route;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let app = App::start(AppConfig::in_memory(), &NoAssets).await?;
//! assert_eq!(app.current_route(), Route::Welcome);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod logging;

pub use app::{App, AppError, AssetLoader, NoAssets};
pub use config::{AppConfig, ConfigError, StorageConfig};
pub use logging::init_tracing;
