//! Headless Chromium subprocess wrapper for rendering detail pages.
//!
//! Each render launches an isolated browser process that dumps the
//! script-rendered DOM to stdout. The process is owned by a
//! [`BrowserSession`] guard and killed when the guard drops, so no exit
//! path can leak a browser.

pub mod extract;

use crate::domain::error::{AppError, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::process::{Child, Command};

pub use extract::extract_reviews;

/// Configuration for headless captures
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Chromium or Chrome executable
    pub binary_path: PathBuf,
    /// Upper bound on a single navigation, render included
    pub navigation_timeout: Duration,
    /// Virtual time handed to page scripts before the DOM is dumped
    pub render_budget_ms: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            binary_path: PathBuf::from("chromium"),
            navigation_timeout: Duration::from_secs(30),
            render_budget_ms: 5000,
        }
    }
}

impl BrowserConfig {
    /// No UI, no sandbox, no shared-memory usage.
    pub fn launch_args(&self, url: &str) -> Vec<String> {
        vec![
            "--headless".to_string(),
            "--no-sandbox".to_string(),
            "--disable-dev-shm-usage".to_string(),
            "--disable-gpu".to_string(),
            "--incognito".to_string(),
            format!("--virtual-time-budget={}", self.render_budget_ms),
            "--dump-dom".to_string(),
            url.to_string(),
        ]
    }
}

#[async_trait]
pub trait PageRenderer {
    /// Returns the rendered HTML of `url`.
    async fn render(&self, url: &str) -> Result<String>;
}

/// A running browser process. Dropping the session kills it.
pub struct BrowserSession {
    child: Child,
    url: String,
}

impl BrowserSession {
    pub fn launch(config: &BrowserConfig, url: &str) -> Result<Self> {
        let child = Command::new(&config.binary_path)
            .args(config.launch_args(url))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                AppError::BrowserError(format!(
                    "Failed to launch browser at {}: {}",
                    config.binary_path.display(),
                    e
                ))
            })?;

        tracing::debug!(url, pid = child.id(), "Browser session started");
        Ok(Self {
            child,
            url: url.to_string(),
        })
    }

    /// Reads the dumped DOM and waits for the process to exit.
    pub async fn rendered_dom(&mut self, timeout: Duration) -> Result<String> {
        let mut stdout = self
            .child
            .stdout
            .take()
            .ok_or_else(|| AppError::BrowserError("Browser stdout was not captured".to_string()))?;

        let url = self.url.clone();
        let child = &mut self.child;
        let capture = async move {
            let mut html = String::new();
            stdout
                .read_to_string(&mut html)
                .await
                .map_err(|e| AppError::BrowserError(format!("Failed to read rendered page: {}", e)))?;
            let status = child
                .wait()
                .await
                .map_err(|e| AppError::BrowserError(format!("Browser did not exit cleanly: {}", e)))?;
            Ok::<_, AppError>((html, status))
        };

        let (html, status) = tokio::time::timeout(timeout, capture)
            .await
            .map_err(|_| {
                AppError::BrowserError(format!(
                    "Navigation to {} timed out after {}ms",
                    url,
                    timeout.as_millis()
                ))
            })??;

        if !status.success() {
            return Err(AppError::BrowserError(format!(
                "Browser exited with {} for {}",
                status, self.url
            )));
        }

        Ok(html)
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        if let Ok(None) = self.child.try_wait() {
            if let Err(e) = self.child.start_kill() {
                tracing::warn!(url = %self.url, error = %e, "Failed to kill browser session");
            } else {
                tracing::debug!(url = %self.url, "Browser session killed");
            }
        }
    }
}

/// Headless Chromium renderer
pub struct HeadlessBrowser {
    config: BrowserConfig,
}

impl HeadlessBrowser {
    pub fn new(binary_path: PathBuf) -> Self {
        Self {
            config: BrowserConfig {
                binary_path,
                ..Default::default()
            },
        }
    }

    pub fn with_config(config: BrowserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }
}

#[async_trait]
impl PageRenderer for HeadlessBrowser {
    async fn render(&self, url: &str) -> Result<String> {
        let mut session = BrowserSession::launch(&self.config, url)?;
        session.rendered_dom(self.config.navigation_timeout).await
    }
}
