// src/context.rs
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{info, warn};

use crate::chart::ChartSurface;
use crate::config::AppConfig;
use crate::drivers::{render_chart_png, ChartError, PlotStyle};
use crate::types::UiCommand;

/// Application-wide state handed to the window at construction and dropped
/// when the window closes.
pub struct AppContext {
    pub config: AppConfig,
    pub chart: ChartSurface,
    pub plot_style: PlotStyle,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Result<Self, ChartError> {
        config.validate()?;
        let chart = ChartSurface::from_config(&config)?;
        Ok(Self::with_chart(config, chart))
    }

    pub fn with_chart(config: AppConfig, chart: ChartSurface) -> Self {
        info!(
            "context up: {} series x {} samples, tick {:?}",
            chart.series_count(),
            chart.sample_count(),
            config.tick_interval()
        );
        Self {
            config,
            chart,
            plot_style: PlotStyle::default(),
        }
    }

    /// Apply one command. Returns a status line for commands that produce one.
    pub fn apply(&mut self, cmd: UiCommand) -> Result<Option<String>, ChartError> {
        match cmd {
            UiCommand::Start => self.chart.start(),
            UiCommand::Stop => self.chart.stop(),
            UiCommand::SetVisible { index, visible } => self.chart.set_visible(index, visible),
            UiCommand::SaveSnapshot => {
                let path = self.save_snapshot()?;
                return Ok(Some(format!("Saved {}", path.display())));
            }
        }
        Ok(None)
    }

    pub fn save_snapshot(&self) -> Result<PathBuf, ChartError> {
        let png = render_chart_png(&self.chart.frame(), self.plot_style.clone())?;
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        fs::create_dir_all(&self.config.export_dir)?;
        let path = write_new_file(
            &self.config.export_dir,
            &format!("livechart_{timestamp}"),
            "png",
            &png,
        )?;
        info!("snapshot written to {}", path.display());
        Ok(path)
    }
}

/// Writes `bytes` to `<stem>.<ext>` in `dir`, falling back to `<stem>_<n>.<ext>`.
/// Existing files are never overwritten.
fn write_new_file(dir: &Path, stem: &str, ext: &str, bytes: &[u8]) -> Result<PathBuf, ChartError> {
    for n in 0u32.. {
        let name = match n {
            0 => format!("{stem}.{ext}"),
            n => format!("{stem}_{n}.{ext}"),
        };
        let path = dir.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(bytes)?;
                return Ok(path);
            }
            Err(err) if err.kind() == ErrorKind::AlreadyExists => continue,
            Err(err) => return Err(err.into()),
        }
    }
    Err(ChartError::Export(format!("no free file name for {stem}")))
}

impl Drop for AppContext {
    fn drop(&mut self) {
        if self.chart.is_running() {
            warn!("context dropped while chart was running");
        }
        info!("context torn down");
    }
}
