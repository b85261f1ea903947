use std::sync::Arc;
use std::time::Duration;

use content::documents::hero::AutoScrollConfig;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::slider::Slider;

/// Fallback period when the configured interval is zero.
const DEFAULT_INTERVAL_MS: u64 = 5000;

/// Advances a shared [`Slider`] on a fixed period, the timer behind the
/// carousel's auto-advance.
///
/// The timer never arms when auto scroll is disabled or when there is at
/// most one slide. Dropping the handle cancels the task.
pub struct AutoScroll {
    slider: Arc<Mutex<Slider>>,
    config: AutoScrollConfig,
    handle: Option<JoinHandle<()>>,
}

impl AutoScroll {
    pub fn new(slider: Arc<Mutex<Slider>>, config: AutoScrollConfig) -> Self {
        AutoScroll {
            slider,
            config,
            handle: None,
        }
    }

    /// Arms the timer. Calling while already armed restarts the period
    /// from now.
    pub async fn start(&mut self) {
        self.stop();
        if !self.config.enabled {
            return;
        }
        let slide_count = self.slider.lock().await.slide_count();
        if slide_count <= 1 {
            return;
        }

        let period_ms = if self.config.interval == 0 {
            DEFAULT_INTERVAL_MS
        } else {
            self.config.interval
        };
        let slider = Arc::clone(&self.slider);
        tracing::debug!("arming auto scroll every {period_ms}ms");
        self.handle = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_millis(period_ms));
            // the first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                slider.lock().await.next();
            }
        }));
    }

    /// Disarms the timer. Safe to call repeatedly or when never armed.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .map_or(false, |handle| !handle.is_finished())
    }

    /// Applies a new period, re-arming the timer if it is running.
    pub async fn set_interval(&mut self, interval_ms: u64) {
        self.config.interval = interval_ms;
        if self.is_running() {
            self.start().await;
        }
    }
}

impl Drop for AutoScroll {
    fn drop(&mut self) {
        self.stop();
    }
}
