//! Transient status banners
//!
//! A banner is written with class `show <kind>` at full opacity, faded to
//! zero after the visible period, and loses its class after the fade. Each
//! region owns at most one pending timer: showing a new banner, or rendering
//! other content into the region, aborts the previous one so a stale fade
//! never touches newer content.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;

use crate::config::BannerConfig;
use crate::render::views;
use crate::surface::{Region, RenderSink, StatusKind};

/// Pending fade of one region, tagged with the banner it belongs to
struct Timer {
    generation: u64,
    handle: JoinHandle<()>,
}

#[derive(Default)]
struct Timers {
    next_generation: u64,
    active: HashMap<Region, Timer>,
}

impl Timers {
    fn is_current(&self, region: Region, generation: u64) -> bool {
        self.active
            .get(&region)
            .is_some_and(|timer| timer.generation == generation)
    }
}

fn lock(timers: &Mutex<Timers>) -> MutexGuard<'_, Timers> {
    timers.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Run `write` only while `generation` is still the region's banner
///
/// The lock is held across the write, so `show` and `cancel` never
/// interleave with a timer's sink update.
fn write_if_current(
    timers: &Mutex<Timers>,
    region: Region,
    generation: u64,
    write: impl FnOnce(),
) -> bool {
    let timers = lock(timers);
    if !timers.is_current(region, generation) {
        return false;
    }
    write();
    true
}

/// Per-region banner timers
pub struct BannerScheduler {
    sink: Arc<dyn RenderSink>,
    config: BannerConfig,
    timers: Arc<Mutex<Timers>>,
}

impl BannerScheduler {
    pub fn new(sink: Arc<dyn RenderSink>, config: BannerConfig) -> Self {
        Self {
            sink,
            config,
            timers: Arc::new(Mutex::new(Timers::default())),
        }
    }

    /// Show `message` in `region`, replacing any banner still pending there
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&self, region: Region, message: &str, kind: StatusKind) {
        let mut timers = lock(&self.timers);
        if let Some(previous) = timers.active.remove(&region) {
            previous.handle.abort();
        }
        timers.next_generation += 1;
        let generation = timers.next_generation;

        self.sink.set_html(region, views::banner(message).into_string());
        self.sink.set_class(region, Some(kind.banner_class().as_str()));
        self.sink.set_opacity(region, 1.0);

        let sink = Arc::clone(&self.sink);
        let shared = Arc::clone(&self.timers);
        let visible = self.config.visible();
        let fade = self.config.fade();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(visible).await;
            if !write_if_current(&shared, region, generation, || sink.set_opacity(region, 0.0)) {
                return;
            }
            tokio::time::sleep(fade).await;
            write_if_current(&shared, region, generation, || sink.set_class(region, None));
        });

        timers.active.insert(region, Timer { generation, handle });
    }

    /// Drop a pending banner so the region can show regular content
    ///
    /// Restores full opacity and clears the banner class. No-op when the
    /// region has no banner timer.
    pub fn cancel(&self, region: Region) {
        let mut timers = lock(&self.timers);
        if let Some(previous) = timers.active.remove(&region) {
            previous.handle.abort();
            self.sink.set_class(region, None);
            self.sink.set_opacity(region, 1.0);
        }
    }

    /// Number of banners still fading
    pub fn pending(&self) -> usize {
        lock(&self.timers)
            .active
            .values()
            .filter(|timer| !timer.handle.is_finished())
            .count()
    }
}

impl Drop for BannerScheduler {
    fn drop(&mut self) {
        for (_, timer) in lock(&self.timers).active.drain() {
            timer.handle.abort();
        }
    }
}
