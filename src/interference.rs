use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::{rng, Rng};
use tokio::task::JoinHandle;

use crate::common::config::InterferenceConfig;
use crate::common::utils::{chance, random_interference_pause};

const COW_ACTIVITIES: [&str; 8] = [
    "a cow is blocking the CPU pipeline... *chew chew*",
    "cows are having a meeting in your memory... *moo moo*",
    "a cow is reading your code very slowly... *confused moo*",
    "cows are playing in your network stack... *network delay*",
    "a cow is reorganizing your file system... *slow file access*",
    "cows are doing synchronized swimming in your thread pool...",
    "a cow is philosophically pondering your algorithms...",
    "cows are having a tea party on your disk cache...",
];

/// Once released, cows roam free: a background task wakes on a fixed
/// interval and randomly injects extra sleeps and log messages. Owned by the
/// caller and passed around by handle; there is no hidden global.
pub struct Interference {
    config: InterferenceConfig,
    released: Arc<AtomicBool>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl Interference {
    pub fn new(config: InterferenceConfig) -> Self {
        Self {
            config,
            released: Arc::new(AtomicBool::new(false)),
            task: Mutex::new(None),
        }
    }

    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }

    /// Releases the cows into the wild. Idempotent: repeat calls just log and
    /// leave the one background task running. Must be called from within a
    /// tokio runtime.
    pub fn release(&self, cow_name: &str) {
        if self.released.swap(true, Ordering::SeqCst) {
            log::info!("cows are already roaming free! {cow_name} joins the chaos!");
            return;
        }

        log::warn!("WARNING: {cow_name} has been released into the wild!");
        log::warn!("cows are now roaming free and will randomly slow down your application!");

        let released = self.released.clone();
        let config = self.config.clone();
        let handle = tokio::spawn(async move {
            let first_tick =
                tokio::time::Instant::now() + Duration::from_millis(config.initial_delay_ms);
            let mut interval =
                tokio::time::interval_at(first_tick, Duration::from_millis(config.interval_ms));
            loop {
                interval.tick().await;
                if !released.load(Ordering::SeqCst) {
                    break;
                }
                if chance(config.trigger_chance) {
                    wander(&config).await;
                }
            }
        });
        if let Ok(mut slot) = self.task.lock() {
            *slot = Some(handle);
        }

        log::info!("{cow_name} says: Moooooo! *wanders off to cause chaos*");
    }

    /// Attempts to contain the cows, with limited success: a fair coin flip
    /// decides whether they go back to the barn. Returns true when the herd
    /// is contained and the background task is gone.
    pub fn attempt_contain(&self) -> bool {
        if !self.released.load(Ordering::SeqCst) {
            log::info!("no cows to contain - they're all safely in the barn!");
            return false;
        }

        if rng().random_bool(0.5) {
            self.released.store(false, Ordering::SeqCst);
            self.abort_task();
            log::info!("cows have been successfully contained... for now.");
            true
        } else {
            log::warn!("cows refuse to be contained! they're too busy causing chaos!");
            log::warn!("*distant mooing intensifies*");
            false
        }
    }

    /// Batch prelude hook: a released herd sometimes wanders through before a
    /// whole batch starts.
    pub async fn graze_through_batch(&self) {
        if self.is_released() && chance(self.config.batch_prelude_chance) {
            wander(&self.config).await;
        }
    }

    /// Per-item hook: a released cow sometimes stops to inspect a single item.
    pub async fn inspect_item(&self) {
        if self.is_released() && chance(self.config.per_item_chance) {
            log::info!("a cow is inspecting this item... *sniff sniff*");
            tokio::time::sleep(Duration::from_millis(self.config.per_item_extra_ms)).await;
        }
    }

    fn abort_task(&self) {
        if let Ok(mut slot) = self.task.lock() {
            if let Some(handle) = slot.take() {
                handle.abort();
            }
        }
    }
}

impl Drop for Interference {
    fn drop(&mut self) {
        self.abort_task();
    }
}

/// One interference event: a random activity message followed by a random
/// pause in the configured window.
async fn wander(config: &InterferenceConfig) {
    let activity = {
        let mut rng = rng();
        COW_ACTIVITIES[rng.random_range(0..COW_ACTIVITIES.len())]
    };
    log::info!("{activity}");
    tokio::time::sleep(random_interference_pause(
        config.min_extra_ms,
        config.max_extra_ms,
    ))
    .await;
}
