use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use crate::common::error::CowError;
use crate::cow::Cow;
use crate::interference::Interference;

/// Extra pause between counted items.
const COUNT_PAUSE: Duration = Duration::from_millis(50);

/// Context for cow-speed batch operations: one work cow plus an optional
/// handle to the roaming-interference scheduler.
pub struct Pasture {
    pub cow: Cow,
    pub interference: Option<Arc<Interference>>,
}

impl Default for Pasture {
    fn default() -> Self {
        Self::new()
    }
}

impl Pasture {
    pub fn new() -> Self {
        Self {
            cow: Cow::new("UtilityCow"),
            interference: None,
        }
    }

    /// Processes a list of items with cow-like slowness, preserving order.
    pub async fn slow_map<T, R, F>(&self, items: Vec<T>, processor: F) -> Result<Vec<R>, CowError>
    where
        T: Debug,
        R: Debug,
        F: Fn(T) -> R,
    {
        if let Some(interference) = &self.interference {
            interference.graze_through_batch().await;
        }

        let total = items.len();
        log::info!("starting slow batch processing of {total} items...");

        let mut results = Vec::with_capacity(total);
        for (i, item) in items.into_iter().enumerate() {
            log::debug!("processing item {}/{}", i + 1, total);
            if let Some(interference) = &self.interference {
                interference.inspect_item().await;
            }
            results.push(self.cow.chew(item, &processor).await?);
        }

        log::info!("finished slow batch processing!");
        Ok(results)
    }

    /// Slowly filters a collection like a cow carefully selecting grass.
    /// Kept items keep their relative order.
    pub async fn slow_filter<T, F>(&self, items: Vec<T>, predicate: F) -> Result<Vec<T>, CowError>
    where
        T: Debug,
        F: Fn(&T) -> bool,
    {
        let total = items.len();
        log::info!("starting slow filtering of {total} items...");

        let mut kept = Vec::new();
        for (i, item) in items.into_iter().enumerate() {
            log::debug!("examining item {}/{}", i + 1, total);
            let keep = self.cow.chew(&item, |it| predicate(it)).await?;
            if keep {
                log::debug!("item selected for keeping: {item:?}");
                kept.push(item);
            } else {
                log::debug!("item rejected: {item:?}");
            }
        }

        log::info!("filtering complete! kept {} out of {} items", kept.len(), total);
        Ok(kept)
    }

    /// Counts items slowly like a cow counting grass blades, pausing between
    /// each one. An interrupt during counting stops early and returns the
    /// partial count; an interrupt during the initial delay fails as usual.
    pub async fn slow_count<T>(&self, items: &[T]) -> Result<usize, CowError> {
        let interrupt = self.cow.interrupt_handle();
        self.cow
            .chew_over(items, |items| async move {
                log::info!("slowly counting {} items...", items.len());
                let mut count = 0;
                for _ in items {
                    count += 1;
                    log::debug!("counted item {count}");
                    tokio::select! {
                        _ = tokio::time::sleep(COUNT_PAUSE) => {}
                        _ = interrupt.triggered() => break,
                    }
                }
                count
            })
            .await
    }
}

/// Creates a herd of independent cows named Cow1..CowN.
pub fn create_herd(herd_size: usize) -> Vec<Cow> {
    log::info!("creating a herd of {herd_size} cows...");
    let herd = (1..=herd_size).map(|i| Cow::new(format!("Cow{i}"))).collect();
    log::info!("herd created! all cows are ready to graze slowly.");
    herd
}
