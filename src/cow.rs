use std::fmt::Debug;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::common::config::CowConfig;
use crate::common::error::CowError;
use crate::common::interrupt::Interrupt;

/// Processes values five times slower than normal, simulating how a cow
/// slowly chews and digests its food. Every operation blocks its calling
/// task for the full configured delay before the real work runs.
///
/// A cow handles one item at a time; the chewing flag is informational and
/// the type is not meant for concurrent reentry.
pub struct Cow {
    name: String,
    config: CowConfig,
    chewing: AtomicBool,
    interrupt: Interrupt,
}

/// Keeps the chewing flag honest on every exit path, including panics and
/// interrupted waits.
struct ChewGuard<'a> {
    cow: &'a Cow,
}

impl<'a> ChewGuard<'a> {
    fn start(cow: &'a Cow) -> Self {
        cow.chewing.store(true, Ordering::SeqCst);
        log::debug!("cow {} starts chewing slowly...", cow.name);
        Self { cow }
    }
}

impl Drop for ChewGuard<'_> {
    fn drop(&mut self) {
        self.cow.chewing.store(false, Ordering::SeqCst);
        log::debug!("cow {} finished chewing", self.cow.name);
    }
}

impl Default for Cow {
    fn default() -> Self {
        Self::new("Bessie")
    }
}

impl Cow {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, CowConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: CowConfig) -> Self {
        Self {
            name: name.into(),
            config,
            chewing: AtomicBool::new(false),
            interrupt: Interrupt::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_chewing(&self) -> bool {
        self.chewing.load(Ordering::SeqCst)
    }

    pub fn processing_delay(&self) -> Duration {
        self.config.processing_delay()
    }

    /// Handle that cuts this cow's blocking waits short.
    pub fn interrupt_handle(&self) -> Interrupt {
        self.interrupt.clone()
    }

    pub fn moo(&self) {
        log::info!("cow {} says: Moooooo!", self.name);
    }

    /// Processes a value with cow-like slowness: waits out the full delay,
    /// then applies the processor and returns its result.
    pub async fn chew<T, R, F>(&self, value: T, processor: F) -> Result<R, CowError>
    where
        T: Debug,
        R: Debug,
        F: FnOnce(T) -> R,
    {
        let _guard = ChewGuard::start(self);
        self.wait_out_delay("chewing").await?;
        let before = format!("{value:?}");
        let result = processor(value);
        log::info!(
            "cow {} has slowly processed: {} -> {:?}",
            self.name,
            before,
            result
        );
        Ok(result)
    }

    /// Like `chew`, for operations that need to await on their own (the slow
    /// counting helper uses this). The inner future runs after the delay and
    /// inherits the same busy-flag guarantees.
    pub async fn chew_over<T, R, F, Fut>(&self, value: T, processor: F) -> Result<R, CowError>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
    {
        let _guard = ChewGuard::start(self);
        self.wait_out_delay("chewing").await?;
        Ok(processor(value).await)
    }

    /// Produces a value with cow-like slowness.
    pub async fn graze<R, F>(&self, supplier: F) -> Result<R, CowError>
    where
        R: Debug,
        F: FnOnce() -> R,
    {
        let _guard = ChewGuard::start(self);
        self.wait_out_delay("grazing").await?;
        let result = supplier();
        log::info!(
            "cow {} has slowly grazed and produced: {:?}",
            self.name,
            result
        );
        Ok(result)
    }

    /// Performs a side-effecting operation five times slower than normal.
    pub async fn ruminate<F>(&self, operation: F) -> Result<(), CowError>
    where
        F: FnOnce(),
    {
        let _guard = ChewGuard::start(self);
        self.wait_out_delay("ruminating").await?;
        operation();
        log::info!("cow {} has finished ruminating on the operation", self.name);
        Ok(())
    }

    /// Slowly adds two numbers like a cow counting grass.
    pub async fn slow_add(&self, a: i64, b: i64) -> Result<i64, CowError> {
        self.chew((a, b), |(a, b)| {
            log::info!("cow {} is slowly counting: {} + {}", self.name, a, b);
            a + b
        })
        .await
    }

    /// Slowly concatenates strings like a cow chewing cud.
    pub async fn slow_concat(&self, strings: &[&str]) -> Result<String, CowError> {
        self.chew(strings, |parts| {
            log::info!(
                "cow {} is slowly chewing through text concatenation",
                self.name
            );
            parts.concat()
        })
        .await
    }

    async fn wait_out_delay(&self, activity: &'static str) -> Result<(), CowError> {
        if self.interrupt.is_triggered() {
            return Err(self.interrupted(activity));
        }
        tokio::select! {
            _ = tokio::time::sleep(self.processing_delay()) => Ok(()),
            _ = self.interrupt.triggered() => Err(self.interrupted(activity)),
        }
    }

    fn interrupted(&self, activity: &'static str) -> CowError {
        log::warn!("cow {} was interrupted while {}!", self.name, activity);
        CowError::Interrupted {
            name: self.name.clone(),
            activity,
        }
    }
}
