//! Per-object lazy content slot.
//!
//! The slot is filled at most once. Concurrent first readers may each run
//! the computation; whichever finishes first publishes its value and the
//! others adopt it. The computation is a pure function of one graph
//! snapshot, so every racer produces a value-equal result and no lock is
//! held while computing.

use std::cell::Cell;
use std::sync::OnceLock;

use crate::content::Content;
use crate::error::{ObjectError, Result};

thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Counts nested materializations on the current thread.
struct DepthGuard;

impl DepthGuard {
    fn enter(limit: usize) -> Result<Self> {
        let depth = DEPTH.with(|d| {
            let next = d.get() + 1;
            d.set(next);
            next
        });
        let guard = DepthGuard;
        if depth > limit {
            return Err(ObjectError::Structural(format!(
                "content nesting exceeds {limit} levels"
            )));
        }
        Ok(guard)
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

/// Lazily populated content slot.
#[derive(Debug, Default)]
pub struct ContentCache {
    slot: OnceLock<Content>,
}

impl ContentCache {
    /// Creates a cold cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache that is already populated.
    #[must_use]
    pub fn with(content: Content) -> Self {
        let slot = OnceLock::new();
        let _ = slot.set(content);
        Self { slot }
    }

    /// Returns the cached content, if any.
    #[must_use]
    pub fn get(&self) -> Option<&Content> {
        self.slot.get()
    }

    /// Returns true once content has been published.
    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Returns the cached content, computing it first if needed.
    ///
    /// `max_depth` bounds how many materializations may be nested on this
    /// thread; a cyclic structure trips it instead of overflowing the stack.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectError::Structural`] when the nesting bound is
    /// exceeded, and propagates any error from `compute`. A failed
    /// computation leaves the cache cold.
    pub fn get_or_compute(
        &self,
        max_depth: usize,
        compute: impl FnOnce() -> Result<Content>,
    ) -> Result<&Content> {
        if let Some(content) = self.slot.get() {
            return Ok(content);
        }
        let computed = {
            let _guard = DepthGuard::enter(max_depth)?;
            compute()?
        };
        Ok(self.slot.get_or_init(|| computed))
    }
}
