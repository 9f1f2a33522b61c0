//! Shared weather state
//!
//! Written by the sync link, read by the renderer. A single blocking mutex
//! guards the cell so a reader never sees a half-written update; the raw
//! mutex is a type parameter so firmware and host tests choose their own.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use super::Weather;

/// Last weather received from the phone
pub struct WeatherHolder<M: RawMutex> {
    inner: Mutex<M, RefCell<Option<Weather>>>,
}

impl<M: RawMutex> WeatherHolder<M> {
    /// Create an empty holder
    pub const fn new(raw: M) -> Self {
        Self {
            inner: Mutex::const_new(raw, RefCell::new(None)),
        }
    }

    /// Replace the stored weather
    ///
    /// Returns `true` if the stored value changed.
    pub fn on_update(&self, weather: Weather) -> bool {
        self.inner.lock(|cell| {
            let mut slot = cell.borrow_mut();
            let changed = slot.as_ref() != Some(&weather);
            *slot = Some(weather);
            changed
        })
    }

    /// Copy of the stored weather, `None` before the first update
    pub fn current(&self) -> Option<Weather> {
        self.inner.lock(|cell| cell.borrow().clone())
    }

    /// Forget the stored weather
    ///
    /// Returns `true` if there was anything to forget.
    pub fn clear(&self) -> bool {
        self.inner.lock(|cell| cell.borrow_mut().take().is_some())
    }
}
