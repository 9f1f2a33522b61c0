//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicBool, Ordering};

use sunshine_core::clock::TimeZone;
use sunshine_core::face::FaceEvent;
use sunshine_core::layout::Scene;
use sunshine_core::weather::WeatherHolder;
use sunshine_protocol::WatchMessage;

/// Channel capacity for face events
const FACE_EVENT_CHANNEL_SIZE: usize = 8;

/// Channel capacity for outgoing phone messages
const WATCH_TX_CHANNEL_SIZE: usize = 4;

/// What the display task should do next
pub enum DisplayCommand {
    /// Paint this frame and keep the backlight on
    Show(Scene),
    /// Face hidden; backlight off
    Sleep,
}

/// Host and sync events for the face task
pub static FACE_EVENTS: Channel<CriticalSectionRawMutex, FaceEvent, FACE_EVENT_CHANNEL_SIZE> =
    Channel::new();

/// Latest display command; an unpainted frame is replaced by a newer one
pub static DISPLAY_CMD: Signal<CriticalSectionRawMutex, DisplayCommand> = Signal::new();

/// Messages queued for the phone
pub static WATCH_TX: Channel<CriticalSectionRawMutex, WatchMessage, WATCH_TX_CHANNEL_SIZE> =
    Channel::new();

/// Last weather pushed by the phone
pub static WEATHER: WeatherHolder<CriticalSectionRawMutex> =
    WeatherHolder::new(CriticalSectionRawMutex::new());

/// Time zone last published by the phone, read on visibility changes
static PHONE_TIME_ZONE: Mutex<CriticalSectionRawMutex, Cell<Option<TimeZone>>> =
    Mutex::new(Cell::new(None));

/// Whether the face is listening to the sync channel
static SYNC_ATTACHED: AtomicBool = AtomicBool::new(false);

pub fn set_phone_time_zone(time_zone: TimeZone) {
    PHONE_TIME_ZONE.lock(|cell| cell.set(Some(time_zone)));
}

pub fn phone_time_zone() -> Option<TimeZone> {
    PHONE_TIME_ZONE.lock(|cell| cell.get())
}

pub fn set_sync_attached(attached: bool) {
    SYNC_ATTACHED.store(attached, Ordering::Release);
}

pub fn is_sync_attached() -> bool {
    SYNC_ATTACHED.load(Ordering::Acquire)
}
