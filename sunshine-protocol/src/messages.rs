//! Message kinds for the phone sync link
//!
//! - Phone → Watch: data item changes, heartbeat requests
//! - Watch → Phone: heartbeat responses, resync requests

use heapless::{String, Vec};

use crate::data::{DataItem, MAX_PATH_LEN};
use crate::frame::{Frame, FrameError, MAX_PAYLOAD_SIZE};

// Message kinds: Phone → Watch
pub const MSG_PING: u8 = 0x01;
pub const MSG_DATA_CHANGED: u8 = 0x10;
pub const MSG_DATA_DELETED: u8 = 0x11;

// Message kinds: Watch → Phone
pub const MSG_PONG: u8 = 0x20;
pub const MSG_SYNC_REQUEST: u8 = 0x21;

/// Messages sent by the phone
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneMessage {
    /// Heartbeat request
    Ping,
    /// A data item was created or changed
    DataChanged(DataItem),
    /// The data item at this path was removed
    DataDeleted(String<MAX_PATH_LEN>),
}

impl PhoneMessage {
    /// Parse a message from a frame
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.kind {
            MSG_PING => Ok(PhoneMessage::Ping),
            MSG_DATA_CHANGED => DataItem::decode(&frame.payload).map(PhoneMessage::DataChanged),
            MSG_DATA_DELETED => {
                let path =
                    core::str::from_utf8(&frame.payload).map_err(|_| FrameError::Malformed)?;
                let path = String::try_from(path).map_err(|_| FrameError::Malformed)?;
                Ok(PhoneMessage::DataDeleted(path))
            }
            _ => Err(FrameError::Malformed),
        }
    }

    /// Encode into a frame (used by the phone side and in tests)
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            PhoneMessage::Ping => Ok(Frame::empty(MSG_PING)),
            PhoneMessage::DataChanged(item) => {
                let mut payload = Vec::<u8, MAX_PAYLOAD_SIZE>::new();
                item.encode(&mut payload)?;
                Ok(Frame {
                    kind: MSG_DATA_CHANGED,
                    payload,
                })
            }
            PhoneMessage::DataDeleted(path) => Frame::new(MSG_DATA_DELETED, path.as_bytes()),
        }
    }
}

/// Messages sent by the watch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WatchMessage {
    /// Heartbeat response
    Pong,
    /// Ask the phone to publish its current items again
    SyncRequest,
}

impl WatchMessage {
    pub fn to_frame(self) -> Frame {
        match self {
            WatchMessage::Pong => Frame::empty(MSG_PONG),
            WatchMessage::SyncRequest => Frame::empty(MSG_SYNC_REQUEST),
        }
    }

    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.kind {
            MSG_PONG => Ok(WatchMessage::Pong),
            MSG_SYNC_REQUEST => Ok(WatchMessage::SyncRequest),
            _ => Err(FrameError::Malformed),
        }
    }
}
