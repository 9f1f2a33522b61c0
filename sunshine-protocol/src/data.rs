//! Data items published by the phone
//!
//! A data item is a path plus a small key/value map. The watch only cares
//! about the weather item, but the encoding is generic so the phone side can
//! publish other paths without breaking older watches.
//!
//! Payload layout:
//! ```text
//! [path_len][path...][entry_count] then per entry:
//! [key_len][key...][tag] + INT: 4 bytes little endian
//!                        + STR: [len][bytes...]
//! ```

use heapless::{String, Vec};

use crate::frame::{FrameError, MAX_PAYLOAD_SIZE};

/// Maximum path length in bytes
pub const MAX_PATH_LEN: usize = 32;

/// Maximum key length in bytes
pub const MAX_KEY_LEN: usize = 16;

/// Maximum string value length in bytes
pub const MAX_VALUE_LEN: usize = 16;

/// Maximum entries per item
pub const MAX_ENTRIES: usize = 4;

/// Path of the weather item
pub const PATH_WEATHER: &str = "/weather";

/// Weather condition code (int)
pub const KEY_WEATHER_ID: &str = "key_weather_id";

/// Today's high temperature, preformatted by the phone (string)
pub const KEY_MAX_TEMP: &str = "key_max_temp";

/// Today's low temperature, preformatted by the phone (string)
pub const KEY_MIN_TEMP: &str = "key_min_temp";

/// Path of the phone's time zone item
pub const PATH_TIME_ZONE: &str = "/timezone";

/// Offset from UTC in minutes, east positive (int)
pub const KEY_UTC_OFFSET: &str = "key_utc_offset";

const TAG_INT: u8 = 0x01;
const TAG_STR: u8 = 0x02;

/// A single value in a data item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataValue {
    Int(i32),
    Str(String<MAX_VALUE_LEN>),
}

#[cfg(feature = "defmt")]
impl defmt::Format for DataValue {
    fn format(&self, f: defmt::Formatter) {
        match self {
            DataValue::Int(v) => defmt::write!(f, "Int({})", v),
            DataValue::Str(s) => defmt::write!(f, "Str({})", s.as_str()),
        }
    }
}

/// A key/value entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataEntry {
    pub key: String<MAX_KEY_LEN>,
    pub value: DataValue,
}

/// A path-addressed key/value map
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataItem {
    pub path: String<MAX_PATH_LEN>,
    pub entries: Vec<DataEntry, MAX_ENTRIES>,
}

impl DataItem {
    /// Create an empty item at `path`
    pub fn new(path: &str) -> Result<Self, FrameError> {
        Ok(Self {
            path: String::try_from(path).map_err(|_| FrameError::PayloadTooLarge)?,
            entries: Vec::new(),
        })
    }

    /// Insert or replace an int entry
    pub fn put_int(&mut self, key: &str, value: i32) -> Result<(), FrameError> {
        self.put(key, DataValue::Int(value))
    }

    /// Insert or replace a string entry
    pub fn put_str(&mut self, key: &str, value: &str) -> Result<(), FrameError> {
        let value = String::try_from(value).map_err(|_| FrameError::PayloadTooLarge)?;
        self.put(key, DataValue::Str(value))
    }

    fn put(&mut self, key: &str, value: DataValue) -> Result<(), FrameError> {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.value = value;
            return Ok(());
        }
        let key = String::try_from(key).map_err(|_| FrameError::PayloadTooLarge)?;
        self.entries
            .push(DataEntry { key, value })
            .map_err(|_| FrameError::PayloadTooLarge)
    }

    /// Look up an int entry
    pub fn get_int(&self, key: &str) -> Option<i32> {
        self.entries.iter().find(|e| e.key == key).and_then(|e| match e.value {
            DataValue::Int(v) => Some(v),
            DataValue::Str(_) => None,
        })
    }

    /// Look up a string entry
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|e| e.key == key).and_then(|e| match &e.value {
            DataValue::Str(s) => Some(s.as_str()),
            DataValue::Int(_) => None,
        })
    }

    /// Serialize into a frame payload
    pub fn encode(&self, out: &mut Vec<u8, MAX_PAYLOAD_SIZE>) -> Result<(), FrameError> {
        push_short_str(out, &self.path)?;
        push(out, self.entries.len() as u8)?;

        for entry in &self.entries {
            push_short_str(out, &entry.key)?;
            match &entry.value {
                DataValue::Int(v) => {
                    push(out, TAG_INT)?;
                    out.extend_from_slice(&v.to_le_bytes())
                        .map_err(|_| FrameError::PayloadTooLarge)?;
                }
                DataValue::Str(s) => {
                    push(out, TAG_STR)?;
                    push_short_str(out, s)?;
                }
            }
        }
        Ok(())
    }

    /// Parse from a frame payload
    pub fn decode(payload: &[u8]) -> Result<Self, FrameError> {
        let mut reader = Reader { buf: payload, pos: 0 };

        let path = reader.short_str::<MAX_PATH_LEN>()?;
        let count = reader.byte()? as usize;
        if count > MAX_ENTRIES {
            return Err(FrameError::Malformed);
        }

        let mut entries = Vec::new();
        for _ in 0..count {
            let key = reader.short_str::<MAX_KEY_LEN>()?;
            let value = match reader.byte()? {
                TAG_INT => {
                    let bytes = reader.take(4)?;
                    DataValue::Int(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
                }
                TAG_STR => DataValue::Str(reader.short_str::<MAX_VALUE_LEN>()?),
                _ => return Err(FrameError::Malformed),
            };
            // count <= MAX_ENTRIES, cannot overflow
            let _ = entries.push(DataEntry { key, value });
        }

        if reader.pos != payload.len() {
            return Err(FrameError::Malformed);
        }

        Ok(Self { path, entries })
    }
}

fn push(out: &mut Vec<u8, MAX_PAYLOAD_SIZE>, byte: u8) -> Result<(), FrameError> {
    out.push(byte).map_err(|_| FrameError::PayloadTooLarge)
}

fn push_short_str(out: &mut Vec<u8, MAX_PAYLOAD_SIZE>, s: &str) -> Result<(), FrameError> {
    push(out, s.len() as u8)?;
    out.extend_from_slice(s.as_bytes())
        .map_err(|_| FrameError::PayloadTooLarge)
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn byte(&mut self) -> Result<u8, FrameError> {
        let b = *self.buf.get(self.pos).ok_or(FrameError::Malformed)?;
        self.pos += 1;
        Ok(b)
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], FrameError> {
        let end = self.pos.checked_add(n).ok_or(FrameError::Malformed)?;
        let slice = self.buf.get(self.pos..end).ok_or(FrameError::Malformed)?;
        self.pos = end;
        Ok(slice)
    }

    fn short_str<const N: usize>(&mut self) -> Result<String<N>, FrameError> {
        let len = self.byte()? as usize;
        let bytes = self.take(len)?;
        let s = core::str::from_utf8(bytes).map_err(|_| FrameError::Malformed)?;
        String::try_from(s).map_err(|_| FrameError::Malformed)
    }
}
