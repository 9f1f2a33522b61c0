//! Byte framing for the phone sync link.
//!
//! Frame format:
//! - START (1 byte): 0x7E synchronization byte
//! - LENGTH (1 byte): payload length (0-250)
//! - KIND (1 byte): message kind identifier
//! - PAYLOAD (0-250 bytes): kind-specific data
//! - CHECKSUM (1 byte): XOR of LENGTH, KIND, and all PAYLOAD bytes

use heapless::Vec;

/// Frame synchronization byte
pub const FRAME_START: u8 = 0x7E;

/// Maximum payload size in bytes
pub const MAX_PAYLOAD_SIZE: usize = 250;

/// Maximum complete frame size (START + LENGTH + KIND + MAX_PAYLOAD + CHECKSUM)
pub const MAX_FRAME_SIZE: usize = 1 + 1 + 1 + MAX_PAYLOAD_SIZE + 1;

/// Errors that can occur while framing or unframing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload exceeds maximum allowed size
    PayloadTooLarge,
    /// Checksum mismatch
    InvalidChecksum,
    /// Length byte out of range
    InvalidLength,
    /// Frame carried an unknown kind or a malformed payload
    Malformed,
    /// Output buffer too small for encoding
    BufferTooSmall,
}

/// A complete frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Message kind identifier
    pub kind: u8,
    /// Payload data
    pub payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Frame {
    /// Create a frame carrying `payload`
    pub fn new(kind: u8, payload: &[u8]) -> Result<Self, FrameError> {
        let payload = Vec::from_slice(payload).map_err(|_| FrameError::PayloadTooLarge)?;
        Ok(Self { kind, payload })
    }

    /// Create a frame with no payload
    pub fn empty(kind: u8) -> Self {
        Self {
            kind,
            payload: Vec::new(),
        }
    }

    fn checksum(length: u8, kind: u8, payload: &[u8]) -> u8 {
        payload.iter().fold(length ^ kind, |acc, &b| acc ^ b)
    }

    /// Number of bytes this frame occupies on the wire
    pub fn encoded_len(&self) -> usize {
        4 + self.payload.len()
    }

    /// Write this frame into `buffer`, returning the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let len = self.encoded_len();
        if buffer.len() < len {
            return Err(FrameError::BufferTooSmall);
        }

        let length = self.payload.len() as u8;
        let end = 3 + self.payload.len();

        buffer[0] = FRAME_START;
        buffer[1] = length;
        buffer[2] = self.kind;
        buffer[3..end].copy_from_slice(&self.payload);
        buffer[end] = Self::checksum(length, self.kind, &self.payload);

        Ok(len)
    }

    /// Encode into a heapless Vec
    pub fn to_bytes(&self) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = self.encode(&mut buffer)?;
        Vec::from_slice(&buffer[..len]).map_err(|_| FrameError::BufferTooSmall)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    /// Hunting for START
    Sync,
    /// Got START, next byte is LENGTH
    Length,
    /// Got LENGTH, next byte is KIND
    Kind,
    /// Collecting payload bytes
    Payload,
    /// Next byte is CHECKSUM
    Checksum,
}

/// Incremental frame decoder
///
/// Bytes may arrive in any chunking. Anything before a START byte is
/// skipped, so the decoder recovers on its own after line noise.
#[derive(Debug, Clone)]
pub struct FrameDecoder {
    state: DecodeState,
    length: u8,
    kind: u8,
    payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDecoder {
    pub const fn new() -> Self {
        Self {
            state: DecodeState::Sync,
            length: 0,
            kind: 0,
            payload: Vec::new(),
        }
    }

    /// Drop any partially received frame
    pub fn reset(&mut self) {
        self.state = DecodeState::Sync;
        self.length = 0;
        self.kind = 0;
        self.payload.clear();
    }

    /// Push one byte
    ///
    /// Returns `Ok(Some(frame))` once a frame completes, `Ok(None)` while
    /// more bytes are needed. On error the decoder is already reset.
    pub fn push(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        match self.state {
            DecodeState::Sync => {
                if byte == FRAME_START {
                    self.state = DecodeState::Length;
                }
                Ok(None)
            }
            DecodeState::Length => {
                if byte as usize > MAX_PAYLOAD_SIZE {
                    self.reset();
                    return Err(FrameError::InvalidLength);
                }
                self.length = byte;
                self.state = DecodeState::Kind;
                Ok(None)
            }
            DecodeState::Kind => {
                self.kind = byte;
                self.payload.clear();
                self.state = if self.length == 0 {
                    DecodeState::Checksum
                } else {
                    DecodeState::Payload
                };
                Ok(None)
            }
            DecodeState::Payload => {
                // Capacity is MAX_PAYLOAD_SIZE and length was bounds-checked
                let _ = self.payload.push(byte);
                if self.payload.len() == self.length as usize {
                    self.state = DecodeState::Checksum;
                }
                Ok(None)
            }
            DecodeState::Checksum => {
                let expected = Frame::checksum(self.length, self.kind, &self.payload);
                if byte != expected {
                    self.reset();
                    return Err(FrameError::InvalidChecksum);
                }

                let frame = Frame {
                    kind: self.kind,
                    payload: core::mem::take(&mut self.payload),
                };
                self.reset();
                Ok(Some(frame))
            }
        }
    }

    /// Push a slice, stopping at the first completed frame
    ///
    /// Returns the frame (if any) and the number of bytes consumed, so the
    /// caller can feed the remainder afterwards.
    pub fn push_slice(&mut self, bytes: &[u8]) -> (Result<Option<Frame>, FrameError>, usize) {
        for (i, &byte) in bytes.iter().enumerate() {
            match self.push(byte) {
                Ok(None) => {}
                other => return (other, i + 1),
            }
        }
        (Ok(None), bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_empty_frame() {
        let frame = Frame::empty(0x01);
        let mut buffer = [0u8; 8];
        let len = frame.encode(&mut buffer).unwrap();

        assert_eq!(len, 4);
        assert_eq!(&buffer[..4], &[FRAME_START, 0, 0x01, 0x01]);
    }

    #[test]
    fn test_encode_checksum_covers_payload() {
        let frame = Frame::new(0x10, &[0x01, 0x02, 0x04]).unwrap();
        let bytes = frame.to_bytes().unwrap();

        assert_eq!(bytes.len(), 7);
        assert_eq!(bytes[1], 3);
        assert_eq!(bytes[6], 3 ^ 0x10 ^ 0x01 ^ 0x02 ^ 0x04);
    }

    #[test]
    fn test_buffer_too_small() {
        let frame = Frame::new(0x10, &[1, 2, 3]).unwrap();
        let mut buffer = [0u8; 6];
        assert_eq!(frame.encode(&mut buffer), Err(FrameError::BufferTooSmall));
    }

    #[test]
    fn test_decode_after_line_noise() {
        let frame = Frame::new(0x11, b"/weather").unwrap();
        let encoded = frame.to_bytes().unwrap();

        let mut stream: Vec<u8, 64> = Vec::new();
        stream.extend_from_slice(&[0x00, 0xFF, 0x13, 0x37]).unwrap();
        stream.extend_from_slice(&encoded).unwrap();

        let mut decoder = FrameDecoder::new();
        let (result, consumed) = decoder.push_slice(&stream);
        assert_eq!(result.unwrap(), Some(frame));
        assert_eq!(consumed, stream.len());
    }

    #[test]
    fn test_decode_two_frames_in_one_chunk() {
        let first = Frame::empty(0x01).to_bytes().unwrap();
        let second = Frame::new(0x11, b"/x").unwrap().to_bytes().unwrap();

        let mut stream: Vec<u8, 32> = Vec::new();
        stream.extend_from_slice(&first).unwrap();
        stream.extend_from_slice(&second).unwrap();

        let mut decoder = FrameDecoder::new();
        let (result, consumed) = decoder.push_slice(&stream);
        assert_eq!(result.unwrap().unwrap().kind, 0x01);

        let (result, _) = decoder.push_slice(&stream[consumed..]);
        assert_eq!(result.unwrap().unwrap().kind, 0x11);
    }

    #[test]
    fn test_corrupt_checksum_is_rejected() {
        let mut encoded = Frame::new(0x10, &[9, 9]).unwrap().to_bytes().unwrap();
        let last = encoded.len() - 1;
        encoded[last] ^= 0x55;

        let mut decoder = FrameDecoder::new();
        let (result, _) = decoder.push_slice(&encoded);
        assert_eq!(result, Err(FrameError::InvalidChecksum));

        // Decoder is usable again straight away
        let good = Frame::empty(0x01).to_bytes().unwrap();
        let (result, _) = decoder.push_slice(&good);
        assert!(result.unwrap().is_some());
    }

    #[test]
    fn test_length_out_of_range() {
        let mut decoder = FrameDecoder::new();
        decoder.push(FRAME_START).unwrap();
        assert_eq!(decoder.push(251), Err(FrameError::InvalidLength));
    }

    #[test]
    fn test_payload_too_large() {
        let payload = [0u8; MAX_PAYLOAD_SIZE + 1];
        assert_eq!(Frame::new(0x10, &payload), Err(FrameError::PayloadTooLarge));
    }

    proptest! {
        #[test]
        fn prop_decoder_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..600)) {
            let mut decoder = FrameDecoder::new();
            for byte in bytes {
                let _ = decoder.push(byte);
            }
        }

        #[test]
        fn prop_any_payload_survives_the_wire(
            kind in any::<u8>(),
            payload in proptest::collection::vec(any::<u8>(), 0..=MAX_PAYLOAD_SIZE),
        ) {
            let frame = Frame::new(kind, &payload).unwrap();
            let bytes = frame.to_bytes().unwrap();
            let mut decoder = FrameDecoder::new();
            let (result, consumed) = decoder.push_slice(&bytes);
            prop_assert_eq!(result.unwrap(), Some(frame));
            prop_assert_eq!(consumed, bytes.len());
        }
    }
}
