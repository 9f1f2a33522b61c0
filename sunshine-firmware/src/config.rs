//! Configuration loading
//!
//! `face.toml` is validated by build.rs and embedded as postcard bytes; it
//! is decoded once at boot.

use defmt::*;

use sunshine_core::config::FaceConfig;

/// Postcard-encoded `FaceConfig` written by build.rs
static FACE_CONFIG_BLOB: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/face_config.bin"));

/// Decode the embedded configuration, or fall back to the defaults
pub fn load_face_config() -> FaceConfig {
    let config = match postcard::from_bytes::<FaceConfig>(FACE_CONFIG_BLOB) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to decode face config: {:?}", Debug2Format(&e));
            return FaceConfig::default();
        }
    };

    match config.validate() {
        Ok(()) => {
            info!("Face config loaded ({} bytes)", FACE_CONFIG_BLOB.len());
            config
        }
        Err(e) => {
            error!("Embedded face config invalid: {:?}, using defaults", e);
            FaceConfig::default()
        }
    }
}
