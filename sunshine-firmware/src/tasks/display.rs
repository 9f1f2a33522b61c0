//! Display task
//!
//! Paints scenes from the face task onto the panel. Only the latest command
//! is kept, so a slow paint never queues stale frames.

use defmt::*;
use embassy_time::Instant;

use sunshine_display::{present, FontSet, PanelBackend};

use crate::channels::{DisplayCommand, DISPLAY_CMD};
use crate::panel::St7789Panel;

#[embassy_executor::task]
pub async fn display_task(mut panel: St7789Panel) {
    info!("Display task started");

    let fonts = FontSet::default();
    let mut lit = false;

    loop {
        match DISPLAY_CMD.wait().await {
            DisplayCommand::Show(scene) => {
                let started = Instant::now();
                if let Err(e) = present(&mut panel, &scene, &fonts) {
                    warn!("Failed to paint frame: {:?}", e);
                    continue;
                }
                trace!("Frame painted in {} ms", started.elapsed().as_millis());

                if !lit {
                    match panel.set_backlight(true) {
                        Ok(()) => lit = true,
                        Err(e) => warn!("Backlight on failed: {:?}", e),
                    }
                }
            }
            DisplayCommand::Sleep => {
                if let Err(e) = panel.set_backlight(false) {
                    warn!("Backlight off failed: {:?}", e);
                }
                lit = false;
            }
        }
    }
}
