//! ST7789 panel on SPI0
//!
//! Pixels go straight over the bus; there is no frame buffer to flush.

use display_interface_spi::SPIInterface;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::Delay;
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::models::ST7789;
use mipidsi::options::ColorInversion;
use mipidsi::{Builder, Display};

use sunshine_display::{DisplayError, PanelBackend};

type SpiDevice = ExclusiveDevice<Spi<'static, SPI0, Blocking>, Output<'static>, Delay>;
type Lcd = Display<SPIInterface<SpiDevice, Output<'static>>, ST7789, Output<'static>>;

/// Control pins besides the SPI bus
pub struct PanelPins {
    pub cs: Output<'static>,
    pub dc: Output<'static>,
    pub reset: Output<'static>,
    pub backlight: Output<'static>,
}

pub struct St7789Panel {
    lcd: Lcd,
    backlight: Output<'static>,
}

impl St7789Panel {
    /// Reset and configure the panel; the backlight stays off
    pub fn new(
        spi: Spi<'static, SPI0, Blocking>,
        pins: PanelPins,
        width: u16,
        height: u16,
    ) -> Result<Self, DisplayError> {
        let PanelPins {
            cs,
            dc,
            reset,
            mut backlight,
        } = pins;
        backlight.set_level(Level::Low);

        let device = ExclusiveDevice::new(spi, cs, Delay).map_err(|_| DisplayError::Communication)?;
        let lcd = Builder::new(ST7789, SPIInterface::new(device, dc))
            .display_size(width, height)
            .invert_colors(ColorInversion::Inverted)
            .reset_pin(reset)
            .init(&mut Delay)
            .map_err(|_| DisplayError::NotInitialized)?;

        Ok(Self { lcd, backlight })
    }
}

impl PanelBackend for St7789Panel {
    type Target = Lcd;

    fn target(&mut self) -> &mut Lcd {
        &mut self.lcd
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        self.backlight.set_level(if on { Level::High } else { Level::Low });
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn is_ready(&self) -> bool {
        true
    }
}
