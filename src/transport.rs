// src/transport.rs

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use crate::cs_pin_wrapper::CsPinWrapper;
use crate::errors::RFIDError;
use crate::registers::Register;

/// Single-register access to the MFRC522.
///
/// Each call is one complete exchange with the chip; implementations must not
/// split a frame across calls.
pub trait Transport {
    fn write_register(&mut self, register: Register, value: u8) -> Result<(), RFIDError>;

    fn read_register(&mut self, register: Register) -> Result<u8, RFIDError>;
}

/// SPI framing (datasheet 8.1.2): an address byte then a data byte, inside
/// one chip select window.
pub struct SpiTransport<SPI, CS> {
    spi: SPI,
    cs: CsPinWrapper<CS>,
}

impl<SPI, CS> SpiTransport<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    pub fn new(spi: SPI, cs: CS) -> Result<Self, RFIDError> {
        Ok(SpiTransport { spi, cs: CsPinWrapper::new(cs)? })
    }

    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs.release())
    }

    // Chip select is released even when the bus fails, so a failed frame
    // never leaves the chip mid-transaction. A bus error wins over a failed
    // deselect.
    fn framed<R>(
        &mut self,
        exchange: impl FnOnce(&mut SPI) -> Result<R, SPI::Error>,
    ) -> Result<R, RFIDError> {
        self.cs.select()?;
        let result = exchange(&mut self.spi).and_then(|value| {
            self.spi.flush()?;
            Ok(value)
        });
        let deselected = self.cs.deselect();
        let value = result.map_err(RFIDError::spi)?;
        deselected?;
        Ok(value)
    }
}

impl<SPI, CS> Transport for SpiTransport<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    fn write_register(&mut self, register: Register, value: u8) -> Result<(), RFIDError> {
        let buffer = [register.write_address(), value];
        self.framed(|spi| spi.write(&buffer))
    }

    fn read_register(&mut self, register: Register) -> Result<u8, RFIDError> {
        let buffer = [register.read_address(), 0x00];
        let mut read_buffer = [0u8; 2];
        self.framed(|spi| spi.transfer(&mut read_buffer, &buffer))?;
        Ok(read_buffer[1])
    }
}
