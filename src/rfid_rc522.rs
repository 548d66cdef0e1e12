use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use ufmt::uWrite;
use crate::commands::*;
use crate::config::Timing;
use crate::errors::RFIDError;
use crate::registers::*;
use crate::transport::{SpiTransport, Transport};

/// MFRC522 reader: chip lifecycle and tag polling.
///
/// The driver owns its transport, reset line and delay for its whole life and
/// takes `&mut self` everywhere, so register sequences from one owner never
/// interleave. It is not meant to be shared between threads without a lock
/// around every call.
pub struct RfidRc522<T, RST, D> {
    transport: T,
    reset: RST,
    delay: D,
    timing: Timing,
}

impl<SPI, CS, RST, D> RfidRc522<SpiTransport<SPI, CS>, RST, D>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    pub fn with_spi(spi: SPI, cs: CS, reset: RST, delay: D) -> Result<Self, RFIDError> {
        Self::new(SpiTransport::new(spi, cs)?, reset, delay)
    }
}

impl<T, RST, D> RfidRc522<T, RST, D>
where
    T: Transport,
    RST: OutputPin,
    D: DelayNs,
{
    /// Takes ownership of the handles and holds the reset line inactive.
    ///
    /// Nothing is sent to the chip until [`init`](Self::init).
    pub fn new(transport: T, reset: RST, delay: D) -> Result<Self, RFIDError> {
        Self::with_timing(transport, reset, delay, Timing::default())
    }

    pub fn with_timing(
        transport: T,
        mut reset: RST,
        delay: D,
        timing: Timing,
    ) -> Result<Self, RFIDError> {
        reset.set_high().map_err(RFIDError::pin)?;
        Ok(RfidRc522 { transport, reset, delay, timing })
    }

    /// Gives back the transport, reset pin and delay.
    pub fn release(self) -> (T, RST, D) {
        (self.transport, self.reset, self.delay)
    }

    /// Soft resets and configures the chip, then turns the antenna on.
    ///
    /// Must run once before polling. Progress goes to `serial`.
    pub fn init<W: uWrite>(&mut self, serial: &mut W) -> Result<(), RFIDError> {
        self.soft_reset()?;

        let version = self.version()?;
        ufmt::uwriteln!(serial, "RFID-RC522 Version: 0x{:02X}", version).ok();

        // 106 kBd in both directions, default modulation width
        self.write_register(Register::TxMode, 0x00)?;
        self.write_register(Register::RxMode, 0x00)?;
        self.write_register(Register::ModWidth, 0x26)?;

        // Timer: auto start, f_timer = 13.56 MHz / (2 * 0x0A9 + 1) ~ 40 kHz,
        // reload 0x03E8 gives a 25 ms window
        self.write_register(Register::TMode, 0x80)?;
        self.write_register(Register::TPrescaler, 0xA9)?;
        self.write_register(Register::TReloadL, 0xE8)?;
        self.write_register(Register::TReloadH, 0x03)?;

        self.write_register(Register::TxAsk, 0x40)?; // 100% ASK
        self.write_register(Register::Mode, 0x3D)?;  // CRC preset to 0x6363

        self.antenna_on()?;
        ufmt::uwriteln!(serial, "Antenna on").ok();
        Ok(())
    }

    pub fn soft_reset(&mut self) -> Result<(), RFIDError> {
        self.write_register(Register::Command, Command::SoftReset.code())?;
        self.delay.delay_ms(self.timing.reset_settle_ms);
        Ok(())
    }

    /// Pulses the reset line low. Clears every register like a power cycle,
    /// so [`init`](Self::init) has to run again afterwards.
    pub fn hard_reset(&mut self) -> Result<(), RFIDError> {
        self.reset.set_low().map_err(RFIDError::pin)?;
        self.delay.delay_ms(self.timing.reset_settle_ms);
        self.reset.set_high().map_err(RFIDError::pin)?;
        self.delay.delay_ms(self.timing.reset_settle_ms);
        Ok(())
    }

    /// 0x91 or 0x92 on genuine parts.
    pub fn version(&mut self) -> Result<u8, RFIDError> {
        self.read_register(Register::Version)
    }

    pub fn antenna_on(&mut self) -> Result<(), RFIDError> {
        self.set_register_bits(Register::TxControl, TX_CONTROL_ANTENNA)
    }

    /// Polls with a short frame and nothing in the FIFO. Returns the first
    /// FIFO byte as the chip left it; there is no "no tag" value.
    pub fn detect_tag(&mut self) -> Result<u8, RFIDError> {
        let mut response = [0u8; 1];
        self.transceive(FRAMING_SHORT, &[], &mut response)?;
        Ok(response[0])
    }

    /// Polls with a short frame carrying REQA.
    pub fn request_a(&mut self) -> Result<u8, RFIDError> {
        let mut response = [0u8; 1];
        self.transceive(FRAMING_SHORT, &[PICC_CMD_REQA], &mut response)?;
        Ok(response[0])
    }

    /// Sends the cascade level 1 anticollision command and returns the first
    /// FIFO byte.
    pub fn anticollision(&mut self) -> Result<u8, RFIDError> {
        let mut response = [0u8; 1];
        self.transceive(
            FRAMING_FULL_BYTES,
            &[PICC_CMD_SEL_CL1, PICC_NVB_ANTICOLL],
            &mut response,
        )?;
        Ok(response[0])
    }

    /// Runs one Transceive command and fills `response` from the FIFO.
    ///
    /// `framing` is written to BitFraming as is, so its low bits select how
    /// many bits of the last payload byte go out. Completion is not checked:
    /// the FIFO is read after `transceive_settle_ms` whatever the chip did.
    pub fn transceive(
        &mut self,
        framing: u8,
        payload: &[u8],
        response: &mut [u8],
    ) -> Result<(), RFIDError> {
        self.write_register(Register::BitFraming, framing)?;
        self.write_register(Register::Command, Command::Idle.code())?;
        self.write_register(Register::ComIrq, COM_IRQ_ALL)?;
        self.set_register_bits(Register::FifoLevel, FIFO_FLUSH_BUFFER)?;

        self.write_fifo(payload)?;

        self.write_register(Register::Command, Command::Transceive.code())?;
        // StartSend is edge triggered
        self.set_register_bits(Register::BitFraming, BIT_FRAMING_START_SEND)?;
        self.clear_register_bits(Register::BitFraming, BIT_FRAMING_START_SEND)?;
        self.delay.delay_ms(self.timing.transceive_settle_ms);

        self.read_fifo(response)
    }

    pub fn write_fifo(&mut self, data: &[u8]) -> Result<(), RFIDError> {
        for &byte in data {
            self.write_register(Register::FifoData, byte)?;
        }
        Ok(())
    }

    /// Drains `buffer.len()` bytes, pausing after each one.
    pub fn read_fifo(&mut self, buffer: &mut [u8]) -> Result<(), RFIDError> {
        for byte in buffer.iter_mut() {
            *byte = self.read_register(Register::FifoData)?;
            self.delay.delay_ms(self.timing.fifo_byte_delay_ms);
        }
        Ok(())
    }

    pub fn read_fifo_byte(&mut self) -> Result<u8, RFIDError> {
        let mut buffer = [0u8; 1];
        self.read_fifo(&mut buffer)?;
        Ok(buffer[0])
    }

    /// Two FIFO bytes, low byte first.
    pub fn read_fifo_u16(&mut self) -> Result<u16, RFIDError> {
        let mut buffer = [0u8; 2];
        self.read_fifo(&mut buffer)?;
        Ok(u16::from_le_bytes(buffer))
    }

    /// Bytes currently stored in the FIFO.
    pub fn fifo_level(&mut self) -> Result<u8, RFIDError> {
        Ok(self.read_register(Register::FifoLevel)? & FIFO_LEVEL_MASK)
    }

    pub fn set_register_bits(&mut self, register: Register, mask: u8) -> Result<(), RFIDError> {
        let current = self.read_register(register)?;
        self.write_register(register, current | mask)
    }

    pub fn clear_register_bits(&mut self, register: Register, mask: u8) -> Result<(), RFIDError> {
        let current = self.read_register(register)?;
        self.write_register(register, current & !mask)
    }

    pub fn write_register(&mut self, register: Register, value: u8) -> Result<(), RFIDError> {
        self.transport.write_register(register, value)
    }

    pub fn read_register(&mut self, register: Register) -> Result<u8, RFIDError> {
        self.transport.read_register(register)
    }
}
