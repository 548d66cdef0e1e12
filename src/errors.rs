use core::fmt::{Debug, Formatter, Result};
use embedded_hal::{digital, spi};
use ufmt::{uDebug, uWrite};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum RFIDError {
    /// The SPI exchange could not complete
    CommunicationError(spi::ErrorKind),
    /// Chip select or reset line could not be driven
    PinError(digital::ErrorKind),
}

impl RFIDError {
    pub fn spi<E: spi::Error>(error: E) -> Self {
        RFIDError::CommunicationError(error.kind())
    }

    pub fn pin<E: digital::Error>(error: E) -> Self {
        RFIDError::PinError(error.kind())
    }

    fn description(&self) -> &'static str {
        match self {
            RFIDError::CommunicationError(kind) => match kind {
                spi::ErrorKind::Overrun => "CommunicationError(Overrun)",
                spi::ErrorKind::ModeFault => "CommunicationError(ModeFault)",
                spi::ErrorKind::FrameFormat => "CommunicationError(FrameFormat)",
                spi::ErrorKind::ChipSelectFault => "CommunicationError(ChipSelectFault)",
                _ => "CommunicationError(Other)",
            },
            RFIDError::PinError(kind) => match kind {
                digital::ErrorKind::Other => "PinError(Other)",
                _ => "PinError",
            },
        }
    }
}

impl Debug for RFIDError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.description())
    }
}

// Implementing uDebug for RFIDError
impl uDebug for RFIDError {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<W>) -> core::result::Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(self.description())
    }
}
