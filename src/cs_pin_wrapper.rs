// src/cs_pin_wrapper.rs

use embedded_hal::digital::OutputPin;
use crate::errors::RFIDError;

/// Active-low chip select line of the MFRC522.
pub struct CsPinWrapper<CS> {
    cs: CS,
}

impl<CS> CsPinWrapper<CS>
where
    CS: OutputPin,
{
    /// Takes the pin and parks it inactive (high).
    pub fn new(mut cs: CS) -> Result<Self, RFIDError> {
        cs.set_high().map_err(RFIDError::pin)?;
        Ok(CsPinWrapper { cs })
    }

    pub fn select(&mut self) -> Result<(), RFIDError> {
        self.cs.set_low().map_err(RFIDError::pin)
    }

    pub fn deselect(&mut self) -> Result<(), RFIDError> {
        self.cs.set_high().map_err(RFIDError::pin)
    }

    pub fn release(self) -> CS {
        self.cs
    }
}
