#![cfg_attr(not(test), no_std)]
// src/lib.rs

//! Blocking driver for the MFRC522 (RC522) contactless reader over SPI.
//!
//! Built on [`embedded-hal`] 1.0 traits: an [`SpiBus`] plus chip select pin
//! for register access, an output pin for the reset line and a delay for the
//! fixed settle times.
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal/1.0.0
//! [`SpiBus`]: embedded_hal::spi::SpiBus

pub mod registers;
pub mod commands;
pub mod config;
pub mod errors;
pub mod rfid_rc522;
pub mod cs_pin_wrapper;
pub mod transport;

pub use config::Timing;
pub use errors::RFIDError;
pub use registers::Register;
pub use rfid_rc522::RfidRc522;
pub use transport::{SpiTransport, Transport};
