// src/commands.rs

/// Commands for the MFRC522, written to the Command register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    Idle = 0x00,
    Mem = 0x01,         // Transfer 25 bytes between FIFO and internal buffer
    CalcCrc = 0x03,
    Transceive = 0x0C,
    SoftReset = 0x0F,
}

impl Command {
    pub const fn code(self) -> u8 {
        self as u8
    }
}

// PICC commands, sent through the FIFO
pub const PICC_CMD_REQA: u8 = 0x26;
pub const PICC_CMD_SEL_CL1: u8 = 0x93; // Anticollision / select, cascade level 1
pub const PICC_NVB_ANTICOLL: u8 = 0x20; // NVB: two bytes valid, no UID bits known

// BitFramingReg TxLastBits values
pub const FRAMING_SHORT: u8 = 0x07; // Short frame, 7 bits of the last byte
pub const FRAMING_FULL_BYTES: u8 = 0x00;
