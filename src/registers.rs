// src/registers.rs

/// MFRC522 register addresses (datasheet section 9.2).
///
/// The discriminant is the raw 6-bit address; the SPI address byte is built
/// by [`Register::write_address`] and [`Register::read_address`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    // Command and status
    Command = 0x01,
    ComIEn = 0x02,      // Communication interrupt enable
    DivIEn = 0x03,      // DivIrq interrupt enable
    ComIrq = 0x04,      // Interrupt request bits
    DivIrq = 0x05,
    Error = 0x06,       // Error bits of the last command
    Status1 = 0x07,
    Status2 = 0x08,
    FifoData = 0x09,    // FIFO data input/output
    FifoLevel = 0x0A,   // Number of bytes in the FIFO buffer
    WaterLevel = 0x0B,
    Control = 0x0C,
    BitFraming = 0x0D,  // Adjustments for bit-oriented frames
    Coll = 0x0E,

    // Command configuration
    Mode = 0x11,        // General transmit/receive modes, CRC preset
    TxMode = 0x12,
    RxMode = 0x13,
    TxControl = 0x14,   // Antenna driver pins TX1 and TX2
    TxAsk = 0x15,       // Transmit modulation (force 100% ASK)
    TxSel = 0x16,
    RxSel = 0x17,
    RxThreshold = 0x18,
    Demod = 0x19,
    MfTx = 0x1C,
    MfRx = 0x1D,
    SerialSpeed = 0x1F,

    // Configuration
    CrcResultH = 0x21,
    CrcResultL = 0x22,
    ModWidth = 0x24,
    RfCfg = 0x26,       // Receiver gain
    GsN = 0x27,
    CwGsP = 0x28,
    ModGsP = 0x29,
    TMode = 0x2A,       // Timer settings
    TPrescaler = 0x2B,
    TReloadH = 0x2C,    // 16-bit timer reload value, high byte
    TReloadL = 0x2D,
    TCounterValH = 0x2E,
    TCounterValL = 0x2F,

    // Test
    TestSel1 = 0x31,
    TestSel2 = 0x32,
    TestPinEn = 0x33,
    TestPinValue = 0x34,
    TestBus = 0x35,
    AutoTest = 0x36,
    Version = 0x37,
    AnalogTest = 0x38,
    TestDac1 = 0x39,
    TestDac2 = 0x3A,
    TestAdc = 0x3B,
}

impl Register {
    /// Every addressable register, in address order.
    pub const ALL: [Register; 50] = [
        Register::Command,
        Register::ComIEn,
        Register::DivIEn,
        Register::ComIrq,
        Register::DivIrq,
        Register::Error,
        Register::Status1,
        Register::Status2,
        Register::FifoData,
        Register::FifoLevel,
        Register::WaterLevel,
        Register::Control,
        Register::BitFraming,
        Register::Coll,
        Register::Mode,
        Register::TxMode,
        Register::RxMode,
        Register::TxControl,
        Register::TxAsk,
        Register::TxSel,
        Register::RxSel,
        Register::RxThreshold,
        Register::Demod,
        Register::MfTx,
        Register::MfRx,
        Register::SerialSpeed,
        Register::CrcResultH,
        Register::CrcResultL,
        Register::ModWidth,
        Register::RfCfg,
        Register::GsN,
        Register::CwGsP,
        Register::ModGsP,
        Register::TMode,
        Register::TPrescaler,
        Register::TReloadH,
        Register::TReloadL,
        Register::TCounterValH,
        Register::TCounterValL,
        Register::TestSel1,
        Register::TestSel2,
        Register::TestPinEn,
        Register::TestPinValue,
        Register::TestBus,
        Register::AutoTest,
        Register::Version,
        Register::AnalogTest,
        Register::TestDac1,
        Register::TestDac2,
        Register::TestAdc,
    ];

    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// First byte of a write frame: address in bits 1-6, bit 7 clear.
    pub const fn write_address(self) -> u8 {
        (self.addr() << 1) & 0x7E
    }

    /// First byte of a read frame: address in bits 1-6, bit 7 set.
    pub const fn read_address(self) -> u8 {
        self.write_address() | 0x80
    }
}

// Register bits used by the controller
pub const COM_IRQ_ALL: u8 = 0x7F;        // ComIrqReg: clear every request bit (Set1 = 0)
pub const FIFO_FLUSH_BUFFER: u8 = 0x80;  // FIFOLevelReg: FlushBuffer
pub const FIFO_LEVEL_MASK: u8 = 0x7F;    // FIFOLevelReg: FIFOLevel[6:0]
pub const BIT_FRAMING_START_SEND: u8 = 0x80;
pub const TX_CONTROL_ANTENNA: u8 = 0x03; // Tx1RFEn | Tx2RFEn
