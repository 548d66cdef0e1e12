// src/config.rs

/// Fixed waits used by the controller.
///
/// The driver never polls ComIrq for completion; these values were tuned on
/// hardware and bound how long each operation blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Wait after StartSend before draining the FIFO.
    pub transceive_settle_ms: u32,
    /// Wait after each FIFO byte read.
    pub fifo_byte_delay_ms: u32,
    /// Wait after a soft reset, and each half of a hard reset pulse.
    pub reset_settle_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Timing {
            transceive_settle_ms: 25,
            fifo_byte_delay_ms: 10,
            reset_settle_ms: 50,
        }
    }
}
