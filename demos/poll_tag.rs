#![no_std]
#![no_main]

use arduino_hal::spi;
use arduino_hal::default_serial;
use embedded_hal::spi::{Mode, Phase, Polarity};
use panic_halt as _;
use rc522_detect::RfidRc522;
use ufmt::uwriteln;

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);

    let mut serial = default_serial!(dp, pins, 9600);

    // Mode 0, 16 MHz / 16 = 1 MHz
    let settings = spi::Settings {
        data_order: spi::DataOrder::MostSignificantFirst,
        mode: Mode {
            polarity: Polarity::IdleLow,
            phase: Phase::CaptureOnFirstTransition,
        },
        clock: spi::SerialClockRate::OscfOver16,
    };

    let sclk = pins.d13.into_output();
    let mosi = pins.d11.into_output();
    let miso = pins.d12.into_pull_up_input();
    let cs = pins.d10.into_output();
    let (spi, cs_pin) = spi::Spi::new(dp.SPI, sclk, mosi, miso, cs, settings);

    let rst = pins.d9.into_output(); // Reset pin

    let mut rfid = RfidRc522::with_spi(spi, cs_pin, rst, arduino_hal::Delay::new()).unwrap();
    if let Err(e) = rfid.init(&mut serial) {
        uwriteln!(&mut serial, "Init failed: {:?}", e).ok();
    }

    loop {
        arduino_hal::delay_ms(100);
        match rfid.detect_tag() {
            Ok(code) => uwriteln!(&mut serial, "{:02X}", code).ok(),
            Err(e) => uwriteln!(&mut serial, "Detect failed: {:?}", e).ok(),
        };
    }
}
