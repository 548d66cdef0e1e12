// Register-level stand-in for the MFRC522, with a reset pin and delay that
// log into the same event list so ordering across all three can be checked.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorType, OutputPin};
use embedded_hal::spi;
use rc522_detect::{RFIDError, Register, Transport};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Write(Register, u8),
    Read(Register, u8),
    Delay(u32),
    Reset(bool),
}

pub struct ChipState {
    pub registers: [u8; 64],
    pub events: Vec<Event>,
    pub fifo: VecDeque<u8>,
    pub last_fifo_write: Option<u8>,
    /// Returned for every FIFOData read when set.
    pub fifo_response: Option<u8>,
    pub broken: bool,
}

#[derive(Clone)]
pub struct Bench(pub Rc<RefCell<ChipState>>);

impl Bench {
    pub fn new() -> Self {
        Bench(Rc::new(RefCell::new(ChipState {
            registers: [0; 64],
            events: Vec::new(),
            fifo: VecDeque::new(),
            last_fifo_write: None,
            fifo_response: None,
            broken: false,
        })))
    }

    pub fn chip(&self) -> FakeChip {
        FakeChip(self.0.clone())
    }

    pub fn reset_pin(&self) -> FakePin {
        FakePin(self.0.clone())
    }

    pub fn delay(&self) -> FakeDelay {
        FakeDelay(self.0.clone())
    }

    pub fn preset(&self, register: Register, value: u8) {
        self.0.borrow_mut().registers[register.addr() as usize] = value;
    }

    pub fn register(&self, register: Register) -> u8 {
        self.0.borrow().registers[register.addr() as usize]
    }

    pub fn respond_with(&self, value: u8) {
        self.0.borrow_mut().fifo_response = Some(value);
    }

    pub fn break_bus(&self) {
        self.0.borrow_mut().broken = true;
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().events.clone()
    }

    pub fn writes(&self) -> Vec<(Register, u8)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Write(register, value) => Some((register, value)),
                _ => None,
            })
            .collect()
    }

    pub fn clear_events(&self) {
        self.0.borrow_mut().events.clear();
    }
}

pub struct FakeChip(Rc<RefCell<ChipState>>);

impl Transport for FakeChip {
    fn write_register(&mut self, register: Register, value: u8) -> Result<(), RFIDError> {
        let mut state = self.0.borrow_mut();
        if state.broken {
            return Err(RFIDError::CommunicationError(spi::ErrorKind::Other));
        }
        state.events.push(Event::Write(register, value));
        match register {
            Register::FifoData => {
                state.fifo.push_back(value);
                state.last_fifo_write = Some(value);
            }
            Register::FifoLevel if value & 0x80 != 0 => state.fifo.clear(),
            _ => state.registers[register.addr() as usize] = value,
        }
        Ok(())
    }

    fn read_register(&mut self, register: Register) -> Result<u8, RFIDError> {
        let mut state = self.0.borrow_mut();
        if state.broken {
            return Err(RFIDError::CommunicationError(spi::ErrorKind::Other));
        }
        let value = match register {
            Register::FifoData => match state.fifo_response {
                Some(value) => value,
                None => match state.fifo.pop_front() {
                    Some(value) => value,
                    None => state.last_fifo_write.unwrap_or(0),
                },
            },
            Register::FifoLevel => state.fifo.len() as u8,
            _ => state.registers[register.addr() as usize],
        };
        state.events.push(Event::Read(register, value));
        Ok(value)
    }
}

pub struct FakePin(Rc<RefCell<ChipState>>);

impl ErrorType for FakePin {
    type Error = Infallible;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.borrow_mut().events.push(Event::Reset(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.borrow_mut().events.push(Event::Reset(true));
        Ok(())
    }
}

/// A reset line whose driver is gone.
pub struct DeadPin;

impl ErrorType for DeadPin {
    type Error = digital::ErrorKind;
}

impl OutputPin for DeadPin {
    fn set_low(&mut self) -> Result<(), digital::ErrorKind> {
        Err(digital::ErrorKind::Other)
    }

    fn set_high(&mut self) -> Result<(), digital::ErrorKind> {
        Err(digital::ErrorKind::Other)
    }
}

pub struct FakeDelay(Rc<RefCell<ChipState>>);

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().events.push(Event::Delay(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().events.push(Event::Delay(ms));
    }
}

#[derive(Default)]
pub struct Serial(pub String);

impl ufmt::uWrite for Serial {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.0.push_str(s);
        Ok(())
    }
}
