#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::fmt;

use log::Level;
use sx126x::{Bus, Error};

/// Bus double recording every frame it is given.
#[derive(Default)]
pub struct MockBus {
    frames: RefCell<Vec<Vec<u8>>>,
    logs: RefCell<Vec<(Level, String)>>,
    /// Fail the transfer with this (zero-based) index
    fail_at: Cell<Option<(usize, Error)>>,
    attempts: Cell<usize>,
    response: Vec<u8>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(index: usize, error: Error) -> Self {
        let bus = Self::default();
        bus.fail_at.set(Some((index, error)));
        bus
    }

    pub fn with_response(response: &[u8]) -> Self {
        Self {
            response: response.to_vec(),
            ..Self::default()
        }
    }

    /// Arms a failure relative to the transfers seen so far.
    pub fn fail_next(&self, error: Error) {
        self.fail_at.set(Some((self.attempts.get(), error)));
    }

    pub fn frames(&self) -> Vec<Vec<u8>> {
        self.frames.borrow().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.get()
    }

    pub fn logged(&self, level: Level, needle: &str) -> bool {
        self.logs
            .borrow()
            .iter()
            .any(|(l, msg)| *l == level && msg.contains(needle))
    }

    pub fn log_count(&self, level: Level) -> usize {
        self.logs.borrow().iter().filter(|(l, _)| *l == level).count()
    }
}

impl Bus for MockBus {
    fn transfer(&self, tx: &[u8], rx: Option<&mut [u8]>) -> Result<(), Error> {
        let index = self.attempts.get();
        self.attempts.set(index + 1);

        if let Some((at, error)) = self.fail_at.get() {
            if at == index {
                return Err(error);
            }
        }

        if let Some(rx) = rx {
            for (dst, src) in rx.iter_mut().zip(self.response.iter()) {
                *dst = *src;
            }
        }
        self.frames.borrow_mut().push(tx.to_vec());
        Ok(())
    }

    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        self.logs.borrow_mut().push((level, args.to_string()));
    }
}
