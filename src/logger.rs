use crate::chronometer::Chronometer;
use std::fmt::Display;

#[derive(Clone, Copy, Default)]
pub struct Logger {
    chronometer: Chronometer,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            chronometer: Chronometer::new(),
        }
    }

    pub fn log(&self, value: impl Display) {
        println!("{} ({} elapsed)", value, self.chronometer.elapsed());
    }
}
