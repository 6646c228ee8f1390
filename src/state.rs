use crate::logger::Logger;

/// Shared by every request handler of the service.
pub struct State {
    max_input_length: usize,
    logger: Logger,
}

impl State {
    pub fn new(max_input_length: usize, logger: Logger) -> Self {
        Self { max_input_length, logger }
    }

    pub fn max_input_length(&self) -> usize {
        self.max_input_length
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}
