use crate::error::Error;
use std::{
    future::Future,
    sync::mpsc::{channel, Receiver, Sender},
    thread::spawn,
};
use tokio::runtime::Runtime;

/// Runs futures on their own tokio runtime, one OS thread each.
#[derive(Debug)]
pub struct Executor {
    sender: Sender<Result<(), Error>>,
    receiver: Receiver<Result<(), Error>>,
}

impl Executor {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    pub fn spawn_runtime<F, State>(&mut self, state: State, f: impl FnOnce(State) -> F + 'static + Send)
    where
        F: Future<Output = Result<(), Error>>,
        State: 'static + Send + Sync,
    {
        let sender = self.sender.clone();
        spawn(move || {
            let result = match Runtime::new() {
                Ok(runtime) => spawn(move || runtime.block_on(f(state)))
                    .join()
                    .unwrap_or_else(|_| Err(Error::new("Runtime thread panicked"))),
                Err(error) => Err(Error::new(format!("Could not start runtime: {}", error))),
            };
            #[allow(unused_must_use)]
            {
                sender.send(result);
            };
        });
    }

    /// Waits for every spawned runtime and returns the first failure.
    pub fn join(self) -> Result<(), Error> {
        drop(self.sender);
        let mut outcome = Ok(());
        while let Ok(result) = self.receiver.recv() {
            if outcome.is_ok() {
                outcome = result;
            }
        }
        outcome
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Executor;
    use crate::error::Error;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    #[test]
    fn join() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut executor = Executor::new();
        for _ in 0..3 {
            executor.spawn_runtime(counter.clone(), |counter| async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            });
        }
        assert_eq!(executor.join(), Ok(()));
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn join_failure() {
        let mut executor = Executor::new();
        executor.spawn_runtime((), |_| async move { Err(Error::new("Could not bind")) });
        assert_eq!(executor.join(), Err(Error::new("Could not bind")));
    }
}
