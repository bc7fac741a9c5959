//! Shared resource bank with a background accrual ticker
//!
//! The bank is a plain atomic counter so systems and the ticker thread can
//! touch it without a lock. Accrual runs on its own named thread and stops
//! promptly when the handle is dropped.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Thread-safe gold store.
#[derive(Debug)]
pub struct ResourceBank {
    gold: AtomicI64,
}

impl ResourceBank {
    pub fn new(starting_gold: i64) -> Self {
        Self {
            gold: AtomicI64::new(starting_gold),
        }
    }

    /// Current balance.
    pub fn gold(&self) -> i64 {
        self.gold.load(Ordering::Relaxed)
    }

    /// Deposit `amount`.
    pub fn add_gold(&self, amount: i64) {
        self.gold.fetch_add(amount, Ordering::Relaxed);
    }

    /// Withdraw `amount` if the balance covers it. Never overdraws.
    pub fn take_gold(&self, amount: i64) -> bool {
        let mut current = self.gold.load(Ordering::Relaxed);
        loop {
            if current < amount {
                return false;
            }
            match self.gold.compare_exchange_weak(
                current,
                current - amount,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return true,
                Err(observed) => current = observed,
            }
        }
    }

    /// Spawn a ticker that deposits `amount` every `interval` until the
    /// returned handle is stopped or dropped.
    pub fn start_accrual(
        self: &Arc<Self>,
        amount: i64,
        interval: Duration,
    ) -> std::io::Result<AccrualHandle> {
        let bank = Arc::clone(self);
        let (stop, stopped) = mpsc::channel::<()>();
        let worker = thread::Builder::new()
            .name("gold-accrual".to_string())
            .spawn(move || loop {
                match stopped.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        bank.add_gold(amount);
                        tracing::trace!(gold = bank.gold(), "accrual tick");
                    }
                    // Sender dropped or an explicit stop arrived.
                    _ => break,
                }
            })?;
        Ok(AccrualHandle {
            stop: Some(stop),
            worker: Some(worker),
        })
    }
}

/// Owns the accrual thread; stopping (or dropping) joins it.
#[derive(Debug)]
pub struct AccrualHandle {
    stop: Option<mpsc::Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl AccrualHandle {
    /// Stop the ticker and wait for it to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Dropping the sender wakes the worker out of recv_timeout.
        drop(self.stop.take());
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::warn!("accrual thread panicked");
            }
        }
    }
}

impl Drop for AccrualHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposits_and_withdrawals_balance() {
        let bank = ResourceBank::new(100);
        bank.add_gold(50);
        assert!(bank.take_gold(120));
        assert_eq!(bank.gold(), 30);
    }

    #[test]
    fn overdraft_is_refused() {
        let bank = ResourceBank::new(10);
        assert!(!bank.take_gold(11));
        assert_eq!(bank.gold(), 10);
        assert!(bank.take_gold(10));
        assert_eq!(bank.gold(), 0);
    }

    #[test]
    fn accrual_ticks_until_stopped() {
        let bank = Arc::new(ResourceBank::new(0));
        let handle = bank
            .start_accrual(10, Duration::from_millis(10))
            .unwrap();

        std::thread::sleep(Duration::from_millis(100));
        handle.stop();

        let after_stop = bank.gold();
        assert!(after_stop > 0, "ticker never deposited (gold = {after_stop})");

        // Stopped means stopped: the balance no longer moves.
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(bank.gold(), after_stop);
    }

    #[test]
    fn dropping_the_handle_stops_the_ticker() {
        let bank = Arc::new(ResourceBank::new(0));
        drop(bank.start_accrual(1, Duration::from_millis(10)).unwrap());

        let settled = bank.gold();
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(bank.gold(), settled);
    }
}
