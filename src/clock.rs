//! Tick-based delay trait for abstraction and testability
//!
//! Every timed wait in the firmware suspends through this trait, so the
//! whole duty cycle can be driven in tests without real time passing.

use core::future::Future;

/// Abstract low-power clock delay.
///
/// Implementations suspend the caller for the given number of ticks. The
/// embedded binding parks the processor in a low-power sleep for the
/// duration; the mock merely records the request. Once a wait begins it
/// always completes; there is no cancellation.
pub trait TickDelay {
    /// Suspend for `ticks` ticks of the low-power clock.
    fn delay_ticks(&mut self, ticks: u32) -> impl Future<Output = ()>;
}

#[cfg(test)]
pub mod mock {
    //! Mock delay for testing

    use super::*;
    use core::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    /// Mock delay that completes immediately and records every request.
    ///
    /// The recorder is shared via `Rc` so a test can hand clones to several
    /// components (sequencer and controller) and still read one combined
    /// wait history.
    #[derive(Clone)]
    pub struct MockTickDelay {
        waits: Rc<RefCell<Vec<u32>>>,
    }

    impl MockTickDelay {
        /// Create a new mock delay with an empty wait history
        pub fn new() -> Self {
            Self {
                waits: Rc::new(RefCell::new(Vec::new())),
            }
        }

        /// All recorded waits, in request order
        pub fn waits(&self) -> Vec<u32> {
            self.waits.borrow().clone()
        }

        /// Total ticks requested so far
        pub fn total_ticks(&self) -> u64 {
            self.waits.borrow().iter().map(|&t| t as u64).sum()
        }

        /// Clear the wait history
        pub fn clear(&self) {
            self.waits.borrow_mut().clear();
        }
    }

    impl Default for MockTickDelay {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TickDelay for MockTickDelay {
        async fn delay_ticks(&mut self, ticks: u32) {
            self.waits.borrow_mut().push(ticks);
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_mock_records_waits_in_order() {
            let mut delay = MockTickDelay::new();

            futures::executor::block_on(async {
                delay.delay_ticks(10).await;
                delay.delay_ticks(250).await;
            });

            assert_eq!(delay.waits(), vec![10, 250]);
            assert_eq!(delay.total_ticks(), 260);
        }

        #[test]
        fn test_clones_share_history() {
            let delay = MockTickDelay::new();
            let mut a = delay.clone();
            let mut b = delay.clone();

            futures::executor::block_on(async {
                a.delay_ticks(1).await;
                b.delay_ticks(2).await;
                a.delay_ticks(3).await;
            });

            assert_eq!(delay.waits(), vec![1, 2, 3]);
        }
    }
}
