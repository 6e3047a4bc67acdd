//! Embassy-backed tick delay

use crate::clock::TickDelay;
use embassy_time::{Duration, Timer};

/// Low-power clock delay over the embassy time driver.
///
/// One tick = one millisecond. The wait suspends the task; with nothing
/// else runnable the RTOS parks the processor in its light sleep state,
/// which is where the node spends almost all of its life.
#[derive(Clone, Copy)]
pub struct EmbassyTickDelay;

impl TickDelay for EmbassyTickDelay {
    async fn delay_ticks(&mut self, ticks: u32) {
        Timer::after(Duration::from_millis(ticks as u64)).await;
    }
}
