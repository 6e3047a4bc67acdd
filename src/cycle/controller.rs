//! Beacon duty-cycle controller
//!
//! Composes the sequencer, payload builder, transport and supervisor into
//! the repeating pattern that balances radio power draw against harvested
//! energy: power the radio, transmit one beacon, power it down, sleep.
//!
//! The cycle is infinite by design. It ends only at hardware reset or the
//! supervisor's deep-discharge shutdown, and a fresh boot restarts it with
//! the radio off and the persisted counter where the last committed build
//! left it.

use crate::beacon::PayloadBuilder;
use crate::clock::TickDelay;
use crate::config::timing::{BEACON_INTERVAL, RADIO_BOOT_DELAY, RADIO_TX_SETTLE};
use crate::power::{BoostReady, PowerSupervisor};
use crate::radio::{RadioLines, RadioPowerSequencer, RadioState};
use crate::storage::CounterStore;
use crate::transport::LinkTransport;

/// Phase of the duty cycle, advanced only by [`BeaconCycleController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    /// Between cycles, about to check supply
    Idle,
    /// Radio powered, waiting out its boot delay
    RadioWarming,
    /// Handing the beacon to the transport
    Transmitting,
    /// Blind settle wait, then radio power-down
    Cooldown,
    /// Long inter-beacon sleep
    Sleeping,
}

/// Top-level duty-cycle state machine.
pub struct BeaconCycleController<L, D, T, P, S>
where
    L: RadioLines,
    D: TickDelay,
    T: LinkTransport,
    P: PowerSupervisor,
    S: CounterStore,
{
    radio: RadioPowerSequencer<L, D>,
    transport: T,
    supervisor: P,
    builder: PayloadBuilder<S>,
    delay: D,
    boost: &'static BoostReady,
    phase: CyclePhase,
}

impl<L, D, T, P, S> BeaconCycleController<L, D, T, P, S>
where
    L: RadioLines,
    D: TickDelay,
    T: LinkTransport,
    P: PowerSupervisor,
    S: CounterStore,
{
    /// Assemble the controller. The sequencer arrives already bound to the
    /// board's line implementation; the radio is off on entry.
    pub fn new(
        radio: RadioPowerSequencer<L, D>,
        transport: T,
        supervisor: P,
        builder: PayloadBuilder<S>,
        delay: D,
        boost: &'static BoostReady,
    ) -> Self {
        Self {
            radio,
            transport,
            supervisor,
            builder,
            delay,
            boost,
            phase: CyclePhase::Idle,
        }
    }

    /// Current phase of the duty cycle
    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    /// Run one full duty cycle: warm, transmit, cool down, sleep.
    ///
    /// If the supply cannot carry a radio burst, the powered phases are
    /// skipped entirely (no pin writes, no transport traffic) and the cycle
    /// goes straight to its sleep wait. Send errors are swallowed: beaconing
    /// is best-effort and the next cycle's counter progression tells the
    /// receiver what it missed.
    pub async fn run_cycle(&mut self) {
        self.phase = CyclePhase::Idle;

        if self.boost.take() {
            log::debug!("boost converter reached regulation");
        }

        if self.supervisor.supply_is_sufficient() {
            self.phase = CyclePhase::RadioWarming;
            self.radio.turn_on().await;
            self.delay.delay_ticks(RADIO_BOOT_DELAY).await;

            self.phase = CyclePhase::Transmitting;
            let packet = self.builder.build();
            let _ = self.transport.open_tx().await;
            // Best-effort: no acknowledgment exists, so a failed send is
            // indistinguishable from a lost beacon and treated the same way
            let _ = self.transport.send(&packet.encode()).await;
            self.transport.close().await;

            self.phase = CyclePhase::Cooldown;
            self.delay.delay_ticks(RADIO_TX_SETTLE).await;
            self.radio.turn_off().await;
        } else {
            log::debug!("supply low, skipping beacon");
        }

        // The radio must be unpowered for the whole inter-beacon sleep
        debug_assert_eq!(self.radio.state(), RadioState::Off);
        self.phase = CyclePhase::Sleeping;
        self.delay.delay_ticks(BEACON_INTERVAL).await;
    }

    /// Run duty cycles forever.
    pub async fn run(&mut self) -> ! {
        log::info!("beacon cycle started");
        loop {
            self.run_cycle().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beacon::packet::BeaconPacket;
    use crate::config::protocol::CMD_SET_ADV_PAYLOAD;
    use crate::config::timing::RADIO_RESET_HOLD;
    use crate::power::traits::mock::MockPowerSupervisor;
    use crate::radio::BoardVariant;
    use crate::storage::traits::mock::MockCounterStore;
    use crate::transport::TransportError;
    use core::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    /// One entry in the cross-component trace.
    #[derive(Debug, Clone, PartialEq, Eq)]
    enum TraceEvent {
        SetReset(bool),
        SetSwitch(bool),
        Wait(u32),
        OpenTx,
        Send(Vec<u8>),
        Close,
    }

    type Trace = Rc<RefCell<Vec<TraceEvent>>>;

    /// Radio lines feeding the shared trace.
    struct TraceLines(Trace);

    impl RadioLines for TraceLines {
        fn set_switch(&mut self, on: bool) {
            self.0.borrow_mut().push(TraceEvent::SetSwitch(on));
        }

        fn set_reset(&mut self, asserted: bool) {
            self.0.borrow_mut().push(TraceEvent::SetReset(asserted));
        }
    }

    /// Delay feeding the shared trace.
    #[derive(Clone)]
    struct TraceDelay(Trace);

    impl TickDelay for TraceDelay {
        async fn delay_ticks(&mut self, ticks: u32) {
            self.0.borrow_mut().push(TraceEvent::Wait(ticks));
        }
    }

    /// Transport feeding the shared trace.
    struct TraceTransport {
        trace: Trace,
        fail_sends: bool,
    }

    impl LinkTransport for TraceTransport {
        async fn open_tx(&mut self) -> Result<(), TransportError> {
            self.trace.borrow_mut().push(TraceEvent::OpenTx);
            Ok(())
        }

        async fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
            self.trace.borrow_mut().push(TraceEvent::Send(bytes.to_vec()));
            if self.fail_sends {
                Err(TransportError::WriteError)
            } else {
                Ok(())
            }
        }

        async fn close(&mut self) {
            self.trace.borrow_mut().push(TraceEvent::Close);
        }
    }

    fn controller(
        supervisor: MockPowerSupervisor,
        counter: u8,
        fail_sends: bool,
    ) -> (
        BeaconCycleController<
            TraceLines,
            TraceDelay,
            TraceTransport,
            MockPowerSupervisor,
            MockCounterStore,
        >,
        Trace,
        MockCounterStore,
        &'static BoostReady,
    ) {
        let trace: Trace = Rc::new(RefCell::new(Vec::new()));
        let store = MockCounterStore::with_value(counter);
        // Each harness gets its own flag so parallel tests cannot steal
        // each other's edges
        let boost: &'static BoostReady = Box::leak(Box::new(BoostReady::new()));

        let radio = RadioPowerSequencer::new(
            TraceLines(trace.clone()),
            TraceDelay(trace.clone()),
            BoardVariant::SplitLines,
        );
        let controller = BeaconCycleController::new(
            radio,
            TraceTransport {
                trace: trace.clone(),
                fail_sends,
            },
            supervisor,
            PayloadBuilder::load(store.clone()),
            TraceDelay(trace.clone()),
            boost,
        );

        (controller, trace, store, boost)
    }

    fn expected_packet(counter: u8) -> Vec<u8> {
        let packet = BeaconPacket {
            command: CMD_SET_ADV_PAYLOAD,
            payload: [
                counter,
                counter.wrapping_add(1),
                counter.wrapping_add(2),
                counter.wrapping_add(3),
            ],
        };
        packet.encode().to_vec()
    }

    #[test]
    fn test_full_cycle_operation_order() {
        let (mut controller, trace, _, _) = controller(MockPowerSupervisor::always(true), 0, false);

        futures::executor::block_on(controller.run_cycle());

        assert_eq!(
            trace.borrow().as_slice(),
            &[
                // turn_on: reset asserted strictly before power
                TraceEvent::SetReset(true),
                TraceEvent::Wait(RADIO_RESET_HOLD),
                TraceEvent::SetSwitch(true),
                TraceEvent::Wait(RADIO_RESET_HOLD),
                TraceEvent::SetReset(false),
                TraceEvent::Wait(RADIO_BOOT_DELAY),
                // transmit
                TraceEvent::OpenTx,
                TraceEvent::Send(expected_packet(0)),
                TraceEvent::Close,
                // cooldown: blind settle, then reset-before-depower
                TraceEvent::Wait(RADIO_TX_SETTLE),
                TraceEvent::SetReset(true),
                TraceEvent::Wait(RADIO_RESET_HOLD),
                TraceEvent::SetSwitch(false),
                // sleep
                TraceEvent::Wait(BEACON_INTERVAL),
            ]
        );
        assert_eq!(controller.phase(), CyclePhase::Sleeping);
    }

    #[test]
    fn test_insufficient_supply_skips_straight_to_sleep() {
        let (mut controller, trace, store, _) =
            controller(MockPowerSupervisor::always(false), 17, false);

        futures::executor::block_on(controller.run_cycle());

        // No pin writes, no transport traffic, no counter movement
        assert_eq!(
            trace.borrow().as_slice(),
            &[TraceEvent::Wait(BEACON_INTERVAL)]
        );
        assert_eq!(store.committed(), 17);
        assert_eq!(controller.phase(), CyclePhase::Sleeping);
    }

    #[test]
    fn test_supply_recovery_resumes_beaconing() {
        let supervisor = MockPowerSupervisor::always(true);
        supervisor.script(&[false]);
        let (mut controller, trace, _, _) = controller(supervisor, 0, false);

        futures::executor::block_on(async {
            controller.run_cycle().await;
            controller.run_cycle().await;
        });

        let sends: Vec<_> = trace
            .borrow()
            .iter()
            .filter(|e| matches!(e, TraceEvent::Send(_)))
            .cloned()
            .collect();
        // Skipped cycle transmits nothing; the next one carries an
        // unperturbed counter
        assert_eq!(sends, vec![TraceEvent::Send(expected_packet(0))]);
    }

    #[test]
    fn test_counter_progresses_across_cycles() {
        let (mut controller, trace, store, _) =
            controller(MockPowerSupervisor::always(true), 250, false);

        futures::executor::block_on(async {
            controller.run_cycle().await;
            controller.run_cycle().await;
        });

        let sends: Vec<_> = trace
            .borrow()
            .iter()
            .filter(|e| matches!(e, TraceEvent::Send(_)))
            .cloned()
            .collect();
        assert_eq!(
            sends,
            vec![
                TraceEvent::Send(expected_packet(250)),
                TraceEvent::Send(expected_packet(254)),
            ]
        );
        assert_eq!(store.committed(), 2);
    }

    #[test]
    fn test_send_failure_is_swallowed_and_cycle_completes() {
        let (mut controller, trace, store, _) =
            controller(MockPowerSupervisor::always(true), 0, true);

        futures::executor::block_on(controller.run_cycle());

        // The cycle still closes the link, powers down and sleeps
        let tail: Vec<_> = trace.borrow().iter().rev().take(5).cloned().collect();
        assert_eq!(
            tail,
            vec![
                TraceEvent::Wait(BEACON_INTERVAL),
                TraceEvent::SetSwitch(false),
                TraceEvent::Wait(RADIO_RESET_HOLD),
                TraceEvent::SetReset(true),
                TraceEvent::Wait(RADIO_TX_SETTLE),
            ]
        );
        // The counter moved anyway; the receiver sees the gap
        assert_eq!(store.committed(), 4);
        assert_eq!(controller.phase(), CyclePhase::Sleeping);
    }

    #[test]
    fn test_boost_flag_is_consumed_at_cycle_start() {
        let (mut controller, _, _, boost) = controller(MockPowerSupervisor::always(false), 0, false);

        boost.signal();
        futures::executor::block_on(controller.run_cycle());

        assert!(!boost.is_set());
    }
}
