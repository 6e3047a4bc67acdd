#![no_std]
#![no_main]

// Required for ESP-IDF bootloader compatibility
// Use explicit parameters to ensure correct efuse block revision values
esp_bootloader_esp_idf::esp_app_desc!(
    env!("CARGO_PKG_VERSION"),  // version
    env!("CARGO_PKG_NAME"),     // project_name
    "00:00:00",                 // build_time
    "2025-01-01",               // build_date
    "0.0.0",                    // idf_ver (not using IDF)
    0x10000,                    // mmu_page_size (64KB)
    0,                          // min_efuse_blk_rev_full (accept all)
    u16::MAX                    // max_efuse_blk_rev_full (accept all)
);

use esp_backtrace as _;
use esp_hal::gpio::{Input, InputConfig, Pull};
use esp_hal::timer::timg::TimerGroup;
use esp_hal::uart::{Config as UartConfig, Uart};
use esp_hal::Async;
use static_cell::StaticCell;

mod beacon;
mod board;
mod clock;
mod config;
mod cycle;
mod power;
mod radio;
mod storage;
mod transport;

use beacon::PayloadBuilder;
use board::clock::EmbassyTickDelay;
use board::storage::RtcCounterStore;
use board::supervisor::{ComparatorSupervisor, BOOST_READY};
use board::transport::UartLinkTransport;
use cycle::BeaconCycleController;
use radio::{BoardVariant, RadioPowerSequencer};

/// Radio control lines for the selected board revision
#[cfg(feature = "io-expander")]
type BoardLines = board::lines::ExpanderLines<esp_hal::i2c::master::I2c<'static, esp_hal::Blocking>>;
#[cfg(not(feature = "io-expander"))]
type BoardLines = board::lines::GpioLines;

/// Fully bound duty-cycle controller for this board
type BoardController = BeaconCycleController<
    BoardLines,
    EmbassyTickDelay,
    UartLinkTransport<Uart<'static, Async>>,
    ComparatorSupervisor,
    RtcCounterStore,
>;

/// Static executor for embassy
static EXECUTOR: StaticCell<esp_rtos::embassy::Executor> = StaticCell::new();

#[esp_hal::main]
fn main() -> ! {
    let peripherals = esp_hal::init(esp_hal::Config::default());

    // Initialise the RTOS scheduler with timer - MUST be done before any async operations
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    esp_println::logger::init_logger_from_env();
    log::info!("harvest beacon node v{}", env!("CARGO_PKG_VERSION"));

    // Serial link to the radio module, transmit side only
    // (pin mapping documented in config::pins)
    let uart = Uart::new(
        peripherals.UART1,
        UartConfig::default().with_baudrate(config::link::BAUD_RATE),
    )
    .unwrap()
    .with_tx(peripherals.GPIO17)
    .into_async();
    let link = UartLinkTransport::new(uart);

    // Supervisor circuit outputs
    let supply_ok = Input::new(peripherals.GPIO6, InputConfig::default());
    let vboost_ok = Input::new(
        peripherals.GPIO7,
        InputConfig::default().with_pull(Pull::Down),
    );
    let supervisor = ComparatorSupervisor::new(supply_ok);

    // Radio lines, held safe (switch open) until the first cycle
    #[cfg(not(feature = "io-expander"))]
    let lines = {
        use esp_hal::gpio::{Level, Output, OutputConfig};

        let switch = Output::new(peripherals.GPIO4, Level::Low, OutputConfig::default());
        let reset = Output::new(peripherals.GPIO5, Level::Low, OutputConfig::default());
        board::lines::GpioLines::new(switch, reset)
    };
    #[cfg(feature = "io-expander")]
    let lines = {
        let i2c = esp_hal::i2c::master::I2c::new(
            peripherals.I2C0,
            esp_hal::i2c::master::Config::default(),
        )
        .unwrap()
        .with_sda(peripherals.GPIO8)
        .with_scl(peripherals.GPIO9);
        board::lines::ExpanderLines::new(i2c)
    };

    // Both revisions pace each line edge explicitly on this MCU
    let sequencer = RadioPowerSequencer::new(lines, EmbassyTickDelay, BoardVariant::SplitLines);

    let builder = PayloadBuilder::load(RtcCounterStore::take());

    let controller = BeaconCycleController::new(
        sequencer,
        link,
        supervisor,
        builder,
        EmbassyTickDelay,
        &BOOST_READY,
    );

    // Create and run the embassy executor
    let executor = EXECUTOR.init(esp_rtos::embassy::Executor::new());
    executor.run(|spawner| {
        spawner.must_spawn(beacon_task(controller));
        spawner.must_spawn(boost_watch_task(vboost_ok));
    })
}

/// Task running the beacon duty cycle forever
#[embassy_executor::task]
async fn beacon_task(mut controller: BoardController) -> ! {
    controller.run().await
}

/// Task latching boost-ready edges for the cycle
#[embassy_executor::task]
async fn boost_watch_task(vboost_ok: Input<'static>) -> ! {
    board::supervisor::boost_watch(vboost_ok).await
}
