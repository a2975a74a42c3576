//! Toaster - Thermocouple-triggered toaster controller
//!
//! Main firmware binary for RP2040-based toaster builds. Samples the
//! thermocouple once per second and releases the bread carriage the moment
//! the cook-to temperature is reached.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use {defmt_rtt as _, panic_probe as _};

use toaster_core::config::{parse_config, ToasterConfig};
use toaster_core::control::{ControlLoop, ToastController};
use toaster_drivers::{ServoActuator, ThermocoupleReader};
use toaster_hal_rp2040::{EmbassyClock, PinBank, Rp2040Gpio, ServoOutput, ServoPulse};

use crate::board::{BUTTON_PINS, DOWN_BUTTON_PIN, START_BUTTON_PIN, UP_BUTTON_PIN};
use crate::tasks::ButtonRole;

mod board;
mod channels;
mod tasks;

/// Embedded configuration (compiled into firmware)
/// Edit toaster.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../toaster.toml");

/// Pulse width handed from the servo actuator to the servo task
static SERVO_PULSE: ServoPulse = ServoPulse::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Toaster firmware starting...");

    let p = embassy_rp::init(Default::default());
    let mut bank = PinBank::new(p);
    info!("Peripherals initialized");

    let config = load_config();
    info!(
        "Config: servo=gpio{} cs=gpio{} clk=gpio{} data=gpio{}, threshold {}C ({}-{})",
        config.pins.servo,
        config.pins.chip_select,
        config.pins.clock,
        config.pins.data,
        config.initial_threshold,
        config.bounds.low,
        config.bounds.high
    );

    // Thermocouple bus
    let mut sensor_gpio = Rp2040Gpio::new();
    for pin in [config.pins.chip_select, config.pins.clock, config.pins.data] {
        sensor_gpio.add_pin(pin, bank.take(pin).unwrap()).unwrap();
    }
    let mut sensor = ThermocoupleReader::new(sensor_gpio, &config);
    sensor.init();

    // Servo: the task owns the pin, the actuator sets the width
    let servo_output = ServoOutput::new(bank.take(config.pins.servo).unwrap(), &SERVO_PULSE);
    let mut servo_gpio = Rp2040Gpio::new();
    servo_gpio.attach_servo(config.pins.servo, &SERVO_PULSE);
    let servo = ServoActuator::new(servo_gpio, &config);
    info!("Servo parked at {}us", SERVO_PULSE.width_us());

    let controller = ToastController::new(&config, servo);
    let toaster = ControlLoop::new(sensor, controller, EmbassyClock);

    for (name, pin) in BUTTON_PINS {
        debug!("{} on gpio{}", name, pin);
    }
    let start_btn = Input::new(bank.take(START_BUTTON_PIN).unwrap(), Pull::Up);
    let up_btn = Input::new(bank.take(UP_BUTTON_PIN).unwrap(), Pull::Up);
    let down_btn = Input::new(bank.take(DOWN_BUTTON_PIN).unwrap(), Pull::Up);

    spawner.spawn(tasks::servo_task(servo_output)).unwrap();
    spawner.spawn(tasks::control_task(toaster)).unwrap();
    spawner.spawn(tasks::status_task()).unwrap();
    spawner
        .spawn(tasks::button_task(start_btn, ButtonRole::StartReset))
        .unwrap();
    spawner
        .spawn(tasks::button_task(up_btn, ButtonRole::Up))
        .unwrap();
    spawner
        .spawn(tasks::button_task(down_btn, ButtonRole::Down))
        .unwrap();

    info!("All tasks spawned, toaster ready");
}

/// Parse the embedded configuration
///
/// `build.rs` runs the same parser, so this only fails if the two diverge.
fn load_config() -> ToasterConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => defmt::panic!("Invalid embedded config: {}", e),
    }
}
