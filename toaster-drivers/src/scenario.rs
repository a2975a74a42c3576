//! Whole-system scenarios with real drivers on fake boards

use core::cell::Cell;

use toaster_core::config::ToasterConfig;
use toaster_core::control::{ControlLoop, Intent, ToastController};
use toaster_core::state::Phase;
use toaster_hal::Clock;

use crate::testing::FakeBoard;
use crate::{ServoActuator, ThermocoupleReader};

struct ManualClock {
    now_ms: Cell<u64>,
}

impl ManualClock {
    fn set(&self, now_ms: u64) {
        self.now_ms.set(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }
}

type Loop<'a> = ControlLoop<
    ThermocoupleReader<FakeBoard>,
    ServoActuator<FakeBoard>,
    &'a ManualClock,
>;

/// Build a loop whose converter will report `raws` in order
fn build<'a>(raws: &[u16], clock: &'a ManualClock) -> Loop<'a> {
    let config = ToasterConfig::DEFAULT;

    let mut sensor_board = FakeBoard::new(config.pins);
    for &raw in raws {
        sensor_board.queue_word(raw);
    }
    let mut sensor = ThermocoupleReader::new(sensor_board, &config);
    sensor.init();

    let servo = ServoActuator::new(FakeBoard::new(config.pins), &config);
    let controller = ToastController::new(&config, servo);
    ControlLoop::new(sensor, controller, clock)
}

fn pulses(lp: &Loop<'_>) -> Vec<u16> {
    lp.controller().actuator().gpio().servo_pulses()
}

#[test]
fn test_toast_to_threshold() {
    let clock = ManualClock {
        now_ms: Cell::new(0),
    };
    // 50, 65, 79, 80 degrees
    let mut lp = build(&[100, 130, 158, 160], &clock);

    lp.handle(Intent::TextEdited(80));
    lp.handle(Intent::TextCommitted);
    lp.handle(Intent::Start);
    assert_eq!(pulses(&lp), [700, 2000]);

    for second in 1..=3 {
        clock.set(second * 1000);
        lp.tick();
        assert_eq!(lp.status().phase, Phase::Active);
    }
    assert_eq!(lp.status().current_temperature, Some(79));

    clock.set(4_000);
    lp.tick();
    let status = lp.status();
    assert_eq!(status.phase, Phase::Done);
    assert_eq!(status.elapsed_seconds, 4);
    assert_eq!(pulses(&lp), [700, 2000, 700]);
    assert_eq!(lp.sensor().gpio().delays().len(), 4 * 25);
}

#[test]
fn test_idle_reads_never_move_servo() {
    let clock = ManualClock {
        now_ms: Cell::new(0),
    };
    let mut lp = build(&[300, 300, 300], &clock);

    for second in 1..=3 {
        clock.set(second * 1000);
        assert!(lp.tick().is_some());
    }
    assert_eq!(lp.status().phase, Phase::Idle);
    assert_eq!(lp.status().current_temperature, Some(150));
    assert_eq!(pulses(&lp), [700]);
}

#[test]
fn test_reset_after_done_rearms() {
    let clock = ManualClock {
        now_ms: Cell::new(0),
    };
    let mut lp = build(&[200, 60, 240], &clock);
    lp.handle(Intent::Start);

    clock.set(1_000);
    lp.tick();
    assert_eq!(lp.status().phase, Phase::Done);

    // Threshold input is locked until reset
    lp.handle(Intent::SetThreshold(120));
    assert_eq!(lp.status().threshold, 80);

    lp.handle(Intent::Reset);
    lp.handle(Intent::SetThreshold(120));
    lp.handle(Intent::Start);

    clock.set(2_000);
    lp.tick();
    assert_eq!(lp.status().phase, Phase::Active);
    clock.set(3_000);
    lp.tick();
    assert_eq!(lp.status().phase, Phase::Done);
    assert_eq!(pulses(&lp), [700, 2000, 700, 2000, 700]);
}
