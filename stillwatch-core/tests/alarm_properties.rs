//! Property tests for the alarm supervisor

use proptest::prelude::*;

use stillwatch_core::alarm::{AlarmCommand, AlarmStatus, AlarmSupervisor};
use stillwatch_core::sensor::{SensorKind, SensorReading};

#[derive(Debug, Clone, Copy)]
enum Input {
    Reading(SensorReading),
    Command(AlarmCommand),
}

fn kind() -> impl Strategy<Value = SensorKind> {
    prop_oneof![
        Just(SensorKind::NoSensor),
        Just(SensorKind::CaptureSensor),
        Just(SensorKind::OneWireSensor),
    ]
}

fn invalid_reading() -> impl Strategy<Value = SensorReading> {
    (kind(), -200.0f32..400.0).prop_map(|(kind, value)| SensorReading {
        value,
        valid: false,
        kind,
    })
}

fn any_reading() -> impl Strategy<Value = SensorReading> {
    (kind(), -200.0f32..400.0, any::<bool>()).prop_map(|(kind, value, valid)| SensorReading {
        value,
        valid,
        kind,
    })
}

fn command() -> impl Strategy<Value = AlarmCommand> {
    prop_oneof![
        Just(AlarmCommand::Arm),
        Just(AlarmCommand::Acknowledge),
        Just(AlarmCommand::Disable),
    ]
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        any_reading().prop_map(Input::Reading),
        command().prop_map(Input::Command),
    ]
}

/// Drive a fresh supervisor with `inputs`
fn replay(threshold: f32, inputs: &[Input]) -> AlarmSupervisor {
    let mut supervisor = AlarmSupervisor::new(threshold);
    for input in inputs {
        match *input {
            Input::Reading(r) => {
                supervisor.process(r);
            }
            Input::Command(c) => {
                let _ = supervisor.command(c);
            }
        }
    }
    supervisor
}

proptest! {
    #[test]
    fn invalid_readings_never_change_status(
        prefix in prop::collection::vec(input(), 0..20),
        readings in prop::collection::vec(invalid_reading(), 1..50),
        threshold in -100.0f32..300.0,
    ) {
        let mut supervisor = replay(threshold, &prefix);
        let before = supervisor.status();

        for reading in readings {
            prop_assert_eq!(supervisor.process(reading), None);
            prop_assert_eq!(supervisor.status(), before);
        }
    }

    #[test]
    fn triggered_ignores_all_readings(
        readings in prop::collection::vec(any_reading(), 0..50),
        threshold in -100.0f32..300.0,
    ) {
        let mut supervisor = AlarmSupervisor::armed(threshold);
        supervisor.process(SensorReading::valid(SensorKind::OneWireSensor, threshold));
        prop_assert_eq!(supervisor.status(), AlarmStatus::Triggered);

        for reading in readings {
            prop_assert_eq!(supervisor.process(reading), None);
            prop_assert_eq!(supervisor.status(), AlarmStatus::Triggered);
        }
    }

    #[test]
    fn armed_triggers_on_the_crossing_cycle(
        below in prop::collection::vec(0.0f32..99.0, 0..20),
        above in 100.0f32..400.0,
    ) {
        let mut supervisor = AlarmSupervisor::armed(100.0);
        for value in below {
            let reading = SensorReading::valid(SensorKind::CaptureSensor, value);
            prop_assert_eq!(supervisor.process(reading), None);
            prop_assert_eq!(supervisor.status(), AlarmStatus::Armed);
        }

        let reading = SensorReading::valid(SensorKind::CaptureSensor, above);
        let transition = supervisor.process(reading);
        prop_assert_eq!(transition.map(|t| t.to), Some(AlarmStatus::Triggered));
    }

    #[test]
    fn disable_always_reaches_disabled(
        prefix in prop::collection::vec(input(), 0..40),
        threshold in -100.0f32..300.0,
    ) {
        let mut supervisor = replay(threshold, &prefix);

        prop_assert!(supervisor.command(AlarmCommand::Disable).is_ok());
        prop_assert_eq!(supervisor.status(), AlarmStatus::Disabled);
        prop_assert_eq!(supervisor.last_reading(), None);
    }

    #[test]
    fn rejected_commands_leave_state_untouched(
        prefix in prop::collection::vec(input(), 0..40),
        command in command(),
    ) {
        let mut supervisor = replay(100.0, &prefix);
        let before = *supervisor.state();

        if supervisor.command(command).is_err() {
            prop_assert_eq!(*supervisor.state(), before);
        }
    }

    #[test]
    fn at_most_one_transition_per_input(
        inputs in prop::collection::vec(input(), 1..60),
    ) {
        let mut supervisor = AlarmSupervisor::new(100.0);
        for input in inputs {
            let before = supervisor.status();
            let transition = match input {
                Input::Reading(r) => supervisor.process(r),
                Input::Command(c) => supervisor.command(c).ok().flatten(),
            };

            match transition {
                Some(t) => {
                    prop_assert_eq!(t.from, before);
                    prop_assert_eq!(t.to, supervisor.status());
                    prop_assert_ne!(t.from, t.to);
                }
                None => prop_assert_eq!(supervisor.status(), before),
            }
        }
    }
}
