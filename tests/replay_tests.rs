use torcia::core::compass::{Capability, CompassFault, CompassSettings, Phase, RotateDirection};
use torcia::core::replay::{CompassScript, ManualAction, PermissionAnswer, ReplayLogic};
use torcia::errors::AppError;
use torcia::models::direction::Direction;

const LIVE_SCRIPT: &str = r#"
capability: not-required
steps:
  - after_ms: 100
    sample: { alpha: null }
  - after_ms: 200
    sample: { alpha: -10, absolute: false }
  - after_ms: 50
    sample: { alpha: 200, absolute: true }
"#;

#[test]
fn test_parse_script_defaults() {
    let script = CompassScript::parse("steps: []").unwrap();

    assert_eq!(script.capability, Capability::NotRequired);
    assert_eq!(script.permission, PermissionAnswer::Granted);
    assert!(script.steps.is_empty());
}

#[test]
fn test_parse_script_rejects_garbage() {
    let err = CompassScript::parse("capability: sideways").unwrap_err();
    assert!(matches!(err, AppError::Replay(_)));
}

#[test]
fn test_replay_goes_live_and_keeps_last_heading() {
    let script = CompassScript::parse(LIVE_SCRIPT).unwrap();
    let report = ReplayLogic::run(&script, CompassSettings::default(), &[]).unwrap();

    assert_eq!(report.phase, Phase::Live);
    assert_eq!(report.heading, Some(200.0));
    assert_eq!(report.direction, Some(Direction::SSO));
    assert_eq!(report.leaked_listeners, 0);

    let phases: Vec<Phase> = report.events.iter().map(|e| e.phase).collect();
    assert_eq!(phases[0], Phase::Calibrating);
    assert!(phases.contains(&Phase::Live));

    let live = report
        .events
        .iter()
        .find(|e| e.phase == Phase::Live)
        .unwrap();
    assert_eq!(live.at_ms, 300);
    assert_eq!(live.heading, Some(10.0));
}

#[test]
fn test_replay_sample_at_deadline_is_too_late() {
    let script = CompassScript::parse(
        r#"
steps:
  - after_ms: 4000
    sample: { alpha: 90, absolute: true }
"#,
    )
    .unwrap();
    let report = ReplayLogic::run(&script, CompassSettings::default(), &[]).unwrap();

    assert_eq!(report.phase, Phase::Error(CompassFault::SensorUnavailable));
    assert_eq!(report.state.error, Some(CompassFault::SensorUnavailable));
}

#[test]
fn test_replay_denied_then_manual() {
    let mut script = CompassScript::parse("capability: requires-request").unwrap();
    script.permission = PermissionAnswer::Denied;

    let actions = ManualAction::parse_list("right, right,right").unwrap();
    let report = ReplayLogic::run(&script, CompassSettings::default(), &actions).unwrap();

    assert_eq!(report.phase, Phase::Manual);
    assert_eq!(report.heading, Some(45.0));
    assert_eq!(report.direction, Some(Direction::NE));
    assert!(
        report
            .events
            .iter()
            .any(|e| e.phase == Phase::Error(CompassFault::PermissionDenied))
    );
}

#[test]
fn test_parse_manual_actions() {
    let actions = ManualAction::parse_list("left,R,reset,").unwrap();

    assert_eq!(
        actions,
        vec![
            ManualAction::Rotate(RotateDirection::Left),
            ManualAction::Rotate(RotateDirection::Right),
            ManualAction::Reset,
        ]
    );

    let err = ManualAction::parse_list("left,up").unwrap_err();
    assert!(matches!(err, AppError::InvalidDirection(d) if d == "up"));
}
