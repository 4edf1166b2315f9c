//! Offline compass run: a scripted sequence of sensor samples pushed through
//! a real `CompassSession` on a manual clock.

use crate::core::compass::{
    Capability, CompassSession, CompassSettings, CompassState, ManualClock, Permission, Phase,
    RotateDirection, ScriptedSensor, StaticPlatform,
};
use crate::errors::{AppError, AppResult};
use crate::models::{direction::Direction, sample::CompassSample};
use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// How the simulated platform answers a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PermissionAnswer {
    #[default]
    Granted,
    Denied,
    Fail,
}

impl PermissionAnswer {
    fn outcome(&self) -> Result<Permission, String> {
        match self {
            PermissionAnswer::Granted => Ok(Permission::Granted),
            PermissionAnswer::Denied => Ok(Permission::Denied),
            PermissionAnswer::Fail => Err("permission prompt could not be shown".to_string()),
        }
    }
}

/// One scripted step: wait `after_ms`, then optionally deliver a sample.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplayStep {
    #[serde(default)]
    pub after_ms: u64,
    #[serde(default)]
    pub sample: Option<CompassSample>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompassScript {
    #[serde(default = "default_capability")]
    pub capability: Capability,
    #[serde(default)]
    pub permission: PermissionAnswer,
    #[serde(default)]
    pub steps: Vec<ReplayStep>,
}

fn default_capability() -> Capability {
    Capability::NotRequired
}

impl CompassScript {
    /// Parse a YAML (or JSON) script.
    pub fn parse(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::Replay(e.to_string()))
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }
}

/// User action applied in manual mode after the scripted steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualAction {
    Rotate(RotateDirection),
    Reset,
}

impl ManualAction {
    /// Parse a comma separated list such as `left,right,reset`.
    pub fn parse_list(s: &str) -> AppResult<Vec<Self>> {
        s.split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| {
                if p.eq_ignore_ascii_case("reset") {
                    Ok(ManualAction::Reset)
                } else {
                    RotateDirection::from_code(p)
                        .map(ManualAction::Rotate)
                        .ok_or_else(|| AppError::InvalidDirection(p.to_string()))
                }
            })
            .collect()
    }
}

/// Observable change during a replay.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayEvent {
    pub at_ms: u64,
    pub phase: Phase,
    pub heading: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct ReplayReport {
    pub events: Vec<ReplayEvent>,
    pub state: CompassState,
    pub phase: Phase,
    pub heading: Option<f64>,
    pub direction: Option<Direction>,
    /// Listeners still attached once the session is closed.
    pub leaked_listeners: usize,
}

pub struct ReplayLogic;

impl ReplayLogic {
    /// Run `script`. A sample scheduled exactly at the calibration deadline
    /// arrives too late: the clock moves first, then the deadline is checked.
    pub fn run(
        script: &CompassScript,
        settings: CompassSettings,
        manual: &[ManualAction],
    ) -> AppResult<ReplayReport> {
        let clock = ManualClock::new();
        let platform = StaticPlatform::new(script.capability, script.permission.outcome());
        let mut session = CompassSession::new(
            ScriptedSensor::with_clock(clock.clone()),
            platform,
            clock.clone(),
            settings,
        );

        let mut elapsed = 0u64;
        let mut events = Vec::new();
        let mut last: Option<(Phase, Option<f64>)> = None;

        let mut record = |at_ms: u64, phase: Phase, heading: Option<f64>| {
            if last != Some((phase, heading)) {
                events.push(ReplayEvent {
                    at_ms,
                    phase,
                    heading,
                });
                last = Some((phase, heading));
            }
        };

        session.open_session();
        record(elapsed, session.phase(), session.displayed_heading());

        for step in &script.steps {
            elapsed += step.after_ms;
            clock.advance(Duration::from_millis(step.after_ms));
            session.poll();
            record(elapsed, session.phase(), session.displayed_heading());

            if let Some(sample) = step.sample {
                session.sensor().emit(sample);
                session.poll();
                record(elapsed, session.phase(), session.displayed_heading());
            }
        }

        if !manual.is_empty() {
            session.switch_to_manual()?;
            record(elapsed, session.phase(), session.displayed_heading());

            for action in manual {
                match action {
                    ManualAction::Rotate(dir) => {
                        session.rotate_manual(*dir)?;
                    }
                    ManualAction::Reset => session.reset_manual()?,
                }
                record(elapsed, session.phase(), session.displayed_heading());
            }
        }

        let report_state = session.current_state();
        let phase = session.phase();
        let heading = session.displayed_heading();
        let direction = session.direction();

        session.close_session();
        let leaked_listeners = session.sensor().active_listeners();

        Ok(ReplayReport {
            events,
            state: report_state,
            phase,
            heading,
            direction,
            leaked_listeners,
        })
    }
}
