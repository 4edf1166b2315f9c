//! One compass view lifetime: open, calibrate, track, fall back, close.

use super::clock::Clock;
use super::heading::{classify, normalize_heading, wrap_degrees};
use super::platform::{Capability, Permission, PlatformCapabilities};
use super::sensor::{OrientationSensor, Subscription};
use super::state::{CompassError, CompassFault, CompassState, Phase, RotateDirection};
use crate::models::direction::Direction;
use crate::models::sample::CompassSample;
use log::{debug, info, trace, warn};
use std::time::{Duration, Instant};

pub const DEFAULT_CALIBRATION_TIMEOUT: Duration = Duration::from_millis(4000);
pub const DEFAULT_MANUAL_STEP: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompassSettings {
    pub calibration_timeout: Duration,
    pub manual_step: f64,
}

impl Default for CompassSettings {
    fn default() -> Self {
        Self {
            calibration_timeout: DEFAULT_CALIBRATION_TIMEOUT,
            manual_step: DEFAULT_MANUAL_STEP,
        }
    }
}

/// Compass state machine.
///
/// Idle -> Calibrating -> Live | Error; Error -> Manual; Manual | Error ->
/// Calibrating on retry; anything -> Idle on close. The sensor listener is
/// attached only while Calibrating or Live.
pub struct CompassSession<S: OrientationSensor, P: PlatformCapabilities, C: Clock> {
    sensor: S,
    platform: P,
    clock: C,
    settings: CompassSettings,
    phase: Phase,
    heading: f64,
    manual_heading: f64,
    subscription: Option<Subscription>,
    deadline: Option<Instant>,
}

impl<S: OrientationSensor, P: PlatformCapabilities, C: Clock> CompassSession<S, P, C> {
    pub fn new(sensor: S, platform: P, clock: C, settings: CompassSettings) -> Self {
        Self {
            sensor,
            platform,
            clock,
            settings,
            phase: Phase::Idle,
            heading: 0.0,
            manual_heading: 0.0,
            subscription: None,
            deadline: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn current_state(&self) -> CompassState {
        CompassState {
            heading: self.heading,
            calibrating: self.phase == Phase::Calibrating,
            error: match self.phase {
                Phase::Error(fault) => Some(fault),
                _ => None,
            },
            manual_mode: self.phase == Phase::Manual,
            manual_heading: self.manual_heading,
        }
    }

    /// Heading the view should show, `None` while closed.
    pub fn displayed_heading(&self) -> Option<f64> {
        match self.phase {
            Phase::Idle => None,
            Phase::Manual => Some(self.manual_heading),
            _ => Some(self.heading),
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        self.displayed_heading().map(classify)
    }

    /// Start a fresh session. Reopening resets everything.
    pub fn open_session(&mut self) {
        if self.phase != Phase::Idle {
            self.close_session();
        }

        self.heading = 0.0;
        self.manual_heading = 0.0;
        info!("compass session opened");
        self.start_automatic();
    }

    pub fn close_session(&mut self) {
        self.detach();
        if self.phase != Phase::Idle {
            info!("compass session closed (was {})", self.phase.name());
        }
        self.phase = Phase::Idle;
    }

    /// Back to automatic tracking after an error or from manual mode.
    pub fn retry(&mut self) -> Result<(), CompassError> {
        match self.phase {
            Phase::Error(_) | Phase::Manual => {
                self.heading = 0.0;
                self.start_automatic();
                Ok(())
            }
            other => Err(self.refuse("retry", other)),
        }
    }

    pub fn switch_to_manual(&mut self) -> Result<(), CompassError> {
        match self.phase {
            Phase::Manual => Ok(()),
            Phase::Calibrating | Phase::Live | Phase::Error(_) => {
                self.detach();
                self.phase = Phase::Manual;
                info!("compass switched to manual mode at {:.1}", self.manual_heading);
                Ok(())
            }
            other => Err(self.refuse("switch to manual mode", other)),
        }
    }

    pub fn rotate_manual(&mut self, direction: RotateDirection) -> Result<f64, CompassError> {
        if self.phase != Phase::Manual {
            return Err(self.refuse("rotate", self.phase));
        }

        self.manual_heading =
            wrap_degrees(self.manual_heading + direction.delta(self.settings.manual_step));
        debug!("manual heading now {:.1}", self.manual_heading);
        Ok(self.manual_heading)
    }

    pub fn reset_manual(&mut self) -> Result<(), CompassError> {
        if self.phase != Phase::Manual {
            return Err(self.refuse("reset", self.phase));
        }

        self.manual_heading = 0.0;
        Ok(())
    }

    /// Drain queued samples, then fire the calibration timeout if it is due.
    ///
    /// While calibrating, a sample delivered at or after the deadline is
    /// ignored, however long it waited in the queue.
    pub fn poll(&mut self) -> Phase {
        let pending = self
            .subscription
            .as_ref()
            .map(Subscription::pending)
            .unwrap_or_default();

        for stamped in pending {
            if self.phase == Phase::Calibrating && self.deadline.is_some_and(|d| stamped.at >= d) {
                trace!("discarded orientation sample delivered after the calibration deadline");
                continue;
            }
            self.apply_sample(stamped.sample);
        }

        if self.phase == Phase::Calibrating
            && self.deadline.is_some_and(|d| self.clock.now() >= d)
        {
            self.fail(CompassFault::SensorUnavailable);
        }

        self.phase
    }

    fn apply_sample(&mut self, sample: CompassSample) {
        if !matches!(self.phase, Phase::Calibrating | Phase::Live) {
            return;
        }

        let Some(heading) = normalize_heading(sample.alpha, sample.absolute) else {
            trace!("discarded orientation sample without angle");
            return;
        };

        self.heading = heading;
        if self.phase == Phase::Calibrating {
            self.deadline = None;
            self.phase = Phase::Live;
            info!("compass live, first heading {:.1}", heading);
        }
    }

    fn start_automatic(&mut self) {
        self.detach();

        let capability = self.platform.probe();
        debug!("orientation capability: {:?}", capability);

        match capability {
            Capability::Unsupported => self.fail(CompassFault::UnsupportedPlatform),
            Capability::NotRequired => self.attach(),
            Capability::RequiresRequest => match self.platform.request_permission() {
                Ok(Permission::Granted) => self.attach(),
                Ok(Permission::Denied) => self.fail(CompassFault::PermissionDenied),
                Err(msg) => {
                    warn!("orientation permission request failed: {msg}");
                    self.fail(CompassFault::PermissionRequestFailed)
                }
            },
        }
    }

    fn attach(&mut self) {
        self.subscription = Some(self.sensor.subscribe());
        self.deadline = Some(self.clock.now() + self.settings.calibration_timeout);
        self.phase = Phase::Calibrating;
        debug!(
            "orientation listener attached, calibrating for {} ms",
            self.settings.calibration_timeout.as_millis()
        );
    }

    fn detach(&mut self) {
        self.deadline = None;
        if let Some(sub) = self.subscription.take() {
            debug!("orientation listener {} detached", sub.id());
            self.sensor.unsubscribe(sub);
        }
    }

    fn fail(&mut self, fault: CompassFault) {
        self.detach();
        warn!("compass error: {fault}");
        self.phase = Phase::Error(fault);
    }

    fn refuse(&self, action: &'static str, phase: Phase) -> CompassError {
        CompassError::InvalidTransition {
            action,
            phase: phase.name(),
        }
    }
}

impl<S: OrientationSensor, P: PlatformCapabilities, C: Clock> Drop for CompassSession<S, P, C> {
    fn drop(&mut self) {
        self.close_session();
    }
}
