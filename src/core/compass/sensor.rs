//! Orientation event subscription.

use super::clock::{Clock, SystemClock};
use crate::models::sample::CompassSample;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;

/// A sample together with the moment the sensor delivered it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StampedSample {
    pub at: Instant,
    pub sample: CompassSample,
}

/// Handle for one attached listener. Samples queue up here until drained.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    receiver: Receiver<StampedSample>,
}

impl Subscription {
    pub fn new(id: u64, receiver: Receiver<StampedSample>) -> Self {
        Self { id, receiver }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Everything delivered since the last call, in delivery order.
    pub fn pending(&self) -> Vec<StampedSample> {
        self.receiver.try_iter().collect()
    }
}

/// Source of device-orientation events.
///
/// Every `subscribe` must be paired with exactly one `unsubscribe`.
pub trait OrientationSensor {
    fn subscribe(&mut self) -> Subscription;
    fn unsubscribe(&mut self, subscription: Subscription);
}

/// Sensor fed by hand: whatever is `emit`ted reaches every attached listener,
/// stamped with the sensor's clock.
pub struct ScriptedSensor {
    clock: Box<dyn Clock>,
    next_id: u64,
    listeners: Vec<(u64, Sender<StampedSample>)>,
}

impl ScriptedSensor {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Stamp deliveries with `clock`; share it with the session so both
    /// agree on when the calibration deadline passes.
    pub fn with_clock<C: Clock + 'static>(clock: C) -> Self {
        Self {
            clock: Box::new(clock),
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    /// Deliver a sample; returns how many listeners received it.
    pub fn emit(&self, sample: CompassSample) -> usize {
        let stamped = StampedSample {
            at: self.clock.now(),
            sample,
        };
        self.listeners
            .iter()
            .filter(|(_, tx)| tx.send(stamped).is_ok())
            .count()
    }

    pub fn active_listeners(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for ScriptedSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl OrientationSensor for ScriptedSensor {
    fn subscribe(&mut self) -> Subscription {
        let (tx, rx) = mpsc::channel();
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, tx));
        Subscription::new(id, rx)
    }

    fn unsubscribe(&mut self, subscription: Subscription) {
        self.listeners.retain(|(id, _)| *id != subscription.id());
    }
}
