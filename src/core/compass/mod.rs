//! Compass bearing: sensor-driven heading with a manual fallback.

pub mod clock;
pub mod heading;
pub mod platform;
pub mod sensor;
pub mod session;
pub mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use heading::{classify, normalize_heading, wrap_degrees};
pub use platform::{Capability, Permission, PlatformCapabilities, StaticPlatform};
pub use sensor::{OrientationSensor, ScriptedSensor, StampedSample, Subscription};
pub use session::{CompassSession, CompassSettings};
pub use state::{CompassError, CompassFault, CompassState, Phase, RotateDirection};
