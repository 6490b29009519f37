pub mod config;
pub mod constants;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod prize;
pub mod pulse;
pub mod rotation;
pub mod surface;
pub mod validation;
pub mod wheel_game;

pub use config::{PulseConfig, WheelConfig};
pub use error::WheelError;
pub use prize::{default_prizes, Prize, SectorModel};
pub use surface::{Label, NullSurface, Pointer, WheelSurface, Wedge};
pub use wheel_game::{SpinAdmission, SpinOutcome, SpinPhase, SpinSession, Wheel};
