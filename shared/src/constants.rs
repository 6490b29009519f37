use std::f64::consts::TAU;

pub const TOTAL_ANGLE: f64 = TAU;

pub const CANVAS_DIAMETER: f64 = 500.0;
pub const WHEEL_DIAMETER: f64 = CANVAS_DIAMETER - 50.0;
pub const WHEEL_RADIUS: f64 = WHEEL_DIAMETER / 2.0;
pub const LABEL_RADIUS_RATIO: f64 = 0.8;

// The arrow sits on the right-hand edge of the wheel, pointing at angle 0.
pub const POINTER_ANGLE: f64 = 0.0;

pub const SPIN_DURATION_SECS: f64 = 8.0;
pub const DEFAULT_BASE_TURNS: f64 = 10.0;
pub const MIN_BASE_TURNS: f64 = 10.0;
// Past this the spin target loses the sub-turn precision the landing needs.
pub const MAX_BASE_TURNS: f64 = 1000.0;

pub const PULSE_DELAY_SECS: f64 = 0.3;
pub const PULSE_DURATION_SECS: f64 = 0.7;
pub const PULSE_MIN_ALPHA: f64 = 0.4;

pub const WHEEL_EASE_PATH: &str = "M0,0 C0.17,0 0.286,0.085 0.32,0.115 0.394,0.18 0.48,0.405 0.5,0.5 0.521,0.603 0.608,0.816 0.645,0.852 0.67,0.877 0.794,1 1,1";

pub const PRIZE_NOT_FOUND_ERROR: &str = "Couldn't find prize id";
pub const EMPTY_PRIZE_LIST_ERROR: &str = "The wheel needs at least one prize";
pub const SPIN_IN_PROGRESS_ERROR: &str = "The prize list can't change while the wheel is spinning";
