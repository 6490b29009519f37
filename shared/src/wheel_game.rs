use log::{error, info, warn};
use rand::Rng;

use crate::config::WheelConfig;
use crate::easing::CustomEase;
use crate::error::WheelError;
use crate::geometry::{label_transform, wedge_bounds};
use crate::prize::{Prize, SectorModel};
use crate::pulse::Pulse;
use crate::rotation::{resolve_spin, RotationTracker};
use crate::surface::{Label, Pointer, WheelSurface, Wedge};

pub type CompletionCallback = Box<dyn FnMut(&Prize, usize)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    Idle,
    Spinning,
    Settling,
}

/// What happened to a spin request that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinAdmission {
    Started,
    /// A spin was already running. Requests are dropped, not queued.
    Ignored,
}

/// The in-flight spin. Exists only while the wheel is `Spinning`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinSession {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub elapsed: f64,
    pub duration: f64,
}

impl SpinSession {
    pub fn progress(&self) -> f64 {
        (self.elapsed / self.duration).min(1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    pub prize: Prize,
    pub index: usize,
    pub rest_orientation: f64,
}

/// A prize wheel: sector model, spin resolution and the rotation animation,
/// drawing through `S`.
///
/// Time only moves when the owner calls [`Wheel::tick`], usually once per
/// animation frame. The completion callback runs inside the tick that
/// reaches the spin duration.
pub struct Wheel<S: WheelSurface> {
    sectors: SectorModel,
    config: WheelConfig,
    ease: CustomEase,
    tracker: RotationTracker,
    phase: SpinPhase,
    session: Option<SpinSession>,
    pulse: Option<Pulse>,
    rotation: f64,
    surface: S,
    on_complete: CompletionCallback,
}

impl<S: WheelSurface> Wheel<S> {
    pub fn new(
        prizes: Vec<Prize>,
        config: WheelConfig,
        surface: S,
        on_complete: impl FnMut(&Prize, usize) + 'static,
    ) -> Result<Self, WheelError> {
        config.check()?;
        let ease = config.ease()?;
        let sectors = SectorModel::new(prizes)?;

        let mut wheel = Self {
            sectors,
            config,
            ease,
            tracker: RotationTracker::new(),
            phase: SpinPhase::Idle,
            session: None,
            pulse: None,
            rotation: 0.0,
            surface,
            on_complete: Box::new(on_complete),
        };
        wheel.render();
        info!("Wheel ready with {} sectors", wheel.sectors.sector_count());
        Ok(wheel)
    }

    /// Redraws the static scene: wedges, labels and the pointer.
    pub fn render(&mut self) {
        let count = self.sectors.sector_count();
        let radius = self.config.radius;

        self.surface.clear();
        for (index, prize) in self.sectors.prizes().iter().enumerate() {
            let (start_angle, end_angle) = wedge_bounds(index, count);
            self.surface.draw_wedge(&Wedge {
                index,
                radius,
                start_angle,
                end_angle,
                fill: prize.background.clone(),
            });
            self.surface.draw_label(&Label {
                index,
                text: prize.label().to_string(),
                color: prize.color.clone(),
                transform: label_transform(
                    start_angle,
                    end_angle,
                    radius,
                    self.config.label_radius_ratio,
                ),
            });
        }
        self.surface.draw_pointer(&Pointer {
            angle: self.config.pointer_angle,
            radius,
        });
        self.surface.set_rotation(self.rotation);
    }

    pub fn spin(&mut self, prize_id: &str) -> Result<SpinAdmission, WheelError> {
        let index = self.sectors.resolve_index(prize_id).map_err(|e| {
            warn!("Spin rejected: {}", e);
            e
        })?;
        self.spin_index(index)
    }

    pub fn spin_index(&mut self, index: usize) -> Result<SpinAdmission, WheelError> {
        let prize_id = self.sectors.prize(index)?.id.clone();

        if self.phase != SpinPhase::Idle {
            warn!("Ignoring spin to '{}', wheel is busy", prize_id);
            return Ok(SpinAdmission::Ignored);
        }

        let count = self.sectors.sector_count();
        let start = self.tracker.rest_orientation();
        let end = resolve_spin(index, count, start, &self.config)?;

        self.rotation = start;
        self.surface.set_rotation(start);
        self.session = Some(SpinSession {
            index,
            start,
            end,
            elapsed: 0.0,
            duration: self.config.spin_duration,
        });
        self.phase = SpinPhase::Spinning;

        info!("Spinning to '{}' (sector {})", prize_id, index);
        Ok(SpinAdmission::Started)
    }

    /// Spins to a uniformly random sector.
    pub fn spin_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<SpinAdmission, WheelError> {
        let index = rng.gen_range(0..self.sectors.sector_count());
        self.spin_index(index)
    }

    /// Advances the animation by `dt` seconds. Returns the outcome if a spin
    /// settled during this tick.
    pub fn tick(&mut self, dt: f64) -> Option<SpinOutcome> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.advance_pulse(dt);

        let mut session = self.session?;
        session.elapsed += dt;

        if !session.is_complete() {
            let eased = self.ease.ease(session.progress());
            self.rotation = session.start + (session.end - session.start) * eased;
            self.surface.set_rotation(self.rotation);
            self.session = Some(session);
            return None;
        }

        self.session = None;
        self.settle(session)
    }

    /// Stops the current spin without reporting a result. The wheel stays
    /// where it was and that becomes the next spin's starting point.
    pub fn cancel(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                let rest = self.tracker.rest_at(self.rotation);
                self.phase = SpinPhase::Idle;
                warn!("Cancelled spin to sector {}, resting at {:.4}", session.index, rest);
                true
            }
            None => false,
        }
    }

    /// Swaps the prize list. Only allowed while idle.
    pub fn replace_prizes(&mut self, prizes: Vec<Prize>) -> Result<(), WheelError> {
        if self.phase != SpinPhase::Idle {
            return Err(WheelError::SpinInProgress);
        }
        self.sectors = SectorModel::new(prizes)?;
        self.tracker.reset();
        self.rotation = 0.0;
        self.pulse = None;
        self.render();
        Ok(())
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase != SpinPhase::Idle
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn rest_orientation(&self) -> f64 {
        self.tracker.rest_orientation()
    }

    pub fn session(&self) -> Option<&SpinSession> {
        self.session.as_ref()
    }

    pub fn sectors(&self) -> &SectorModel {
        &self.sectors
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn settle(&mut self, session: SpinSession) -> Option<SpinOutcome> {
        self.phase = SpinPhase::Settling;
        self.rotation = session.end;
        self.surface.set_rotation(session.end);

        let prize = match self.sectors.prize(session.index) {
            Ok(prize) => prize.clone(),
            Err(e) => {
                error!("Spin settled on a missing sector: {}", e);
                self.phase = SpinPhase::Idle;
                return None;
            }
        };

        (self.on_complete)(&prize, session.index);
        let rest_orientation = self.tracker.settle(
            session.index,
            self.sectors.sector_count(),
            self.config.pointer_angle,
        );
        self.start_pulse(session.index);
        self.phase = SpinPhase::Idle;

        info!("Wheel settled on '{}' (sector {})", prize.id, session.index);
        Some(SpinOutcome {
            prize,
            index: session.index,
            rest_orientation,
        })
    }

    fn start_pulse(&mut self, index: usize) {
        if let Some(previous) = self.pulse.take() {
            self.surface.set_sector_alpha(previous.index(), 1.0);
        }
        self.pulse = Some(Pulse::new(index, self.config.pulse));
    }

    fn advance_pulse(&mut self, dt: f64) {
        let finished = match self.pulse.as_mut() {
            Some(pulse) => {
                let alpha = pulse.advance(dt);
                self.surface.set_sector_alpha(pulse.index(), alpha);
                pulse.is_finished()
            }
            None => false,
        };
        if finished {
            self.pulse = None;
        }
    }
}
