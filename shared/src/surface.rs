//! The drawing boundary. Shapes are given in the wheel container's local
//! frame: origin at the wheel centre, angles before container rotation.

use crate::geometry::LabelTransform;

#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub index: usize,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub index: usize,
    pub text: String,
    pub color: String,
    pub transform: LabelTransform,
}

/// The fixed arrow. It is not part of the rotating container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub angle: f64,
    pub radius: f64,
}

pub trait WheelSurface {
    fn clear(&mut self);
    fn draw_wedge(&mut self, wedge: &Wedge);
    fn draw_label(&mut self, label: &Label);
    fn draw_pointer(&mut self, pointer: &Pointer);
    /// Rotation of the container holding wedges and labels.
    fn set_rotation(&mut self, rotation: f64);
    fn set_sector_alpha(&mut self, index: usize, alpha: f64);
}

/// Draws nothing. For headless wheels.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl WheelSurface for NullSurface {
    fn clear(&mut self) {}
    fn draw_wedge(&mut self, _wedge: &Wedge) {}
    fn draw_label(&mut self, _label: &Label) {}
    fn draw_pointer(&mut self, _pointer: &Pointer) {}
    fn set_rotation(&mut self, _rotation: f64) {}
    fn set_sector_alpha(&mut self, _index: usize, _alpha: f64) {}
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Keeps the latest scene so tests can inspect what would be on screen.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub wedges: Vec<Wedge>,
        pub labels: Vec<Label>,
        pub pointer: Option<Pointer>,
        pub rotations: Vec<f64>,
        pub alphas: Vec<(usize, f64)>,
        pub clears: usize,
    }

    impl RecordingSurface {
        pub fn last_rotation(&self) -> Option<f64> {
            self.rotations.last().copied()
        }
    }

    impl WheelSurface for RecordingSurface {
        fn clear(&mut self) {
            self.wedges.clear();
            self.labels.clear();
            self.pointer = None;
            self.clears += 1;
        }

        fn draw_wedge(&mut self, wedge: &Wedge) {
            self.wedges.push(wedge.clone());
        }

        fn draw_label(&mut self, label: &Label) {
            self.labels.push(label.clone());
        }

        fn draw_pointer(&mut self, pointer: &Pointer) {
            self.pointer = Some(*pointer);
        }

        fn set_rotation(&mut self, rotation: f64) {
            self.rotations.push(rotation);
        }

        fn set_sector_alpha(&mut self, index: usize, alpha: f64) {
            self.alphas.push((index, alpha));
        }
    }
}
