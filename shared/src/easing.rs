use crate::error::WheelError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct CubicSegment {
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
}

impl CubicSegment {
    fn x_at(&self, u: f64) -> f64 {
        cubic(self.p0.x, self.p1.x, self.p2.x, self.p3.x, u)
    }

    fn y_at(&self, u: f64) -> f64 {
        cubic(self.p0.y, self.p1.y, self.p2.y, self.p3.y, u)
    }

    fn within_x_span(&self, point: Point) -> bool {
        point.x >= self.p0.x && point.x <= self.p3.x
    }

    // Each segment's x is monotone for a valid ease, so bisection on u converges.
    fn solve(&self, x: f64) -> f64 {
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        for _ in 0..BISECTION_STEPS {
            let mid = (lo + hi) / 2.0;
            if self.x_at(mid) < x {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        self.y_at((lo + hi) / 2.0)
    }
}

const BISECTION_STEPS: usize = 48;

fn cubic(a: f64, b: f64, c: f64, d: f64, u: f64) -> f64 {
    let v = 1.0 - u;
    v * v * v * a + 3.0 * v * v * u * b + 3.0 * v * u * u * c + u * u * u * d
}

/// Time-to-progress curve made of chained cubic Béziers, described with the
/// SVG path syntax `M x,y C c1 c2 p ...` over the unit square.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomEase {
    segments: Vec<CubicSegment>,
}

// Slow wind-up, fast cruise through the middle, long suspenseful approach.
const WHEEL_EASE_POINTS: [Point; 13] = [
    Point::new(0.0, 0.0),
    Point::new(0.17, 0.0),
    Point::new(0.286, 0.085),
    Point::new(0.32, 0.115),
    Point::new(0.394, 0.18),
    Point::new(0.48, 0.405),
    Point::new(0.5, 0.5),
    Point::new(0.521, 0.603),
    Point::new(0.608, 0.816),
    Point::new(0.645, 0.852),
    Point::new(0.67, 0.877),
    Point::new(0.794, 1.0),
    Point::new(1.0, 1.0),
];

impl CustomEase {
    pub fn wheel() -> Self {
        Self {
            segments: chain(&WHEEL_EASE_POINTS),
        }
    }

    pub fn parse(path: &str) -> Result<Self, WheelError> {
        let invalid = |reason: String| WheelError::InvalidConfig(format!("ease path: {}", reason));

        // Split commands from numbers: "M0,0 C0.1,0" -> "M 0 0 C 0.1 0".
        let mut spaced = String::with_capacity(path.len() + 8);
        for ch in path.chars() {
            match ch {
                'M' | 'C' => {
                    spaced.push(' ');
                    spaced.push(ch);
                    spaced.push(' ');
                }
                ',' => spaced.push(' '),
                _ => spaced.push(ch),
            }
        }

        let mut tokens = spaced.split_whitespace();
        if tokens.next() != Some("M") {
            return Err(invalid("must start with M".to_string()));
        }

        let mut numbers = Vec::new();
        let mut seen_curve = false;
        for token in tokens {
            match token {
                "C" => seen_curve = true,
                _ => {
                    let value: f64 = token
                        .parse()
                        .map_err(|_| invalid(format!("unexpected token '{}'", token)))?;
                    numbers.push(value);
                }
            }
        }

        if !seen_curve || numbers.len() < 8 || numbers.len() % 2 != 0 {
            return Err(invalid("expected a start point and whole cubic segments".to_string()));
        }
        let points: Vec<Point> = numbers.chunks(2).map(|xy| Point::new(xy[0], xy[1])).collect();
        if (points.len() - 1) % 3 != 0 {
            return Err(invalid("expected three points per cubic segment".to_string()));
        }

        let segments = chain(&points);
        let first = points[0];
        let last = points[points.len() - 1];
        if first.x != 0.0 || last.x != 1.0 {
            return Err(invalid("must run from x=0 to x=1".to_string()));
        }
        if segments.iter().any(|s| s.p3.x <= s.p0.x) {
            return Err(invalid("segments must advance along x".to_string()));
        }
        // Control points inside the segment's x span keep x(u) monotone.
        if segments.iter().any(|s| !s.within_x_span(s.p1) || !s.within_x_span(s.p2)) {
            return Err(invalid("control points must stay within their segment's x range".to_string()));
        }

        Ok(Self { segments })
    }

    pub fn ease(&self, progress: f64) -> f64 {
        let (first, last) = match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return progress,
        };
        if progress <= 0.0 {
            return first.p0.y;
        }
        if progress >= 1.0 {
            return last.p3.y;
        }

        let segment = self
            .segments
            .iter()
            .find(|s| progress <= s.p3.x)
            .unwrap_or(last);
        segment.solve(progress)
    }
}

impl Default for CustomEase {
    fn default() -> Self {
        Self::wheel()
    }
}

fn chain(points: &[Point]) -> Vec<CubicSegment> {
    points
        .windows(4)
        .step_by(3)
        .map(|w| CubicSegment {
            p0: w[0],
            p1: w[1],
            p2: w[2],
            p3: w[3],
        })
        .collect()
}

pub fn ease_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}
