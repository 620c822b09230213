//! Clock-face geometry.

use std::f64::consts::TAU;

/// Number of tick positions around the face.
pub const TICKS_PER_TURN: i64 = 60;

/// Screen position in pixels, +Y down.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Maps a tick to a point on the circle of radius `stretch` around the origin.
///
/// Tick 0 is 12 o'clock and ticks advance clockwise: 15 is 3 o'clock, 30 is
/// 6 o'clock, 45 is 9 o'clock. Any integer is accepted and reduced modulo 60.
/// A negative `stretch` mirrors the point through the origin.
pub fn tick_position(tick: i64, stretch: f64, origin_x: f64, origin_y: f64) -> Point2D {
    // Shift so tick 15 lands on angle 0, then flip to run clockwise.
    let rotated = (tick.rem_euclid(TICKS_PER_TURN) + TICKS_PER_TURN - 15) % TICKS_PER_TURN;
    let clockwise = TICKS_PER_TURN - rotated;
    let angle = TAU * (clockwise as f64 / TICKS_PER_TURN as f64);

    // Screen y grows downward, hence the negated sine.
    let x = angle.cos() * stretch;
    let y = -angle.sin() * stretch;

    // Scale first, translate last.
    Point2D::new(x + origin_x, y + origin_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn assert_close(p: Point2D, x: f64, y: f64) {
        assert!((p.x - x).abs() < EPS && (p.y - y).abs() < EPS, "{p:?} != ({x}, {y})");
    }

    #[test]
    fn cardinal_ticks() {
        let (s, ox, oy) = (250.0, 400.0, 300.0);
        assert_close(tick_position(0, s, ox, oy), ox, oy - s);
        assert_close(tick_position(15, s, ox, oy), ox + s, oy);
        assert_close(tick_position(30, s, ox, oy), ox, oy + s);
        assert_close(tick_position(45, s, ox, oy), ox - s, oy);
    }

    #[test]
    fn ticks_advance_clockwise() {
        // Tick 5 (one o'clock) is up and to the right of the origin.
        let p = tick_position(5, 100.0, 0.0, 0.0);
        assert!(p.x > 0.0 && p.y < 0.0);
        assert_close(p, 50.0, -86.602_540_378_443_86);
    }

    #[test]
    fn out_of_range_ticks_wrap() {
        let s = 10.0;
        assert_eq!(tick_position(-15, s, 0.0, 0.0), tick_position(45, s, 0.0, 0.0));
        assert_eq!(tick_position(60, s, 0.0, 0.0), tick_position(0, s, 0.0, 0.0));
        for extreme in [i64::MIN, i64::MAX] {
            let wrapped = extreme.rem_euclid(60);
            assert_eq!(tick_position(extreme, s, 0.0, 0.0), tick_position(wrapped, s, 0.0, 0.0));
        }
    }

    #[test]
    fn zero_stretch_collapses_to_origin() {
        for tick in 0..60 {
            assert_close(tick_position(tick, 0.0, 12.0, -7.0), 12.0, -7.0);
        }
    }

    #[test]
    fn negative_stretch_mirrors() {
        assert_close(tick_position(0, -20.0, 0.0, 0.0), 0.0, 20.0);
        assert_close(tick_position(15, -20.0, 0.0, 0.0), -20.0, 0.0);
    }

    #[test]
    fn repeated_calls_agree() {
        let a = tick_position(37, 123.4, 5.0, 6.0);
        let b = tick_position(37, 123.4, 5.0, 6.0);
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_period_is_sixty(
            t in -1_000_000i64..1_000_000,
            s in 0.0f64..5000.0,
            ox in -2000.0f64..2000.0,
            oy in -2000.0f64..2000.0,
        ) {
            prop_assert_eq!(tick_position(t, s, ox, oy), tick_position(t + 60, s, ox, oy));
        }

        #[test]
        fn prop_distance_is_stretch(
            t in any::<i64>(),
            s in -5000.0f64..5000.0,
            ox in -2000.0f64..2000.0,
            oy in -2000.0f64..2000.0,
        ) {
            let p = tick_position(t, s, ox, oy);
            let d = p.distance(Point2D::new(ox, oy));
            prop_assert!((d - s.abs()).abs() < 1e-6, "distance {} vs stretch {}", d, s);
        }

        #[test]
        fn prop_translation_moves_point(
            t in 0i64..60,
            s in 0.0f64..5000.0,
            dx in -2000.0f64..2000.0,
            dy in -2000.0f64..2000.0,
        ) {
            let base = tick_position(t, s, 0.0, 0.0);
            let moved = tick_position(t, s, dx, dy);
            prop_assert!((moved.x - (base.x + dx)).abs() < 1e-9);
            prop_assert!((moved.y - (base.y + dy)).abs() < 1e-9);
        }
    }
}
