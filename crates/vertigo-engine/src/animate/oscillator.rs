/// Two angular counters sliding in opposite directions.
///
/// `a` moves by `+direction·delta`, `b` by `-direction·delta`, where `delta`
/// is `step` shortened to what both counters have left before a bound. The
/// two always move by the same amount in opposite directions. When either
/// counter reaches `min` or `max` (both inclusive), the shared direction
/// flips, so both turn around in the same frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OscillatorPair {
    a: i32,
    b: i32,
    direction: i32,
    min: i32,
    max: i32,
    step: i32,
}

impl OscillatorPair {
    /// Both counters at zero, `a` heading towards `max`.
    pub fn new(min: i32, max: i32, step: i32) -> Self {
        assert!(min < 0 && 0 < max, "range {min}..={max} must contain 0");
        assert!(step > 0, "step must be positive");
        Self {
            a: 0,
            b: 0,
            direction: 1,
            min,
            max,
            step,
        }
    }

    /// The ±180 degree variant, one degree per frame.
    ///
    /// Both ends are reached: `a` runs 0 → 180 → -180 → 180 and `b` mirrors it.
    pub fn half_turns() -> Self {
        Self::new(-180, 180, 1)
    }

    pub fn a(&self) -> i32 {
        self.a
    }

    pub fn b(&self) -> i32 {
        self.b
    }

    /// `+1` while `a` increases, `-1` while it decreases.
    pub fn direction(&self) -> i32 {
        self.direction
    }

    /// Advances one frame; returns `true` when the direction flipped.
    pub fn advance(&mut self) -> bool {
        // Room left for `a` in its direction and for `b` in the other.
        let (room_a, room_b) = if self.direction > 0 {
            (self.max - self.a, self.b - self.min)
        } else {
            (self.a - self.min, self.max - self.b)
        };
        let delta = self.direction * self.step.min(room_a).min(room_b);
        self.a += delta;
        self.b -= delta;

        let at_bound = |v: i32| v <= self.min || v >= self.max;
        if at_bound(self.a) || at_bound(self.b) {
            self.direction = -self.direction;
            return true;
        }
        false
    }
}

impl Default for OscillatorPair {
    fn default() -> Self {
        Self::half_turns()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_move_in_opposite_directions() {
        let mut osc = OscillatorPair::half_turns();
        for _ in 0..1000 {
            let (a0, b0) = (osc.a(), osc.b());
            osc.advance();
            assert_eq!(osc.a() - a0, -(osc.b() - b0));
            assert_ne!(osc.a(), a0);
        }
    }

    #[test]
    fn both_flip_in_the_same_frame_at_the_boundary() {
        let mut osc = OscillatorPair::half_turns();
        for _ in 0..179 {
            assert!(!osc.advance());
        }
        assert!(osc.advance());
        assert_eq!((osc.a(), osc.b()), (180, -180));
        assert_eq!(osc.direction(), -1);

        osc.advance();
        assert_eq!((osc.a(), osc.b()), (179, -179));
    }

    #[test]
    fn full_swing_reaches_the_opposite_bounds() {
        let mut osc = OscillatorPair::half_turns();
        let mut flips = Vec::new();
        for frame in 1..=720 {
            if osc.advance() {
                flips.push((frame, osc.a(), osc.b()));
            }
        }
        assert_eq!(flips, vec![(180, 180, -180), (540, -180, 180)]);
    }

    #[test]
    fn uneven_range_keeps_moves_mirrored() {
        let mut osc = OscillatorPair::new(-10, 20, 3);
        for _ in 0..200 {
            let (a0, b0) = (osc.a(), osc.b());
            osc.advance();
            assert_eq!(osc.a() - a0, -(osc.b() - b0));
            assert_eq!(osc.a(), -osc.b());
        }
    }

    #[test]
    fn short_last_step_lands_on_the_bound() {
        let mut osc = OscillatorPair::new(-10, 20, 3);
        for _ in 0..3 {
            assert!(!osc.advance());
        }
        assert_eq!((osc.a(), osc.b()), (9, -9));
        assert!(osc.advance());
        assert_eq!((osc.a(), osc.b()), (10, -10));
        assert_eq!(osc.direction(), -1);
    }

    #[test]
    fn half_turns_touch_both_ends() {
        let mut osc = OscillatorPair::half_turns();
        let (mut lo, mut hi) = (0, 0);
        for _ in 0..720 {
            osc.advance();
            lo = lo.min(osc.a());
            hi = hi.max(osc.a());
        }
        assert_eq!((lo, hi), (-180, 180));
    }

    #[test]
    fn never_leaves_the_range() {
        let mut osc = OscillatorPair::new(-10, 10, 3);
        for _ in 0..100 {
            osc.advance();
            assert!((-10..=10).contains(&osc.a()));
            assert!((-10..=10).contains(&osc.b()));
        }
    }
}
