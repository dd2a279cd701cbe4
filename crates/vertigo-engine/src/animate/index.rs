/// An integer angle counter, wrapping inside `[min, max)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AngularIndex {
    value: i32,
    min: i32,
    max: i32,
    step: i32,
}

impl AngularIndex {
    /// `[0, 360)`, one degree per frame.
    pub fn degrees() -> Self {
        Self::new(0, 360, 1)
    }

    /// A counter over `[min, max)` starting at `min`.
    ///
    /// Panics if the range is empty.
    pub fn new(min: i32, max: i32, step: i32) -> Self {
        assert!(min < max, "empty angular range {min}..{max}");
        Self {
            value: min,
            min,
            max,
            step,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Advances one step; reaching `max` continues from `min`.
    pub fn advance(&mut self) -> i32 {
        self.value = self.wrap(self.value + self.step);
        self.value
    }

    fn wrap(&self, value: i32) -> i32 {
        self.min + (value - self.min).rem_euclid(self.max - self.min)
    }
}

impl Default for AngularIndex {
    fn default() -> Self {
        Self::degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_turn_returns_to_zero() {
        let mut index = AngularIndex::degrees();
        for _ in 0..360 {
            index.advance();
        }
        assert_eq!(index.value(), 0);
    }

    #[test]
    fn max_resets_to_min_without_skipping() {
        let mut index = AngularIndex::new(-180, 180, 1);
        for _ in 0..358 {
            index.advance();
        }
        assert_eq!(index.value(), 178);
        assert_eq!(index.advance(), 179);
        assert_eq!(index.advance(), -180);
        assert_eq!(index.advance(), -179);
    }

    #[test]
    fn every_value_visited_once_per_cycle() {
        let mut index = AngularIndex::degrees();
        let mut seen = vec![0u32; 360];
        for _ in 0..360 {
            seen[index.advance() as usize] += 1;
        }
        assert!(seen.iter().all(|&n| n == 1));
    }

    #[test]
    fn negative_step_wraps_down() {
        let mut index = AngularIndex::new(0, 360, -1);
        assert_eq!(index.advance(), 359);
    }

    #[test]
    fn large_step_wraps_by_remainder() {
        let mut index = AngularIndex::new(0, 360, 365);
        assert_eq!(index.advance(), 5);
        assert_eq!(index.advance(), 10);
    }
}
