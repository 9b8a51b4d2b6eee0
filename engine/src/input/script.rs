//! Scripted Input
//!
//! A fixed timeline of input segments, replayed by the headless simulator
//! and the integration tests in place of a live keyboard.

use super::keyboard::InputSample;

/// One timeline segment: `sample` holds from `start_time` until the next
/// segment begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptSegment {
    pub start_time: f32,
    pub sample: InputSample,
}

/// Timeline of input samples keyed by start time.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    segments: Vec<ScriptSegment>,
}

impl ScriptedInput {
    /// Create an empty script (idle forever).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment starting at `start_time` seconds.
    ///
    /// Segments are kept sorted; a later call with the same start time
    /// replaces the earlier one.
    pub fn then_at(mut self, start_time: f32, sample: InputSample) -> Self {
        self.push(start_time, sample);
        self
    }

    /// Insert a segment starting at `start_time` seconds.
    pub fn push(&mut self, start_time: f32, sample: InputSample) {
        let segment = ScriptSegment { start_time, sample };
        match self
            .segments
            .binary_search_by(|s| s.start_time.total_cmp(&start_time))
        {
            Ok(index) => self.segments[index] = segment,
            Err(index) => self.segments.insert(index, segment),
        }
    }

    /// Sample in effect at `time` seconds. Idle before the first segment.
    pub fn sample_at(&self, time: f32) -> InputSample {
        let index = self.segments.partition_point(|s| s.start_time <= time);
        match index {
            0 => InputSample::idle(),
            i => self.segments[i - 1].sample,
        }
    }

    /// Segments in start-time order.
    pub fn segments(&self) -> &[ScriptSegment] {
        &self.segments
    }

    /// The built-in demo: walk forward, turn right while walking, jump,
    /// land and idle.
    pub fn demo() -> Self {
        Self::new()
            .then_at(0.0, InputSample::moving(0.0, 1.0))
            .then_at(3.0, InputSample::moving(1.0, 1.0))
            .then_at(5.0, InputSample::moving(0.0, 1.0).with_jump())
            .then_at(5.25, InputSample::moving(0.0, 1.0))
            .then_at(7.0, InputSample::moving(0.0, 1.0).with_jump())
            .then_at(7.25, InputSample::idle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_script_is_idle() {
        let script = ScriptedInput::new();
        assert_eq!(script.sample_at(0.0), InputSample::idle());
        assert_eq!(script.sample_at(100.0), InputSample::idle());
    }

    #[test]
    fn test_segments_hold_until_next() {
        let script = ScriptedInput::new()
            .then_at(1.0, InputSample::moving(0.0, 1.0))
            .then_at(2.0, InputSample::moving(1.0, 0.0));

        assert_eq!(script.sample_at(0.5), InputSample::idle());
        assert_eq!(script.sample_at(1.0).move_axis.y, 1.0);
        assert_eq!(script.sample_at(1.99).move_axis.y, 1.0);
        assert_eq!(script.sample_at(2.0).move_axis.x, 1.0);
        assert_eq!(script.sample_at(50.0).move_axis.x, 1.0);
    }

    #[test]
    fn test_out_of_order_pushes_are_sorted() {
        let mut script = ScriptedInput::new();
        script.push(2.0, InputSample::moving(1.0, 0.0));
        script.push(0.0, InputSample::moving(0.0, 1.0));
        script.push(2.0, InputSample::idle());

        let starts: Vec<f32> = script.segments().iter().map(|s| s.start_time).collect();
        assert_eq!(starts, vec![0.0, 2.0]);
        assert_eq!(script.sample_at(3.0), InputSample::idle());
    }

    #[test]
    fn test_demo_releases_jump_between_presses() {
        let script = ScriptedInput::demo();
        assert!(script.sample_at(5.1).jump_down);
        assert!(!script.sample_at(6.0).jump_down);
        assert!(script.sample_at(7.1).jump_down);
        assert_eq!(script.sample_at(9.0), InputSample::idle());
    }
}
