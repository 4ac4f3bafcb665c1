/// Tracks frame to frame delta time and an averaged frames per
/// second figure.
///
/// Time is supplied by the caller in seconds (for example
/// `glfw.get_time()`) so that it is independent of the clock.
#[derive(Debug)]
pub struct FrameTimer {
    last_frame: Option<f64>,
    /// start of the current fps averaging window
    window_start: Option<f64>,
    frames: usize,
    fps: f64,
}

/// Length of the window over which the fps is averaged, in seconds
const FPS_WINDOW: f64 = 0.5;

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            last_frame: None,
            window_start: None,
            frames: 0,
            fps: f64::NAN,
        }
    }

    /// Mark the start of a new frame at time `now` and return the
    /// time elapsed since the previous frame. The first frame has a
    /// delta time of 0.
    pub fn tick(&mut self, now: f64) -> f64 {
        let delta_time = self
            .last_frame
            .map_or(0.0, |last_frame| (now - last_frame).max(0.0));
        self.last_frame = Some(now);

        let window_start = match self.window_start {
            Some(window_start) => window_start,
            None => {
                self.window_start = Some(now);
                return delta_time;
            }
        };
        self.frames += 1;
        let elapsed = now - window_start;
        if elapsed >= FPS_WINDOW {
            self.fps = self.frames as f64 / elapsed;
            self.window_start = Some(now);
            self.frames = 0;
        }

        delta_time
    }

    /// Get the fps of the last completed averaging window, NaN until
    /// one has completed.
    pub fn get_fps(&self) -> f64 {
        self.fps
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_timer_delta_time() {
        let mut timer = FrameTimer::new();
        assert_eq!(timer.tick(10.0), 0.0);
        assert!((timer.tick(10.25) - 0.25).abs() < 1e-12);
        // clock going backwards never produces negative deltas
        assert_eq!(timer.tick(10.0), 0.0);
    }

    #[test]
    fn frame_timer_fps() {
        let mut timer = FrameTimer::new();
        assert!(timer.get_fps().is_nan());
        for frame in 0..=60 {
            timer.tick(frame as f64 / 60.0);
        }
        assert!((timer.get_fps() - 60.0).abs() < 1.0);
    }
}
