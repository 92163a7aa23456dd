//! Spinner shown on the Analyze trigger while a request is in flight.

const FRAMES: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Frame counter advanced once per UI tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    pub fn glyph(&self) -> &'static str {
        FRAMES[self.frame]
    }
}
