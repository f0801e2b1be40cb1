/// Per-tick simulation clock handed to every node.
///
/// `time` is simulation time in hours; cooldowns, timeouts, the scheduler
/// interval and the telemetry window are all expressed in the same unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub tick: u64,
    pub time: f64,
}

impl TickContext {
    pub fn new(tick: u64, time: f64) -> Self {
        Self { tick, time }
    }

    /// Context for a given time with the tick counter left at zero.
    pub fn at(time: f64) -> Self {
        Self { tick: 0, time }
    }

    pub fn elapsed_since(&self, earlier: f64) -> f64 {
        self.time - earlier
    }
}
