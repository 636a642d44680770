/// Highest escape class the display distinguishes; larger counts share it.
pub const MAX_ESCAPE_BAND: u32 = 15;

/// Outcome of the escape-time calculation for one point.
///
/// `count` is only meaningful when `stable` is false. Stable points report a
/// count of zero, which can never be a genuine escape index because the first
/// check always sees `z = 0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EscapeResult {
    pub stable: bool,
    pub count: u32,
}

impl EscapeResult {
    #[must_use]
    pub const fn stable() -> Self {
        Self {
            stable: true,
            count: 0,
        }
    }

    #[must_use]
    pub const fn escaped(count: u32) -> Self {
        Self {
            stable: false,
            count,
        }
    }

    /// The escape count with zero standing in for "stable".
    #[must_use]
    pub fn escape_count(&self) -> u32 {
        if self.stable { 0 } else { self.count }
    }

    #[must_use]
    pub fn band(&self) -> u32 {
        self.escape_count().min(MAX_ESCAPE_BAND)
    }
}
