//! Authorization rule parameters
//!
//! The trailing window and the high-frequency threshold used by the
//! velocity and duplicate checks. Defaults are two minutes and three
//! transactions.

use chrono::Duration;
use tracing::warn;

/// Default trailing window length, in seconds
pub const DEFAULT_WINDOW_SECS: u32 = 120;

/// Default number of windowed transactions that triggers the velocity rule
pub const DEFAULT_HIGH_FREQUENCY_THRESHOLD: usize = 3;

/// Parameters of the window-based rules
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthorizationRules {
    /// Length of the trailing window
    pub window: Duration,
    /// Window size at which `high-frequency-small-interval` is raised
    pub high_frequency_threshold: usize,
}

impl Default for AuthorizationRules {
    fn default() -> Self {
        Self {
            window: Duration::seconds(i64::from(DEFAULT_WINDOW_SECS)),
            high_frequency_threshold: DEFAULT_HIGH_FREQUENCY_THRESHOLD,
        }
    }
}

impl AuthorizationRules {
    /// Create rules with custom values
    ///
    /// Zero values are rejected with a warning and replaced by the defaults.
    pub fn new(window_secs: u32, high_frequency_threshold: usize) -> Self {
        let default = Self::default();

        let window = if window_secs == 0 {
            warn!(
                window_secs,
                default = DEFAULT_WINDOW_SECS,
                "invalid window length, using default"
            );
            default.window
        } else {
            Duration::seconds(i64::from(window_secs))
        };

        let high_frequency_threshold = if high_frequency_threshold == 0 {
            warn!(
                high_frequency_threshold,
                default = default.high_frequency_threshold,
                "invalid high frequency threshold, using default"
            );
            default.high_frequency_threshold
        } else {
            high_frequency_threshold
        };

        Self {
            window,
            high_frequency_threshold,
        }
    }
}
