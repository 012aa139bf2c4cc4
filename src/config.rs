use std::num::NonZeroU32;

/// Default option count for authored multiple-choice questions.
pub const DEFAULT_OPTION_COUNT: usize = 3;

/// Default number of tries a reply gets before the error is returned.
pub const DEFAULT_ATTEMPTS: NonZeroU32 = NonZeroU32::new(3).unwrap();

/// Runtime settings for the interactive app.
#[derive(Debug, Clone)]
pub struct Config {
    /// Options per authored multiple-choice question (at least 2).
    pub option_count: usize,
    /// Tries per reply; 1 aborts on the first malformed or out-of-range reply.
    pub attempts: NonZeroU32,
    /// Style verdicts and the result summary with ANSI colors.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            option_count: DEFAULT_OPTION_COUNT,
            attempts: DEFAULT_ATTEMPTS,
            color: true,
        }
    }
}
