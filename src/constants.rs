//! Default dice configurations and report constants.

/// Uniform variant: number of identical dice.
pub const DEFAULT_DICE_COUNT: u32 = 3;

/// Uniform variant: faces per die.
pub const DEFAULT_DICE_SIDES: u32 = 6;

/// Mixed variant: (count, sides) per group, i.e. 2d6 + 1d8 + 2d20.
pub const DEFAULT_MIXED_DICE: [(u32, u32); 3] = [(2, 6), (1, 8), (2, 20)];

/// Sort selector used when nothing else is configured.
pub const DEFAULT_SORT_METHOD: &str = "probability";

/// Canonical sort method names, as printed in report headers.
pub const SORT_PROBABILITY: &str = "probability";
pub const SORT_COUNT: &str = "count";
pub const SORT_KEY: &str = "key";
pub const SORT_INSERTION: &str = "insertion";

/// Aliases from the older `stats freq|val` command line.
pub const SORT_ALIAS_FREQ: &str = "freq";
pub const SORT_ALIAS_VAL: &str = "val";

/// Separator between groups in die notation: "2d6 and 1d8".
pub const NOTATION_JOINER: &str = " and ";

/// Env var overriding the default sort method.
pub const ENV_SORT: &str = "DICE_STATS_SORT";

/// Env var holding the tracing filter (falls back to `RUST_LOG`).
pub const ENV_LOG: &str = "DICE_STATS_LOG";

/// Tracing filter when neither env var is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Tolerance for "probabilities sum to one" checks.
pub const PROBABILITY_EPSILON: f64 = 1e-9;
