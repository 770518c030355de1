//! Immutable run configuration, built once at startup.

use crate::constants::*;
use crate::error::DiceError;
use crate::sorting::SortMethod;
use crate::types::{DiceSpec, SortOrder};

/// Which text layout the report uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportLayout {
    /// Summary line naming the most likely sum, then an optional breakdown
    /// sorted descending.
    Uniform,
    /// Full breakdown sorted ascending, then a line naming the dice.
    Mixed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Debug)]
pub struct ReportConfig {
    pub spec: DiceSpec,
    pub sort: SortMethod,
    pub order: SortOrder,
    pub show_breakdown: bool,
    pub layout: ReportLayout,
    pub format: OutputFormat,
}

impl ReportConfig {
    /// Uniform layout: descending breakdown after the summary line.
    pub fn uniform(spec: DiceSpec, sort: SortMethod) -> Self {
        Self {
            spec,
            sort,
            order: SortOrder::Descending,
            show_breakdown: true,
            layout: ReportLayout::Uniform,
            format: OutputFormat::Text,
        }
    }

    /// Mixed layout: ascending breakdown, always shown.
    pub fn mixed(spec: DiceSpec, sort: SortMethod) -> Self {
        Self {
            spec,
            sort,
            order: SortOrder::Ascending,
            show_breakdown: true,
            layout: ReportLayout::Mixed,
            format: OutputFormat::Text,
        }
    }

    /// 3d6 sorted by probability.
    pub fn default_uniform() -> Result<Self, DiceError> {
        Ok(Self::uniform(
            DiceSpec::uniform(DEFAULT_DICE_COUNT, DEFAULT_DICE_SIDES)?,
            SortMethod::parse(DEFAULT_SORT_METHOD),
        ))
    }

    /// 2d6 + 1d8 + 2d20 sorted by probability.
    pub fn default_mixed() -> Result<Self, DiceError> {
        Ok(Self::mixed(
            DiceSpec::from_pairs(&DEFAULT_MIXED_DICE)?,
            SortMethod::parse(DEFAULT_SORT_METHOD),
        ))
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_breakdown(mut self, show: bool) -> Self {
        self.show_breakdown = show;
        self
    }
}

/// Value following a `--flag` on the command line; a trailing flag is an error.
pub fn flag_value<'a>(flag: &str, value: Option<&'a String>) -> Result<&'a str, DiceError> {
    value
        .map(String::as_str)
        .ok_or_else(|| DiceError::MissingFlagValue {
            flag: flag.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_value() {
        let args: Vec<String> = vec!["--sort".into(), "key".into()];
        assert_eq!(flag_value("--sort", args.get(1)), Ok("key"));
        assert_eq!(
            flag_value("--sort", args.get(2)),
            Err(DiceError::MissingFlagValue {
                flag: "--sort".to_string()
            })
        );
        assert_eq!(
            flag_value("--sort", args.get(2)).unwrap_err().to_string(),
            "missing value for --sort"
        );
    }

    #[test]
    fn test_defaults() {
        let u = ReportConfig::default_uniform().unwrap();
        assert_eq!(u.spec.to_string(), "3d6");
        assert_eq!(u.sort, SortMethod::ByProbability);
        assert_eq!(u.order, SortOrder::Descending);
        assert!(u.show_breakdown);
        assert_eq!(u.layout, ReportLayout::Uniform);

        let m = ReportConfig::default_mixed().unwrap();
        assert_eq!(m.spec.to_string(), "2d6 and 1d8 and 2d20");
        assert_eq!(m.order, SortOrder::Ascending);
        assert_eq!(m.layout, ReportLayout::Mixed);
        assert_eq!(m.format, OutputFormat::Text);
    }
}
