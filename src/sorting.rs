//! Sort-method selection for the per-sum breakdown.
//!
//! The selector string is resolved once into a [`SortMethod`]; an unknown
//! string is kept as [`SortMethod::Invalid`] so the report can name it in the
//! advisory line, and sorts exactly like [`SortMethod::ByProbability`].

use std::cmp::Ordering;

use crate::constants::*;
use crate::types::{SortOrder, SumBucket};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SortMethod {
    ByProbability,
    ByCount,
    ByKey,
    /// Natural bucket order: ascending sum, regardless of [`SortOrder`].
    ByInsertionOrder,
    /// Empty selector: no sort method set. The uniform layout skips its
    /// breakdown; elsewhere buckets stay in insertion order.
    Unset,
    /// Unrecognised selector, carried verbatim.
    Invalid(String),
}

impl SortMethod {
    pub fn parse(selector: &str) -> Self {
        match selector {
            SORT_PROBABILITY | SORT_ALIAS_FREQ => SortMethod::ByProbability,
            SORT_COUNT => SortMethod::ByCount,
            SORT_KEY | SORT_ALIAS_VAL => SortMethod::ByKey,
            SORT_INSERTION => SortMethod::ByInsertionOrder,
            "" => SortMethod::Unset,
            other => SortMethod::Invalid(other.to_string()),
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, SortMethod::Invalid(_))
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, SortMethod::Unset)
    }

    /// Method actually applied: invalid selectors fall back to probability,
    /// an unset one to insertion order.
    pub fn effective(&self) -> SortMethod {
        match self {
            SortMethod::Invalid(_) => SortMethod::ByProbability,
            SortMethod::Unset => SortMethod::ByInsertionOrder,
            other => other.clone(),
        }
    }

    /// Canonical name of the effective method, for report headers.
    pub fn name(&self) -> &'static str {
        match self.effective() {
            SortMethod::ByProbability => SORT_PROBABILITY,
            SortMethod::ByCount => SORT_COUNT,
            SortMethod::ByKey => SORT_KEY,
            _ => SORT_INSERTION,
        }
    }

    /// Advisory line for an invalid selector, `None` otherwise.
    pub fn warning(&self) -> Option<String> {
        match self {
            SortMethod::Invalid(selector) => Some(format!(
                "{} is not a valid sort method. Sorting by {}.",
                selector, SORT_PROBABILITY
            )),
            _ => None,
        }
    }

    /// Comparator of an effective method.
    fn compare(&self, a: &SumBucket, b: &SumBucket) -> Ordering {
        match self {
            SortMethod::ByProbability => a.probability.total_cmp(&b.probability),
            SortMethod::ByCount => a.count.cmp(&b.count),
            _ => a.sum.cmp(&b.sum),
        }
    }
}

/// Stable sort: buckets with equal keys keep their relative order, which for
/// a freshly computed distribution is ascending sum.
pub fn sort_buckets(buckets: &mut [SumBucket], method: &SortMethod, order: SortOrder) {
    let method = method.effective();
    match (&method, order) {
        (SortMethod::ByInsertionOrder, _) | (_, SortOrder::Ascending) => {
            buckets.sort_by(|a, b| method.compare(a, b))
        }
        (_, SortOrder::Descending) => buckets.sort_by(|a, b| method.compare(b, a)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buckets() -> Vec<SumBucket> {
        // 2d3: sums 2..=6 with counts 1,2,3,2,1
        [(2, 1), (3, 2), (4, 3), (5, 2), (6, 1)]
            .iter()
            .map(|&(sum, count)| SumBucket {
                sum,
                count,
                probability: count as f64 / 9.0,
            })
            .collect()
    }

    fn sums(b: &[SumBucket]) -> Vec<u64> {
        b.iter().map(|b| b.sum).collect()
    }

    #[test]
    fn test_parse() {
        assert_eq!(SortMethod::parse("probability"), SortMethod::ByProbability);
        assert_eq!(SortMethod::parse("freq"), SortMethod::ByProbability);
        assert_eq!(SortMethod::parse("count"), SortMethod::ByCount);
        assert_eq!(SortMethod::parse("key"), SortMethod::ByKey);
        assert_eq!(SortMethod::parse("val"), SortMethod::ByKey);
        assert_eq!(SortMethod::parse("insertion"), SortMethod::ByInsertionOrder);
        assert_eq!(SortMethod::parse(""), SortMethod::Unset);
        assert_eq!(
            SortMethod::parse("Probability"),
            SortMethod::Invalid("Probability".to_string())
        );
    }

    #[test]
    fn test_invalid_falls_back() {
        let m = SortMethod::parse("bogus");
        assert!(!m.is_valid());
        assert_eq!(m.effective(), SortMethod::ByProbability);
        assert_eq!(m.name(), "probability");
        assert_eq!(
            m.warning().unwrap(),
            "bogus is not a valid sort method. Sorting by probability."
        );
        assert!(SortMethod::ByKey.warning().is_none());
    }

    #[test]
    fn test_descending_probability_is_stable() {
        let mut b = buckets();
        sort_buckets(&mut b, &SortMethod::ByProbability, SortOrder::Descending);
        assert_eq!(sums(&b), vec![4, 3, 5, 2, 6]);

        let mut b = buckets();
        sort_buckets(&mut b, &SortMethod::ByProbability, SortOrder::Ascending);
        assert_eq!(sums(&b), vec![2, 6, 3, 5, 4]);
    }

    #[test]
    fn test_key_order() {
        let mut b = buckets();
        sort_buckets(&mut b, &SortMethod::ByKey, SortOrder::Descending);
        assert_eq!(sums(&b), vec![6, 5, 4, 3, 2]);

        let mut b = buckets();
        b.reverse();
        sort_buckets(&mut b, &SortMethod::ByInsertionOrder, SortOrder::Descending);
        assert_eq!(sums(&b), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_sorts_like_probability() {
        let mut by_prob = buckets();
        sort_buckets(&mut by_prob, &SortMethod::ByProbability, SortOrder::Descending);
        let mut by_bogus = buckets();
        sort_buckets(
            &mut by_bogus,
            &SortMethod::Invalid("bogus".into()),
            SortOrder::Descending,
        );
        assert_eq!(by_prob, by_bogus);
    }

    #[test]
    fn test_unset_selector() {
        let m = SortMethod::parse("");
        assert!(!m.is_set());
        assert!(m.is_valid());
        assert!(m.warning().is_none());
        assert_eq!(m.effective(), SortMethod::ByInsertionOrder);
        assert_eq!(m.name(), "insertion");

        let mut b = buckets();
        b.reverse();
        sort_buckets(&mut b, &m, SortOrder::Descending);
        assert_eq!(sums(&b), vec![2, 3, 4, 5, 6]);
    }
}
