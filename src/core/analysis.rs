//! Aggregates over a loaded [`Dataset`].

use crate::core::{
    constants::HOURS_PER_DAY,
    data::{ClassLabel, Dataset, Transaction},
    error::DashError,
    ranges::{IndexRange, contiguous_ranges},
};

/// Fraud / normal tallies. `Other` labels are in neither.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassCounts {
    pub fraud: usize,
    pub normal: usize,
}

impl ClassCounts {
    #[must_use]
    pub fn of(ds: &Dataset) -> Self {
        ds.transactions()
            .iter()
            .fold(Self::default(), |mut acc, t| {
                match t.class {
                    ClassLabel::Fraud => acc.fraud += 1,
                    ClassLabel::Normal => acc.normal += 1,
                    ClassLabel::Other(_) => {}
                }
                acc
            })
    }
}

/// Row indices of fraud (`true`) or normal (`false`) rows, ascending.
#[must_use]
pub fn indices_where(ds: &Dataset, fraud: bool) -> Vec<usize> {
    let want = if fraud {
        ClassLabel::Fraud
    } else {
        ClassLabel::Normal
    };
    ds.transactions()
        .iter()
        .filter(|t| t.class == want)
        .map(|t| t.index)
        .collect()
}

/// Contiguous index ranges for one class.
#[must_use]
pub fn class_ranges(ds: &Dataset, fraud: bool) -> Vec<IndexRange> {
    let mut idx = indices_where(ds, fraud);
    // rows come out in order already; this keeps the precondition local
    idx.sort_unstable();
    contiguous_ranges(&idx)
}

/// Fraud transactions per hour of day, all 24 buckets.
#[must_use]
pub fn hourly_fraud(ds: &Dataset) -> [usize; HOURS_PER_DAY] {
    let mut hist = [0usize; HOURS_PER_DAY];
    for t in ds.transactions().iter().filter(|t| t.class.is_fraud()) {
        hist[usize::from(t.hour)] += 1;
    }
    hist
}

/// Rows `start..=end`, both bounds checked against the data set.
pub fn index_window(ds: &Dataset, start: usize, end: usize) -> Result<&[Transaction], DashError> {
    let len = ds.len();
    if len == 0 {
        return Err(DashError::EmptyData);
    }
    for index in [start, end] {
        if index >= len {
            return Err(DashError::IndexOutOfBounds { index, len });
        }
    }
    Ok(ds.transactions().get(start..=end).unwrap_or_default())
}

/// Inclusive amount band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmountBand {
    pub min: f64,
    pub max: f64,
}

impl AmountBand {
    /// Both bounds must lie in `0..=max_amount` of `ds`.
    pub fn checked(min: f64, max: f64, ds: &Dataset) -> Result<Self, DashError> {
        let high = ds.max_amount().unwrap_or(f64::INFINITY).max(0.0);
        for (name, value) in [("minimum amount", min), ("maximum amount", max)] {
            if !(0.0..=high).contains(&value) {
                return Err(DashError::InvalidBound {
                    name,
                    value,
                    low: 0.0,
                    high,
                });
            }
        }
        Ok(Self { min, max })
    }

    #[inline]
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, amount: f64) -> bool {
        self.min <= amount && amount <= self.max
    }
}

/// Transactions whose `Amount` is inside `band`, in row order.
#[must_use]
pub fn filter_by_amount(ds: &Dataset, band: AmountBand) -> Vec<&Transaction> {
    ds.transactions()
        .iter()
        .filter(|t| band.contains(t.amount))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::data::read_dataset;
    use test_log::test;

    fn sample() -> Dataset {
        let csv = "\
Time,Amount,Class
0,10,0
1,20,0
3600,30,1
3700,40,1
7200,50,0
86400,60,1
90000,70,2
";
        read_dataset(csv.as_bytes()).unwrap()
    }

    #[test]
    fn counts_ignore_other_labels() {
        let c = ClassCounts::of(&sample());
        assert_eq!(c, ClassCounts { fraud: 3, normal: 3 });
    }

    #[test]
    fn ranges_per_class() {
        let ds = sample();
        let fraud: Vec<_> = class_ranges(&ds, true).iter().map(ToString::to_string).collect();
        let normal: Vec<_> = class_ranges(&ds, false).iter().map(ToString::to_string).collect();
        assert_eq!(fraud, ["2 to 3", "5 to 5"]);
        assert_eq!(normal, ["0 to 1", "4 to 4"]);
    }

    #[test]
    fn hourly_histogram_wraps_days() {
        let hist = hourly_fraud(&sample());
        assert_eq!(hist[0], 1);
        assert_eq!(hist[1], 2);
        assert_eq!(hist.iter().sum::<usize>(), 3);
    }

    #[test]
    fn window_is_inclusive() {
        let ds = sample();
        let rows = index_window(&ds, 1, 3).unwrap();
        assert_eq!(rows.iter().map(|t| t.index).collect::<Vec<_>>(), [1, 2, 3]);
        assert!(index_window(&ds, 4, 2).unwrap().is_empty());
    }

    #[test]
    fn window_bounds_are_checked() {
        let ds = sample();
        assert!(matches!(
            index_window(&ds, 0, 7),
            Err(DashError::IndexOutOfBounds { index: 7, len: 7 })
        ));
        let empty = read_dataset("Time,Amount,Class\n".as_bytes()).unwrap();
        assert!(matches!(index_window(&empty, 0, 0), Err(DashError::EmptyData)));
    }

    #[test]
    fn amount_filter_is_inclusive() {
        let ds = sample();
        let band = AmountBand::checked(20.0, 40.0, &ds).unwrap();
        let hits: Vec<_> = filter_by_amount(&ds, band).iter().map(|t| t.index).collect();
        assert_eq!(hits, [1, 2, 3]);
    }

    #[test]
    fn amount_bounds_are_checked() {
        let ds = sample();
        assert!(AmountBand::checked(-1.0, 10.0, &ds).is_err());
        assert!(AmountBand::checked(0.0, 70.5, &ds).is_err());
        assert!(AmountBand::checked(50.0, 10.0, &ds).unwrap().is_inverted());
    }
}
