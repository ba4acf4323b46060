//! Transaction CSV loader: header validation, typed rows, derived hour.

use std::io::{BufReader, Read};

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::core::{
    constants::{
        COL_AMOUNT, COL_CLASS, COL_HOUR, COL_TIME, HOURS_PER_DAY, REQUIRED_COLUMNS,
        SECONDS_PER_HOUR,
    },
    error::DatasetError,
};

// --- Public Row Structs ---

/// Value of the `Class` column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClassLabel {
    Fraud,
    Normal,
    /// Any other number; counted as neither fraud nor normal.
    Other(f64),
}

impl ClassLabel {
    #[must_use]
    pub fn from_value(v: f64) -> Self {
        if v == 1.0 {
            Self::Fraud
        } else if v == 0.0 {
            Self::Normal
        } else {
            Self::Other(v)
        }
    }

    #[inline]
    #[must_use]
    pub fn is_fraud(self) -> bool {
        matches!(self, Self::Fraud)
    }
}

/// One validated data row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transaction {
    /// Zero-based position among the data rows.
    pub index: usize,
    /// Seconds since the first transaction in the capture.
    pub time: f64,
    pub amount: f64,
    pub class: ClassLabel,
    /// `floor(time / 3600) mod 24`
    pub hour: u8,
}

/// Hour-of-day bucket for a time in seconds.
#[inline]
#[must_use]
pub fn hour_of_day(seconds: f64) -> u8 {
    #[allow(clippy::cast_possible_truncation)]
    let hours = (seconds / SECONDS_PER_HOUR).floor() as i64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let hour = hours.rem_euclid(HOURS_PER_DAY as i64) as u8;
    hour
}

/// Whole data set: raw cells for display/export plus the typed view.
#[derive(Debug, Clone)]
pub struct Dataset {
    headers: StringRecord,
    records: Vec<StringRecord>,
    transactions: Vec<Transaction>,
}

impl Dataset {
    /// Original header names, without the derived `Hour`.
    #[inline]
    #[must_use]
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    #[inline]
    #[must_use]
    pub fn records(&self) -> &[StringRecord] {
        &self.records
    }

    #[inline]
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Column count as shown to the user, `Hour` included.
    #[inline]
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len() + 1
    }

    /// Header names followed by `Hour`.
    #[must_use]
    pub fn display_headers(&self) -> Vec<&str> {
        self.headers.iter().chain(std::iter::once(COL_HOUR)).collect()
    }

    /// Position of `name` among [`Self::display_headers`].
    #[must_use]
    pub fn column_position(&self, name: &str) -> Option<usize> {
        if name == COL_HOUR {
            return Some(self.headers.len());
        }
        self.headers.iter().position(|h| h == name)
    }

    /// Cell text of row `row`, `Hour` included as the last column.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<String> {
        let rec = self.records.get(row)?;
        if col == self.headers.len() {
            return self.transactions.get(row).map(|t| t.hour.to_string());
        }
        rec.get(col).map(str::to_owned)
    }

    /// Largest `Amount`, `None` for an empty data set.
    #[must_use]
    pub fn max_amount(&self) -> Option<f64> {
        self.transactions.iter().map(|t| t.amount).reduce(f64::max)
    }
}

// --- Helpers ---

#[inline]
fn parse_f64(bytes: &[u8], line: u64, column: &'static str) -> Result<f64, DatasetError> {
    let bad = || DatasetError::BadNumber {
        line,
        column,
        text: String::from_utf8_lossy(bytes).into_owned(),
    };
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| bad())?;
    if val.is_finite() { Ok(val) } else { Err(bad()) }
}

/// Positions of `Time`, `Class`, `Amount`, or every one that is absent.
fn locate_required(headers: &StringRecord) -> Result<[usize; 3], DatasetError> {
    let mut found = [usize::MAX; 3];
    let mut missing = Vec::new();
    for (slot, name) in found.iter_mut().zip(REQUIRED_COLUMNS) {
        match headers.iter().position(|h| h == name) {
            Some(p) => *slot = p,
            None => missing.push(name),
        }
    }
    if missing.is_empty() {
        Ok(found)
    } else {
        Err(DatasetError::MissingColumns { missing })
    }
}

// --- CSV ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

pub fn read_dataset<R: Read>(src: R) -> Result<Dataset, DatasetError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(BufReader::with_capacity(BUF_CAP, src));

    let headers = rdr.headers()?.clone();
    let [time_col, class_col, amount_col] = locate_required(&headers)?;
    log::debug!("header: {} columns", headers.len());

    let mut records = Vec::new();
    let mut transactions = Vec::new();
    for (index, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let line = rec.position().map_or(0, csv::Position::line);
        // locate_required guarantees the columns; csv guarantees equal widths
        let field = |col: usize| rec.get(col).unwrap_or_default().as_bytes();

        let time = parse_f64(field(time_col), line, COL_TIME)?;
        let class = parse_f64(field(class_col), line, COL_CLASS)?;
        let amount = parse_f64(field(amount_col), line, COL_AMOUNT)?;

        transactions.push(Transaction {
            index,
            time,
            amount,
            class: ClassLabel::from_value(class),
            hour: hour_of_day(time),
        });
        records.push(rec);
    }
    log::info!("loaded {} transactions", transactions.len());

    Ok(Dataset {
        headers,
        records,
        transactions,
    })
}

/// `-` reads stdin.
pub fn read_dataset_from_path(path: &str) -> Result<Dataset, DatasetError> {
    if path == "-" {
        read_dataset(std::io::stdin())
    } else {
        use std::fs::File;
        read_dataset(File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_owned(),
            source,
        })?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    const SAMPLE: &str = "\
Time,V1,Amount,Class
0,-1.35,149.62,0
3600,1.19,2.69,1
7199.5,-0.96,378.66,0
90000,0.5,10.00,1
";

    #[test]
    fn loads_typed_rows() {
        let ds = read_dataset(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.column_count(), 5);
        let t = ds.transactions();
        assert_eq!(t[0].class, ClassLabel::Normal);
        assert_eq!(t[1].class, ClassLabel::Fraud);
        assert_eq!(t[1].index, 1);
        assert!((t[2].amount - 378.66).abs() < 1e-9);
        assert_eq!(ds.max_amount(), Some(378.66));
    }

    #[test]
    fn derives_hour_of_day() {
        let ds = read_dataset(SAMPLE.as_bytes()).unwrap();
        let hours: Vec<u8> = ds.transactions().iter().map(|t| t.hour).collect();
        assert_eq!(hours, [0, 1, 1, 1]);
        assert_eq!(hour_of_day(23.0 * 3600.0 + 59.0), 23);
        assert_eq!(hour_of_day(-1.0), 23);
    }

    #[test]
    fn hour_is_last_display_column() {
        let ds = read_dataset(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.display_headers(), ["Time", "V1", "Amount", "Class", "Hour"]);
        assert_eq!(ds.column_position("Hour"), Some(4));
        assert_eq!(ds.column_position("Amount"), Some(2));
        assert_eq!(ds.cell(3, 4).as_deref(), Some("1"));
        assert_eq!(ds.cell(0, 2).as_deref(), Some("149.62"));
        assert_eq!(ds.cell(9, 0), None);
    }

    #[test]
    fn other_class_values_are_kept_apart() {
        let ds = read_dataset("Time,Amount,Class\n1,2,2\n".as_bytes()).unwrap();
        assert_eq!(ds.transactions()[0].class, ClassLabel::Other(2.0));
    }

    #[test]
    fn quoted_and_padded_cells() {
        let ds = read_dataset("Time, Amount ,Class\n 10 ,\"5.5\",\"1\"\n".as_bytes()).unwrap();
        assert!(ds.transactions()[0].class.is_fraud());
    }

    #[test]
    fn header_only_is_empty() {
        let ds = read_dataset("Time,Amount,Class\n".as_bytes()).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.max_amount(), None);
    }

    #[test]
    fn reports_every_missing_column() {
        let err = read_dataset("Time,V1\n0,1\n".as_bytes()).unwrap_err();
        match err {
            DatasetError::MissingColumns { missing } => assert_eq!(missing, ["Class", "Amount"]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_cells() {
        let err = read_dataset("Time,Amount,Class\n0,1,0\n5,abc,0\n".as_bytes()).unwrap_err();
        match err {
            DatasetError::BadNumber { line, column, text } => {
                assert_eq!(line, 3);
                assert_eq!(column, "Amount");
                assert_eq!(text, "abc");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = read_dataset("Time,Amount,Class\n0,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Csv(_)));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_dataset_from_path("/definitely/not/here.csv").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }
}
