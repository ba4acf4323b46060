//! Write a subset of rows back out as CSV (original columns + `Hour`, no index).

use std::{io::Write, path::Path};

use csv::WriterBuilder;

use crate::core::{
    constants::COL_HOUR,
    data::{Dataset, Transaction},
    error::DashError,
};

pub fn write_rows<W: Write>(ds: &Dataset, rows: &[&Transaction], dst: W) -> csv::Result<()> {
    let mut wtr = WriterBuilder::new().from_writer(dst);

    let mut header = ds.headers().clone();
    header.push_field(COL_HOUR);
    wtr.write_record(&header)?;

    for t in rows {
        let Some(rec) = ds.records().get(t.index) else {
            continue;
        };
        let hour = t.hour.to_string();
        wtr.write_record(rec.iter().chain(std::iter::once(hour.as_str())))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Export to `path`, returning the number of rows written.
pub fn export_rows(ds: &Dataset, rows: &[&Transaction], path: &Path) -> Result<usize, DashError> {
    let fail = |source| DashError::Export {
        path: path.to_path_buf(),
        source,
    };
    let file = std::fs::File::create(path).map_err(|e| fail(e.into()))?;
    write_rows(ds, rows, file).map_err(fail)?;
    log::info!("exported {} rows to {}", rows.len(), path.display());
    Ok(rows.len())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::data::read_dataset;
    use test_log::test;

    #[test]
    fn writes_selected_rows_with_hour() {
        let ds = read_dataset("Time,Amount,Class\n0,1.5,0\n7200,2.5,1\n3600,9,0\n".as_bytes())
            .unwrap();
        let picked: Vec<&Transaction> = ds.transactions().iter().skip(1).collect();
        let mut out = Vec::new();
        write_rows(&ds, &picked, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Time,Amount,Class,Hour\n7200,2.5,1,2\n3600,9,0,1\n"
        );
    }

    #[test]
    fn quotes_cells_that_need_it() {
        let ds = read_dataset("Time,Amount,Class,Note\n0,1,0,\"a,b\"\n".as_bytes()).unwrap();
        let picked: Vec<&Transaction> = ds.transactions().iter().collect();
        let mut out = Vec::new();
        write_rows(&ds, &picked, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("\"a,b\""));
    }
}
