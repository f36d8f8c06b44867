use std::io::Write;

use crate::error::TimesheetError;
use crate::models::{WorkDayRecord, CSV_HEADER};

/// Write the header and one row per record to `sink`.
///
/// The header is written even when there are no records. Returns the number
/// of data rows written.
pub fn write_csv<W, I>(sink: W, records: I) -> Result<usize, TimesheetError>
where
    W: Write,
    I: IntoIterator<Item = WorkDayRecord>,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(sink);

    writer.write_record(CSV_HEADER)?;

    let mut count = 0;
    for record in records {
        writer.serialize(&record)?;
        count += 1;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(count)
}
