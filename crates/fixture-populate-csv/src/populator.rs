//! CSV populator writing the unmasked/masked customer file pair.

use crate::error::CsvPopulatorError;
use csv::Writer;
use fixture_core::CustomerRecord;
use fixture_generator::RecordGenerator;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of customer rows generated (each is written to both files).
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Unmasked output file size in bytes.
    pub raw_file_size_bytes: u64,
    /// Masked output file size in bytes.
    pub masked_file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// CSV populator that generates the customer data file pair.
pub struct CsvPopulator {
    generator: RecordGenerator,
}

impl CsvPopulator {
    /// Create a new CSV populator around a record generator.
    pub fn new(generator: RecordGenerator) -> Self {
        Self { generator }
    }

    /// Generate `count` records and write the unmasked and masked CSV files.
    ///
    /// The header row is derived from the record's field names. Records are
    /// generated once; the masked file holds `CustomerRecord::masked` of the
    /// exact rows written to the unmasked file.
    pub fn populate<P: AsRef<Path>>(
        &mut self,
        raw_path: P,
        masked_path: P,
        count: u64,
    ) -> Result<PopulateMetrics, CsvPopulatorError> {
        let start_time = Instant::now();
        let raw_path = raw_path.as_ref();
        let masked_path = masked_path.as_ref();

        info!(
            "Generating {} customer rows into '{}' and '{}'",
            count,
            raw_path.display(),
            masked_path.display()
        );

        let records: Vec<CustomerRecord> = self.generator.records(count).collect();
        debug!("Generated {} records", records.len());

        write_records(raw_path, records.iter())?;
        write_records(masked_path, records.iter().map(CustomerRecord::masked))?;

        let metrics = PopulateMetrics {
            rows_written: records.len() as u64,
            total_duration: start_time.elapsed(),
            raw_file_size_bytes: std::fs::metadata(raw_path)?.len(),
            masked_file_size_bytes: std::fs::metadata(masked_path)?.len(),
        };

        info!(
            "CSV generation complete: {} rows, {}+{} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.raw_file_size_bytes,
            metrics.masked_file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}

/// Write records to a CSV file, header row included.
fn write_records<P, I, R>(path: P, records: I) -> Result<(), CsvPopulatorError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = R>,
    R: std::borrow::Borrow<CustomerRecord>,
{
    let file = File::create(path.as_ref())?;
    let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    let mut writer = Writer::from_writer(buf_writer);

    for record in records {
        writer.serialize(record.borrow())?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixture_core::{is_luhn_valid, CustomerRecord};
    use tempfile::TempDir;

    const EXPECTED_HEADER: &str =
        "customer_id,name,email,phone,rrn_like,credit_card_like,address,memo";

    fn populate_pair(seed: u64, count: u64) -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let raw = temp_dir.path().join("customer-data.csv");
        let masked = temp_dir.path().join("customer-data-safe.csv");

        let mut populator = CsvPopulator::new(RecordGenerator::new(seed));
        let metrics = populator.populate(&raw, &masked, count).unwrap();
        assert_eq!(metrics.rows_written, count);

        (temp_dir, raw, masked)
    }

    #[test]
    fn test_populate_writes_both_files_with_header() {
        let (_dir, raw, masked) = populate_pair(42, 60);

        for path in [&raw, &masked] {
            let content = std::fs::read_to_string(path).unwrap();
            let lines: Vec<&str> = content.lines().collect();
            assert_eq!(lines.len(), 61); // 1 header + 60 data rows
            assert_eq!(lines[0], EXPECTED_HEADER);
        }
    }

    #[test]
    fn test_rows_are_sequential_and_luhn_valid() {
        let (_dir, raw, _masked) = populate_pair(42, 60);

        let mut reader = csv::Reader::from_path(&raw).unwrap();
        let records: Vec<CustomerRecord> =
            reader.deserialize().collect::<Result<_, _>>().unwrap();

        assert_eq!(records.len(), 60);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.customer_id, format!("CUST-{:04}", i + 1));
            assert!(is_luhn_valid(&record.credit_card_like));
        }
    }

    #[test]
    fn test_masked_file_round_trips_from_raw() {
        let (_dir, raw, masked) = populate_pair(42, 60);

        // Re-masking the unmasked rows must reproduce the masked file
        // byte for byte.
        let mut reader = csv::Reader::from_path(&raw).unwrap();
        let mut writer = Writer::from_writer(Vec::new());
        for record in reader.deserialize::<CustomerRecord>() {
            writer.serialize(record.unwrap().masked()).unwrap();
        }
        let remasked = writer.into_inner().unwrap();

        let masked_bytes = std::fs::read(&masked).unwrap();
        assert_eq!(remasked, masked_bytes);
    }

    #[test]
    fn test_masked_fields_shape() {
        let (_dir, _raw, masked) = populate_pair(42, 60);

        let mut reader = csv::Reader::from_path(&masked).unwrap();
        for record in reader.deserialize::<CustomerRecord>() {
            let record = record.unwrap();
            assert!(record.rrn_like.ends_with("******"));
            assert_eq!(record.rrn_like.len(), 14);
            assert!(record.credit_card_like.contains("****-****-"));
            assert_eq!(record.credit_card_like.len(), 19);
        }
    }

    #[test]
    fn test_deterministic_population() {
        let (_dir1, raw1, masked1) = populate_pair(42, 20);
        let (_dir2, raw2, masked2) = populate_pair(42, 20);

        assert_eq!(
            std::fs::read(&raw1).unwrap(),
            std::fs::read(&raw2).unwrap()
        );
        assert_eq!(
            std::fs::read(&masked1).unwrap(),
            std::fs::read(&masked2).unwrap()
        );
    }

    #[test]
    fn test_populate_zero_rows() {
        let (_dir, raw, masked) = populate_pair(42, 0);

        for path in [&raw, &masked] {
            let content = std::fs::read_to_string(path).unwrap();
            // serde-based writing emits no header when nothing is serialized
            assert!(content.is_empty());
        }
    }
}
