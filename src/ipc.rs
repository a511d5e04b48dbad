use std::sync::Arc;

use arrow::array::{ArrayRef, PrimitiveArray, StringBuilder};
use arrow::datatypes::{DataType, Field, Schema, UInt32Type};
use arrow::error::Result as ArrowResult;
use arrow::ipc::writer::FileWriter;
use arrow::record_batch::RecordBatch;

use crate::error::Result;
use crate::harness::{Comparison, HarnessReport, Mismatch};

const IPC_ARROW_BATCH_SIZE: usize = 1 << 12;

pub const KIND_MISMATCH: &str = "mismatch";
pub const KIND_COMPARISON: &str = "comparison";

pub fn report_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("kind", DataType::Utf8, false),
        Field::new("a", DataType::Utf8, false),
        Field::new("b", DataType::Utf8, false),
        Field::new("expected", DataType::UInt32, true),
        Field::new("distance", DataType::UInt32, false),
    ]))
}

struct ReportRowBatch {
    kind: StringBuilder,
    a: StringBuilder,
    b: StringBuilder,
    expected: Vec<Option<u32>>,
    distance: Vec<u32>,
}

impl ReportRowBatch {
    fn new() -> Self {
        ReportRowBatch {
            kind: StringBuilder::with_capacity(IPC_ARROW_BATCH_SIZE, IPC_ARROW_BATCH_SIZE * 10),
            a: StringBuilder::with_capacity(IPC_ARROW_BATCH_SIZE, IPC_ARROW_BATCH_SIZE * 16),
            b: StringBuilder::with_capacity(IPC_ARROW_BATCH_SIZE, IPC_ARROW_BATCH_SIZE * 16),
            expected: Vec::with_capacity(IPC_ARROW_BATCH_SIZE),
            distance: Vec::with_capacity(IPC_ARROW_BATCH_SIZE),
        }
    }

    fn add_mismatch(&mut self, mismatch: &Mismatch) {
        self.kind.append_value(KIND_MISMATCH);
        self.a.append_value(mismatch.a.to_string());
        self.b.append_value(mismatch.b.to_string());
        self.expected.push(Some(saturate(mismatch.expected)));
        self.distance.push(saturate(mismatch.actual));
    }

    fn add_comparison(&mut self, comparison: &Comparison) {
        self.kind.append_value(KIND_COMPARISON);
        self.a.append_value(&comparison.reference);
        self.b.append_value(&comparison.word);
        self.expected.push(None);
        self.distance.push(saturate(comparison.distance));
    }

    fn is_full(&self) -> bool {
        self.distance.len() >= IPC_ARROW_BATCH_SIZE
    }

    fn len(&self) -> usize {
        self.distance.len()
    }

    fn write_to_arrow_and_clear(&mut self, writer: &mut FileWriter<Vec<u8>>, schema: &Arc<Schema>) -> ArrowResult<()> {
        if self.len() == 0 {
            return Ok(());
        }
        let col_kind: ArrayRef = Arc::new(self.kind.finish());
        let col_a: ArrayRef = Arc::new(self.a.finish());
        let col_b: ArrayRef = Arc::new(self.b.finish());
        let col_expected: ArrayRef = Arc::new(PrimitiveArray::<UInt32Type>::from(std::mem::take(&mut self.expected)));
        let col_distance: ArrayRef = Arc::new(PrimitiveArray::<UInt32Type>::from(std::mem::take(&mut self.distance)));
        let batch = RecordBatch::try_new(schema.clone(), vec![col_kind, col_a, col_b, col_expected, col_distance])?;
        writer.write(&batch)
    }
}

fn saturate(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Encodes mismatches followed by comparisons as an in-memory Arrow IPC file.
pub fn report_to_ipc_bytes(report: &HarnessReport) -> Result<Vec<u8>> {
    let schema = report_schema();
    let mut writer = FileWriter::try_new(Vec::new(), &schema)?;
    let mut batch = ReportRowBatch::new();

    for mismatch in &report.mismatches {
        batch.add_mismatch(mismatch);
        if batch.is_full() {
            batch.write_to_arrow_and_clear(&mut writer, &schema)?;
        }
    }
    for comparison in &report.comparisons {
        batch.add_comparison(comparison);
        if batch.is_full() {
            batch.write_to_arrow_and_clear(&mut writer, &schema)?;
        }
    }
    batch.write_to_arrow_and_clear(&mut writer, &schema)?;

    Ok(writer.into_inner()?)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use arrow::array::{Array, AsArray};
    use arrow::datatypes::UInt32Type;
    use arrow::ipc::reader::FileReader;

    use super::*;
    use crate::harness::Case;

    fn read_back(bytes: Vec<u8>) -> Vec<RecordBatch> {
        FileReader::try_new(Cursor::new(bytes), None)
            .unwrap()
            .collect::<ArrowResult<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn clean_report_holds_only_comparisons() {
        let batches = read_back(report_to_ipc_bytes(&HarnessReport::run()).unwrap());
        assert_eq!(batches.len(), 1);
        let batch = &batches[0];
        assert_eq!(batch.num_rows(), 5);
        assert_eq!(batch.schema(), report_schema());

        let kind = batch.column(0).as_string::<i32>();
        assert!((0..kind.len()).all(|i| kind.value(i) == KIND_COMPARISON));
        let expected = batch.column(3).as_primitive::<UInt32Type>();
        assert_eq!(expected.null_count(), 5);
        let distance = batch.column(4).as_primitive::<UInt32Type>();
        assert_eq!(distance.values().to_vec(), vec![2, 1, 2, 3, 2]);
    }

    #[test]
    fn mismatches_come_first() {
        let report = HarnessReport::from_cases(&[Case::new("1234", "1", 2)]);
        let batches = read_back(report_to_ipc_bytes(&report).unwrap());
        let batch = &batches[0];
        assert_eq!(batch.num_rows(), 6);

        assert_eq!(batch.column(0).as_string::<i32>().value(0), KIND_MISMATCH);
        assert_eq!(batch.column(1).as_string::<i32>().value(0), "1234");
        assert_eq!(batch.column(2).as_string::<i32>().value(0), "1");
        assert_eq!(batch.column(3).as_primitive::<UInt32Type>().value(0), 2);
        assert_eq!(batch.column(4).as_primitive::<UInt32Type>().value(0), 3);
    }

    #[test]
    fn empty_report_still_has_schema() {
        let report = HarnessReport { total_cases: 0, mismatches: vec![], comparisons: vec![] };
        let reader = FileReader::try_new(Cursor::new(report_to_ipc_bytes(&report).unwrap()), None).unwrap();
        assert_eq!(reader.schema(), report_schema());
        assert_eq!(reader.num_batches(), 0);
    }
}
