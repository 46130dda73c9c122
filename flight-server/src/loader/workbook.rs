//! Workbook decoding.
//!
//! Decodes the first worksheet of an uploaded workbook into a header row
//! plus data rows of raw cells. The decoder accepts both the legacy binary
//! format and the ZIP-based one; callers that must insist on the legacy
//! format check [`FileFormat::sniff`] first.

use std::io::Cursor;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};

use super::convert::cell_text;
use super::error::{FormatError, LoadError};

/// Leading bytes of a legacy binary (OLE2 compound document) workbook.
pub const LEGACY_SIGNATURE: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Leading bytes of a ZIP archive, as used by the newer workbook format.
pub const ZIP_SIGNATURE: [u8; 4] = *b"PK\x03\x04";

/// Container format of an uploaded file, judged by its leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Legacy binary workbook (`.xls`)
    Legacy,
    /// ZIP-based workbook (`.xlsx`)
    Zip,
    /// Anything else
    Unknown,
}

impl FileFormat {
    /// Identify the format from the first bytes of a file.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_server::loader::FileFormat;
    ///
    /// assert_eq!(FileFormat::sniff(b"PK\x03\x04rest"), FileFormat::Zip);
    /// assert_eq!(FileFormat::sniff(b"Num Vol;Depart"), FileFormat::Unknown);
    /// ```
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.starts_with(&LEGACY_SIGNATURE) {
            FileFormat::Legacy
        } else if bytes.starts_with(&ZIP_SIGNATURE) {
            FileFormat::Zip
        } else {
            FileFormat::Unknown
        }
    }

    /// Check that `bytes` carry the legacy signature.
    pub fn require_legacy(bytes: &[u8]) -> Result<(), FormatError> {
        match Self::sniff(bytes) {
            FileFormat::Legacy => Ok(()),
            FileFormat::Zip => Err(FormatError::Zip),
            FileFormat::Unknown => Err(FormatError::Unknown),
        }
    }
}

/// A worksheet as decoded: header texts plus raw data rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<Data>>,
}

impl RawTable {
    /// Build a table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Data>>) -> Self {
        Self { headers, rows }
    }

    /// Build a table from a decoded range; its first row is the header.
    pub fn from_range(range: &Range<Data>) -> Self {
        let mut rows = range.rows();
        let headers = rows
            .next()
            .map(|header| header.iter().map(cell_text).collect())
            .unwrap_or_default();
        let rows = rows.map(<[Data]>::to_vec).collect();
        Self { headers, rows }
    }

    /// Returns the header texts.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the data rows (header excluded).
    pub fn rows(&self) -> &[Vec<Data>] {
        &self.rows
    }

    /// Returns the number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Decode the first worksheet of a workbook held in memory.
pub fn read_table(bytes: &[u8]) -> Result<RawTable, LoadError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(LoadError::NoWorksheet)??;

    let table = RawTable::from_range(&range);
    tracing::debug!(
        columns = table.headers().len(),
        rows = table.len(),
        "decoded worksheet"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn workbook(rows: &[&[&str]]) -> Vec<u8> {
        let mut wb = Workbook::new();
        let sheet = wb.add_worksheet();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                sheet.write_string(r as u32, c as u16, *value).unwrap();
            }
        }
        wb.save_to_buffer().unwrap()
    }

    #[test]
    fn sniff_legacy() {
        let mut bytes = LEGACY_SIGNATURE.to_vec();
        bytes.extend_from_slice(&[0; 32]);
        assert_eq!(FileFormat::sniff(&bytes), FileFormat::Legacy);
    }

    #[test]
    fn sniff_zip() {
        assert_eq!(FileFormat::sniff(&workbook(&[&["a"]])), FileFormat::Zip);
    }

    #[test]
    fn sniff_short_or_foreign() {
        assert_eq!(FileFormat::sniff(b""), FileFormat::Unknown);
        assert_eq!(FileFormat::sniff(&LEGACY_SIGNATURE[..4]), FileFormat::Unknown);
        assert_eq!(FileFormat::sniff(b"%PDF-1.7"), FileFormat::Unknown);
    }

    #[test]
    fn require_legacy_signature() {
        let mut bytes = LEGACY_SIGNATURE.to_vec();
        bytes.extend_from_slice(&[0; 16]);
        assert_eq!(FileFormat::require_legacy(&bytes), Ok(()));
        assert_eq!(
            FileFormat::require_legacy(&workbook(&[&["a"]])),
            Err(FormatError::Zip)
        );
        assert_eq!(
            FileFormat::require_legacy(b"Num Vol,Depart"),
            Err(FormatError::Unknown)
        );
    }

    #[test]
    fn read_legacy_workbook() {
        let bytes = include_bytes!("../../testdata/vols.xls");
        assert_eq!(FileFormat::sniff(bytes), FileFormat::Legacy);

        let table = read_table(bytes).unwrap();
        assert_eq!(
            table.headers(),
            ["Num Vol", "Départ", "Arrivée", "Imma", "SD LOC", "SA LOC"]
        );
        assert_eq!(table.len(), 5);
        assert_eq!(table.rows()[1][0], Data::String("MD100".to_string()));
        assert_eq!(
            table.rows()[4][4],
            Data::String("2025-07-11 16:00:00".to_string())
        );
    }

    #[test]
    fn read_header_and_rows() {
        let bytes = workbook(&[
            &["Num Vol", "Départ", "Arrivée"],
            &["MD100", "TNR", "TLE"],
            &["MD101", "TLE", "TNR"],
        ]);
        let table = read_table(&bytes).unwrap();

        assert_eq!(table.headers(), ["Num Vol", "Départ", "Arrivée"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0][0], Data::String("MD100".to_string()));
        assert_eq!(table.rows()[1][2], Data::String("TNR".to_string()));
    }

    #[test]
    fn header_only_sheet_has_no_rows() {
        let table = read_table(&workbook(&[&["Num Vol", "Départ"]])).unwrap();
        assert_eq!(table.headers().len(), 2);
        assert!(table.is_empty());
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        let err = read_table(b"this is not a spreadsheet").unwrap_err();
        assert!(matches!(err, LoadError::Workbook(_)), "got {err:?}");
    }

    #[test]
    fn truncated_legacy_file_is_rejected() {
        let err = read_table(&LEGACY_SIGNATURE).unwrap_err();
        assert!(matches!(err, LoadError::Workbook(_)), "got {err:?}");
    }
}
