//! File-to-file processing for the command line.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::loader::{FileFormat, FormatError};
use crate::pipeline::{ProcessError, Processor};
use crate::web::{FlightResult, flight_results};

/// Errors from a command-line run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error("cannot encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Process the workbook at `input` and write the flights to `output`.
///
/// The input must be a legacy `.xls` workbook. Nothing is written when
/// processing fails. Returns the number of flights written.
pub fn process_file(
    processor: &Processor<'_>,
    input: &Path,
    output: &Path,
    mode: &str,
    today: NaiveDate,
) -> Result<usize, CliError> {
    let bytes = fs::read(input).map_err(|source| CliError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    FileFormat::require_legacy(&bytes)?;

    let rows = processor.process(&bytes, mode, today)?;
    let results = flight_results(&rows);
    write_json(output, &results)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        flights = results.len(),
        "wrote flights"
    );
    Ok(results.len())
}

/// Write flights to `path` as a JSON array. Non-ASCII text is kept as-is.
pub fn write_json(path: &Path, results: &[FlightResult]) -> Result<(), CliError> {
    let json = serde_json::to_vec(results)?;
    fs::write(path, json).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capacity::CapacityCeilings;
    use crate::loader::LEGACY_SIGNATURE;
    use crate::schedule::SeatRules;
    use rust_xlsxwriter::Workbook;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 10).unwrap()
    }

    fn run(input: &Path, output: &Path) -> Result<usize, CliError> {
        let ceilings = CapacityCeilings::fleet();
        let rules = SeatRules::default();
        process_file(
            &Processor::new(&ceilings, &rules),
            input,
            output,
            "commandes",
            today(),
        )
    }

    fn result(depart: &str) -> FlightResult {
        FlightResult {
            num_vol: "MD702".to_string(),
            depart: depart.to_string(),
            arrivee: "TNR".to_string(),
            imma: "5RMJF".to_string(),
            sd_loc: "2025-07-11T09:05:00".to_string(),
            sa_loc: None,
            jc: 2,
            yc: 2,
        }
    }

    const VOLS_XLS: &[u8] = include_bytes!("../testdata/vols.xls");

    #[test]
    fn legacy_workbook_to_json() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("vols.xls");
        let output = dir.path().join("out.json");
        fs::write(&input, VOLS_XLS).unwrap();

        assert_eq!(run(&input, &output).unwrap(), 4);

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let summary: Vec<_> = written
            .as_array()
            .unwrap()
            .iter()
            .map(|f| {
                (
                    f["num_vol"].as_str().unwrap().to_string(),
                    f["depart"].as_str().unwrap().to_string(),
                    f["arrivee"].as_str().unwrap().to_string(),
                    f["jc"].as_u64().unwrap(),
                    f["yc"].as_u64().unwrap(),
                )
            })
            .collect();
        let expected = [
            ("MD100", "TNR", "TLE", 0, 0),
            ("MD101", "TLE", "TNR", 2, 2),
            ("MD200", "CDG", "TNR", 2, 2),
            ("MD201", "TNR", "CDG", 0, 0),
        ]
        .map(|(n, d, a, j, y): (&str, &str, &str, u64, u64)| {
            (n.to_string(), d.to_string(), a.to_string(), j, y)
        });
        assert_eq!(summary, expected);
        assert_eq!(written[0]["sd_loc"], "2025-07-11T08:00:00");
        assert_eq!(written[3]["sa_loc"], "2025-07-12T06:00:00");
    }

    #[test]
    fn missing_input() {
        let dir = TempDir::new().unwrap();
        let err = run(&dir.path().join("absent.xls"), &dir.path().join("out.json")).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }), "got {err:?}");
        assert!(err.to_string().contains("absent.xls"));
    }

    #[test]
    fn xlsx_input_rejected() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("vols.xls");
        let output = dir.path().join("out.json");
        let mut wb = Workbook::new();
        wb.add_worksheet().write_string(0, 0, "Num Vol").unwrap();
        fs::write(&input, wb.save_to_buffer().unwrap()).unwrap();

        let err = run(&input, &output).unwrap_err();
        assert!(matches!(err, CliError::Format(FormatError::Zip)), "got {err:?}");
        assert_eq!(err.to_string(), "File appears to be .xlsx; expected .xls");
        assert!(!output.exists());
    }

    #[test]
    fn foreign_input_rejected() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("vols.xls");
        fs::write(&input, "Num Vol,Départ").unwrap();

        let err = run(&input, &dir.path().join("out.json")).unwrap_err();
        assert!(matches!(err, CliError::Format(FormatError::Unknown)), "got {err:?}");
    }

    #[test]
    fn truncated_legacy_input_fails_to_decode() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("vols.xls");
        let output = dir.path().join("out.json");
        fs::write(&input, LEGACY_SIGNATURE).unwrap();

        let err = run(&input, &output).unwrap_err();
        assert!(matches!(err, CliError::Process(ProcessError::Workbook(_))), "got {err:?}");
        assert!(!output.exists());
    }

    #[test]
    fn json_keeps_non_ascii() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        write_json(&path, &[result("Île")]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"depart\":\"Île\""), "{text}");
        assert!(text.contains("\"sa_loc\":null"), "{text}");
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn empty_result_is_empty_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        write_json(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn unwritable_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let err = write_json(&path, &[result("DIE")]).unwrap_err();
        assert!(matches!(err, CliError::Write { .. }), "got {err:?}");
    }
}
