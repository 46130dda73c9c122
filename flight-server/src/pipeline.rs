//! Schedule processing pipeline.
//!
//! Loads an uploaded schedule export, keeps the flights of the target date,
//! pairs outbound and return legs, and computes seat counts.

use chrono::NaiveDate;

use crate::capacity::CapacityCeilings;
use crate::domain::{FlightRow, InvalidMode, Mode};
use crate::loader::{self, LoadError, RawTable};
use crate::schedule::{SeatRules, assign_seats, order_by_route_pair, select_departures};

/// Errors that abort processing of a whole export.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    /// A required column is absent from the export
    #[error("Missing column: {0}")]
    MissingColumn(&'static str),

    /// The mode token is not supported
    #[error(transparent)]
    InvalidMode(#[from] InvalidMode),

    /// The export could not be read as a workbook
    #[error(transparent)]
    Workbook(LoadError),
}

impl From<LoadError> for ProcessError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::MissingColumn(name) => ProcessError::MissingColumn(name),
            other => ProcessError::Workbook(other),
        }
    }
}

/// Runs the pipeline against fixed seat rules and capacity ceilings.
#[derive(Debug, Clone, Copy)]
pub struct Processor<'a> {
    ceilings: &'a CapacityCeilings,
    rules: &'a SeatRules,
}

impl<'a> Processor<'a> {
    /// Create a processor.
    pub fn new(ceilings: &'a CapacityCeilings, rules: &'a SeatRules) -> Self {
        Self { ceilings, rules }
    }

    /// Process the bytes of an uploaded workbook.
    ///
    /// Checks run in this order: the workbook decodes, all required columns
    /// are present, the mode is valid. The first failure aborts the batch.
    pub fn process(
        &self,
        bytes: &[u8],
        mode: &str,
        today: NaiveDate,
    ) -> Result<Vec<FlightRow>, ProcessError> {
        let table = loader::read_table(bytes)?;
        self.process_table(&table, mode, today)
    }

    /// Process an already decoded table.
    pub fn process_table(
        &self,
        table: &RawTable,
        mode: &str,
        today: NaiveDate,
    ) -> Result<Vec<FlightRow>, ProcessError> {
        let records = loader::load_table(table)?;
        let mode = Mode::parse(mode)?;
        tracing::info!(%mode, %today, rows = records.len(), "processing schedule");

        let selected = select_departures(records, mode, today);
        if selected.is_empty() {
            tracing::info!(%mode, "no flights on target date");
            return Ok(Vec::new());
        }

        let ordered = order_by_route_pair(selected);
        let rows = assign_seats(ordered, mode, self.rules, self.ceilings);
        tracing::info!(
            %mode,
            flights = rows.len(),
            with_seats = rows.iter().filter(|r| !r.seats.is_zero()).count(),
            "schedule ready"
        );
        Ok(rows)
    }
}

/// Process a workbook with the production seat rules and fleet ceilings.
pub fn process(bytes: &[u8], mode: &str, today: NaiveDate) -> Result<Vec<FlightRow>, ProcessError> {
    let ceilings = CapacityCeilings::fleet();
    let rules = SeatRules::default();
    Processor::new(&ceilings, &rules).process(bytes, mode, today)
}
