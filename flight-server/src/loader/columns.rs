//! Required columns of the schedule export.

use super::error::LoadError;

/// A column the export must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    FlightNumber,
    Departure,
    Arrival,
    TailNumber,
    ScheduledDeparture,
    ScheduledArrival,
}

impl Column {
    /// All required columns, in declaration order.
    pub const ALL: [Column; 6] = [
        Column::FlightNumber,
        Column::Departure,
        Column::Arrival,
        Column::TailNumber,
        Column::ScheduledDeparture,
        Column::ScheduledArrival,
    ];

    /// The exact header text of this column in the export.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Column::FlightNumber => "Num Vol",
            Column::Departure => "Départ",
            Column::Arrival => "Arrivée",
            Column::TailNumber => "Imma",
            Column::ScheduledDeparture => "SD LOC",
            Column::ScheduledArrival => "SA LOC",
        }
    }

    const fn slot(self) -> usize {
        match self {
            Column::FlightNumber => 0,
            Column::Departure => 1,
            Column::Arrival => 2,
            Column::TailNumber => 3,
            Column::ScheduledDeparture => 4,
            Column::ScheduledArrival => 5,
        }
    }
}

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    positions: [usize; 6],
}

impl ColumnIndex {
    /// Locate every required column in `headers`.
    ///
    /// Headers match byte-for-byte; the first occurrence of a duplicated
    /// header wins. Fails with the first missing column in declaration order.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Result<Self, LoadError> {
        let mut positions = [0; 6];
        for column in Column::ALL {
            positions[column.slot()] = headers
                .iter()
                .position(|h| h.as_ref() == column.header())
                .ok_or(LoadError::MissingColumn(column.header()))?;
        }
        Ok(Self { positions })
    }

    /// Returns the position of a column within a row.
    pub fn position(&self, column: Column) -> usize {
        self.positions[column.slot()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADERS: [&str; 6] = ["Num Vol", "Départ", "Arrivée", "Imma", "SD LOC", "SA LOC"];

    fn missing(headers: &[&str]) -> &'static str {
        match ColumnIndex::resolve(headers) {
            Err(LoadError::MissingColumn(name)) => name,
            other => panic!("expected missing column, got {other:?}"),
        }
    }

    #[test]
    fn headers_in_order() {
        let index = ColumnIndex::resolve(&HEADERS).unwrap();
        for (i, column) in Column::ALL.into_iter().enumerate() {
            assert_eq!(index.position(column), i);
        }
    }

    #[test]
    fn headers_shuffled_with_extras() {
        let headers = ["SA LOC", "Extra", "Imma", "Num Vol", "Arrivée", "SD LOC", "Départ"];
        let index = ColumnIndex::resolve(&headers).unwrap();
        assert_eq!(index.position(Column::ScheduledArrival), 0);
        assert_eq!(index.position(Column::TailNumber), 2);
        assert_eq!(index.position(Column::FlightNumber), 3);
        assert_eq!(index.position(Column::Arrival), 4);
        assert_eq!(index.position(Column::ScheduledDeparture), 5);
        assert_eq!(index.position(Column::Departure), 6);
    }

    #[test]
    fn duplicate_header_first_wins() {
        let headers = ["Num Vol", "Départ", "Arrivée", "Imma", "SD LOC", "SA LOC", "Imma"];
        let index = ColumnIndex::resolve(&headers).unwrap();
        assert_eq!(index.position(Column::TailNumber), 3);
    }

    #[test]
    fn each_missing_column_is_named() {
        for skip in 0..HEADERS.len() {
            let headers: Vec<&str> = HEADERS
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, h)| *h)
                .collect();
            assert_eq!(missing(&headers), HEADERS[skip]);
        }
    }

    #[test]
    fn first_missing_in_declaration_order() {
        // Both Imma and Départ are missing; Départ is declared first
        assert_eq!(missing(&["SA LOC", "SD LOC", "Arrivée", "Num Vol"]), "Départ");
        assert_eq!(missing(&[]), "Num Vol");
    }

    #[test]
    fn match_is_exact() {
        // Accent stripped, case changed, padded
        assert_eq!(
            missing(&["Num Vol", "Depart", "Arrivée", "Imma", "SD LOC", "SA LOC"]),
            "Départ"
        );
        assert_eq!(
            missing(&["num vol", "Départ", "Arrivée", "Imma", "SD LOC", "SA LOC"]),
            "Num Vol"
        );
        assert_eq!(
            missing(&["Num Vol", "Départ", "Arrivée", "Imma ", "SD LOC", "SA LOC"]),
            "Imma"
        );
    }
}
