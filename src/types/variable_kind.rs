//! Defines the `VariableKind` enum, mapping the forecast variables tracked by the
//! collector to the `dataTypeCd` codes understood by the LDAPS point service.

use std::fmt;

/// A forecast variable tracked by the collector.
///
/// Each variant carries its remote service code (sent as `dataTypeCd`) and a
/// human readable display name used in logs and cycle reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VariableKind {
    /// Air temperature (℃), service code `Temp`.
    Temperature,
    /// Wind speed (m/s), service code `Wspd`.
    WindSpeed,
    /// Precipitation (mm), service code `Rain`.
    Precipitation,
    /// Relative humidity (%), service code `Humi`.
    Humidity,
}

impl VariableKind {
    /// All tracked variables, in the order they are requested from the service.
    pub const ALL: [VariableKind; 4] = [
        VariableKind::Temperature,
        VariableKind::WindSpeed,
        VariableKind::Precipitation,
        VariableKind::Humidity,
    ];

    /// The order in which variable values appear in an output row.
    pub const COLUMN_ORDER: [VariableKind; 4] = [
        VariableKind::Temperature,
        VariableKind::Humidity,
        VariableKind::WindSpeed,
        VariableKind::Precipitation,
    ];

    /// The `dataTypeCd` query value for this variable.
    ///
    /// # Examples
    ///
    /// ```
    /// use kma_forecast::VariableKind;
    ///
    /// assert_eq!(VariableKind::Temperature.service_code(), "Temp");
    /// assert_eq!(VariableKind::Humidity.service_code(), "Humi");
    /// ```
    pub fn service_code(&self) -> &'static str {
        match self {
            VariableKind::Temperature => "Temp",
            VariableKind::WindSpeed => "Wspd",
            VariableKind::Precipitation => "Rain",
            VariableKind::Humidity => "Humi",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VariableKind::Temperature => "temperature",
            VariableKind::WindSpeed => "wind speed",
            VariableKind::Precipitation => "precipitation",
            VariableKind::Humidity => "humidity",
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_service_codes_are_distinct() {
        let codes: HashSet<_> = VariableKind::ALL.iter().map(|k| k.service_code()).collect();
        assert_eq!(codes.len(), VariableKind::ALL.len());
    }

    #[test]
    fn test_column_order_covers_every_variable() {
        let fetched: HashSet<_> = VariableKind::ALL.into_iter().collect();
        let columns: HashSet<_> = VariableKind::COLUMN_ORDER.into_iter().collect();
        assert_eq!(fetched, columns);
    }
}
