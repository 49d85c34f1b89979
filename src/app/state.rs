use crate::domain::weather::{Units, convert_temp, round_temp};

/// Metric/imperial display preference, owned by the caller and passed to
/// every formatter that needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitPreference {
    units: Units,
}

impl UnitPreference {
    #[must_use]
    pub const fn new(units: Units) -> Self {
        Self { units }
    }

    #[must_use]
    pub const fn units(self) -> Units {
        self.units
    }

    #[must_use]
    pub const fn is_metric(self) -> bool {
        matches!(self.units, Units::Celsius)
    }

    pub fn toggle(&mut self) -> Units {
        self.units = match self.units {
            Units::Celsius => Units::Fahrenheit,
            Units::Fahrenheit => Units::Celsius,
        };
        self.units
    }

    /// Button caption; the active unit comes first.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self.units {
            Units::Celsius => "°C / °F",
            Units::Fahrenheit => "°F / °C",
        }
    }

    #[must_use]
    pub fn temp_value(self, celsius: f32) -> i32 {
        round_temp(convert_temp(celsius, self.units))
    }

    #[must_use]
    pub fn format_temp(self, celsius: f32) -> String {
        format!("{}{}", self.temp_value(celsius), self.units.suffix())
    }
}
