use serde::{Deserialize, Serialize};

use crate::core::js_number::{round_half_up, to_fixed};

/// Digit-grouping convention used for integer counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NumberLocale {
    /// `es-UY`: `.` groups every three digits from four digits up.
    #[default]
    EsUy,
    /// `es-ES`: `.` groups, but only from five integer digits up.
    EsEs,
    EnUs,
}

impl NumberLocale {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EsUy => "es-UY",
            Self::EsEs => "es-ES",
            Self::EnUs => "en-US",
        }
    }

    #[must_use]
    pub const fn grouping_separator(self) -> char {
        match self {
            Self::EsUy | Self::EsEs => '.',
            Self::EnUs => ',',
        }
    }

    #[must_use]
    pub const fn minimum_grouping_digits(self) -> usize {
        match self {
            Self::EsEs => 2,
            Self::EsUy | Self::EnUs => 1,
        }
    }

    /// Renders an integral value with this locale's thousands grouping.
    #[must_use]
    pub fn group_integer(self, value: f64) -> String {
        let digits = format!("{:.0}", value.abs());
        let sign = if value < 0.0 && digits != "0" { "-" } else { "" };

        if digits.len() < 3 + self.minimum_grouping_digits() {
            return format!("{sign}{digits}");
        }

        let separator = self.grouping_separator();
        let lead = digits.len() % 3;
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        grouped.push_str(sign);
        for (index, ch) in digits.chars().enumerate() {
            if index > 0 && (index + 3 - lead) % 3 == 0 {
                grouped.push(separator);
            }
            grouped.push(ch);
        }
        grouped
    }
}

/// How a counter element renders its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CounterDisplayMode {
    /// Rounded integer, grouped from 1000 up.
    IntegerGrouped,
    /// Two decimals for targets below 1, one decimal otherwise.
    DecimalFixed,
}

/// Formats counter frames for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterFormatter {
    pub locale: NumberLocale,
}

impl CounterFormatter {
    #[must_use]
    pub const fn new(locale: NumberLocale) -> Self {
        Self { locale }
    }

    /// Formats an intermediate value. Decimal precision follows `target`, not `value`,
    /// so the width stays stable for the whole run.
    #[must_use]
    pub fn format_frame(self, value: f64, target: f64, mode: CounterDisplayMode) -> String {
        match mode {
            CounterDisplayMode::IntegerGrouped => self.format_integer(round_half_up(value)),
            CounterDisplayMode::DecimalFixed => to_fixed(value, decimal_places(target)),
        }
    }

    /// Formats the exact target shown after the last frame.
    ///
    /// In integer mode grouping is decided on the target itself, so a target
    /// in `[999.5, 1000)` ends as `1000` rather than a grouped `1.000`.
    #[must_use]
    pub fn format_final(self, target: f64, mode: CounterDisplayMode) -> String {
        match mode {
            CounterDisplayMode::IntegerGrouped => {
                let rounded = round_half_up(target);
                if target >= 1_000.0 {
                    self.locale.group_integer(rounded)
                } else {
                    format!("{rounded}")
                }
            }
            CounterDisplayMode::DecimalFixed => self.format_frame(target, target, mode),
        }
    }

    fn format_integer(self, rounded: f64) -> String {
        if rounded >= 1_000.0 {
            self.locale.group_integer(rounded)
        } else {
            format!("{rounded}")
        }
    }
}

#[must_use]
pub fn decimal_places(target: f64) -> u32 {
    if target < 1.0 { 2 } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::{CounterDisplayMode, CounterFormatter, NumberLocale};

    #[test]
    fn groups_from_four_digits_for_uruguay() {
        let locale = NumberLocale::EsUy;
        assert_eq!(locale.group_integer(1_500.0), "1.500");
        assert_eq!(locale.group_integer(12_345_678.0), "12.345.678");
        assert_eq!(locale.group_integer(100_000.0), "100.000");
        assert_eq!(locale.group_integer(999.0), "999");
    }

    #[test]
    fn spain_requires_two_leading_digits() {
        assert_eq!(NumberLocale::EsEs.group_integer(1_500.0), "1500");
        assert_eq!(NumberLocale::EsEs.group_integer(15_000.0), "15.000");
    }

    #[test]
    fn en_us_uses_commas() {
        assert_eq!(NumberLocale::EnUs.group_integer(2_500_000.0), "2,500,000");
    }

    #[test]
    fn integer_frames_below_a_thousand_stay_plain() {
        let formatter = CounterFormatter::new(NumberLocale::EsUy);
        assert_eq!(
            formatter.format_frame(999.5, 5_000.0, CounterDisplayMode::IntegerGrouped),
            "1.000"
        );
        assert_eq!(
            formatter.format_frame(999.4, 5_000.0, CounterDisplayMode::IntegerGrouped),
            "999"
        );
        assert_eq!(
            formatter.format_final(-1_500.0, CounterDisplayMode::IntegerGrouped),
            "-1500"
        );
    }

    #[test]
    fn final_value_groups_on_target_not_rounded_value() {
        let formatter = CounterFormatter::new(NumberLocale::EsUy);
        assert_eq!(
            formatter.format_final(999.6, CounterDisplayMode::IntegerGrouped),
            "1000"
        );
        assert_eq!(
            formatter.format_final(999.5, CounterDisplayMode::IntegerGrouped),
            "1000"
        );
        assert_eq!(
            formatter.format_final(1_000.0, CounterDisplayMode::IntegerGrouped),
            "1.000"
        );
    }

    #[test]
    fn decimal_precision_depends_on_target() {
        let formatter = CounterFormatter::default();
        assert_eq!(
            formatter.format_frame(0.123, 0.5, CounterDisplayMode::DecimalFixed),
            "0.12"
        );
        assert_eq!(
            formatter.format_frame(0.123, 4.2, CounterDisplayMode::DecimalFixed),
            "0.1"
        );
    }
}
