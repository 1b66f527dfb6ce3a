//! Named calculator over optional 32-bit operands.
//!
//! A [`Calculator`] owns an immutable name and counts the operations that
//! completed without error. Absent operands are read as `0`, except for the
//! divisor, which must be present and non-zero.
//!
//! All arithmetic uses two's-complement wraparound:
//!
//! ```
//! use calculator::Calculator;
//!
//! let mut calc = Calculator::new(Some("Tejo")).unwrap();
//! assert_eq!(calc.sum(Some(i32::MAX), Some(1)), i32::MIN);
//! assert_eq!(calc.divide(Some(i32::MIN), Some(-1)).unwrap(), i32::MIN);
//! assert_eq!(calc.number_of_operations(), 2);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::debug_event;
use crate::error::{CalculatorError, CalculatorResult};

/// Shortest accepted name, in UTF-16 code units.
pub const MIN_NAME_LEN: usize = 2;
/// Longest accepted name, in UTF-16 code units.
pub const MAX_NAME_LEN: usize = 5;
/// Ceiling of the operation count, so it always fits a non-negative `i32`.
pub const MAX_OPERATIONS: u32 = i32::MAX as u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    name: String,
    operations: u32,
}

impl Calculator {
    /// Create a calculator named `name`.
    ///
    /// Fails with [`CalculatorError::NoName`] when `name` is `None` or is not
    /// between [`MIN_NAME_LEN`] and [`MAX_NAME_LEN`] UTF-16 code units long.
    /// A character outside the Basic Multilingual Plane counts as two.
    pub fn new(name: Option<&str>) -> CalculatorResult<Self> {
        let Some(name) = name else {
            return Err(CalculatorError::NoName { length: None });
        };

        let length = name.encode_utf16().count();
        if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&length) {
            return Err(CalculatorError::NoName {
                length: Some(length),
            });
        }

        Ok(Self {
            name: name.to_string(),
            operations: 0,
        })
    }

    /// Add `a` and `b`, reading an absent operand as `0`.
    ///
    /// Never fails; overflow wraps around.
    pub fn sum(&mut self, a: Option<i32>, b: Option<i32>) -> i32 {
        let result = match (a, b) {
            (None, None) => 0,
            (None, Some(b)) => b,
            (Some(a), None) => a,
            (Some(a), Some(b)) => a.wrapping_add(b),
        };

        self.record();
        debug_event!(
            "calculator",
            "sum",
            "{}: {a:?} + {b:?} = {result} (operations: {})",
            self.name,
            self.operations
        );
        result
    }

    /// Divide `a` by `b` with truncating division.
    ///
    /// An absent `a` is read as `0`. An absent or zero `b` fails with
    /// [`CalculatorError::DivisorIsZero`] and leaves the operation count
    /// untouched. `i32::MIN / -1` wraps to `i32::MIN`.
    pub fn divide(&mut self, a: Option<i32>, b: Option<i32>) -> CalculatorResult<i32> {
        let divisor = match b {
            Some(b) if b != 0 => b,
            _ => {
                debug_event!("calculator", "rejected", "{}: {a:?} / {b:?}", self.name);
                return Err(CalculatorError::DivisorIsZero { divisor: b });
            }
        };

        let result = match a {
            None => 0,
            Some(a) => a.wrapping_div(divisor),
        };

        self.record();
        debug_event!(
            "calculator",
            "divide",
            "{}: {a:?} / {divisor} = {result} (operations: {})",
            self.name,
            self.operations
        );
        Ok(result)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of `sum` and `divide` calls that completed without error.
    ///
    /// Stops at [`MAX_OPERATIONS`].
    pub fn number_of_operations(&self) -> u32 {
        self.operations
    }

    fn record(&mut self) {
        if self.operations < MAX_OPERATIONS {
            self.operations += 1;
        }
    }
}

impl TryFrom<&str> for Calculator {
    type Error = CalculatorError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::new(Some(name))
    }
}

impl FromStr for Calculator {
    type Err = CalculatorError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::new(Some(name))
    }
}

impl fmt::Display for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} operations)", self.name, self.operations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tejo() -> Calculator {
        Calculator::new(Some("Tejo")).unwrap()
    }

    #[test]
    fn test_new_accepts_valid_names() {
        for name in ["Tejo", "Oi ", "Troia", "ab"] {
            let calc = Calculator::new(Some(name)).unwrap();
            assert_eq!(calc.name(), name);
            assert_eq!(calc.number_of_operations(), 0);
        }
    }

    #[test]
    fn test_new_rejects_invalid_names() {
        for name in [None, Some(""), Some("P"), Some("Lisboa")] {
            let err = Calculator::new(name).unwrap_err();
            assert!(err.to_string().contains("no name"), "{name:?}: {err}");
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn test_name_length_counts_utf16_units() {
        // 5 units, 6 bytes
        let calc = Calculator::new(Some("Évora")).unwrap();
        assert_eq!(calc.name(), "Évora");

        // one char, two units
        let calc = Calculator::new(Some("\u{1F600}")).unwrap();
        assert_eq!(calc.name(), "\u{1F600}");

        // three chars, six units
        let err = Calculator::new(Some("\u{1F600}\u{1F600}\u{1F600}")).unwrap_err();
        assert_eq!(err, CalculatorError::NoName { length: Some(6) });
    }

    #[test]
    fn test_sum_treats_absent_as_zero() {
        let mut calc = tejo();
        assert_eq!(calc.sum(None, None), 0);
        assert_eq!(calc.sum(None, Some(1)), 1);
        assert_eq!(calc.sum(Some(-1), None), -1);
        assert_eq!(calc.sum(Some(2), Some(3)), 5);
        assert_eq!(calc.number_of_operations(), 4);
    }

    #[test]
    fn test_sum_wraps_on_overflow() {
        let mut calc = tejo();
        assert_eq!(calc.sum(Some(i32::MAX), Some(i32::MAX)), -2);
        assert_eq!(calc.sum(Some(i32::MIN), Some(i32::MIN)), 0);
        assert_eq!(calc.sum(Some(i32::MIN), Some(-1)), i32::MAX);
    }

    #[test]
    fn test_divide_truncates_toward_zero() {
        let mut calc = tejo();
        assert_eq!(calc.divide(Some(7), Some(2)), Ok(3));
        assert_eq!(calc.divide(Some(-7), Some(2)), Ok(-3));
        assert_eq!(calc.divide(None, Some(-2)), Ok(0));
        assert_eq!(calc.divide(Some(i32::MIN), Some(-1)), Ok(i32::MIN));
        assert_eq!(calc.number_of_operations(), 4);
    }

    #[test]
    fn test_divide_by_zero_leaves_count_unchanged() {
        let mut calc = tejo();
        calc.sum(Some(1), Some(1));

        let err = calc.divide(Some(5), Some(0)).unwrap_err();
        assert_eq!(err, CalculatorError::DivisorIsZero { divisor: Some(0) });
        let err = calc.divide(None, None).unwrap_err();
        assert_eq!(err, CalculatorError::DivisorIsZero { divisor: None });

        assert_eq!(calc.number_of_operations(), 1);
    }

    #[test]
    fn test_accessors_do_not_count() {
        let calc = tejo();
        for _ in 0..3 {
            assert_eq!(calc.name(), "Tejo");
            assert_eq!(calc.number_of_operations(), 0);
        }
    }

    #[test]
    fn test_count_saturates() {
        let mut calc = tejo();
        calc.operations = MAX_OPERATIONS - 1;
        calc.sum(None, None);
        calc.divide(Some(1), Some(1)).unwrap();
        assert_eq!(calc.number_of_operations(), MAX_OPERATIONS);
        assert!(i32::try_from(calc.number_of_operations()).is_ok());
    }

    #[test]
    fn test_parse_and_display() {
        let mut calc: Calculator = "Tejo".parse().unwrap();
        calc.sum(Some(1), Some(1));
        assert_eq!(calc.to_string(), "Tejo (1 operations)");
        assert!(Calculator::try_from("P").is_err());
    }
}
