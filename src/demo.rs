//! Small reference code showing how projects generated from the template
//! document and test their functions.

use crate::error::{Result, WizardError};

/// Doubles the input.
///
/// # Errors
///
/// Returns [`WizardError::InvalidValue`] when the result does not fit in an `i64`.
///
/// # Examples
///
/// ```
/// use wizard_template::demo::demo_function;
///
/// assert_eq!(demo_function(2).unwrap(), 4);
/// assert_eq!(demo_function(3).unwrap(), 6);
/// assert!(demo_function(i64::MAX).is_err());
/// ```
pub fn demo_function(incoming: i64) -> Result<i64> {
    incoming
        .checked_mul(2)
        .ok_or_else(|| WizardError::InvalidValue(format!("{} is too large to double", incoming)))
}

/// Parses `incoming` as an integer and doubles it.
///
/// ```
/// use wizard_template::demo::demo_function_str;
///
/// assert_eq!(demo_function_str("5").unwrap(), 10);
/// let err = demo_function_str("1.0").unwrap_err();
/// assert_eq!(err.to_string(), "Input must be an integer, got 1.0.");
/// ```
pub fn demo_function_str(incoming: &str) -> Result<i64> {
    let value = incoming
        .trim()
        .parse::<i64>()
        .map_err(|_| WizardError::NotAnInteger(incoming.to_string()))?;
    demo_function(value)
}

/// Returns the items, dropping empty ones when `filter_empty` is set.
///
/// ```
/// use wizard_template::demo::process_data;
///
/// let data = ["1", "", "3"];
/// assert_eq!(process_data(&data, true), vec!["1", "3"]);
/// assert_eq!(process_data(&data, false), vec!["1", "", "3"]);
/// ```
pub fn process_data<S: AsRef<str>>(items: &[S], filter_empty: bool) -> Vec<String> {
    items
        .iter()
        .map(AsRef::as_ref)
        .filter(|item| !filter_empty || !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Scales values by a fixed multiplier.
///
/// ```
/// use wizard_template::demo::DataProcessor;
///
/// let processor = DataProcessor::new(2.0);
/// assert_eq!(processor.process(5.0).unwrap(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataProcessor {
    pub multiplier: f64,
    /// Reject negative input instead of scaling it.
    pub strict_mode: bool,
}

impl Default for DataProcessor {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl DataProcessor {
    pub fn new(multiplier: f64) -> Self {
        Self {
            multiplier,
            strict_mode: false,
        }
    }

    pub fn strict(multiplier: f64) -> Self {
        Self {
            multiplier,
            strict_mode: true,
        }
    }

    pub fn process(&self, value: f64) -> Result<f64> {
        if self.strict_mode && value < 0.0 {
            return Err(WizardError::InvalidValue(
                "Negative values not allowed in strict mode".to_string(),
            ));
        }
        Ok(value * self.multiplier)
    }
}
