use crate::error::{IndicatorError, Result};

/// Divide, failing on a zero denominator instead of producing inf or NaN.
pub fn safe_division(numerator: f64, denominator: f64) -> Result<f64> {
    if denominator == 0.0 {
        return Err(IndicatorError::Division {
            numerator,
            denominator,
        });
    }
    Ok(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divides() {
        assert_eq!(safe_division(3.0, 4.0), Ok(0.75));
    }

    #[test]
    fn zero_denominator_is_an_error() {
        assert_eq!(
            safe_division(1.0, 0.0),
            Err(IndicatorError::Division {
                numerator: 1.0,
                denominator: 0.0
            })
        );
    }
}
