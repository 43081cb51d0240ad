use crate::CoreError;

/// Floating point type used for numeric variable values.
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite {
            what: what.to_string(),
            value: v,
        })
    }
}

/// Parse a literal as a finite number, returning `None` for anything else.
///
/// Used to tell numeric literals apart from symbolic expressions when the
/// input only arrives as text.
pub fn parse_finite(text: &str) -> Option<Real> {
    text.trim().parse::<Real>().ok().filter(|v| v.is_finite())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn finite_values_parse_back(v in -1e12_f64..1e12_f64) {
            let parsed = parse_finite(&v.to_string());
            prop_assert_eq!(parsed, Some(v));
        }
    }
}
