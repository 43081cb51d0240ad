//! The fixed catalog of system constants.

use crate::var::{Var, VarBuilder};
use crate::{CoreError, CoreResult};

/// Names of the built-in constants, in load order.
pub const CATALOG: [&str; 3] = ["e", "π", "i"];

pub fn is_catalog_name(name: &str) -> bool {
    CATALOG.contains(&name)
}

/// Build the system variable for a catalog name.
pub fn system_var(name: &str) -> CoreResult<Var> {
    let builder = match name {
        "e" => VarBuilder::new(name, std::f64::consts::E),
        "π" => VarBuilder::new(name, std::f64::consts::PI),
        "i" => VarBuilder::new(name, "√(-1)"),
        other => {
            return Err(CoreError::UnknownConstant {
                name: other.to_string(),
            });
        }
    };
    builder.system(true).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VarValue;

    #[test]
    fn every_catalog_name_resolves() {
        for name in CATALOG {
            let var = system_var(name).unwrap();
            assert_eq!(var.name(), name);
            assert!(var.is_system());
        }
    }

    #[test]
    fn constant_values() {
        assert_eq!(
            system_var("e").unwrap().value(),
            &VarValue::Number(std::f64::consts::E)
        );
        assert_eq!(
            system_var("π").unwrap().value(),
            &VarValue::Number(std::f64::consts::PI)
        );
        assert_eq!(system_var("i").unwrap().value().as_expression(), Some("√(-1)"));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = system_var("φ").unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownConstant {
                name: "φ".to_string()
            }
        );
        assert!(!is_catalog_name("φ"));
    }
}
