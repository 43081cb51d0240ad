use std::collections::{HashMap, HashSet};

use cv_registry::*;
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("e".to_string()),
        Just("π".to_string()),
        Just("i".to_string()),
        "[a-c]{1,2}",
    ]
}

proptest! {
    #[test]
    fn add_var_keeps_names_unique(
        ops in prop::collection::vec((name_strategy(), -1e6_f64..1e6_f64), 0..40)
    ) {
        let mut registry = VariableRegistry::new();
        registry.load(None).unwrap();

        for (name, value) in &ops {
            registry.add_var(None, VarBuilder::new(name.as_str(), *value)).unwrap();
            let unique: HashSet<&str> = registry.vars().iter().map(Var::name).collect();
            prop_assert_eq!(unique.len(), registry.len());
        }

        // The last write to each name is what the registry holds.
        let expected: HashMap<&str, f64> = ops.iter().map(|(n, v)| (n.as_str(), *v)).collect();
        for (name, value) in expected {
            prop_assert_eq!(registry.get_var(name).unwrap().value().as_number(), Some(value));
        }
    }

    #[test]
    fn merge_always_contains_catalog(
        names in prop::collection::vec(name_strategy(), 0..10)
    ) {
        let mut registry = VariableRegistry::new();
        registry.load(None).unwrap();

        let incoming: Vec<Var> = names
            .iter()
            .map(|n| VarBuilder::new(n.as_str(), 1.0).build().unwrap())
            .collect();
        registry.merge(incoming);

        let unique: HashSet<&str> = registry.vars().iter().map(Var::name).collect();
        prop_assert_eq!(unique.len(), registry.len());
        for name in CATALOG {
            prop_assert!(registry.contains(name));
        }
        for name in &names {
            prop_assert!(!registry.get_var(name).unwrap().is_system());
        }
    }
}
