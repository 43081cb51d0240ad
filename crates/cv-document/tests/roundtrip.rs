use cv_core::{Var, VarBuilder, VarValue};
use cv_document::*;

fn sample_vars() -> Vec<Var> {
    vec![
        VarBuilder::new("g", 9.81)
            .description("standard gravity")
            .build()
            .unwrap(),
        VarBuilder::new("r", "√(g)").build().unwrap(),
        VarBuilder::new("n", 42.0).build().unwrap(),
    ]
}

fn assert_same_pairs(expected: &[Var], actual: &[Var]) {
    assert_eq!(expected.len(), actual.len());
    for (a, b) in expected.iter().zip(actual) {
        assert_eq!(a.name(), b.name());
        assert_eq!(a.value(), b.value());
        assert_eq!(a.description(), b.description());
    }
}

#[test]
fn roundtrip_json_file() {
    let path = std::env::temp_dir().join("cv_document_roundtrip.json");
    let vars = sample_vars();

    write_vars(&path, &JsonCodec, &vars).unwrap();
    let loaded = read_vars(&path, &JsonCodec).unwrap();

    assert_same_pairs(&vars, &loaded);
}

#[test]
fn roundtrip_yaml_file() {
    let path = std::env::temp_dir().join("cv_document_roundtrip.yaml");
    let vars = sample_vars();

    write_vars(&path, &DocumentFormat::Yaml, &vars).unwrap();
    let loaded = read_vars(&path, &DocumentFormat::Yaml).unwrap();

    assert_same_pairs(&vars, &loaded);
}

#[test]
fn roundtrip_empty_list() {
    let text = JsonCodec.encode(&[]).unwrap();
    let loaded = JsonCodec.decode(&text).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn legacy_yaml_document_is_migrated() {
    let text = "vars:\n  - name: a\n    value: \"3\"\n  - name: b\n    value: a * 2\n";
    let loaded = YamlCodec.decode(text).unwrap();
    assert_eq!(loaded[0].value(), &VarValue::Number(3.0));
    assert_eq!(loaded[1].value().as_expression(), Some("a * 2"));
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("cv_document_does_not_exist.json");
    let _ = std::fs::remove_file(&path);
    let err = read_vars(&path, &JsonCodec).unwrap_err();
    assert!(matches!(err, DocumentError::Io(_)));
}
