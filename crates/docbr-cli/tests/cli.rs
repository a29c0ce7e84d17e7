use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

/// `docbr` with its config directory pointed at `home`.
fn docbr(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("docbr").unwrap();
    cmd.env("XDG_CONFIG_HOME", home).env("HOME", home);
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_parse_single_value_is_scalar() {
    let home = TempDir::new().unwrap();
    let value = stdout_json(docbr(home.path()).args(["parse", "cnpj", "155-59.A539000152", "--mask"]));
    assert_eq!(value, json!("15.559.539/0001-52"));
}

#[test]
fn test_parse_list_keeps_order_and_nulls() {
    let home = TempDir::new().unwrap();
    let value = stdout_json(docbr(home.path()).args(["parse", "cpf", "826-83.A688377", "000.000.000-00", "52998224725"]));
    assert_eq!(value, json!(["82683688377", null, "52998224725"]));
}

#[test]
fn test_validate_lazy() {
    let home = TempDir::new().unwrap();
    let value = stdout_json(docbr(home.path()).args(["validate", "cnh", "84223533040", "--lazy"]));
    assert_eq!(value, json!(true));

    let value = stdout_json(docbr(home.path()).args(["validate", "te", "389441060167", "123456782992"]));
    assert_eq!(value, json!([true, false]));
}

#[test]
fn test_attributes_all() {
    let home = TempDir::new().unwrap();
    let value = stdout_json(docbr(home.path()).args(["attributes", "tfone", "11987659876", "--attr", "*"]));
    assert_eq!(value, json!({"ddd": "11", "estado": "SP", "tipo": "celular"}));

    let value = stdout_json(docbr(home.path()).args(["attributes", "te", "389441060167", "-a", "estado"]));
    assert_eq!(value, json!("SP"));
}

#[test]
fn test_csv_output() {
    let home = TempDir::new().unwrap();
    docbr(home.path())
        .args(["validate", "cpf", "82683688377", "12345678900", "--format", "csv"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("input,valid")
                .and(predicate::str::contains("82683688377,true"))
                .and(predicate::str::contains("12345678900,false")),
        );
}

#[test]
fn test_text_output_scalar() {
    let home = TempDir::new().unwrap();
    docbr(home.path())
        .args(["parse", "placa", "ABC1234", "--mask", "-f", "text"])
        .assert()
        .success()
        .stdout("ABC-1234\n");
}

#[test]
fn test_input_file_and_csv_column() {
    let dir = TempDir::new().unwrap();
    let text = dir.path().join("values.txt");
    fs::write(&text, "82683688377\n\n12345678900\n").unwrap();

    let value = stdout_json(docbr(dir.path()).args(["validate", "cpf", "--input"]).arg(&text));
    assert_eq!(value, json!([true, false]));

    let csv = dir.path().join("people.csv");
    fs::write(&csv, "name,doc\nana,826.836.883-77\nbia,529.982.247-25\n").unwrap();
    let value = stdout_json(
        docbr(dir.path())
            .args(["attributes", "cpf", "-a", "regiao", "--column", "doc", "--input"])
            .arg(&csv),
    );
    assert_eq!(value, json!(["CE/MA/PI", "ES/RJ"]));
}

#[test]
fn test_stdin_values() {
    let home = TempDir::new().unwrap();
    let value = stdout_json(
        docbr(home.path())
            .args(["parse", "tfone", "--mask"])
            .write_stdin("11987659876\n98765-9876\n"),
    );
    assert_eq!(value, json!(["(11)98765-9876", "98765-9876"]));
}

#[test]
fn test_unknown_type_fails() {
    let home = TempDir::new().unwrap();
    docbr(home.path())
        .args(["validate", "rg", "123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not recognized").and(predicate::str::contains("cpf")));
}

#[test]
fn test_unknown_attribute_fails() {
    let home = TempDir::new().unwrap();
    docbr(home.path())
        .args(["attributes", "cnpj", "15559539000152", "--attr", "estado"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("estado"));

    docbr(home.path())
        .args(["attributes", "pis", "75145500065", "--attr", "*"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no attributes"));
}

#[test]
fn test_types_lists_registry() {
    let home = TempDir::new().unwrap();
    let value = stdout_json(docbr(home.path()).args(["types", "--format", "json"]));
    let types = value.as_array().unwrap();
    assert_eq!(types.len(), 10);
    assert_eq!(types[0]["type"], json!("cpf"));
    assert_eq!(types[0]["length"], json!(11));
    assert_eq!(types[0]["modulo"], json!(11));
    assert_eq!(types[0]["pattern"], json!(null));
    assert_eq!(types[7]["pattern"], json!(r"[a-zA-Z]{3}\s?\-?[0-9][A-Za-z0-9][0-9]{2}"));
    assert_eq!(types[9]["attributes"], json!(["ddd", "estado", "tipo"]));
}

#[test]
fn test_batch_writes_outputs() {
    let dir = TempDir::new().unwrap();
    let input_dir = dir.path().join("in");
    let output_dir = dir.path().join("out");
    fs::create_dir_all(&input_dir).unwrap();
    fs::write(input_dir.join("a.txt"), "82683688377\n11111111111\n").unwrap();
    fs::write(input_dir.join("b.txt"), "52998224725\n").unwrap();

    docbr(dir.path())
        .args(["batch", "cpf"])
        .arg(format!("{}/*.txt", input_dir.display()))
        .args(["--mode", "validate", "--format", "json", "--output-dir"])
        .arg(&output_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 2 files"));

    let a: Value = serde_json::from_str(&fs::read_to_string(output_dir.join("a.validate.json")).unwrap()).unwrap();
    assert_eq!(a, json!([true, false]));
    let b: Value = serde_json::from_str(&fs::read_to_string(output_dir.join("b.validate.json")).unwrap()).unwrap();
    assert_eq!(b, json!([true]));
}

#[test]
fn test_batch_without_matches_fails() {
    let dir = TempDir::new().unwrap();
    docbr(dir.path())
        .args(["batch", "cpf"])
        .arg(format!("{}/*.txt", dir.path().display()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}

#[test]
fn test_config_init_get_and_apply() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");

    docbr(dir.path())
        .args(["--config"])
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    docbr(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "output.format", "csv"])
        .assert()
        .success();

    docbr(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout("\"csv\"\n");

    // The configured format is now the default.
    docbr(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["parse", "cpf", "82683688377"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("input,value").and(predicate::str::contains("82683688377,82683688377")));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    docbr(dir.path())
        .arg("--config")
        .arg(dir.path().join("missing.json"))
        .args(["parse", "cpf", "82683688377"])
        .assert()
        .failure();
}
