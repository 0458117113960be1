use assert_cmd::prelude::*;
use assert_fs::prelude::FileWriteStr;
// Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use std::process::Command; // Run programs

#[test]
fn invalid_config_fails_check() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("rkeval")?;

    let file = assert_fs::NamedTempFile::new("config.json")?;
    file.write_str("{")?;

    cmd.arg("config").arg("check").arg(file.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration"));
    Ok(())
}

#[test]
fn eval_reports_requested_metrics() -> Result<(), Box<dyn std::error::Error>> {
    let file = assert_fs::NamedTempFile::new("scores.tsv")?;
    file.write_str("mol-a\t1.0\t1\nmol-b\t0.9\t0\n")?;

    let mut cmd = Command::cargo_bin("rkeval")?;
    cmd.arg("eval")
        .arg("--data")
        .arg(file.path())
        .arg("--metrics")
        .arg("auc");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("auc").and(predicate::str::contains("1")));
    Ok(())
}

#[test]
fn eval_unknown_metric_fails() -> Result<(), Box<dyn std::error::Error>> {
    let file = assert_fs::NamedTempFile::new("scores.tsv")?;
    file.write_str("mol-a\t1.0\t1\nmol-b\t0.9\t0\n")?;

    let mut cmd = Command::cargo_bin("rkeval")?;
    cmd.arg("eval")
        .arg("--data")
        .arg(file.path())
        .arg("--metrics")
        .arg("f1");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
    Ok(())
}

#[test]
fn eval_emits_json_results() -> Result<(), Box<dyn std::error::Error>> {
    let file = assert_fs::NamedTempFile::new("scores.tsv")?;
    file.write_str("mol-a\t1.0\t1\nmol-b\t0.9\t0\n")?;

    let mut cmd = Command::cargo_bin("rkeval")?;
    cmd.arg("eval")
        .arg("--data")
        .arg(file.path())
        .arg("--metrics")
        .arg("auc")
        .arg("--json")
        .arg("--quiet");
    let output = cmd.output()?;
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["auc"], serde_json::json!(1.0));
    Ok(())
}

#[test]
fn top_k_lists_best_first() -> Result<(), Box<dyn std::error::Error>> {
    let file = assert_fs::NamedTempFile::new("scores.tsv")?;
    file.write_str("mol-low\t0.1\t0\nmol-best\t0.9\t1\nmol-mid\t0.5\t0\n")?;

    let mut cmd = Command::cargo_bin("rkeval")?;
    cmd.arg("top-k").arg("--data").arg(file.path()).arg("-k").arg("2");
    cmd.assert()
        .success()
        .stdout(predicate::str::is_match("mol-best[\\s\\S]*mol-mid")?)
        .stdout(predicate::str::contains("mol-low").not());
    Ok(())
}

#[test]
fn gen_schema_emits_a_valid_schema() -> Result<(), Box<dyn std::error::Error>> {
    let mut schema_cmd = Command::cargo_bin("rkeval")?;
    let schema_out = schema_cmd.arg("gen-schema").output()?;
    assert!(schema_out.status.success());
    let schema: serde_json::Value = serde_json::from_slice(&schema_out.stdout)?;

    let mut config_cmd = Command::cargo_bin("rkeval")?;
    let config_out = config_cmd.arg("config").arg("new").output()?;
    assert!(config_out.status.success());
    let config: serde_json::Value = serde_json::from_slice(&config_out.stdout)?;

    let mut scope = valico::json_schema::Scope::new();
    let compiled = scope
        .compile_and_return(schema, false)
        .expect("generated schema compiles");
    assert!(compiled.validate(&config).is_valid());
    Ok(())
}
