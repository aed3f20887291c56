use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DANFE: &str = "\
DANFE - DOCUMENTO AUXILIAR DA NOTA FISCAL ELETRONICA
NF-e No. 026229 SERIE 1
1234567 SERINGA DESCARTAVEL 5ML Lt: AB-123 Q: 10 Dt. Val.: 31/12/2026 R$ 1,50
DADOS ADICIONAIS
87654321 ACIDO HIALURONICO 1ML Lt: HX-7 Q: 2,5 Dt. Val.: 15/06/2027 R$ 1.234,56
";

/// Command with an isolated config directory.
fn danfe(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("danfe").unwrap();
    cmd.env("XDG_CONFIG_HOME", home)
        .env("HOME", home)
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn parse_text_argument_to_json() {
    let home = TempDir::new().unwrap();
    let output = danfe(home.path())
        .args(["parse", "--text", DANFE])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["invoice_number"], "026229");
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
    assert_eq!(json["items"][0]["name"], "SERINGA DESCARTAVEL 5ML");
    assert_eq!(json["items"][1]["quantity"], 2.5);
    assert_eq!(json["items"][1]["unit_price"], 1234.56);
}

#[test]
fn parse_stdin() {
    let home = TempDir::new().unwrap();
    danfe(home.path())
        .args(["parse", "--compact"])
        .write_stdin(DANFE)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""invoice_number":"026229""#));
}

#[test]
fn parse_file_to_csv() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("026229.txt");
    fs::write(&input, DANFE).unwrap();

    danfe(home.path())
        .arg("parse")
        .arg(&input)
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "invoice_number,code,name,lot,quantity,expiry,unit_price,total",
        ))
        .stdout(predicate::str::contains(
            "026229,87654321,ACIDO HIALURONICO 1ML,HX-7,2.5,15/06/2027,1234.56",
        ));
}

#[test]
fn parse_text_format_uses_brl_amounts() {
    let home = TempDir::new().unwrap();
    danfe(home.path())
        .args(["parse", "--format", "text", "--text", DANFE])
        .assert()
        .success()
        .stdout(predicate::str::contains("NF-e: 026229"))
        .stdout(predicate::str::contains("Unit price: R$ 1.234,56"));
}

#[test]
fn parse_writes_output_file() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("out.json");

    danfe(home.path())
        .args(["parse", "--text", DANFE, "--output"])
        .arg(&out)
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["invoice_number"], "026229");
}

#[test]
fn parse_fails_without_header() {
    let home = TempDir::new().unwrap();
    danfe(home.path())
        .args([
            "parse",
            "--text",
            "1234567 LUVA Lt: L1 Q: 1 Dt. Val.: 01/01/2027 R$ 9,90",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invoice number (NF-e) not found"));
}

#[test]
fn parse_fails_without_products() {
    let home = TempDir::new().unwrap();
    danfe(home.path())
        .args(["parse", "--text", "NF-e No. 026229\nVALOR TOTAL R$ 10,00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no products found"));
}

#[test]
fn parse_rejects_pdf_input() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("danfe.pdf");
    fs::write(&input, b"%PDF-1.4").unwrap();

    danfe(home.path())
        .arg("parse")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("PDF input is not supported"));
}

#[test]
fn parse_validate_reports_issues() {
    let home = TempDir::new().unwrap();
    danfe(home.path())
        .args([
            "parse",
            "--validate",
            "--text",
            "NF-e 9\n1234567 Lt: L1 Q: 1 Dt. Val.: 31/02/2027 R$ 9,90",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Validation issues:"))
        .stderr(predicate::str::contains("empty product name"))
        .stderr(predicate::str::contains("31/02/2027 is not a valid date"));
}

#[test]
fn parse_logs_issues_without_validate_flag() {
    let home = TempDir::new().unwrap();
    danfe(home.path())
        .args([
            "parse",
            "--text",
            "NF-e 9\n1234567 Lt: L1 Q: 1 Dt. Val.: 01/01/2027 R$ 9,90",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Validation issues:").not())
        .stderr(predicate::str::contains("empty product name"));
}

#[test]
fn parse_text_format_with_oversized_total() {
    let home = TempDir::new().unwrap();
    danfe(home.path())
        .args([
            "parse",
            "--format",
            "text",
            "--text",
            "NF-e 1\n1234567 X Lt: A Q: 10000000000000000 Dt. Val.: 01/01/2027 R$ 10000000000000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("NF-e: 1"))
        .stdout(predicate::str::contains("Total: n/a"));
}

#[test]
fn batch_with_summary_and_errors() {
    let home = TempDir::new().unwrap();
    let input_dir = home.path().join("in");
    let output_dir = home.path().join("out");
    fs::create_dir_all(&input_dir).unwrap();

    fs::write(input_dir.join("a.txt"), DANFE).unwrap();
    fs::write(input_dir.join("b.txt"), "no header here").unwrap();
    fs::write(input_dir.join("ignored.md"), DANFE).unwrap();

    let pattern = format!("{}/*", input_dir.display());
    danfe(home.path())
        .args(["batch", &pattern, "--continue-on-error", "--summary", "--output-dir"])
        .arg(&output_dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("1 successful, 1 failed"));

    assert!(output_dir.join("a.json").exists());
    assert!(!output_dir.join("b.json").exists());
    assert!(!output_dir.join("ignored.json").exists());

    let summary = fs::read_to_string(output_dir.join("summary.csv")).unwrap();
    assert!(summary.contains("a.txt,success,026229,2,"));
    assert!(summary.contains("b.txt,error"));
}

#[test]
fn batch_stops_on_first_error() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("bad.txt"), "NF-e 1\nnothing").unwrap();

    let pattern = format!("{}/*.txt", home.path().display());
    danfe(home.path())
        .args(["batch", &pattern])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no products found"));
}

#[test]
fn config_init_get_set() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("danfe.json");
    let config_arg = config.to_str().unwrap();

    danfe(home.path())
        .args(["config", "init", "--output", config_arg])
        .assert()
        .success();

    danfe(home.path())
        .args(["-c", config_arg, "config", "set", "output.pretty_json", "false"])
        .assert()
        .success();

    danfe(home.path())
        .args(["-c", config_arg, "config", "get", "output.pretty_json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("false"));

    danfe(home.path())
        .args(["-c", config_arg, "config", "set", "output.no_such_key", "1"])
        .assert()
        .failure();

    // compact JSON now comes from the config file
    danfe(home.path())
        .args(["-c", config_arg, "parse", "--text", DANFE])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"invoice_number":"026229","items":["#));
}
