use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use std::process::{Command,Stdio}; // Run programs
use std::path::Path;
use std::fs::File;

#[test]
fn convert_simple_to_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("apnkit")?;
    let expected =
"form\tlemma\tmorph\tpos\tindex
mundum\tMVNDVS1\tA231       \tA\t0001
et\tET\t           \tS\t0001

uidet\tVIDEO\tB1 1 1113  \tB\t0002
illa\tILLE\tI 11       \tI6\t0002
";
    cmd.arg("convert")
        .arg("-s").arg(Path::new("tests").join("sample.APN"))
        .assert()
        .success()
        .stdout(expected);
    Ok(())
}

#[test]
fn convert_enhanced_to_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("apnkit")?;
    let expected =
"form\tlemma\tmorph\tpos\tindex
mundum\tMVNDVS1\tCase=Acc|Numb=Sing\tNOM2\t0001
et\tET\tMORPH=EMPTY\tCONcoo\t0001

uidet\tVIDEO\tNumb=Sing|Mood=Ind|Tense=Pres|Voice=Act|Person=3\tVER\t0002
illa\tILLE\tCase=Nom|Numb=Sing\tPROdem\t0002
";
    cmd.arg("convert")
        .arg("-s").arg(Path::new("tests").join("sample.APN"))
        .arg("-e")
        .assert()
        .success()
        .stdout(expected);
    Ok(())
}

#[test]
fn convert_to_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = Command::cargo_bin("apnkit")?;
    cmd.arg("convert")
        .arg("-s").arg(Path::new("tests").join("sample.APN"))
        .arg("-o").arg(dir.path())
        .arg("--lemmas")
        .assert()
        .success();
    let tsv = std::fs::read_to_string(dir.path().join("sample.tsv"))?;
    assert!(tsv.starts_with("form\tlemma\tmorph\tpos\tindex\n"));
    assert_eq!(tsv.lines().filter(|l| l.len()>0).count(),5);
    let lemmas = std::fs::read_to_string(dir.path().join("_lemma.txt"))?;
    assert_eq!(lemmas,"ET\nILLE\nMVNDVS1\nVIDEO\n");
    Ok(())
}

#[test]
fn convert_missing_source() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("apnkit")?;
    cmd.arg("convert")
        .arg("-s").arg("no_such_file.APN")
        .assert()
        .failure()
        .stderr(predicate::str::contains("FileNotFound"));
    Ok(())
}

#[test]
fn verify_piped_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("apnkit")?;
    if let Ok(fd) = File::open(Path::new("tests").join("sample.APN")) {
        cmd.arg("verify")
            .arg("-e")
            .stdin(Stdio::from(fd))
            .assert()
            .success()
            .stdout(predicate::str::contains("4 records"))
            .stderr(predicate::str::contains("Syntax OK"));
    }
    Ok(())
}

#[test]
fn tags_pos_table() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("apnkit")?;
    cmd.arg("tags")
        .arg("-t").arg("pos")
        .assert()
        .success()
        .stdout(predicate::str::contains("S\tCONcoo"));
    Ok(())
}

#[test]
fn tags_morph_table_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("apnkit")?;
    cmd.arg("tags")
        .arg("-t").arg("morph")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("Case=Acc"));
    Ok(())
}

#[test]
fn no_subcommand_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("apnkit")?;
    cmd.assert().failure();
    Ok(())
}
