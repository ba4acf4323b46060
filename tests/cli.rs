use assert_cmd::prelude::*; // Add methods on commands
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command; // Run programs
use test_log::test;

const BIN: &str = "txn-dash";

const SAMPLE: &str = "\
Time,V1,Amount,Class
0,-1.3598,149.62,0
0,1.1918,2.69,0
3600,-1.3583,378.66,1
3601,-0.9662,123.50,1
7200,-1.1582,69.99,0
7300,-0.4259,3.67,0
90000,1.2296,4.99,1
";

fn sample_file(dir: &assert_fs::TempDir) -> Result<assert_fs::fixture::ChildPath, Box<dyn std::error::Error>> {
    let file = dir.child("creditcard.csv");
    file.write_str(SAMPLE)?;
    Ok(file)
}

#[cfg_attr(miri, ignore)]
#[test]
fn cli_argument_parsing() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg("-h");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Print help"));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains(BIN));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("-v").arg("-q").arg("overview");
    cmd.assert().failure().stderr(predicate::str::contains(
        "argument '--verbose...' cannot be used with '--quiet'",
    ));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--log").arg("cats").arg("overview");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("'--log <LOG_LEVEL>'"));
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn missing_file_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.env_remove("TXN_DASH_FILE")
        .args(["-f", "Non-existing-file.csv", "overview"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Non-existing-file.csv"));
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn missing_columns_are_named() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let file = dir.child("bad.csv");
    file.write_str("Time,V1\n0,1\n")?;

    Command::cargo_bin(BIN)?
        .arg("-f")
        .arg(file.path())
        .arg("overview")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Class, Amount"));
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn overview_prints_counts_and_ranges() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let file = sample_file(&dir)?;

    Command::cargo_bin(BIN)?
        .arg("-f")
        .arg(file.path())
        .arg("overview")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fraud Transactions:  3"))
        .stdout(predicate::str::contains("Normal Transactions: 4"))
        .stdout(predicate::str::contains("  2 to 3\n  6 to 6\n"))
        .stdout(predicate::str::contains("  0 to 1\n  4 to 5\n"))
        .stdout(predicate::str::contains("\x1b[").not());
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn reads_stdin_by_default() -> Result<(), Box<dyn std::error::Error>> {
    assert_cmd::Command::cargo_bin(BIN)?
        .env_remove("TXN_DASH_FILE")
        .arg("upload")
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Rows: 7"))
        .stdout(predicate::str::contains("Total Columns: 5"));
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn index_viewer_shows_status() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let file = sample_file(&dir)?;

    Command::cargo_bin(BIN)?
        .env("TXN_DASH_FILE", file.path())
        .args(["index", "--start", "2", "--end", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Row 3: FRAUD transaction"))
        .stdout(predicate::str::contains("Row 4: NORMAL transaction"))
        .stdout(predicate::str::contains("Row 5").not());

    Command::cargo_bin(BIN)?
        .env("TXN_DASH_FILE", file.path())
        .args(["index", "--start", "0", "--end", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("index 99 is out of bounds"));
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn amount_filter_exports_csv() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let file = sample_file(&dir)?;
    let export = dir.child("out.csv");

    Command::cargo_bin(BIN)?
        .arg("-f")
        .arg(file.path())
        .args(["visualize", "amount", "--min", "3", "--max", "100", "--export"])
        .arg(export.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Filtered 3 transactions in amount range"))
        .stdout(predicate::str::contains("Exported 3 rows"));

    export.assert("Time,V1,Amount,Class,Hour\n7200,-1.1582,69.99,0,2\n7300,-0.4259,3.67,0,2\n90000,1.2296,4.99,1,1\n");
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn charts_render() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let file = sample_file(&dir)?;

    Command::cargo_bin(BIN)?
        .arg("-f")
        .arg(file.path())
        .args(["visualize", "hourly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fraud transactions per hour"))
        .stdout(predicate::str::contains("⣿"));

    Command::cargo_bin(BIN)?
        .arg("-f")
        .arg(file.path())
        .args(["visualize", "pie"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fraud   42.9% (3)"))
        .stdout(predicate::str::contains("Normal  57.1% (4)"));
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn bad_color_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let file = sample_file(&dir)?;

    Command::cargo_bin(BIN)?
        .arg("-f")
        .arg(file.path())
        .args(["--color", "#12", "overview"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hex colour must be exactly 6 digits"));
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn auxiliary_commands_need_no_input() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin(BIN)?
        .arg("colors")
        .assert()
        .success()
        .stdout(predicate::str::contains("orange | industrial"));

    Command::cargo_bin(BIN)?
        .arg("examples")
        .assert()
        .success()
        .stdout(predicate::str::contains("visualize pie"));
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn no_color_flag_gives_plain_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let file = sample_file(&dir)?;

    Command::cargo_bin(BIN)?
        .arg("-f")
        .arg(file.path())
        .args(["--no-color", "--color", "red", "visualize", "pie"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fraud   42.9% (3)"))
        .stdout(predicate::str::contains("\x1b[").not());
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn warnings_go_to_stdout_only() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let file = sample_file(&dir)?;

    Command::cargo_bin(BIN)?
        .env_remove("TXN_DASH_LOG")
        .arg("-f")
        .arg(file.path())
        .args(["index", "--start", "4", "--end", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "End index must be greater than or equal to start index.",
        ))
        .stderr(predicate::str::contains("End index").not());
    Ok(())
}
