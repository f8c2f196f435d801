use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn qst(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qst"))
        .args(args)
        .output()
        .unwrap()
}

fn qst_gen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qst-gen"))
        .args(args)
        .output()
        .unwrap()
}

fn write_input(dir: &Path) -> String {
    let path = dir.join("input.dat");
    fs::write(&path, "5\n3\n3\n1\n4\n1\n5\n9\n2\n6\n").unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn stdout_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());

    let out = qst(&["-r", "3", "-t", "4", "--check", &input]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(
        lines[0],
        "method,input,size,threshold,wall_nsecs,user_nsecs,system_nsecs"
    );
    assert_eq!(lines.len(), 4);

    for line in &lines[1..] {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 7);
        assert_eq!(fields[0], "DualPivotQuicksort");
        assert!(Path::new(fields[1]).is_absolute());
        assert_eq!(fields[2], "10");
        assert_eq!(fields[3], "4");
        assert!(fields[4].parse::<u128>().is_ok());
    }
}

#[test]
fn pass_through_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());
    let output = dir.path().join("results.csv");
    let output = output.to_str().unwrap();

    for method in ["StdStable", "HeapSort"] {
        let out = qst(&[
            "-m", method, "-o", output, "-c", "host", "-v", "box", &input,
        ]);
        assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
        assert!(out.stdout.is_empty());
    }

    let csv = fs::read_to_string(output).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with(",system_nsecs,host"));
    assert!(lines[1].starts_with("StdStable,") && lines[1].ends_with(",box"));
    assert!(lines[2].starts_with("HeapSort,") && lines[2].ends_with(",box"));
}

#[test]
fn column_value_mismatch_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());

    let out = qst(&["-c", "a", "-c", "b", "-v", "1", &input]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("qst: "));
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.dat");

    let out = qst(&[missing.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn show_methods() {
    let out = qst(&["--show-methods", "threshold"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "DualPivotQuicksort\n");

    let out = qst(&["--show-methods", "all"]);
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 5);
    assert!(stdout.lines().any(|line| line == "StdUnstable"));
}

#[test]
fn generate_then_benchmark() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    let data = data.to_str().unwrap();

    let out = qst_gen(&[
        "-o",
        data,
        "--min",
        "100",
        "--max",
        "300",
        "--increment",
        "100",
    ]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    // A second run without --force refuses to touch the directory.
    let out = qst_gen(&["-o", data, "--min", "100", "--max", "300"]);
    assert_eq!(out.status.code(), Some(1));

    let input = Path::new(data).join("pipe_organ").join("2.dat.gz");
    let out = qst(&["--check", "-t", "10", input.to_str().unwrap()]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    let row: Vec<&str> = stdout.lines().nth(1).unwrap().split(',').collect();
    assert_eq!(row[2], "300");
    assert_eq!(row[3], "10");
}
