use assert_cmd::Command;

fn parse_output(stdout: &[u8]) -> Vec<(f64, f64)> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| {
            let (f, m) = line.split_once('\t').unwrap();
            (f.parse().unwrap(), m.parse().unwrap())
        })
        .collect()
}

#[test]
fn gensig_then_analyze_finds_tone() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("tone.csv");
    Command::cargo_bin("gofft-cli")
        .unwrap()
        .args(["gensig", "--ft", "60", "--fs", "1000", "-T", "4"])
        .arg(&path)
        .assert()
        .success();

    let out = Command::cargo_bin("gofft-cli")
        .unwrap()
        .args(["analyze", "--fs", "1000", "--ft", "60,120", "--mode", "shorttime"])
        .arg(&path)
        .assert()
        .success();
    let rows = parse_output(&out.get_output().stdout);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].0, 60.0);
    assert!(rows[0].1 > 0.45, "{rows:?}");
    assert!(rows[1].1 < 0.05, "{rows:?}");
}

#[test]
fn csv_without_rate_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("x.csv");
    std::fs::write(&path, "1.0\n0.0\n").unwrap();
    Command::cargo_bin("gofft-cli")
        .unwrap()
        .args(["analyze", "--ft", "1"])
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn validation_errors_surface() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("short.csv");
    std::fs::write(&path, "1.0\n0.0\n").unwrap();
    Command::cargo_bin("gofft-cli")
        .unwrap()
        .args(["analyze", "--fs", "100", "--ft", "1", "--mode", "shorttime"])
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn gensig_defaults_to_hundred_seconds() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("default.csv");
    Command::cargo_bin("gofft-cli")
        .unwrap()
        .args(["gensig", "--fs", "10"])
        .arg(&path)
        .assert()
        .success();
    let lines = std::fs::read_to_string(&path).unwrap().lines().count();
    assert_eq!(lines, 1000);
}
