use gofft_cli::{read_signal, write_csv};
use std::fs;

#[test]
fn csv_roundtrip_keeps_samples() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("sig.csv");
    let samples = [0.0, 0.25, -1.5, 1e-9];
    write_csv(&path, &samples).unwrap();
    let signal = read_signal(&path, 0).unwrap();
    assert_eq!(signal.samples, samples);
    assert_eq!(signal.sample_rate, None);
}

#[test]
fn picks_column_and_skips_blank_lines() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("cols.csv");
    fs::write(&path, "0.0, 1.0\n\n0.5, 2.0\n").unwrap();
    let signal = read_signal(&path, 1).unwrap();
    assert_eq!(signal.samples, [1.0, 2.0]);
}

#[test]
fn reports_bad_line() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("bad.csv");
    fs::write(&path, "1.0\nabc\n").unwrap();
    let err = read_signal(&path, 0).unwrap_err();
    assert!(err.to_string().contains("line 2"), "{err}");
}
