use serde::Deserialize;
use std::error::Error;
use std::fs;

#[derive(Deserialize)]
struct BenchFile {
    env: EnvInfo,
    results: Vec<BenchRecord>,
}

#[derive(Deserialize)]
struct EnvInfo {
    cpu: String,
    rustc: String,
    flags: String,
    date: String,
    runner: String,
}

#[derive(Deserialize)]
struct BenchRecord {
    library: String,
    evaluator: String,
    size: usize,
    targets: usize,
    time_per_op_ns: f64,
    ops_per_sec: f64,
    allocations: usize,
    best: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let data = fs::read_to_string("../benchmarks/goertzel.json")?;
    let bf: BenchFile = serde_json::from_str(&data)?;

    let mut table = format!(
        "Last run: {} on {} ({}; {}; flags: `{}`)\n\n",
        bf.env.date,
        bf.env.runner,
        bf.env.cpu.trim(),
        bf.env.rustc,
        bf.env.flags
    );
    table.push_str("| Library | Evaluator | Samples | Targets | Time/op | Ops/sec | Allocations |\n");
    table.push_str("| --- | --- | --- | --- | --- | --- | --- |\n");
    for r in &bf.results {
        let time_us = r.time_per_op_ns / 1_000.0;
        let marker = if r.best { " **best**" } else { "" };
        table.push_str(&format!(
            "| {} | {}{} | {} | {} | {:.2} µs | {:.0} | {} |\n",
            r.library,
            r.evaluator,
            marker,
            r.size,
            r.targets,
            time_us,
            r.ops_per_sec,
            r.allocations
        ));
    }
    update_readme(&table)?;
    Ok(())
}

fn update_readme(table: &str) -> Result<(), Box<dyn Error>> {
    let path = "../README.md";
    let content = fs::read_to_string(path)?;
    let start = "<!-- BENCH_START -->";
    let end = "<!-- BENCH_END -->";
    if let (Some(s), Some(e)) = (content.find(start), content.find(end)) {
        let mut new_content = String::new();
        new_content.push_str(&content[..s + start.len()]);
        new_content.push('\n');
        new_content.push_str(table);
        new_content.push_str(&content[e..]);
        fs::write(path, new_content)?;
    }
    Ok(())
}
