use anyhow::{bail, Context, Result};
use std::env;
use std::process::Command;

/// Options derived from the host machine used to configure cargo commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub features: Vec<String>,
    pub example: String,
}

impl BuildConfig {
    /// Join features into a single string suitable for passing to cargo.
    pub fn features_arg(&self) -> Option<String> {
        if self.features.is_empty() {
            None
        } else {
            Some(self.features.join(" "))
        }
    }

    fn apply_features(&self, cmd: &mut Command) {
        if let Some(f) = self.features_arg() {
            cmd.arg("--features").arg(f);
        }
    }
}

/// Detect build configuration from the current machine.
pub fn detect_config() -> BuildConfig {
    let extra = env::var("GOFFT_FEATURES").unwrap_or_default();
    compute_config(detect_nproc(), &extra)
}

fn detect_nproc() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Compute a [`BuildConfig`] from supplied inputs. This is separated for testing.
pub fn compute_config(nproc: usize, extra: &str) -> BuildConfig {
    let mut features: Vec<String> = Vec::new();
    if nproc > 1 {
        features.push("parallel".into());
    }
    for feat in extra.split_whitespace() {
        if !features.iter().any(|f| f == feat) {
            features.push(feat.to_string());
        }
    }

    let example = if features.iter().any(|f| f == "parallel") {
        "parallel_benchmark".to_string()
    } else {
        "goertzel".to_string()
    };

    BuildConfig { features, example }
}

pub fn build_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["build", "--workspace"]);
    cfg.apply_features(&mut cmd);
    cmd
}

pub fn test_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.arg("test");
    cfg.apply_features(&mut cmd);
    cmd
}

pub fn clippy_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["clippy", "--workspace", "--all-targets", "--all-features"]);
    cmd
}

pub fn fmt_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["fmt", "--all"]);
    cmd
}

pub fn demo_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--example", &cfg.example, "--release"]);
    cfg.apply_features(&mut cmd);
    cmd
}

pub fn bench_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "--manifest-path", "gofft-bench/Cargo.toml"]);
    if cfg.features.iter().any(|f| f == "parallel") {
        cmd.args(["--features", "parallel"]);
    }
    cmd
}

pub fn update_bench_readme_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args([
        "run",
        "--manifest-path",
        "gofft-bench/Cargo.toml",
        "--example",
        "update_bench_readme",
        "--release",
    ]);
    cmd
}

/// Run the CLI over a signal file and print the magnitude of each target.
pub fn sanity_command(input: &str, ft: &str) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["run", "-r", "-p", "gofft-cli", "--", "analyze", "--ft", ft, input]);
    cmd
}

/// Formatting check, lints and tests, stopping at the first failure.
pub fn ci(cfg: &BuildConfig) -> Result<()> {
    let mut fmt = fmt_command();
    fmt.arg("--check");
    let steps = [("fmt", fmt), ("clippy", clippy_command()), ("test", test_command(cfg))];
    for (name, mut cmd) in steps {
        let status = cmd
            .status()
            .with_context(|| format!("failed to spawn cargo {name}"))?;
        if !status.success() {
            bail!("cargo {name} failed with {status}");
        }
    }
    Ok(())
}
