use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

// Shared harness for the CLI tests. Every test gets its own working
// directory, so downloads, symlinks and installer output never leak
// between tests or into the real environment.
#[allow(dead_code)]
pub struct TestContext {
    pub temp_dir: TempDir,
    pub bin_path: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let bin_path = PathBuf::from(env!("CARGO_BIN_EXE_cudakit"));

        Self { temp_dir, bin_path }
    }

    /// Root of the fake conda environment inside the temp dir.
    pub fn prefix(&self) -> PathBuf {
        self.temp_dir.path().join("env")
    }

    pub fn cc(&self) -> PathBuf {
        self.prefix().join("bin").join("x86_64-conda-gcc")
    }

    pub fn cxx(&self) -> PathBuf {
        self.prefix().join("bin").join("x86_64-conda-g++")
    }

    /// Command pre-wired with a complete build environment. The process
    /// environment is cleared first so the host's CC/CXX/prefixes cannot
    /// bleed into a test.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(&self.bin_path);
        cmd.current_dir(self.temp_dir.path());
        cmd.env_clear();
        cmd.env("CONDA_PREFIX", self.prefix());
        cmd.env("CC", self.cc());
        cmd.env("CXX", self.cxx());
        cmd.env("PATH", "/usr/bin:/bin");
        cmd
    }

    /// Drop a fake runfile installer into the working directory so the
    /// download step is skipped. The script records its arguments and the
    /// PATH it was launched with, then exits with `exit_code`.
    pub fn seed_installer(&self, version: &str, exit_code: i32) -> PathBuf {
        let path = self
            .temp_dir
            .path()
            .join(format!("cuda_{}_installer.run", version));
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > args.txt\nprintf '%s\\n' \"$PATH\" > path.txt\nexit {}\n",
            exit_code
        );
        fs::write(&path, script).expect("Failed to write fake installer");
        path
    }

    /// Arguments the fake installer was invoked with, one per line.
    pub fn recorded_args(&self) -> Vec<String> {
        let raw = fs::read_to_string(self.temp_dir.path().join("args.txt"))
            .expect("Fake installer did not record its arguments");
        raw.lines().map(String::from).collect()
    }

    /// PATH the fake installer saw.
    pub fn recorded_path(&self) -> String {
        fs::read_to_string(self.temp_dir.path().join("path.txt"))
            .expect("Fake installer did not record its PATH")
            .trim_end()
            .to_string()
    }
}

#[allow(dead_code)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: std::process::ExitStatus,
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            status: output.status,
        }
    }
}

#[allow(dead_code)]
impl CommandOutput {
    pub fn assert_success(&self) -> &Self {
        if !self.status.success() {
            panic!(
                "Command failed with status {:?}\nstdout: {}\nstderr: {}",
                self.status.code(),
                self.stdout,
                self.stderr
            );
        }
        self
    }

    pub fn assert_failure(&self) -> &Self {
        if self.status.success() {
            panic!(
                "Command unexpectedly succeeded\nstdout: {}\nstderr: {}",
                self.stdout, self.stderr
            );
        }
        self
    }

    pub fn assert_stdout_contains(&self, text: &str) -> &Self {
        assert!(
            self.stdout.contains(text),
            "Stdout did not contain '{}'\nActual stdout: {}",
            text,
            self.stdout
        );
        self
    }
}
