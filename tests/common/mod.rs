use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

#[allow(dead_code)]
pub fn run_scribefix(args: &[&str], stdin: &str) -> Output {
    TestEnv::new().run(args, stdin)
}

pub struct TestEnv {
    home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temporary HOME dir"),
        }
    }

    pub fn run(&self, args: &[&str], stdin: &str) -> Output {
        self.run_with_env(args, stdin, &[])
    }

    #[allow(dead_code)]
    pub fn run_with_env(&self, args: &[&str], stdin: &str, envs: &[(&str, &str)]) -> Output {
        let mut child = Command::new(env!("CARGO_BIN_EXE_scribefix"))
            .args(args)
            .env("HOME", self.home.path())
            .env_remove("SCRIBEFIX_VOCABULARY")
            .env_remove("RUST_LOG")
            .envs(envs.iter().copied())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to execute scribefix binary");

        // The child may exit before reading (e.g. on a usage error)
        let _ = child
            .stdin
            .take()
            .expect("child stdin")
            .write_all(stdin.as_bytes());

        child.wait_with_output().expect("wait for scribefix binary")
    }

    #[allow(dead_code)]
    pub fn vocabulary_path(&self) -> PathBuf {
        self.home
            .path()
            .join(".clawdbot")
            .join("config")
            .join("vocabulary.json")
    }

    #[allow(dead_code)]
    pub fn write_vocabulary(&self, contents: &str) {
        let path = self.vocabulary_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create vocabulary parent directory");
        }
        std::fs::write(&path, contents).expect("write vocabulary file");
    }
}
