//! Scripted git invoker for deterministic resolver tests

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use gitcfg_git::{Error, GitInvoker, Result};

/// One canned answer for a scripted invocation.
enum Response {
    Ok(Vec<u8>),
    Fail(String),
}

/// Replays a fixed sequence of plumbing answers in invocation order.
///
/// Every call pops the next scripted response; running past the end of the
/// script fails the invocation with a recognisable stderr message so a test
/// that issues more queries than expected surfaces immediately. All
/// invocations are recorded for assertion via [`ScriptedGit::calls`].
#[derive(Default)]
pub struct ScriptedGit {
    script: Mutex<VecDeque<Response>>,
    calls: Mutex<Vec<(Option<PathBuf>, Vec<String>)>>,
}

impl ScriptedGit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful invocation returning `stdout` bytes.
    pub fn answer(self, stdout: impl Into<Vec<u8>>) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Response::Ok(stdout.into()));
        self
    }

    /// Queue a successful invocation returning a trimmed text line.
    pub fn answer_line(self, line: &str) -> Self {
        self.answer(format!("{line}\n").into_bytes())
    }

    /// Queue a failing invocation with the given stderr.
    pub fn fail(self, stderr: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Response::Fail(stderr.to_string()));
        self
    }

    /// Arguments of every invocation issued so far, in order.
    pub fn calls(&self) -> Vec<(Option<PathBuf>, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of scripted responses not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.lock().unwrap().len()
    }
}

#[async_trait]
impl GitInvoker for ScriptedGit {
    async fn run(&self, dir: Option<&Path>, args: &[&str]) -> Result<Vec<u8>> {
        self.calls.lock().unwrap().push((
            dir.map(Path::to_path_buf),
            args.iter().map(|s| s.to_string()).collect(),
        ));

        match self.script.lock().unwrap().pop_front() {
            Some(Response::Ok(stdout)) => Ok(stdout),
            Some(Response::Fail(stderr)) => Err(Error::ExternalTool {
                args: args.iter().map(|s| s.to_string()).collect(),
                stderr,
            }),
            None => Err(Error::ExternalTool {
                args: args.iter().map(|s| s.to_string()).collect(),
                stderr: "scripted invoker exhausted".to_string(),
            }),
        }
    }
}
