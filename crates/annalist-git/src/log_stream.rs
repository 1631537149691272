//! Spawning and draining the `git log` subprocess.

use std::io::BufReader;
use std::path::PathBuf;
use std::process::{Child, ChildStdout, Command, Stdio};

use tracing::debug;

use crate::{GitError, GitResult};

/// The fixed argument list: full history, mode-change summaries, no
/// merge commits, no color codes, per-file diff statistics, ISO dates.
const GIT_LOG_ARGS: [&str; 6] = [
    "log",
    "--summary",
    "--no-merges",
    "--no-color",
    "--stat",
    "--date=short",
];

/// Builder for the fixed `git log` invocation.
#[derive(Debug, Default)]
pub struct LogCommand {
    directory: Option<PathBuf>,
}

impl LogCommand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs git in the given directory instead of the current one.
    #[must_use]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Spawns the subprocess with stdout piped; stderr passes through to
    /// the caller's stderr.
    ///
    /// # Errors
    ///
    /// Returns an error if the `git` executable cannot be started.
    pub fn spawn(self) -> GitResult<LogStream> {
        let mut command = Command::new("git");
        command.args(GIT_LOG_ARGS).stdout(Stdio::piped());
        if let Some(directory) = &self.directory {
            command.current_dir(directory);
        }
        debug!(?command, "spawning git log");

        let mut child = command.spawn().map_err(GitError::Spawn)?;
        let stdout = child.stdout.take().ok_or(GitError::Pipe)?;
        Ok(LogStream {
            child,
            reader: BufReader::new(stdout),
        })
    }
}

/// A running `git log` whose output is readable line by line.
pub struct LogStream {
    child: Child,
    reader: BufReader<ChildStdout>,
}

impl LogStream {
    /// Line-buffered reader over the subprocess output.
    pub fn reader(&mut self) -> &mut BufReader<ChildStdout> {
        &mut self.reader
    }

    /// Waits for git to exit after the stream has been drained.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::CommandFailed`] when git exits non-zero.
    pub fn finish(mut self) -> GitResult<()> {
        let status = self.child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(GitError::CommandFailed(status))
        }
    }

    /// Kills and reaps the subprocess. Used on the error path so the
    /// pipe is released no matter how the conversion ended.
    pub fn abort(mut self) {
        _ = self.child.kill();
        _ = self.child.wait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufRead;
    use std::process::Command as StdCommand;
    use tempfile::TempDir;

    fn git(dir: &std::path::Path, args: &[&str]) {
        let status = StdCommand::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .expect("failed to run git");
        assert!(status.status.success(), "git {args:?} failed");
    }

    fn repo_with_one_commit() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        git(dir, &["init"]);
        git(dir, &["config", "user.email", "test@example.com"]);
        git(dir, &["config", "user.name", "Test User"]);
        std::fs::write(dir.join("file.txt"), "contents\n").unwrap();
        git(dir, &["add", "."]);
        git(dir, &["commit", "-m", "Add file"]);
        temp_dir
    }

    #[test]
    fn test_spawn_and_drain_repo() {
        let repo = repo_with_one_commit();
        let mut stream = LogCommand::new().directory(repo.path()).spawn().unwrap();

        let mut lines = Vec::new();
        for line in stream.reader().lines() {
            lines.push(line.unwrap());
        }
        stream.finish().unwrap();

        assert!(lines.iter().any(|line| line.starts_with("commit ")));
        assert!(lines.iter().any(|line| line.starts_with("Author: Test User")));
        assert!(lines.iter().any(|line| line.contains("file.txt")));
    }

    #[test]
    fn test_finish_reports_git_failure() {
        // Not a repository: git log exits non-zero once drained.
        let temp_dir = TempDir::new().unwrap();
        let mut stream = LogCommand::new()
            .directory(temp_dir.path())
            .spawn()
            .unwrap();

        for _line in stream.reader().lines() {}
        let result = stream.finish();
        assert!(matches!(result, Err(GitError::CommandFailed(_))));
    }

    #[test]
    fn test_abort_releases_process() {
        let repo = repo_with_one_commit();
        let stream = LogCommand::new().directory(repo.path()).spawn().unwrap();
        stream.abort();
    }
}
