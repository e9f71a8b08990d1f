//! Optional dependency installation step (`npm install <deps…>` by default).

use std::io;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

pub const DEFAULT_INSTALL_PROGRAM: &str = "npm";

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with {status}")]
    Failed { command: String, status: ExitStatus },

    #[error("`{command}` timed out after {}s", .timeout.as_secs())]
    TimedOut { command: String, timeout: Duration },
}

#[derive(Debug, Clone)]
pub struct Installer {
    program: String,
    timeout: Option<Duration>,
}

impl Default for Installer {
    fn default() -> Self {
        Self::new(DEFAULT_INSTALL_PROGRAM, None)
    }
}

impl Installer {
    pub fn new(program: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Run `<program> install <deps…>` inside `dir` and wait for it.
    ///
    /// The child's stdout goes to our stderr: stdout is the MCP channel.
    pub async fn install(&self, dir: &Path, deps: &[String]) -> Result<(), InstallError> {
        let command = format!("{} install {}", self.program, deps.join(" "));
        log::info!("running `{command}` in {}", dir.display());

        let mut child = Command::new(&self.program)
            .arg("install")
            .args(deps)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::from(io::stderr()))
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| InstallError::Spawn {
                command: command.clone(),
                source,
            })?;

        let waited = match self.timeout {
            Some(limit) => {
                let outcome = tokio::time::timeout(limit, child.wait()).await;
                match outcome {
                    Ok(waited) => waited,
                    Err(_) => {
                        if let Err(err) = child.kill().await {
                            log::warn!("failed to kill timed out `{command}`: {err}");
                        }
                        return Err(InstallError::TimedOut {
                            command,
                            timeout: limit,
                        });
                    }
                }
            }
            None => child.wait().await,
        };

        let status = waited.map_err(|source| InstallError::Spawn {
            command: command.clone(),
            source,
        })?;
        if !status.success() {
            return Err(InstallError::Failed { command, status });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let tmp = tempdir().expect("tempdir");
        let installer = Installer::new("devhelper-no-such-installer", None);
        let err = installer
            .install(tmp.path(), &["left-pad".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, InstallError::Spawn { .. }), "{err}");
        assert!(err
            .to_string()
            .contains("devhelper-no-such-installer install left-pad"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_is_reported() {
        let tmp = tempdir().expect("tempdir");
        let installer = Installer::new("false", None);
        let err = installer
            .install(tmp.path(), &["x".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, InstallError::Failed { .. }), "{err}");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn zero_exit_succeeds() {
        let tmp = tempdir().expect("tempdir");
        let installer = Installer::new("true", Some(Duration::from_secs(30)));
        installer
            .install(tmp.path(), &["x".to_string()])
            .await
            .expect("true exits 0");
    }
}
