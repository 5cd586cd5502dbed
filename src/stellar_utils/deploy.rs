use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::string::FromUtf8Error;

use thiserror::Error;
use tracing::{info, instrument, warn};

/// A `<tool> contract deploy` invocation.
#[derive(Debug, Clone)]
pub struct StellarDeploy {
    tool: PathBuf,
    cwd: Option<PathBuf>,
    wasm: PathBuf,
    source: String,
    network: String,
}

/// Everything the child process left behind once it exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutput {
    /// `None` when the child was terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Error, Debug)]
pub enum DeployError {
    #[error(transparent)]
    Spawn(#[from] std::io::Error),

    #[error(transparent)]
    Decode(#[from] FromUtf8Error),
}

impl DeployOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl StellarDeploy {
    pub fn new(
        tool: impl AsRef<Path>,
        wasm: impl AsRef<Path>,
        source: impl ToString,
        network: impl ToString,
    ) -> Self {
        Self {
            tool: tool.as_ref().to_owned(),
            cwd: None,
            wasm: wasm.as_ref().to_owned(),
            source: source.to_string(),
            network: network.to_string(),
        }
    }

    pub fn with_cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_owned());
        self
    }

    pub fn tool(&self) -> &Path {
        &self.tool
    }

    pub fn args(&self) -> Vec<OsString> {
        vec![
            "contract".into(),
            "deploy".into(),
            "--wasm".into(),
            self.wasm.clone().into_os_string(),
            "--source".into(),
            self.source.clone().into(),
            "--network".into(),
            self.network.clone().into(),
        ]
    }

    /// Runs the tool to completion.
    ///
    /// A nonzero exit is reported through [`DeployOutput::code`]. Failing to
    /// spawn the child, or output that is not UTF-8, is an error.
    #[instrument(name = "stellar_deploy", skip_all, fields(network = %self.network))]
    pub async fn run(&self) -> Result<DeployOutput, DeployError> {
        let mut cmd = tokio::process::Command::new(&self.tool);
        cmd.args(self.args());

        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        info!("Deploying contract with {cmd:#?}");

        let output = cmd.output().await?;

        let output = DeployOutput {
            code: output.status.code(),
            stdout: String::from_utf8(output.stdout)?,
            stderr: String::from_utf8(output.stderr)?,
        };

        if output.success() {
            info!("Deployment finished");
        } else {
            warn!(code = ?output.code, "Deployment failed");
        }

        Ok(output)
    }
}
