use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::serde_utils;

#[derive(Debug, Clone, Parser)]
#[clap(rename_all = "kebab-case")]
pub struct Args {
    /// Path to a YAML file with the deployment settings
    ///
    /// Flags and environment variables take precedence over the file
    #[clap(short, long, env = "DEPLOY_CONFIG")]
    pub config: Option<PathBuf>,

    /// The deploy tool to invoke, `stellar` unless overridden
    #[clap(long, env = "DEPLOY_TOOL")]
    pub tool: Option<PathBuf>,

    /// Path to the compiled contract
    #[clap(short, long, env = "DEPLOY_WASM")]
    pub wasm: Option<PathBuf>,

    /// Identity that signs the deployment
    #[clap(short, long, env = "DEPLOY_SOURCE")]
    pub source: Option<String>,

    /// Network to deploy to
    #[clap(short, long, env = "DEPLOY_NETWORK")]
    pub network: Option<String>,

    /// Directory the deploy tool runs in
    #[clap(long, env = "DEPLOY_WORKING_DIR")]
    pub working_dir: Option<PathBuf>,

    /// Address the HTTP server listens on
    #[clap(short, long, env = "DEPLOY_BIND")]
    pub bind: Option<SocketAddr>,
}

impl Args {
    pub async fn into_config(self) -> eyre::Result<Config> {
        let mut config = match &self.config {
            Some(path) => serde_utils::read_deserialize(path).await?,
            None => Config::default(),
        };

        self.apply(&mut config);

        Ok(config)
    }

    fn apply(self, config: &mut Config) {
        if let Some(tool) = self.tool {
            config.tool = tool;
        }

        if let Some(wasm) = self.wasm {
            config.wasm = wasm;
        }

        if let Some(source) = self.source {
            config.source = source;
        }

        if let Some(network) = self.network {
            config.network = network;
        }

        if let Some(working_dir) = self.working_dir {
            config.working_dir = Some(working_dir);
        }

        if let Some(bind) = self.bind {
            config.bind = bind;
        }
    }
}
