use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;

use crate::stellar_utils::StellarDeploy;

pub const DEFAULT_TOOL: &str = "stellar";
pub const DEFAULT_SOURCE: &str = "mediator";
pub const DEFAULT_NETWORK: &str = "testnet";
pub const DEFAULT_WASM: &str =
    "target/wasm32-unknown-unknown/release/hello_world.wasm";

/// Deployment constants, fixed for the lifetime of the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tool: PathBuf,
    pub wasm: PathBuf,
    pub source: String,
    pub network: String,
    pub working_dir: Option<PathBuf>,
    pub bind: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tool: PathBuf::from(DEFAULT_TOOL),
            wasm: PathBuf::from(DEFAULT_WASM),
            source: DEFAULT_SOURCE.to_string(),
            network: DEFAULT_NETWORK.to_string(),
            working_dir: None,
            bind: default_bind(),
        }
    }
}

pub fn default_bind() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 5000))
}

impl Config {
    pub fn stellar_deploy(&self) -> StellarDeploy {
        let deploy =
            StellarDeploy::new(&self.tool, &self.wasm, &self.source, &self.network);

        match &self.working_dir {
            Some(dir) => deploy.with_cwd(dir),
            None => deploy,
        }
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn defaults_match_hello_world_testnet_deployment() {
        let config = Config::default();

        assert_eq!(config.tool, PathBuf::from("stellar"));
        assert_eq!(config.wasm, PathBuf::from(DEFAULT_WASM));
        assert_eq!(config.source, "mediator");
        assert_eq!(config.network, "testnet");
        assert_eq!(config.working_dir, None);
        assert_eq!(config.bind, "0.0.0.0:5000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn stellar_deploy_uses_configured_values() {
        let config = Config {
            source: "alice".to_string(),
            ..Config::default()
        };

        let deploy = config.stellar_deploy();

        assert_eq!(deploy.tool(), std::path::Path::new(DEFAULT_TOOL));
        assert_eq!(
            deploy.args(),
            [
                "contract",
                "deploy",
                "--wasm",
                DEFAULT_WASM,
                "--source",
                "alice",
                "--network",
                DEFAULT_NETWORK,
            ]
        );
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: Config = serde_yaml::from_str(indoc! {"
            network: futurenet
            working_dir: /srv/contracts
        "})
        .unwrap();

        assert_eq!(config.network, "futurenet");
        assert_eq!(config.working_dir, Some(PathBuf::from("/srv/contracts")));
        assert_eq!(config.source, "mediator");
        assert_eq!(config.bind, default_bind());
    }
}
