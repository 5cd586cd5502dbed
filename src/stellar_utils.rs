pub mod deploy;

pub use deploy::{DeployError, StellarDeploy};
