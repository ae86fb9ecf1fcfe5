use thiserror::Error;

/// Failures the install procedure raises itself. Download and filesystem
/// errors propagate as `anyhow` errors with context attached.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("no installer is published for CUDA version '{0}'")]
    UnsupportedVersion(String),

    #[error("required environment variable {0} is not set")]
    MissingEnvVar(&'static str),

    #[error("CUDA installer exited with status {0}")]
    InstallerExit(i32),
}
