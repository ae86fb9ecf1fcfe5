use crate::error::InstallError;
use std::env;
use std::path::{Path, PathBuf};

/// Snapshot of the build environment the installer runs against.
///
/// All environment access happens at construction time; the rest of the
/// procedure works against this context, including the `PATH` handed to
/// the installer subprocess.
#[derive(Debug, Clone)]
pub struct BuildEnv {
    /// Root of the active build/conda environment.
    pub prefix: PathBuf,
    /// The environment's C compiler, from `$CC`.
    pub cc: PathBuf,
    /// The environment's C++ compiler, from `$CXX`.
    pub cxx: PathBuf,
    /// Colon-separated search path handed to the installer subprocess.
    pub path: String,
    /// Explicit install location from `$CUDA_TOOLKIT_ROOT_DIR`, if set.
    pub toolkit_root_override: Option<PathBuf>,
}

impl BuildEnv {
    /// Capture the build environment from the current process.
    pub fn from_env() -> Result<Self, InstallError> {
        Self::resolve(
            env::var("BUILD_PREFIX").ok(),
            env::var("CONDA_PREFIX").ok(),
            env::var("CUDA_TOOLKIT_ROOT_DIR").ok(),
            env::var("PATH").ok(),
            env::var("CC").ok(),
            env::var("CXX").ok(),
        )
    }

    /// Resolve a context from raw variable values. Pure, so tests can
    /// exercise the precedence rules without touching the real environment.
    pub fn resolve(
        build_prefix: Option<String>,
        conda_prefix: Option<String>,
        toolkit_root: Option<String>,
        path: Option<String>,
        cc: Option<String>,
        cxx: Option<String>,
    ) -> Result<Self, InstallError> {
        // BUILD_PREFIX wins during conda-build; CONDA_PREFIX otherwise
        let prefix = build_prefix
            .or(conda_prefix)
            .ok_or(InstallError::MissingEnvVar("CONDA_PREFIX"))?;

        Ok(Self {
            prefix: PathBuf::from(prefix),
            cc: PathBuf::from(cc.ok_or(InstallError::MissingEnvVar("CC"))?),
            cxx: PathBuf::from(cxx.ok_or(InstallError::MissingEnvVar("CXX"))?),
            path: path.ok_or(InstallError::MissingEnvVar("PATH"))?,
            toolkit_root_override: toolkit_root.map(PathBuf::from),
        })
    }

    /// Directory the toolkit for `version` installs into.
    pub fn toolkit_root(&self, version: &str) -> PathBuf {
        match &self.toolkit_root_override {
            Some(root) => root.clone(),
            None => self.prefix.join(format!("cuda-{}", version)),
        }
    }

    /// Prepend `dir` to the context's search path.
    pub fn prepend_path(&mut self, dir: &Path) {
        self.path = format!("{}:{}", dir.display(), self.path);
    }
}
