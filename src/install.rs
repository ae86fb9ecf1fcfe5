use crate::catalog;
use crate::config::BuildEnv;
use crate::download::download_file;
use crate::error::InstallError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Download the runfile installer for `version` and run it silently against
/// the build environment described by `env`.
///
/// The whole procedure is idempotent: an already-downloaded installer is
/// reused as-is, and compiler links left by a previous run are kept.
pub async fn install_toolkit(env: &mut BuildEnv, version: &str) -> Result<()> {
    let release = catalog::find(version)
        .ok_or_else(|| InstallError::UnsupportedVersion(version.to_string()))?;

    let installer = release.installer_file_name();
    let installer_path = Path::new(&installer);
    if installer_path.exists() {
        tracing::info!("Reusing existing installer {}", installer);
    } else {
        download_file(release.installer_url, installer_path).await?;
    }

    mark_installer_executable(installer_path)?;

    let toolkit_root = env.toolkit_root(version);
    tracing::info!(
        "Installing CUDA {} into {}",
        version,
        toolkit_root.display()
    );

    let bin_dir = toolkit_root.join("bin");
    env.prepend_path(&bin_dir);
    tracing::debug!("Installer PATH: {}", env.path);

    // The runfile resolves `gcc`/`g++` by name; point those names at the
    // environment's own compilers.
    fs::create_dir_all(&bin_dir)
        .with_context(|| format!("Could not create {}", bin_dir.display()))?;
    link_compiler(&env.cc, &bin_dir.join("gcc"))?;
    link_compiler(&env.cxx, &bin_dir.join("g++"))?;

    let args = release.installer_args(&toolkit_root);
    println!("./{} {}", installer, args.join(" "));

    let status = Command::new(format!("./{}", installer))
        .args(&args)
        .env("PATH", &env.path)
        .status()
        .with_context(|| format!("Could not launch ./{}", installer))?;

    if !status.success() {
        return Err(InstallError::InstallerExit(status.code().unwrap_or(-1)).into());
    }

    tracing::info!("CUDA {} installed into {}", version, toolkit_root.display());
    Ok(())
}

/// Owner read + execute only.
fn mark_installer_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .with_context(|| format!("Could not stat {}", path.display()))?
        .permissions();
    perms.set_mode(0o500);
    fs::set_permissions(path, perms)
        .with_context(|| format!("Could not mark {} executable", path.display()))?;
    Ok(())
}

/// Create `link` pointing at `target`, unless something is already there.
///
/// A pre-existing link is kept untouched, even when its target no longer
/// matches the current `$CC`/`$CXX`. The check goes through
/// `symlink_metadata` so dangling links also count as existing.
fn link_compiler(target: &Path, link: &Path) -> Result<()> {
    if link.symlink_metadata().is_ok() {
        tracing::debug!("{} already exists, leaving it in place", link.display());
        return Ok(());
    }

    std::os::unix::fs::symlink(target, link).with_context(|| {
        format!(
            "Could not link {} -> {}",
            link.display(),
            target.display()
        )
    })?;
    tracing::debug!("Linked {} -> {}", link.display(), target.display());
    Ok(())
}
