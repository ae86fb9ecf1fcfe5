use std::path::Path;

/// A CUDA release cudakit knows how to install.
///
/// The flag set accepted by the runfile installer changed between releases,
/// so each entry records which optional flags its installer takes.
pub struct CudaRelease {
    pub version: &'static str,
    pub installer_url: &'static str,
    no_man_page: bool,
    default_root: bool,
    override_checks: bool,
}

/// Releases with a published Linux runfile installer.
pub const RELEASES: &[CudaRelease] = &[
    CudaRelease {
        version: "9.0",
        installer_url: "https://developer.nvidia.com/compute/cuda/9.0/Prod/local_installers/cuda_9.0.176_384.81_linux-run",
        no_man_page: false,
        default_root: false,
        // the 9.0 installer refuses anything newer than gcc 4.8
        override_checks: true,
    },
    CudaRelease {
        version: "9.2",
        installer_url: "https://developer.nvidia.com/compute/cuda/9.2/Prod2/local_installers/cuda_9.2.148_396.37_linux",
        no_man_page: true,
        default_root: false,
        override_checks: false,
    },
    CudaRelease {
        version: "10.0",
        installer_url: "https://developer.nvidia.com/compute/cuda/10.0/Prod/local_installers/cuda_10.0.130_410.48_linux",
        no_man_page: true,
        default_root: false,
        override_checks: false,
    },
    CudaRelease {
        version: "10.1",
        installer_url: "https://developer.nvidia.com/compute/cuda/10.1/Prod/local_installers/cuda_10.1.168_418.67_linux.run",
        no_man_page: true,
        default_root: true,
        // the 10.1 installer flags conda's libraries as incompatible
        override_checks: true,
    },
];

/// Look up the release for `version`, if it is a supported one.
pub fn find(version: &str) -> Option<&'static CudaRelease> {
    RELEASES.iter().find(|r| r.version == version)
}

impl CudaRelease {
    /// Name the installer is saved under in the working directory.
    pub fn installer_file_name(&self) -> String {
        format!("cuda_{}_installer.run", self.version)
    }

    /// Command line for a silent, toolkit-only install into `toolkit_root`.
    pub fn installer_args(&self, toolkit_root: &Path) -> Vec<String> {
        let root = toolkit_root.display();
        let mut args = vec![
            "--silent".to_string(),
            "--toolkit".to_string(),
            "--no-opengl-libs".to_string(),
        ];
        if self.no_man_page {
            args.push("--no-man-page".to_string());
        }
        args.push("--no-drm".to_string());
        args.push(format!("--toolkitpath={}", root));
        if self.default_root {
            args.push(format!("--defaultroot={}", root));
        }
        if self.override_checks {
            args.push("--override".to_string());
        }
        args
    }
}
