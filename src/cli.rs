use clap::Parser;

fn get_version() -> &'static str {
    const BASE_VERSION: &str = env!("CARGO_PKG_VERSION");

    // If there's a git tag at HEAD, use just the tag (release build)
    if let Some(tag) = option_env!("CUDAKIT_GIT_TAG") {
        return tag;
    }

    // Not on a tag - include commit hash and branch (dev build)
    let commit = option_env!("CUDAKIT_GIT_COMMIT").unwrap_or("unknown");
    let branch = option_env!("CUDAKIT_GIT_BRANCH").unwrap_or("unknown");

    // Return a static string by leaking the formatted string
    // This is safe because it only happens once at startup
    let version = format!("v{}-{} ({})", BASE_VERSION, commit, branch);
    Box::leak(version.into_boxed_str())
}

#[derive(Parser)]
#[command(name = "cudakit")]
#[command(about = "Download and silently install the NVIDIA CUDA toolkit")]
#[command(version = get_version())]
#[command(
    after_help = "Examples:\n  cudakit 10.1\n  cudakit -v 9.0\n\nThe build environment is read from BUILD_PREFIX/CONDA_PREFIX, CC, CXX and\nPATH; CUDA_TOOLKIT_ROOT_DIR overrides the install location."
)]
pub struct Cli {
    /// CUDA release to install (e.g. '10.1')
    #[arg(value_name = "VERSION")]
    pub release: String,

    /// Increase verbosity (use multiple times for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Reduce output to errors only
    #[arg(short, long)]
    pub quiet: bool,
}
