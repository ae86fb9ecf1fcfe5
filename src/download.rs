use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::Write;
use std::path::Path;

pub async fn download_file(url: &str, local_path: &Path) -> Result<()> {
    tracing::info!(
        "Downloading {}...",
        local_path.file_name().unwrap().to_string_lossy()
    );

    let response = reqwest::get(url)
        .await
        .with_context(|| format!("Could not reach {}", url))?;

    if !response.status().is_success() {
        return Err(anyhow!(
            "Download of {} failed with HTTP {}",
            url,
            response.status()
        ));
    }

    let total_size = response.content_length().unwrap_or(0);

    let filename = local_path.file_name().unwrap().to_string_lossy().to_string();
    let pb = ProgressBar::new(total_size);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} {spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
            .unwrap()
            .progress_chars("#>-")
    );
    pb.set_message(format!("Downloading {}", filename));

    let mut file = fs::File::create(local_path)
        .with_context(|| format!("Could not create {}", local_path.display()))?;
    let mut downloaded = 0u64;
    let mut stream = response.bytes_stream();

    use futures_util::StreamExt;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk)?;
        downloaded += chunk.len() as u64;
        pb.set_position(downloaded);
    }

    pb.finish_with_message("Download complete");
    Ok(())
}
