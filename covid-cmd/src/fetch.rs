//! Mirror the remote datasets to a local directory.

use covid_nyt::source::DataSource;
use log::info;
use std::path::Path;

/// HTTP client shared by the commands. Downloads are not retried.
pub fn client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Download every [`DataSource`] into `out_dir` under its file name.
///
/// Stops at the first failed download; files already written stay in place.
pub async fn run_fetch(out_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(out_dir)?;
    let client = client();

    for source in DataSource::ALL {
        info!("Fetching {}", source.url());
        let body = source.fetch(&client).await?;
        let path = out_dir.join(source.file_name());
        std::fs::write(&path, &body)
            .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;
        info!("Wrote {} ({} bytes)", path.display(), body.len());
    }

    info!("Fetch complete. Output: {}", out_dir.display());
    Ok(())
}
