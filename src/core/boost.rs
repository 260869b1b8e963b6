//! Boost header staging
//!
//! Locates the current Boost source archive on the upstream download
//! page, downloads and extracts it into the workspace, and relocates the
//! `boost` header tree into `<prefix>/include/boost`. Existing content
//! at that path is replaced; the step is not idempotent.

use regex::Regex;

use crate::cli::output;
use crate::config::defaults;
use crate::core::context::InstallContext;
use crate::error::{FetchError, InstallError};
use crate::infra::download::DownloadManager;
use crate::infra::{extract, filesystem};

/// Fetch, extract, and relocate the Boost headers into the prefix.
pub async fn stage(ctx: &InstallContext) -> Result<(), InstallError> {
    println!("Downloading Boost...");
    stage_from(ctx, defaults::BOOST_DOWNLOAD_PAGE).await
}

/// Staging pipeline against an explicit listing URL.
async fn stage_from(ctx: &InstallContext, listing_url: &str) -> Result<(), InstallError> {
    let dl = DownloadManager::new();

    let page = dl.fetch_text(listing_url).await?;
    let archive_url = select_archive_link(&page).ok_or_else(|| FetchError::NoArchiveLink {
        url: listing_url.to_string(),
    })?;
    tracing::info!(url = %archive_url, "selected archive");

    let archive = ctx.temp_dir.join(archive_file_name(&archive_url));
    let spinner = output::create_spinner(&format!("Downloading {}", archive_url));
    let result = dl.download(&archive_url, &archive).await;
    spinner.finish_and_clear();
    let result = result?;
    tracing::debug!(size = result.size, "archive downloaded");

    extract::untar_bz2(&result.path, &ctx.temp_dir)?;

    let extracted = ctx.temp_dir.join(archive_stem(&archive_url)).join("boost");
    let dest = ctx.prefix.join("include").join("boost");
    filesystem::move_dir(&extracted, &dest)?;
    Ok(())
}

/// Pick the first `.tar.bz2` href from the listing page.
pub fn select_archive_link(page: &str) -> Option<String> {
    let re = Regex::new(defaults::ARCHIVE_LINK_PATTERN).expect("archive pattern is valid");
    re.captures(page).map(|c| c[1].to_string())
}

/// File name component of an archive URL.
fn archive_file_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Directory a source archive extracts to: the file name up to the
/// first dot (`boost_1_83_0.tar.bz2` extracts to `boost_1_83_0/`).
fn archive_stem(url: &str) -> &str {
    let name = archive_file_name(url);
    name.split('.').next().unwrap_or(name)
}
