//! Fetch, flatten and count in one pass.

use crate::config::RepoConfig;
use crate::fetch::GitHubClient;
use crate::flatten::parse_file_map;
use crate::letters::LetterCounts;
use crate::Result;
use tracing::debug;

/// Run the whole pipeline for one repository branch.
///
/// Any failure aborts the run; no partial histogram is returned.
pub async fn run(config: &RepoConfig, client: &GitHubClient) -> Result<LetterCounts> {
    let body = client.fetch_tree(config).await?;
    let files = parse_file_map(&body)?;
    debug!("Collected {} source files", files.len());

    let counts = LetterCounts::from_files(&files);
    debug!("Counted {} letters ({} distinct)", counts.total(), counts.len());
    Ok(counts)
}
