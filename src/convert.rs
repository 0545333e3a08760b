// src/convert.rs
use regex::Regex;

use crate::error::ConverterError;

const GITHUB_REPO_PATTERN: &str = r"^https?://github\.com/([^/]+)/([^/]+)";

/// Owner and repository pulled out of a github.com URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoIdentity {
    pub owner: String,
    pub repo: String,
}

impl RepoIdentity {
    pub fn pages_url(&self) -> String {
        format!("https://{}.github.io/{}", self.owner, self.repo)
    }
}

/// Matches `raw` against `https?://github.com/<owner>/<repo>`.
///
/// Anything after the second segment is ignored. The first `.git` inside the
/// repo segment is dropped wherever it sits, not only at the end.
pub fn parse_repo_url(raw: &str) -> Result<RepoIdentity, ConverterError> {
    let re = Regex::new(GITHUB_REPO_PATTERN).map_err(|_| ConverterError::ConversionFailure)?;
    let caps = re.captures(raw).ok_or(ConverterError::InvalidUrl)?;

    let (Some(owner), Some(repo)) = (caps.get(1), caps.get(2)) else {
        return Err(ConverterError::ConversionFailure);
    };

    Ok(RepoIdentity {
        owner: owner.as_str().to_string(),
        repo: repo.as_str().replacen(".git", "", 1),
    })
}

/// Raw input in, GitHub Pages URL out.
pub fn convert(raw: &str) -> Result<String, ConverterError> {
    parse_repo_url(raw).map(|id| id.pages_url())
}
