//! Opening project links in the system browser.

use thiserror::Error;

use crate::content::NO_LINK;

const DEFAULT_LAUNCHER: &str = "xdg-open";

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("project has no destination yet")]
    NoDestination,
    #[error("failed to launch {launcher}: {source}")]
    Spawn {
        launcher: String,
        source: std::io::Error,
    },
}

/// Open a link in a new browser context. The launcher is fire-and-forget;
/// we never wait for the browser to exit.
pub async fn open(link: &str, launcher: Option<&str>) -> Result<(), OpenError> {
    if link == NO_LINK {
        return Err(OpenError::NoDestination);
    }

    let launcher = launcher.unwrap_or(DEFAULT_LAUNCHER);
    tracing::debug!(launcher, link, "opening project link");

    tokio::process::Command::new(launcher)
        .arg(link)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()
        .map_err(|source| OpenError::Spawn {
            launcher: launcher.to_string(),
            source,
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn placeholder_link_is_rejected() {
        let result = open(NO_LINK, None).await;
        assert!(matches!(result, Err(OpenError::NoDestination)));
    }

    #[tokio::test]
    async fn missing_launcher_reports_spawn_error() {
        let result = open("https://example.com", Some("folio-test-no-such-launcher")).await;
        assert!(matches!(result, Err(OpenError::Spawn { .. })));
    }
}
