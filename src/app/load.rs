use super::types::App;
use anyhow::Context;
use std::path::Path;

/// Load a routing snapshot from disk.
///
/// A snapshot is the JSON serialization of the framework's routing graph, as
/// exported by the application under inspection. Unlike extraction itself, loading
/// is fallible: an unreadable or malformed snapshot is a caller error and is
/// reported through `anyhow`.
pub fn load_app(path: impl AsRef<Path>) -> anyhow::Result<App> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read routing snapshot {}", path.display()))?;
    let app: App = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse routing snapshot {}", path.display()))?;
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_app_missing_file() {
        let err = load_app("/nonexistent/snapshot.json").unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
