//! Filesystem output for rendered include files

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};

/// Write one rendered include file, overwriting any prior content.
///
/// The output directory is created if needed. Content is written trimmed
/// with a single trailing newline so repeated runs over identical data
/// produce byte-identical files.
pub async fn write_include(dir: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).await.map_err(|e| {
        Error::output(format!("failed to create directory {}: {e}", dir.display()))
    })?;

    let path = dir.join(file_name);
    let mut file = fs::File::create(&path)
        .await
        .map_err(|e| Error::output(format!("failed to create file {}: {e}", path.display())))?;

    file.write_all(content.trim_end().as_bytes())
        .await
        .map_err(|e| Error::output(format!("failed to write file {}: {e}", path.display())))?;
    file.write_all(b"\n")
        .await
        .map_err(|e| Error::output(format!("failed to write file {}: {e}", path.display())))?;

    file.flush()
        .await
        .map_err(|e| Error::output(format!("failed to flush file {}: {e}", path.display())))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_include_creates_directory_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let includes = temp_dir.path().join("includes");

        let path = write_include(&includes, "site-header.html", "<nav></nav>")
            .await
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "<nav></nav>\n");
    }

    #[tokio::test]
    async fn test_write_include_overwrites_prior_content() {
        let temp_dir = TempDir::new().unwrap();
        let includes = temp_dir.path().to_path_buf();

        write_include(&includes, "html-head.html", "<link href=\"/old.css\">")
            .await
            .unwrap();
        let path = write_include(&includes, "html-head.html", "<link href=\"/new.css\">")
            .await
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "<link href=\"/new.css\">\n");
    }

    #[tokio::test]
    async fn test_write_include_normalizes_trailing_whitespace() {
        let temp_dir = TempDir::new().unwrap();

        let path = write_include(temp_dir.path(), "site-footer.html", "<footer></footer>\n\n")
            .await
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "<footer></footer>\n");
    }
}
