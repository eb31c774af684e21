//! Writing the generated site to disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;

/// File name of the generated page
pub const OUTPUT_PAGE: &str = "index.html";

/// File name of the generated stylesheet
pub const OUTPUT_STYLESHEET: &str = crate::render::STYLESHEET_PATH;

/// Write the page and stylesheet, returning the page path
pub async fn write_site(out_dir: &Path, html: &str, stylesheet: &str) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .await
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let page = out_dir.join(OUTPUT_PAGE);
    fs::write(&page, html)
        .await
        .with_context(|| format!("Failed to write page: {}", page.display()))?;

    let css = out_dir.join(OUTPUT_STYLESHEET);
    fs::write(&css, stylesheet)
        .await
        .with_context(|| format!("Failed to write stylesheet: {}", css.display()))?;

    Ok(page)
}

/// Recursively copy `src` into `dest`, returning the number of files copied.
/// When `dest` lies inside `src` it is skipped; when both are the same
/// directory nothing is copied.
pub async fn copy_dir(src: &Path, dest: &Path) -> Result<usize> {
    let skip = std::fs::canonicalize(dest).ok();
    if skip.is_some() && std::fs::canonicalize(src).ok() == skip {
        tracing::warn!(
            "Output directory is the static directory ({}), skipping asset copy",
            src.display()
        );
        return Ok(0);
    }

    let mut copied = 0;
    let mut pending = vec![(src.to_path_buf(), dest.to_path_buf())];

    while let Some((from_dir, to_dir)) = pending.pop() {
        fs::create_dir_all(&to_dir)
            .await
            .with_context(|| format!("Failed to create directory: {}", to_dir.display()))?;

        let mut entries = fs::read_dir(&from_dir)
            .await
            .with_context(|| format!("Failed to read directory: {}", from_dir.display()))?;

        while let Some(entry) = entries.next_entry().await? {
            let from = entry.path();
            let to = to_dir.join(entry.file_name());
            let file_type = entry.file_type().await?;

            if file_type.is_dir() {
                if skip.is_some() && std::fs::canonicalize(&from).ok() == skip {
                    continue;
                }
                pending.push((from, to));
            } else if file_type.is_file() {
                fs::copy(&from, &to)
                    .await
                    .with_context(|| format!("Failed to copy {}", from.display()))?;
                copied += 1;
            } else {
                tracing::debug!("Skipping non-regular file {}", from.display());
            }
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_site() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("dist");

        let page = write_site(&out, "<!DOCTYPE html>", "body{}").await.unwrap();

        assert_eq!(page, out.join("index.html"));
        assert_eq!(fs::read_to_string(&page).await.unwrap(), "<!DOCTYPE html>");
        assert_eq!(
            fs::read_to_string(out.join("style.css")).await.unwrap(),
            "body{}"
        );
    }

    #[tokio::test]
    async fn test_copy_dir_nested() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("public");
        let dest = temp.path().join("dist");

        fs::create_dir_all(src.join("img")).await.unwrap();
        fs::write(src.join("resume.pdf"), b"%PDF").await.unwrap();
        fs::write(src.join("img").join("cover.png"), b"png").await.unwrap();

        let copied = copy_dir(&src, &dest).await.unwrap();

        assert_eq!(copied, 2);
        assert!(dest.join("resume.pdf").is_file());
        assert!(dest.join("img").join("cover.png").is_file());
    }

    #[tokio::test]
    async fn test_copy_dir_skips_nested_output() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("public");
        let dest = src.join("dist");

        fs::create_dir_all(&dest).await.unwrap();
        fs::write(src.join("resume.pdf"), b"%PDF").await.unwrap();
        fs::write(dest.join("index.html"), b"<html>").await.unwrap();

        let copied = copy_dir(&src, &dest).await.unwrap();

        assert_eq!(copied, 1);
        assert!(!dest.join("dist").exists());
    }

    #[tokio::test]
    async fn test_copy_dir_onto_itself_keeps_files() {
        let temp = TempDir::new().unwrap();
        let public = temp.path().join("public");
        fs::create_dir_all(&public).await.unwrap();
        fs::write(public.join("resume.pdf"), b"%PDF-1.7 real content")
            .await
            .unwrap();

        let copied = copy_dir(&public, &public).await.unwrap();

        assert_eq!(copied, 0);
        assert_eq!(
            fs::read(public.join("resume.pdf")).await.unwrap(),
            b"%PDF-1.7 real content"
        );
    }
}
