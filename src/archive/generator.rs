//! Template extraction.

use std::fs::{self, File};
use std::path::{Component, Path, PathBuf};
use std::time::{Duration, Instant};

use zip::ZipArchive;

use crate::cache::CacheStore;
use crate::error::{Result, SrcgenError};
use crate::remote::ArchiveFetcher;
use crate::ui::DownloadObserver;

use super::TemplateCatalog;

/// Summary of a completed generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generated {
    /// Number of files written under the destination.
    pub files_written: usize,
    /// Wall-clock extraction time. Diagnostic only, not a contract.
    pub elapsed: Duration,
}

/// Materializes one template's file tree under a destination directory.
pub struct TemplateGenerator<'a> {
    store: &'a CacheStore,
}

impl<'a> TemplateGenerator<'a> {
    /// Create a generator over the given cache store.
    pub fn new(store: &'a CacheStore) -> Self {
        Self { store }
    }

    /// Extract `template` into `destination`.
    ///
    /// Fails with [`SrcgenError::TemplateNotFound`] before any filesystem
    /// write when the template is not in the catalog. Every archive entry
    /// under `template/` is extracted, preserving relative structure; each
    /// output file's parent directory chain is created before the write.
    /// Partial extraction is not rolled back on a mid-stream failure.
    pub fn generate(
        &self,
        template: &str,
        destination: &Path,
        fetcher: &ArchiveFetcher,
        observer: &mut dyn DownloadObserver,
    ) -> Result<Generated> {
        let catalog = TemplateCatalog::new(self.store);
        let names = catalog.list(fetcher, observer)?;
        if !names.iter().any(|n| n == template) {
            return Err(SrcgenError::TemplateNotFound {
                name: template.to_string(),
            });
        }

        let started = Instant::now();
        let path = self.store.archive_path();
        let file = File::open(&path)?;
        let mut archive = ZipArchive::new(file).map_err(|e| SrcgenError::archive(&path, e))?;

        let prefix = format!("{}/", template);
        let mut files_written = 0;

        for i in 0..archive.len() {
            let mut entry = archive
                .by_index(i)
                .map_err(|e| SrcgenError::archive(&path, e))?;
            let name = entry.name().to_string();

            // The bare directory marker produces no output
            if !name.starts_with(&prefix) || name == prefix {
                tracing::debug!(entry = %name, "skip");
                continue;
            }

            let output = safe_output_path(destination, &name[prefix.len()..])
                .ok_or_else(|| SrcgenError::Archive {
                    path: path.clone(),
                    message: format!("entry escapes the destination: {}", name),
                })?;

            if entry.is_dir() {
                fs::create_dir_all(&output)?;
                continue;
            }

            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent)?;
            }

            tracing::debug!(entry = %name, output = %output.display(), "generate");
            let mut out = File::create(&output)?;
            std::io::copy(&mut entry, &mut out)?;
            files_written += 1;
        }

        Ok(Generated {
            files_written,
            elapsed: started.elapsed(),
        })
    }
}

/// Join an archive-relative path onto the destination, rejecting anything
/// that would climb out of it (absolute paths, `..` components).
fn safe_output_path(destination: &Path, relative: &str) -> Option<PathBuf> {
    let mut output = destination.to_path_buf();
    for part in relative.split('/') {
        if part.is_empty() {
            continue;
        }
        match Path::new(part).components().next() {
            Some(Component::Normal(_)) => output.push(part),
            _ => return None,
        }
    }
    Some(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::fixtures::{write_archive, write_sample_archive};
    use crate::ui::RecordingObserver;
    use std::time::Duration as StdDuration;
    use tempfile::TempDir;

    fn dead_fetcher() -> ArchiveFetcher {
        ArchiveFetcher::new("http://127.0.0.1:1/templates.zip", StdDuration::from_secs(1))
    }

    fn populated_store(temp: &TempDir) -> CacheStore {
        let store = CacheStore::new(temp.path().join("cache"));
        std::fs::create_dir_all(store.root()).unwrap();
        write_sample_archive(&store.archive_path());
        store
    }

    #[test]
    fn generates_template_files() {
        let temp = TempDir::new().unwrap();
        let store = populated_store(&temp);
        let dest = temp.path().join("out");

        let generated = TemplateGenerator::new(&store)
            .generate("web-api", &dest, &dead_fetcher(), &mut RecordingObserver::new())
            .unwrap();

        assert_eq!(generated.files_written, 2);
        assert_eq!(
            std::fs::read(dest.join("main.go")).unwrap(),
            b"package main\n"
        );
        assert_eq!(
            std::fs::read(dest.join("handlers/health.go")).unwrap(),
            b"package handlers\n"
        );
    }

    #[test]
    fn nested_parent_directories_are_created() {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path().join("cache"));
        std::fs::create_dir_all(store.root()).unwrap();
        // No explicit directory entries for the nested levels
        write_archive(
            &store.archive_path(),
            &[
                ("tpl/", b""),
                ("tpl/a/b/c/deep.txt", b"deep"),
            ],
        );
        let dest = temp.path().join("out");

        TemplateGenerator::new(&store)
            .generate("tpl", &dest, &dead_fetcher(), &mut RecordingObserver::new())
            .unwrap();

        assert_eq!(std::fs::read(dest.join("a/b/c/deep.txt")).unwrap(), b"deep");
    }

    #[test]
    fn unknown_template_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let store = populated_store(&temp);
        let dest = temp.path().join("out");

        let result = TemplateGenerator::new(&store).generate(
            "no-such-template",
            &dest,
            &dead_fetcher(),
            &mut RecordingObserver::new(),
        );

        assert!(matches!(
            result,
            Err(SrcgenError::TemplateNotFound { ref name }) if name == "no-such-template"
        ));
        assert!(!dest.exists());
    }

    #[test]
    fn other_templates_are_not_extracted() {
        let temp = TempDir::new().unwrap();
        let store = populated_store(&temp);
        let dest = temp.path().join("out");

        TemplateGenerator::new(&store)
            .generate("cli-tool", &dest, &dead_fetcher(), &mut RecordingObserver::new())
            .unwrap();

        assert!(dest.join("main.rs").exists());
        assert!(!dest.join("main.go").exists());
        assert!(!dest.join("README.txt").exists());
    }

    #[test]
    fn bare_directory_marker_produces_no_file() {
        let temp = TempDir::new().unwrap();
        let store = populated_store(&temp);
        let dest = temp.path().join("out");

        TemplateGenerator::new(&store)
            .generate("web-api", &dest, &dead_fetcher(), &mut RecordingObserver::new())
            .unwrap();

        // "web-api/" itself must not materialize as a file named after the
        // destination or an empty entry inside it
        assert!(dest.is_dir());
        assert!(!dest.join("web-api").exists());
    }

    #[test]
    fn existing_destination_files_are_truncated() {
        let temp = TempDir::new().unwrap();
        let store = populated_store(&temp);
        let dest = temp.path().join("out");
        std::fs::create_dir_all(&dest).unwrap();
        std::fs::write(dest.join("main.rs"), b"previous content, much longer").unwrap();

        TemplateGenerator::new(&store)
            .generate("cli-tool", &dest, &dead_fetcher(), &mut RecordingObserver::new())
            .unwrap();

        assert_eq!(std::fs::read(dest.join("main.rs")).unwrap(), b"fn main() {}\n");
    }

    #[test]
    fn entries_escaping_destination_are_rejected() {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path().join("cache"));
        std::fs::create_dir_all(store.root()).unwrap();
        write_archive(
            &store.archive_path(),
            &[("tpl/", b""), ("tpl/../escape.txt", b"bad")],
        );
        let dest = temp.path().join("out");

        let result = TemplateGenerator::new(&store).generate(
            "tpl",
            &dest,
            &dead_fetcher(),
            &mut RecordingObserver::new(),
        );

        assert!(matches!(result, Err(SrcgenError::Archive { .. })));
        assert!(!temp.path().join("escape.txt").exists());
    }

    #[test]
    fn safe_output_path_accepts_nested() {
        let out = safe_output_path(Path::new("/dest"), "a/b.txt").unwrap();
        assert_eq!(out, PathBuf::from("/dest/a/b.txt"));
    }

    #[test]
    fn safe_output_path_rejects_parent_components() {
        assert!(safe_output_path(Path::new("/dest"), "../b.txt").is_none());
        assert!(safe_output_path(Path::new("/dest"), "a/../../b.txt").is_none());
    }
}
