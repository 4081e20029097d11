//! End-to-end cache lifecycle tests against the library API.
//!
//! Exercises the full sync → list → generate → rollback → reset chain with a
//! mock remote, covering the cache state machine and the catalog/generation
//! behavior that depends on it.

use std::io::Write;
use std::time::Duration;

use httpmock::prelude::*;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use srcgen::archive::{TemplateCatalog, TemplateGenerator};
use srcgen::cache::{CacheState, CacheStore, ResetOutcome, RollbackOutcome};
use srcgen::remote::ArchiveFetcher;
use srcgen::ui::{MockConfirmer, RecordingObserver};
use srcgen::SrcgenError;

fn sample_archive_bytes() -> Vec<u8> {
    let mut writer = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    writer.add_directory("web-api", options).unwrap();
    writer.start_file("web-api/a.txt", options).unwrap();
    writer.write_all(b"alpha").unwrap();
    writer.start_file("web-api/sub/b.txt", options).unwrap();
    writer.write_all(b"beta").unwrap();
    writer.add_directory("cli-tool", options).unwrap();
    writer.start_file("cli-tool/main.rs", options).unwrap();
    writer.write_all(b"fn main() {}\n").unwrap();

    writer.finish().unwrap().into_inner()
}

struct Remote {
    server: MockServer,
}

impl Remote {
    fn serving_sample() -> Self {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/templates.zip");
            then.status(200).body(sample_archive_bytes());
        });
        Self { server }
    }

    fn fetcher(&self) -> ArchiveFetcher {
        ArchiveFetcher::new(self.server.url("/templates.zip"), Duration::from_secs(10))
    }
}

#[test]
fn full_lifecycle_sync_list_generate_rollback_reset() {
    let remote = Remote::serving_sample();
    let temp = TempDir::new().unwrap();
    let store = CacheStore::new(temp.path().join("cache"));
    let fetcher = remote.fetcher();

    // Empty --sync--> HasCurrent
    store.sync(&fetcher, &mut RecordingObserver::new()).unwrap();
    assert_eq!(store.state(), CacheState::HasCurrent);

    // list() returns the templates in archive order
    let names = TemplateCatalog::new(&store)
        .list(&fetcher, &mut RecordingObserver::new())
        .unwrap();
    assert_eq!(names, vec!["web-api", "cli-tool"]);

    // generate materializes the template subtree byte-for-byte
    let dest = temp.path().join("out");
    let generated = TemplateGenerator::new(&store)
        .generate("web-api", &dest, &fetcher, &mut RecordingObserver::new())
        .unwrap();
    assert_eq!(generated.files_written, 2);
    assert_eq!(std::fs::read(dest.join("a.txt")).unwrap(), b"alpha");
    assert_eq!(std::fs::read(dest.join("sub/b.txt")).unwrap(), b"beta");

    // HasCurrent --sync--> HasCurrentAndBackup, backup == pre-sync current
    let first_generation = std::fs::read(store.archive_path()).unwrap();
    store.sync(&fetcher, &mut RecordingObserver::new()).unwrap();
    assert_eq!(store.state(), CacheState::HasCurrentAndBackup);
    assert_eq!(std::fs::read(store.backup_path()).unwrap(), first_generation);

    // rollback promotes the backup; a second rollback is a no-op
    let mut confirmer = MockConfirmer::with_answers([true]);
    assert_eq!(
        store.rollback(&mut confirmer).unwrap(),
        RollbackOutcome::RolledBack
    );
    assert_eq!(store.state(), CacheState::HasCurrent);
    assert_eq!(std::fs::read(store.archive_path()).unwrap(), first_generation);
    assert_eq!(
        store.rollback(&mut MockConfirmer::new()).unwrap(),
        RollbackOutcome::NoBackup
    );

    // reset wipes everything
    assert_eq!(
        store.reset(&mut MockConfirmer::with_answers([true])).unwrap(),
        ResetOutcome::Reset
    );
    assert_eq!(store.state(), CacheState::Empty);

    // ...and a subsequent list() triggers a fresh sync
    let names = TemplateCatalog::new(&store)
        .list(&fetcher, &mut RecordingObserver::new())
        .unwrap();
    assert_eq!(names, vec!["web-api", "cli-tool"]);
    assert_eq!(store.state(), CacheState::HasCurrent);
}

#[test]
fn backup_exists_iff_current_existed_before_sync() {
    let remote = Remote::serving_sample();
    let temp = TempDir::new().unwrap();
    let store = CacheStore::new(temp.path().join("cache"));
    let fetcher = remote.fetcher();

    // No current before: no backup after
    store.sync(&fetcher, &mut RecordingObserver::new()).unwrap();
    assert!(!store.has_backup());

    // Current before: exactly one backup after, holding its content
    std::fs::write(store.archive_path(), b"previous generation").unwrap();
    store.sync(&fetcher, &mut RecordingObserver::new()).unwrap();
    assert!(store.has_backup());
    assert_eq!(
        std::fs::read(store.backup_path()).unwrap(),
        b"previous generation"
    );
}

#[test]
fn generate_unknown_template_performs_no_writes() {
    let remote = Remote::serving_sample();
    let temp = TempDir::new().unwrap();
    let store = CacheStore::new(temp.path().join("cache"));
    let fetcher = remote.fetcher();
    store.sync(&fetcher, &mut RecordingObserver::new()).unwrap();

    let dest = temp.path().join("out");
    let result = TemplateGenerator::new(&store).generate(
        "missing",
        &dest,
        &fetcher,
        &mut RecordingObserver::new(),
    );

    assert!(matches!(result, Err(SrcgenError::TemplateNotFound { .. })));
    assert!(!dest.exists());
}

#[test]
fn failed_sync_keeps_last_known_good_archive() {
    let temp = TempDir::new().unwrap();
    let store = CacheStore::new(temp.path().join("cache"));

    // Populate, then point at a server that only errors
    let remote = Remote::serving_sample();
    store
        .sync(&remote.fetcher(), &mut RecordingObserver::new())
        .unwrap();
    let good = std::fs::read(store.archive_path()).unwrap();

    let failing = MockServer::start();
    failing.mock(|when, then| {
        when.method(GET).path("/templates.zip");
        then.status(503);
    });
    let bad_fetcher = ArchiveFetcher::new(failing.url("/templates.zip"), Duration::from_secs(10));

    let result = store.sync(&bad_fetcher, &mut RecordingObserver::new());
    assert!(result.is_err());

    // The current archive is still the last good one and still readable
    assert_eq!(store.state(), CacheState::HasCurrent);
    assert_eq!(std::fs::read(store.archive_path()).unwrap(), good);
    let names = TemplateCatalog::new(&store)
        .list(&bad_fetcher, &mut RecordingObserver::new())
        .unwrap();
    assert_eq!(names, vec!["web-api", "cli-tool"]);
}
