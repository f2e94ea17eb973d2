use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tempfile::tempdir;

use super::*;
use crate::domain::entities::{Artifact, Asset};
use crate::domain::ports::{AssetStore, Codec, CompressEvent, CompressEventSink, NoopEventSink};
use crate::domain::value_objects::ExtensionSet;
use crate::error::{AssetgzError, AssetgzResult};
use crate::infrastructure::{GzipCodec, LocalAssetStore};

#[derive(Default)]
struct RecordingSink {
    events: RefCell<Vec<CompressEvent>>,
}

impl CompressEventSink for RecordingSink {
    fn on_event(&self, event: &CompressEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

fn use_case() -> CompressUseCase<LocalAssetStore, GzipCodec> {
    CompressUseCase::new(LocalAssetStore::new(), GzipCodec::default())
}

fn write_asset(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    set_mtime(&path, SystemTime::now() - Duration::from_secs(3600));
    path
}

fn set_mtime(path: &Path, when: SystemTime) {
    fs::File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(when)
        .unwrap();
}

fn mtime(path: &Path) -> SystemTime {
    fs::metadata(path).unwrap().modified().unwrap()
}

fn gunzip(path: &Path) -> Vec<u8> {
    GzipCodec::default().decode(&fs::read(path).unwrap()).unwrap()
}

#[test]
fn compresses_every_eligible_file_round_trip() {
    let dir = tempdir().unwrap();
    let html = write_asset(dir.path(), "index.html", &"<p>hello</p>".repeat(50));
    let css = write_asset(dir.path(), "css/site.css", "body { margin: 0 }");
    let json = write_asset(dir.path(), "api/state.json", r#"{"on":true}"#);

    let report = use_case()
        .execute(dir.path(), &CompressOptions::new(), &NoopEventSink)
        .unwrap();

    assert_eq!(report.compressed.len(), 3);
    for source in [&html, &css, &json] {
        let artifact = crate::domain::entities::artifact_path_for(source);
        assert_eq!(gunzip(&artifact), fs::read(source).unwrap());
    }
}

#[test]
fn reports_sizes_from_written_artifact() {
    let dir = tempdir().unwrap();
    let source = write_asset(dir.path(), "app.js", &"let x = 1;\n".repeat(100));

    let report = use_case()
        .execute(dir.path(), &CompressOptions::new(), &NoopEventSink)
        .unwrap();

    let file = &report.compressed[0];
    assert_eq!(file.savings.original, 1100);
    assert_eq!(
        file.savings.compressed,
        fs::metadata(source.with_extension("js.gz")).unwrap().len()
    );
    assert!(file.savings.saved() > 0);
    assert_eq!(report.total_saved(), file.savings.saved());
}

#[test]
fn current_artifact_is_left_untouched() {
    let dir = tempdir().unwrap();
    let source = write_asset(dir.path(), "index.html", "<html></html>");
    let artifact = dir.path().join("index.html.gz");
    fs::write(&artifact, b"sentinel").unwrap();
    set_mtime(&artifact, mtime(&source) + Duration::from_secs(60));

    let report = use_case()
        .execute(dir.path(), &CompressOptions::new(), &NoopEventSink)
        .unwrap();

    assert!(report.is_empty());
    assert_eq!(report.current, vec![source]);
    assert_eq!(fs::read(&artifact).unwrap(), b"sentinel");
}

#[test]
fn second_run_skips_everything() {
    let dir = tempdir().unwrap();
    write_asset(dir.path(), "index.html", "<html></html>");
    write_asset(dir.path(), "app.js", "console.log(1)");

    let first = use_case()
        .execute(dir.path(), &CompressOptions::new(), &NoopEventSink)
        .unwrap();
    let second = use_case()
        .execute(dir.path(), &CompressOptions::new(), &NoopEventSink)
        .unwrap();

    assert_eq!(first.compressed.len(), 2);
    assert!(second.is_empty());
    assert_eq!(second.current.len(), 2);
}

#[test]
fn source_newer_than_artifact_is_regenerated() {
    let dir = tempdir().unwrap();
    let source = write_asset(dir.path(), "app.js", "const v = 2;");
    let artifact = dir.path().join("app.js.gz");
    fs::write(&artifact, b"stale bytes").unwrap();
    set_mtime(&artifact, mtime(&source) - Duration::from_secs(60));

    let report = use_case()
        .execute(dir.path(), &CompressOptions::new(), &NoopEventSink)
        .unwrap();

    assert_eq!(report.compressed.len(), 1);
    assert_eq!(gunzip(&artifact), b"const v = 2;");
}

#[test]
fn equal_timestamps_are_regenerated() {
    let dir = tempdir().unwrap();
    let source = write_asset(dir.path(), "logo.svg", "<svg/>");
    let artifact = dir.path().join("logo.svg.gz");
    fs::write(&artifact, b"stale").unwrap();
    set_mtime(&artifact, mtime(&source));

    let report = use_case()
        .execute(dir.path(), &CompressOptions::new(), &NoopEventSink)
        .unwrap();

    assert_eq!(report.compressed.len(), 1);
    assert_eq!(gunzip(&artifact), b"<svg/>");
}

#[test]
fn other_extensions_are_never_touched() {
    let dir = tempdir().unwrap();
    write_asset(dir.path(), "photo.png", "png-bytes");
    write_asset(dir.path(), "README", "text");
    write_asset(dir.path(), "font.woff2", "font");

    let report = use_case()
        .execute(dir.path(), &CompressOptions::new(), &NoopEventSink)
        .unwrap();

    assert_eq!(report.total_count(), 0);
    assert!(!dir.path().join("photo.png.gz").exists());
    assert!(!dir.path().join("README.gz").exists());
    assert_eq!(fs::read(dir.path().join("photo.png")).unwrap(), b"png-bytes");
}

#[test]
fn missing_root_is_a_benign_no_op() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("data");
    let sink = RecordingSink::default();

    let report = use_case()
        .execute(&root, &CompressOptions::new(), &sink)
        .unwrap();

    assert!(report.root_missing);
    assert!(report.is_empty());
    assert!(!root.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    assert_eq!(
        sink.events.borrow().as_slice(),
        &[CompressEvent::RootMissing { root }]
    );
}

#[test]
fn zero_byte_source_produces_valid_artifact() {
    let dir = tempdir().unwrap();
    write_asset(dir.path(), "empty.json", "");

    let report = use_case()
        .execute(dir.path(), &CompressOptions::new(), &NoopEventSink)
        .unwrap();

    let file = &report.compressed[0];
    assert_eq!(file.savings.original, 0);
    assert_eq!(file.savings.percent(), 0.0);
    assert!(file.savings.saved() < 0);
    assert!(gunzip(&dir.path().join("empty.json.gz")).is_empty());
}

#[test]
fn force_regenerates_current_artifacts() {
    let dir = tempdir().unwrap();
    let source = write_asset(dir.path(), "index.html", "<html></html>");
    let artifact = dir.path().join("index.html.gz");
    fs::write(&artifact, b"sentinel").unwrap();
    set_mtime(&artifact, mtime(&source) + Duration::from_secs(60));

    let report = use_case()
        .execute(
            dir.path(),
            &CompressOptions::new().with_force(true),
            &NoopEventSink,
        )
        .unwrap();

    assert_eq!(report.compressed.len(), 1);
    assert_eq!(gunzip(&artifact), b"<html></html>");
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempdir().unwrap();
    write_asset(dir.path(), "app.js", &"var a = 1;".repeat(40));

    let report = use_case()
        .execute(
            dir.path(),
            &CompressOptions::new().with_dry_run(true),
            &NoopEventSink,
        )
        .unwrap();

    assert!(report.dry_run);
    assert_eq!(report.compressed.len(), 1);
    assert!(report.compressed[0].savings.compressed > 0);
    assert!(!dir.path().join("app.js.gz").exists());
}

#[test]
fn custom_extensions_limit_the_pass() {
    let dir = tempdir().unwrap();
    write_asset(dir.path(), "index.html", "<html></html>");
    write_asset(dir.path(), "notes.txt", "plain text");

    let options = CompressOptions::new().with_extensions(ExtensionSet::parse(["txt"]).unwrap());
    let report = use_case()
        .execute(dir.path(), &options, &NoopEventSink)
        .unwrap();

    assert_eq!(report.compressed.len(), 1);
    assert!(dir.path().join("notes.txt.gz").exists());
    assert!(!dir.path().join("index.html.gz").exists());
}

#[test]
fn sink_sees_started_files_and_completed_in_order() {
    let dir = tempdir().unwrap();
    let a = write_asset(dir.path(), "a.css", "a {}");
    let b = write_asset(dir.path(), "b.css", "b {}");
    let b_artifact = dir.path().join("b.css.gz");
    fs::write(&b_artifact, b"x").unwrap();
    set_mtime(&b_artifact, mtime(&b) + Duration::from_secs(60));

    let sink = RecordingSink::default();
    use_case()
        .execute(dir.path(), &CompressOptions::new(), &sink)
        .unwrap();

    let events = sink.events.borrow();
    assert_eq!(events.len(), 4);
    assert!(matches!(&events[0], CompressEvent::Started { asset_count: 2, .. }));
    assert!(matches!(&events[1], CompressEvent::FileCompressed { path, .. } if path == &a));
    assert_eq!(events[2], CompressEvent::FileCurrent { path: b });
    assert!(matches!(
        &events[3],
        CompressEvent::Completed {
            compressed: 1,
            current: 1,
            ..
        }
    ));
}

#[cfg(unix)]
#[test]
fn artifact_mode_matches_source_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let source = write_asset(dir.path(), "index.html", "<html></html>");

    use_case()
        .execute(dir.path(), &CompressOptions::new(), &NoopEventSink)
        .unwrap();

    let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode(&dir.path().join("index.html.gz")), mode(&source));
}

/// Store that delegates to disk but refuses to write artifacts.
struct ReadOnlyStore(LocalAssetStore);

impl AssetStore for ReadOnlyStore {
    fn root_exists(&self, root: &Path) -> bool {
        self.0.root_exists(root)
    }

    fn discover(&self, root: &Path, extensions: &ExtensionSet) -> AssetgzResult<Vec<Asset>> {
        self.0.discover(root, extensions)
    }

    fn artifact(&self, path: &Path) -> AssetgzResult<Option<Artifact>> {
        self.0.artifact(path)
    }

    fn read(&self, path: &Path) -> AssetgzResult<Vec<u8>> {
        self.0.read(path)
    }

    fn write_artifact(&self, path: &Path, _content: &[u8]) -> AssetgzResult<Artifact> {
        Err(AssetgzError::Write {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }

    fn remove(&self, path: &Path) -> AssetgzResult<()> {
        self.0.remove(path)
    }
}

#[test]
fn write_failure_aborts_the_pass() {
    let dir = tempdir().unwrap();
    write_asset(dir.path(), "a.js", "1");
    write_asset(dir.path(), "b.js", "2");

    let sink = RecordingSink::default();
    let use_case = CompressUseCase::new(ReadOnlyStore(LocalAssetStore::new()), GzipCodec::default());
    let err = use_case
        .execute(dir.path(), &CompressOptions::new(), &sink)
        .unwrap_err();

    assert!(matches!(err, AssetgzError::Write { .. }));
    let events = sink.events.borrow();
    assert!(!events
        .iter()
        .any(|e| matches!(e, CompressEvent::Completed { .. })));
}
