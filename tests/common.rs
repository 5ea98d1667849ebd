#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use catdoor::config::Config;
use catdoor::core::Engine;
use catdoor::models::Location;
use catdoor::notify::{EvidenceCapture, Notice, Notifier};
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

pub fn cat() -> Command {
    cargo_bin_cmd!("catdoor")
}

/// `catdoor` bound to a private HOME and data directory.
pub fn cat_in(tmp: &TempDir) -> Command {
    let mut cmd = cat();
    cmd.env("HOME", tmp.path())
        .env("APPDATA", tmp.path())
        .env("RUST_LOG", "off")
        .args(["--test", "--data-dir"])
        .arg(data_dir(tmp));
    cmd
}

pub fn data_dir(tmp: &TempDir) -> PathBuf {
    tmp.path().join("data")
}

pub fn logs_dir(tmp: &TempDir) -> PathBuf {
    data_dir(tmp).join("logs")
}

pub fn at(s: &str) -> NaiveDateTime {
    catdoor::utils::time::parse_timestamp(s).expect("valid timestamp")
}

pub fn config_for(tmp: &TempDir) -> Config {
    Config {
        data_dir: data_dir(tmp).to_string_lossy().to_string(),
        ..Config::default()
    }
}

/// File-backed engine over a temp directory.
pub fn file_engine(tmp: &TempDir) -> Engine {
    Engine::from_config(&config_for(tmp))
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_default()
}

pub fn partition(tmp: &TempDir, yyyymm: &str) -> String {
    read(&logs_dir(tmp).join(format!("{yyyymm}_log.txt")))
}

pub fn aggregate(tmp: &TempDir) -> String {
    read(&logs_dir(tmp).join("aggregate_data.txt"))
}

/// Notifier that remembers every notice.
#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn locations(&self) -> Vec<Location> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.location)
            .collect()
    }

    pub fn count(&self) -> usize {
        self.notices.lock().unwrap().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}

/// Capture that pretends to take a screenshot.
#[derive(Default)]
pub struct FakeCapture {
    pub calls: Mutex<Vec<NaiveDateTime>>,
}

impl EvidenceCapture for FakeCapture {
    fn capture(&self, timestamp: NaiveDateTime) -> Option<PathBuf> {
        self.calls.lock().unwrap().push(timestamp);
        Some(PathBuf::from(format!(
            "/evidence/{}.jpg",
            timestamp.format("%Y%m%d-%H%M%S")
        )))
    }
}

pub fn observed_engine(tmp: &TempDir) -> (Engine, Arc<RecordingNotifier>, Arc<FakeCapture>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let capture = Arc::new(FakeCapture::default());
    let engine = file_engine(tmp)
        .with_notifier(notifier.clone())
        .with_capture(capture.clone());
    (engine, notifier, capture)
}
