//! Test helpers for laying out opportunity and history files on disk.

use camino::{Utf8Path, Utf8PathBuf};
use stint_core::test_support::{HistoryBuilder, OpportunityBuilder};
use stint_core::RacingOpportunity;
use tempfile::TempDir;

pub(super) const PINNED_NOW: &str = "2026-10-16T12:00:00Z";
pub(super) const ENDURANCE_SERIES_ID: u32 = 200;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Temporary directory holding the command's input files.
pub(super) struct ScoreFiles {
    _dir: TempDir,
    pub(super) opportunities: Utf8PathBuf,
    pub(super) history: Utf8PathBuf,
}

impl ScoreFiles {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let opportunities = root.join("opportunities.json");
        let history = root.join("history.json");
        Self {
            _dir: dir,
            opportunities,
            history,
        }
    }

    /// Write a sprint and an endurance race, sprint last.
    pub(super) fn write_default_opportunities(&self) {
        let opportunities: Vec<RacingOpportunity> = vec![
            OpportunityBuilder::new()
                .series_track(ENDURANCE_SERIES_ID, 12)
                .race_length(120)
                .build(),
            OpportunityBuilder::new().build(),
        ];
        let payload = serde_json::to_string_pretty(&opportunities).expect("serialise opportunities");
        write_utf8(&self.opportunities, payload.as_bytes());
    }

    /// Write a history for a driver who has never raced.
    pub(super) fn write_newcomer_history(&self) {
        let history = HistoryBuilder::new().build();
        let payload = serde_json::to_string_pretty(&history).expect("serialise history");
        write_utf8(&self.history, payload.as_bytes());
    }

    pub(super) fn write_both(&self) {
        self.write_default_opportunities();
        self.write_newcomer_history();
    }
}
