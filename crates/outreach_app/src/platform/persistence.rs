use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use engine_logging::{engine_error, engine_info, engine_warn};
use outreach_core::FormSnapshot;
use outreach_engine::AtomicFileWriter;
use serde::{Deserialize, Serialize};

const STATE_FILENAME: &str = ".outreach_panel.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedForm {
    query: String,
    max_pages: String,
    #[serde(default)]
    saved_utc: Option<String>,
}

pub(crate) fn load_form(state_dir: &Path) -> Option<FormSnapshot> {
    let path = state_dir.join(STATE_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return None;
        }
        Err(err) => {
            engine_warn!("Failed to read remembered form from {:?}: {}", path, err);
            return None;
        }
    };

    let persisted: PersistedForm = match ron::from_str(&content) {
        Ok(persisted) => persisted,
        Err(err) => {
            engine_warn!("Failed to parse remembered form from {:?}: {}", path, err);
            return None;
        }
    };

    engine_info!(
        "Loaded remembered form from {:?} (saved {})",
        path,
        persisted.saved_utc.as_deref().unwrap_or("at an unknown time")
    );
    Some(FormSnapshot {
        query: persisted.query,
        max_pages: persisted.max_pages,
    })
}

pub(crate) fn save_form(state_dir: &Path, snapshot: &FormSnapshot) {
    let persisted = PersistedForm {
        query: snapshot.query.clone(),
        max_pages: snapshot.max_pages.clone(),
        saved_utc: Some(Utc::now().to_rfc3339()),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&persisted, pretty) {
        Ok(text) => text,
        Err(err) => {
            engine_error!("Failed to serialize remembered form: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(PathBuf::from(state_dir));
    if let Err(err) = writer.write(STATE_FILENAME, &content) {
        engine_error!("Failed to write remembered form to {:?}: {}", state_dir, err);
    }
}
