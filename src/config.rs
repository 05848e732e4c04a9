//! Dialogue box configuration
//!
//! Parsed from `dialogue.toml` (or a path given by the binary):
//!
//! ```toml
//! [frame]
//! x = 5
//! y = 18
//! width = 30
//! height = 6
//! title = "Info"
//!
//! [style]
//! corner = "+"
//! more = "v"
//! ```
//!
//! Every field is optional. A missing file yields the defaults; a file that
//! exists but cannot be read or parsed is an error.

use crate::error::{DialogueError, Result};
use crate::render::BoxStyle;
use crate::TileRect;
use serde::Deserialize;
use std::{fs, io, path::PathBuf};
use tracing::info;

/// Box placement in tile units
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FrameConfig {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub title: Option<String>,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            x: 5,
            y: 18,
            width: 30,
            height: 6,
            title: Some("Info".to_string()),
        }
    }
}

impl FrameConfig {
    pub fn rect(&self) -> TileRect {
        TileRect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct DialogueConfig {
    #[serde(default)]
    pub frame: FrameConfig,
    #[serde(default)]
    pub style: BoxStyle,
}

impl DialogueConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Config path in the working directory
pub fn discover() -> PathBuf {
    PathBuf::from("dialogue.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<DialogueConfig> {
    let path = path.unwrap_or_else(discover);
    match fs::read_to_string(&path) {
        Ok(content) => {
            let config = DialogueConfig::from_toml(&content)?;
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(config)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!(target: "config", path = %path.display(), "config_default");
            Ok(DialogueConfig::default())
        }
        Err(source) => Err(DialogueError::ConfigRead { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex, MutexGuard};
    use tracing::subscriber::with_default;
    use tracing::Level;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone)]
    struct BufferWriter {
        inner: Arc<Mutex<Vec<u8>>>,
    }

    struct LockedWriter<'a> {
        guard: MutexGuard<'a, Vec<u8>>,
    }

    impl<'a> Write for LockedWriter<'a> {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.guard.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for BufferWriter {
        type Writer = LockedWriter<'a>;

        fn make_writer(&'a self) -> Self::Writer {
            LockedWriter {
                guard: self.inner.lock().expect("log buffer poisoned"),
            }
        }
    }

    #[test]
    fn test_default_when_missing_file() {
        let cfg = load_from(Some(PathBuf::from("__nonexistent_dialogue__.toml"))).unwrap();
        assert_eq!(cfg, DialogueConfig::default());
        assert_eq!(cfg.frame.rect(), TileRect::new(5, 18, 30, 6));
        assert_eq!(cfg.frame.title.as_deref(), Some("Info"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "[frame]\nwidth = 20\ntitle = \"Sign\"\n[style]\nmore = \"*\"\n")
            .unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.frame.width, 20);
        assert_eq!(cfg.frame.height, 6);
        assert_eq!(cfg.frame.title.as_deref(), Some("Sign"));
        assert_eq!(cfg.style.more, '*');
        assert_eq!(cfg.style.corner, '+');
    }

    #[test]
    fn test_parse_error_is_reported() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "[frame]\nwidth = \"wide\"\n").unwrap();
        let err = load_from(Some(tmp.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, DialogueError::ConfigParse(_)));
    }

    #[test]
    fn test_load_logs_on_config_target() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "[frame]\nx = 1\n").unwrap();

        let buffer = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_target(true)
            .with_ansi(false)
            .without_time()
            .with_writer(BufferWriter {
                inner: buffer.clone(),
            })
            .finish();

        with_default(subscriber, || {
            load_from(Some(tmp.path().to_path_buf())).unwrap();
        });

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(output.contains("config"), "missing target: {output}");
        assert!(output.contains("config_loaded"), "missing event: {output}");
    }
}
