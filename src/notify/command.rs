//! External programs as collaborators: a screenshot tool such as
//! `scrot -u {path}` and a messaging hook script.

use super::{EvidenceCapture, Notice, Notifier};
use crate::utils::time::format_timestamp;
use chrono::NaiveDateTime;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

const PATH_PLACEHOLDER: &str = "{path}";

/// Split a command template into program and arguments.
fn split_template(template: &str) -> Option<(String, Vec<String>)> {
    let mut parts = template.split_whitespace().map(str::to_string);
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Runs `template` with `{path}` replaced by `<images_dir>/YYYYMMDD-HHMMSS.jpg`.
/// Without a placeholder the path is passed as the last argument.
#[derive(Debug, Clone)]
pub struct CommandCapture {
    template: String,
    images_dir: PathBuf,
}

impl CommandCapture {
    pub fn new(template: impl Into<String>, images_dir: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            images_dir: images_dir.into(),
        }
    }

    pub fn image_path(&self, timestamp: NaiveDateTime) -> PathBuf {
        self.images_dir
            .join(format!("{}.jpg", format_timestamp(&timestamp)))
    }
}

impl EvidenceCapture for CommandCapture {
    fn capture(&self, timestamp: NaiveDateTime) -> Option<PathBuf> {
        let (program, mut args) = split_template(&self.template)?;
        let image = self.image_path(timestamp);
        let image_str = image.to_string_lossy().to_string();

        if args.iter().any(|a| a.contains(PATH_PLACEHOLDER)) {
            for a in args.iter_mut() {
                *a = a.replace(PATH_PLACEHOLDER, &image_str);
            }
        } else {
            args.push(image_str);
        }

        if let Err(e) = fs::create_dir_all(&self.images_dir) {
            log::warn!(
                "cannot create image directory {}: {}",
                self.images_dir.display(),
                e
            );
            return None;
        }

        match Command::new(&program).args(&args).status() {
            Ok(s) if s.success() && image.exists() => Some(image),
            Ok(s) if s.success() => {
                log::warn!("capture command '{}' wrote no image", program);
                None
            }
            Ok(s) => {
                log::warn!("capture command '{}' exited with {}", program, s);
                None
            }
            Err(e) => {
                log::warn!("capture command '{}' failed to start: {}", program, e);
                None
            }
        }
    }
}

/// Runs `template` followed by the message text and, if any, the evidence
/// path. Used to bridge to whatever chat bot script is installed.
#[derive(Debug, Clone)]
pub struct CommandNotifier {
    template: String,
}

impl CommandNotifier {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl Notifier for CommandNotifier {
    fn notify(&self, notice: &Notice) {
        let Some((program, mut args)) = split_template(&self.template) else {
            log::warn!("notify command is empty; dropping '{}'", notice.message());
            return;
        };

        args.push(notice.message());
        if let Some(path) = &notice.evidence {
            args.push(path.to_string_lossy().to_string());
        }

        match Command::new(&program).args(&args).status() {
            Ok(s) if s.success() => log::debug!("notified via '{}'", program),
            Ok(s) => log::warn!("notify command '{}' exited with {}", program, s),
            Err(e) => log::warn!("notify command '{}' failed to start: {}", program, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::parse_timestamp;

    #[test]
    fn template_split() {
        assert_eq!(
            split_template("scrot -u {path}"),
            Some(("scrot".to_string(), vec!["-u".to_string(), "{path}".to_string()]))
        );
        assert_eq!(split_template("   "), None);
    }

    #[test]
    fn image_is_named_after_timestamp() {
        let cap = CommandCapture::new("scrot -u {path}", "/data/images");
        let ts = parse_timestamp("20230301-080000").unwrap();
        assert_eq!(
            cap.image_path(ts),
            PathBuf::from("/data/images/20230301-080000.jpg")
        );
    }

    #[cfg(unix)]
    #[test]
    fn missing_program_yields_no_evidence() {
        let tmp = tempfile::tempdir().unwrap();
        let cap = CommandCapture::new("definitely-not-a-real-binary-xyz {path}", tmp.path());
        let ts = parse_timestamp("20230301-080000").unwrap();
        assert_eq!(cap.capture(ts), None);
    }

    #[cfg(unix)]
    #[test]
    fn successful_command_returns_the_image() {
        let tmp = tempfile::tempdir().unwrap();
        let cap = CommandCapture::new("touch {path}", tmp.path().join("images"));
        let ts = parse_timestamp("20230301-080000").unwrap();
        assert_eq!(cap.capture(ts), Some(cap.image_path(ts)));
    }
}
