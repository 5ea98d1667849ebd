//! `config --check`: report keys absent from the file (their defaults are
//! in effect) and keys the program does not know.

use serde_yaml::Value;

pub const KNOWN_KEYS: &[&str] = &[
    "data_dir",
    "subject_name",
    "label",
    "boundary_x",
    "remote_threshold_minutes",
    "visual_threshold_minutes",
    "capture_command",
    "notify_command",
];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub missing: Vec<String>,
    pub unknown: Vec<String>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unknown.is_empty()
    }
}

pub fn check_keys(content: &str) -> Result<CheckReport, serde_yaml::Error> {
    let yaml: Value = if content.trim().is_empty() {
        Value::Null
    } else {
        serde_yaml::from_str(content)?
    };

    let present: Vec<String> = yaml
        .as_mapping()
        .map(|m| {
            m.keys()
                .filter_map(|k| k.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    Ok(CheckReport {
        missing: KNOWN_KEYS
            .iter()
            .filter(|k| !present.iter().any(|p| p == *k))
            .map(|k| k.to_string())
            .collect(),
        unknown: present
            .into_iter()
            .filter(|p| !KNOWN_KEYS.contains(&p.as_str()))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_missing_and_unknown() {
        let report = check_keys("data_dir: /x\nlabel: cat\ndatabase: old.sqlite\n").unwrap();
        assert!(report.missing.contains(&"boundary_x".to_string()));
        assert!(!report.missing.contains(&"label".to_string()));
        assert_eq!(report.unknown, vec!["database".to_string()]);
        assert!(!report.is_clean());
    }

    #[test]
    fn empty_file_misses_everything() {
        let report = check_keys("").unwrap();
        assert_eq!(report.missing.len(), KNOWN_KEYS.len());
        assert!(report.unknown.is_empty());
    }
}
