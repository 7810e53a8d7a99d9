use crate::event_service::EventReporter;
use anyhow::Result;
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Append-only journal of analytics events.
#[derive(Debug, Clone)]
pub struct FileEventLog {
    path: PathBuf,
}

impl FileEventLog {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the full path to the log file as a string for display
    pub fn path_display(&self) -> String {
        self.path.display().to_string()
    }

    /// Append one timestamped entry.
    pub fn append(&self, event: &str, details: impl AsRef<str>) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let timestamp = Utc::now().to_rfc3339();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let body = details.as_ref().trim();
        if body.is_empty() {
            writeln!(file, "[{}] event={}", timestamp, event)?;
        } else {
            writeln!(file, "[{}] event={} {}", timestamp, event, body)?;
        }
        Ok(())
    }

    /// Read the entire log file content
    pub fn read(&self) -> Result<String> {
        if self.path.exists() {
            Ok(fs::read_to_string(&self.path)?)
        } else {
            Ok(String::new())
        }
    }

    /// Event names in the order they were logged
    pub fn events(&self) -> Result<Vec<String>> {
        Ok(self
            .read()?
            .lines()
            .filter_map(|line| line.split("event=").nth(1))
            .filter_map(|rest| rest.split_whitespace().next())
            .map(str::to_string)
            .collect())
    }
}

impl EventReporter for FileEventLog {
    async fn log_event(&self, event: &str) -> Result<bool> {
        self.append(event, "")?;
        tracing::debug!("Logged event {} to {}", event, self.path_display());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_service::{EventFlags, EventService, EVENT_2ND_PW, KEY_EVENT_2ND_PW};
    use crate::user_settings::SettingsStore;

    const EVENT_LOG_FILE: &str = "event_log.txt";

    fn temp_log(name: &str) -> FileEventLog {
        let dir = std::env::temp_dir().join(format!("txlens-test-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        FileEventLog::at(dir.join(EVENT_LOG_FILE))
    }

    #[test]
    fn test_read_missing_log_is_empty() {
        let log = temp_log("missing");
        assert_eq!(log.read().unwrap(), "");
        assert!(log.events().unwrap().is_empty());
    }

    #[test]
    fn test_append_creates_directory_and_preserves_order() {
        let log = temp_log("append");
        log.append("first", "").unwrap();
        log.append("second", "source=qr").unwrap();
        assert_eq!(log.events().unwrap(), vec!["first", "second"]);
        assert!(log.read().unwrap().contains("event=second source=qr"));
    }

    #[tokio::test]
    async fn test_event_service_with_settings_logs_once() {
        let log = temp_log("service");
        let settings_path = log.path.with_file_name("settings.json");
        let mut service = EventService::new(log.clone(), SettingsStore::open(&settings_path));
        service.log_second_password_event(true).await;
        service.log_second_password_event(true).await;
        let (_, store) = service.into_parts();
        assert!(store.is_logged(KEY_EVENT_2ND_PW));
        assert_eq!(log.events().unwrap(), vec![format!("{}1", EVENT_2ND_PW)]);
    }

    #[tokio::test]
    async fn test_logged_flag_survives_settings_reload() {
        let log = temp_log("reload");
        let settings_path = log.path.with_file_name("settings.json");

        let mut first = EventService::new(log.clone(), SettingsStore::open(&settings_path));
        first.log_second_password_event(true).await;
        drop(first);

        // New session, settings read back from disk
        let mut second = EventService::new(log.clone(), SettingsStore::open(&settings_path));
        assert!(second.flags().is_logged(KEY_EVENT_2ND_PW));
        second.log_second_password_event(true).await;

        assert_eq!(log.events().unwrap(), vec![format!("{}1", EVENT_2ND_PW)]);
    }
}
