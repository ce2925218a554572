//! Platform install/data/log directory resolution.
//!
//! Maps the host platform to the directories the tools use, and makes
//! sure the install dir is on `PATH` so spawned children can resolve the
//! bundled executables.

use std::env;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

/// Separator used in the `PATH` environment variable.
const PATH_SEP: char = if cfg!(windows) { ';' } else { ':' };

/// Resolved per-platform paths.
#[derive(Debug, Clone, Serialize)]
pub struct Paths {
    /// Executable install directory.
    pub app_dir: PathBuf,
    /// Configs, downloads, and logs.
    pub data_dir: PathBuf,
    /// Staging area for downloaded updates.
    pub update_stage_dir: PathBuf,
    /// Log file for long-running invocations.
    pub log_file: PathBuf,
}

impl Paths {
    pub fn resolve() -> Self {
        if cfg!(target_os = "windows") {
            // Logs, configs, and downloads go to LOCALAPPDATA; executables
            // live under the per-user Programs directory.
            let local_app_data = env::var_os("LOCALAPPDATA")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let data_dir = local_app_data.join("Modelfile");
            Self {
                app_dir: local_app_data.join("Programs").join("Modelfile"),
                update_stage_dir: data_dir.join("updates"),
                log_file: data_dir.join("modelfile.log"),
                data_dir,
            }
        } else {
            let data_dir = dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("modelfile");
            Self {
                app_dir: PathBuf::from("/opt/Modelfile"),
                data_dir,
                update_stage_dir: PathBuf::from("/tmp"),
                log_file: PathBuf::from("/tmp/modelfile.log"),
            }
        }
    }

    /// Append the install dir to `PATH` unless it is already present.
    pub fn bootstrap_path_env(&self) {
        let current = env::var("PATH").unwrap_or_default();
        let Some(value) = extended_path(&current, &self.app_dir, cfg!(windows)) else {
            return;
        };

        debug!(path = %value, "extending PATH with install dir");
        // Single-threaded at this point in startup.
        unsafe { env::set_var("PATH", &value) };
    }
}

/// Build the `PATH` value with `app_dir` appended, or `None` when an
/// existing entry already names it (case-insensitively on Windows).
fn extended_path(current: &str, app_dir: &Path, case_insensitive: bool) -> Option<String> {
    let app = app_dir.to_string_lossy();

    let found = current.split(PATH_SEP).any(|entry| {
        if case_insensitive {
            entry.eq_ignore_ascii_case(&app)
        } else {
            Path::new(entry) == app_dir
        }
    });
    if found {
        return None;
    }

    let mut value = current.to_string();
    if !value.is_empty() {
        value.push(PATH_SEP);
    }
    value.push_str(&app);
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_populates_every_path() {
        let paths = Paths::resolve();
        assert!(!paths.app_dir.as_os_str().is_empty());
        assert!(!paths.data_dir.as_os_str().is_empty());
        assert!(!paths.update_stage_dir.as_os_str().is_empty());
        assert!(paths.log_file.to_string_lossy().ends_with("modelfile.log"));
    }

    #[test]
    fn test_extended_path_appends_missing_dir() {
        let sep = PATH_SEP;
        let value = extended_path("/usr/bin", Path::new("/opt/Modelfile"), false).unwrap();
        assert_eq!(value, format!("/usr/bin{sep}/opt/Modelfile"));
    }

    #[test]
    fn test_extended_path_handles_empty_value() {
        let value = extended_path("", Path::new("/opt/Modelfile"), false).unwrap();
        assert_eq!(value, "/opt/Modelfile");
    }

    #[test]
    fn test_extended_path_skips_present_dir() {
        let current = format!("/usr/bin{PATH_SEP}/opt/Modelfile");
        assert!(extended_path(&current, Path::new("/opt/Modelfile"), false).is_none());
    }

    #[test]
    fn test_extended_path_is_case_insensitive_when_asked() {
        let current = format!("/usr/bin{PATH_SEP}/opt/modelfile");
        assert!(extended_path(&current, Path::new("/opt/Modelfile"), true).is_none());
    }
}
