use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_SETTINGS_PATH: &str = "setting.txt";

const DEFAULT_POINT_SPEC: &str = "30";
const SOLID_FLAG: &str = "true";

/// How the hull is rasterized. Fixed for the whole run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Triangles,
    Lines,
}

impl RenderMode {
    pub fn from_flag(flag: &str) -> Self {
        if flag == SOLID_FLAG {
            RenderMode::Triangles
        } else {
            RenderMode::Lines
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RenderMode::Triangles => "solid",
            RenderMode::Lines => "wireframe",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings file {} must contain exactly 2 lines, found {found}", path.display())]
    LineCount { path: PathBuf, found: usize },
}

/// The two values read from the settings file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub mode: RenderMode,
    /// Forwarded verbatim to the point generator.
    pub point_spec: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: RenderMode::Triangles,
            point_spec: DEFAULT_POINT_SPEC.to_string(),
        }
    }
}

impl Settings {
    /// Reads the settings file at `path`.
    ///
    /// A file that cannot be read at all yields the defaults. A file that can
    /// be read but does not hold exactly two lines is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();

        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, path),
            Err(err) => {
                log::warn!(
                    "could not read settings from {} ({err}), using defaults",
                    path.display()
                );
                Ok(Self::default())
            }
        }
    }

    pub fn parse(content: &str, path: &Path) -> Result<Self, SettingsError> {
        let lines: Vec<&str> = content.lines().collect();

        let [flag, spec] = lines.as_slice() else {
            return Err(SettingsError::LineCount {
                path: path.to_path_buf(),
                found: lines.len(),
            });
        };

        Ok(Self {
            mode: RenderMode::from_flag(flag),
            point_spec: spec.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn scratch_file(content: &str) -> PathBuf {
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "hullview-settings-{}-{n}.txt",
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("hullview-definitely-missing-settings.txt");
        let _ = std::fs::remove_file(&path);

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.mode, RenderMode::Triangles);
        assert_eq!(settings.point_spec, "30");
    }

    #[test]
    fn solid_flag_selects_triangles() {
        let path = scratch_file("true\n100 s\n");
        let settings = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.mode, RenderMode::Triangles);
        assert_eq!(settings.point_spec, "100 s");
    }

    #[test]
    fn any_other_flag_selects_lines() {
        for flag in ["false", "TRUE", "True", " true", ""] {
            let content = format!("{flag}\n40");
            let settings = Settings::parse(&content, Path::new("inline")).unwrap();
            assert_eq!(settings.mode, RenderMode::Lines, "flag {flag:?}");
        }
    }

    #[test]
    fn three_lines_is_an_error() {
        let path = scratch_file("true\n30\nextra\n");
        let err = Settings::load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        match err {
            SettingsError::LineCount { found, .. } => assert_eq!(found, 3),
        }
    }

    #[test]
    fn single_line_is_an_error() {
        let err = Settings::parse("true", Path::new("inline")).unwrap_err();
        assert!(matches!(err, SettingsError::LineCount { found: 1, .. }));
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let settings = Settings::parse("true\r\n30 D3\r\n", Path::new("inline")).unwrap();
        assert_eq!(settings.mode, RenderMode::Triangles);
        assert_eq!(settings.point_spec, "30 D3");
    }

    #[test]
    fn spec_line_is_forwarded_verbatim() {
        let settings = Settings::parse("no\n  12 c  t7 ", Path::new("inline")).unwrap();
        assert_eq!(settings.point_spec, "  12 c  t7 ");
    }
}
