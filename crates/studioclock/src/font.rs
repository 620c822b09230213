//! Readout font discovery.

use std::fs;
use std::path::{Path, PathBuf};

use studioclock_engine::text::{FontId, FontSystem};

use crate::error::{Error, Result};

/// Loads the first readable font among `paths` into `fonts`.
///
/// Missing or unreadable files are skipped. A file that reads but fails to
/// parse is an error rather than a fallback, so a broken install is noticed.
pub fn load_first(fonts: &mut FontSystem, paths: &[PathBuf], size: f32) -> Result<FontId> {
    for path in paths {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::debug!("font candidate {} skipped: {err}", path.display());
                continue;
            }
        };

        return load_bytes(fonts, path, &bytes, size);
    }

    Err(Error::FontNotFound {
        searched: paths.to_vec(),
    })
}

fn load_bytes(fonts: &mut FontSystem, path: &Path, bytes: &[u8], size: f32) -> Result<FontId> {
    let id = fonts.load_font(bytes, size).map_err(|source| Error::FontLoad {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("readout font: {}", path.display());
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_candidates_is_not_found() {
        let mut fonts = FontSystem::new();
        let err = load_first(&mut fonts, &[], 120.0).unwrap_err();
        assert!(matches!(err, Error::FontNotFound { ref searched } if searched.is_empty()));
        assert!(fonts.is_empty());
    }

    #[test]
    fn missing_files_are_skipped() {
        let mut fonts = FontSystem::new();
        let paths = vec![
            PathBuf::from("/nonexistent/studioclock/a.ttf"),
            PathBuf::from("/nonexistent/studioclock/b.ttf"),
        ];
        match load_first(&mut fonts, &paths, 120.0) {
            Err(Error::FontNotFound { searched }) => assert_eq!(searched, paths),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn garbage_bytes_fail_to_load() {
        let dir = std::env::temp_dir().join(format!("studioclock-font-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let bogus = dir.join("bogus.ttf");
        fs::write(&bogus, b"definitely not a font").unwrap();

        let mut fonts = FontSystem::new();
        let err = load_first(&mut fonts, &[bogus.clone()], 120.0).unwrap_err();
        assert!(matches!(err, Error::FontLoad { ref path, .. } if *path == bogus));

        let _ = fs::remove_dir_all(&dir);
    }
}
