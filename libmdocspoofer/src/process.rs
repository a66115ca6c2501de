use std::path::{Path, PathBuf};

use super::config::Config;
use super::constants::FRACTIONS_SUFFIX;
use super::error::ProcessorError;
use super::mdoc::Mdoc;
use super::mdoc_image::MdocImage;

/// Enumerate the frame-stack movies in a directory (non-recursive).
///
/// Only regular files whose name ends with the fractions marker are eligible;
/// everything else is ignored without comment. The result is sorted by path so
/// discovery order is deterministic across platforms.
pub fn discover_movies(frames_dir: &Path) -> Result<Vec<PathBuf>, ProcessorError> {
    if !frames_dir.exists() {
        return Err(ProcessorError::BadFramesPath(frames_dir.to_path_buf()));
    }

    let mut movies: Vec<PathBuf> = Vec::new();
    for entry in frames_dir.read_dir()? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
            if name.ends_with(FRACTIONS_SUFFIX) {
                movies.push(path);
            }
        }
    }
    movies.sort();

    Ok(movies)
}

/// The main loop of mdocspoofer.
///
/// Discovers movies, derives one MdocImage per movie, partitions them into one
/// Mdoc per tilt series and writes every sidecar file to the configured output
/// directory. Returns the number of files written.
///
/// The run is strictly sequential with no retries; an eligible movie whose
/// name fails the frame pattern aborts the whole run.
pub fn process(config: &Config) -> Result<usize, ProcessorError> {
    let movies = discover_movies(&config.frames_path)?;
    log::info!(
        "Found {} movie files in {}",
        movies.len(),
        config.frames_path.to_string_lossy()
    );

    let mut images: Vec<MdocImage> = Vec::with_capacity(movies.len());
    for movie in &movies {
        images.push(MdocImage::new(movie, config.dose_per_image)?);
    }

    let mdocs = Mdoc::partition(images);

    std::fs::create_dir_all(&config.mdoc_path)?;
    for mdoc in &mdocs {
        let path = mdoc.write(&config.mdoc_path)?;
        log::info!(
            "Wrote {} tilt images to {}",
            mdoc.n_images(),
            path.to_string_lossy()
        );
    }

    Ok(mdocs.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn test_discovery_filters_by_suffix() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "sampleA_001[-10.0]_fractions.mrc");
        touch(dir.path(), "not_a_movie.txt");
        touch(dir.path(), "sampleA_002[0.0].mrc");

        let movies = discover_movies(dir.path()).unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(
            movies[0].file_name().unwrap().to_str().unwrap(),
            "sampleA_001[-10.0]_fractions.mrc"
        );
    }

    #[test]
    fn test_discovery_missing_directory() {
        let result = discover_movies(Path::new("/does/not/exist"));
        assert!(matches!(result, Err(ProcessorError::BadFramesPath(_))));
    }

    #[test]
    fn test_malformed_eligible_file_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        touch(dir.path(), "sampleA_001[-10.0]_fractions.mrc");
        touch(dir.path(), "badname_fractions.mrc");

        let config = Config {
            frames_path: dir.path().to_path_buf(),
            dose_per_image: 2.5,
            mdoc_path: out.path().join("mdoc"),
        };
        let result = process(&config);
        assert!(matches!(result, Err(ProcessorError::ImageError(_))));
    }

    #[test]
    fn test_process_reports_group_count() {
        let dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        touch(dir.path(), "sampleA_001[-10.0]_fractions.mrc");
        touch(dir.path(), "sampleA_002[0.0]_fractions.mrc");
        touch(dir.path(), "sampleB_001[5.0]_fractions.mrc");
        touch(dir.path(), "not_a_movie.txt");

        let config = Config {
            frames_path: dir.path().to_path_buf(),
            dose_per_image: 2.5,
            mdoc_path: out.path().join("mdoc"),
        };
        let n_written = process(&config).unwrap();
        assert_eq!(n_written, 2);
        assert!(config.get_mdoc_file_name("sampleA").exists());
        assert!(config.get_mdoc_file_name("sampleB").exists());
    }
}
