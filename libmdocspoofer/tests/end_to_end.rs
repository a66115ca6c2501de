//! End-to-end checks: a small frames directory in, complete sidecar files out.

use std::fs::File;
use std::path::Path;

use libmdocspoofer::config::Config;
use libmdocspoofer::process::process;

fn touch(dir: &Path, name: &str) {
    File::create(dir.join(name)).unwrap();
}

fn spoof(frames: &Path, out: &Path, dose: f64) -> usize {
    let config = Config {
        frames_path: frames.to_path_buf(),
        dose_per_image: dose,
        mdoc_path: out.to_path_buf(),
    };
    process(&config).unwrap()
}

#[test]
fn two_series_produce_two_sidecars() {
    let frames = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    touch(frames.path(), "sampleA_001[-10.0]_fractions.mrc");
    touch(frames.path(), "sampleA_002[0.0]_fractions.mrc");
    touch(frames.path(), "sampleB_001[5.0]_fractions.mrc");
    touch(frames.path(), "not_a_movie.txt");

    let n_written = spoof(frames.path(), &out.path().join("mdoc"), 2.5);
    assert_eq!(n_written, 2);

    let text_a = std::fs::read_to_string(out.path().join("mdoc/sampleA.mrc.mdoc")).unwrap();
    let text_b = std::fs::read_to_string(out.path().join("mdoc/sampleB.mrc.mdoc")).unwrap();

    // sampleA: two ordered blocks with the shared dose stamped in
    let markers: Vec<&str> = text_a
        .lines()
        .filter(|line| line.starts_with("[ZValue"))
        .collect();
    assert_eq!(markers, vec!["[ZValue = 0]", "[ZValue = 1]"]);
    assert!(text_a.contains("ImageFile = sampleA.mrc"));
    assert!(text_a.contains("TiltAngle = -10.0"));
    assert!(text_a.contains("TiltAngle = 0.0"));
    assert_eq!(
        text_a
            .lines()
            .filter(|line| *line == "ExposureDose = 2.5")
            .count(),
        2
    );
    assert!(text_a.contains(r"SubFramePath = X:\spoof\frames\sampleA_001[-10.0]_fractions.mrc"));

    // sampleB: a single block, index 0
    let markers: Vec<&str> = text_b
        .lines()
        .filter(|line| line.starts_with("[ZValue"))
        .collect();
    assert_eq!(markers, vec!["[ZValue = 0]"]);
    assert!(text_b.contains("TiltAngle = 5.0"));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let frames = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    touch(frames.path(), "series_001[-30.0]_fractions.mrc");
    touch(frames.path(), "series_002[-15.0]_fractions.mrc");

    let mdoc_dir = out.path().join("mdoc");
    spoof(frames.path(), &mdoc_dir, 1.2);
    let first = std::fs::read(mdoc_dir.join("series.mrc.mdoc")).unwrap();
    spoof(frames.path(), &mdoc_dir, 1.2);
    let second = std::fs::read(mdoc_dir.join("series.mrc.mdoc")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn output_directory_is_created_if_absent() {
    let frames = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    touch(frames.path(), "series_001[0.0]_fractions.mrc");

    let mdoc_dir = out.path().join("nested").join("mdoc");
    let n_written = spoof(frames.path(), &mdoc_dir, 2.0);
    assert_eq!(n_written, 1);
    assert!(mdoc_dir.join("series.mrc.mdoc").exists());
}
