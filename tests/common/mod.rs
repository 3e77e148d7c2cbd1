//! Shared testing utilities for qapdf CLI tests.

use assert_cmd::Command;
use image::{Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    input_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new environment with an empty `questions_folder/`.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let input_dir = root.path().join("questions_folder");
        fs::create_dir_all(&input_dir).expect("Failed to create questions folder");
        Self { root, input_dir }
    }

    /// Directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Default input directory inside the work directory.
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Default output directory inside the work directory.
    pub fn output_dir(&self) -> PathBuf {
        self.root.path().join("output_pdfs")
    }

    /// Build a command for invoking the compiled `qapdf` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("qapdf").expect("Failed to locate qapdf binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }

    /// Write a solid-color GIF into the input directory.
    pub fn write_gif(&self, name: &str, width: u32, height: u32) {
        write_gif(&self.input_dir.join(name), width, height);
    }

    /// Write a question and its answer for `id`.
    pub fn write_pair(&self, id: &str) {
        self.write_gif(&format!("{}.gif", id), 320, 200);
        self.write_gif(&format!("{}s.gif", id), 320, 120);
    }

    /// Write arbitrary bytes into the input directory.
    pub fn write_raw(&self, name: &str, bytes: &[u8]) {
        fs::write(self.input_dir.join(name), bytes).expect("Failed to write input file");
    }

    /// Names of the files in the output directory, sorted.
    pub fn output_files(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.output_dir()) else {
            return Vec::new();
        };
        let mut names: Vec<String> =
            entries.map(|e| e.unwrap().file_name().to_string_lossy().into_owned()).collect();
        names.sort();
        names
    }
}

/// Write a solid-color GIF to `path`.
pub fn write_gif(path: &Path, width: u32, height: u32) {
    RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]))
        .save(path)
        .expect("Failed to encode GIF fixture");
}

/// Assert that `bytes` is a single-page PDF.
#[allow(dead_code)]
pub fn assert_single_page_pdf(bytes: &[u8]) {
    let doc = lopdf::Document::load_mem(bytes).expect("output should be a valid PDF");
    assert_eq!(doc.get_pages().len(), 1, "document should have exactly one page");
}
