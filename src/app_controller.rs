use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::file_utils::{FileManager, FileType};
use crate::language_utils;
use crate::segment::{self, Segment};
use crate::subtitle_processor;

// @module: Application controller for subtitle generation

/// Main application controller: load segments, retime, render to files
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Language code used in output file names
    fn output_language(&self) -> String {
        language_utils::normalize_to_part1_or_part2t(&self.config.language)
            .unwrap_or_else(|_| self.config.language.to_lowercase())
    }

    /// Load segments from an SRT document or a segments JSON file
    pub fn load_segments(&self, path: &Path) -> Result<Vec<Segment>> {
        match FileManager::detect_file_type(path)? {
            FileType::Subtitle => {
                let content = FileManager::read_to_string(path)?;
                let segments = subtitle_processor::parse_srt_string(&content);
                debug!("Parsed {} segments from {:?}", segments.len(), path);
                Ok(segments)
            }
            FileType::Segments => {
                let content = FileManager::read_to_string(path)?;
                segment::segments_from_json(&content)
                    .with_context(|| format!("Failed to load segments from {:?}", path))
            }
            FileType::Video => Err(anyhow!(
                "{:?} is a video; transcribe it first and pass the segments JSON or an SRT file",
                path
            )),
            FileType::Unknown => Err(anyhow!("Unsupported input file: {:?}", path)),
        }
    }

    /// Write `segments` in every configured format next to `output_dir`.
    ///
    /// Returns the paths written; existing files are skipped unless `force_overwrite`.
    pub fn render_outputs(
        &self,
        segments: &[Segment],
        input_file: &Path,
        output_dir: &Path,
        force_overwrite: bool,
    ) -> Result<Vec<PathBuf>> {
        FileManager::ensure_dir(output_dir)?;
        let language = self.output_language();
        let mut written = Vec::new();

        for format in &self.config.output_formats {
            let output_path =
                FileManager::generate_output_path(input_file, output_dir, &language, format.as_str());

            if output_path.exists() && !force_overwrite {
                warn!("Skipping {:?}, file already exists (use -f to force overwrite)", output_path);
                continue;
            }

            let document = format.render(segments, self.config.frame_rate);
            FileManager::write_to_file(&output_path, &document)?;
            info!("Wrote {:?}", output_path);
            written.push(output_path);
        }

        Ok(written)
    }

    /// Run the main workflow for one input file
    pub fn run(&self, input_file: &Path, output_dir: &Path, force_overwrite: bool) -> Result<Vec<PathBuf>> {
        if !input_file.exists() {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let segments = self.load_segments(input_file)?;
        if segments.is_empty() {
            warn!("No segments found in {:?}", input_file);
        }

        let segments = self.config.timing.apply(&segments);
        self.render_outputs(&segments, input_file, output_dir, force_overwrite)
    }

    /// Whether `path` was written by this tool for another input in the same folder.
    ///
    /// True when its extension is a configured output format and, with the
    /// `.<lang>` suffix removed from its stem, a `.srt` or `.json` input exists
    /// next to it.
    fn is_generated_output(&self, path: &Path) -> bool {
        let is_output_format = path
            .extension()
            .map(|ext| {
                let ext = ext.to_string_lossy().to_lowercase();
                self.config.output_formats.iter().any(|format| format.as_str() == ext)
            })
            .unwrap_or(false);
        if !is_output_format {
            return false;
        }

        let suffix = format!(".{}", self.output_language());
        let stem = match path.file_stem() {
            Some(stem) => stem.to_string_lossy().to_string(),
            None => return false,
        };
        let source_stem = match stem.strip_suffix(&suffix) {
            Some(source_stem) => source_stem,
            None => return false,
        };

        let dir = path.parent().unwrap_or(Path::new("."));
        ["srt", "json"]
            .iter()
            .any(|ext| dir.join(format!("{}.{}", source_stem, ext)).is_file())
    }

    /// Process every SRT and segments JSON file below `input_dir`.
    ///
    /// Outputs go next to each input. Returns the number of files processed.
    pub fn run_folder(&self, input_dir: &Path, force_overwrite: bool) -> Result<usize> {
        if !input_dir.is_dir() {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let mut inputs = FileManager::find_files(input_dir, "srt")?;
        inputs.extend(FileManager::find_files(input_dir, "json")?);
        inputs.retain(|path| {
            let generated = self.is_generated_output(path);
            if generated {
                info!("Skipping {:?}, it was generated from another input", path);
            }
            !generated
        });

        info!("Found {} input file(s) in {:?}", inputs.len(), input_dir);

        let progress_bar = ProgressBar::new(inputs.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style);

        let mut processed_count = 0;
        for path in &inputs {
            let output_dir = path.parent().unwrap_or(Path::new("."));
            progress_bar.set_message(path.file_name().unwrap_or_default().to_string_lossy().to_string());

            match self.run(path, output_dir, force_overwrite) {
                Ok(_) => processed_count += 1,
                Err(e) => error!("Error processing {:?}: {:#}", path, e),
            }
            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();
        info!("Finished processing {} of {} files", processed_count, inputs.len());

        Ok(processed_count)
    }
}
