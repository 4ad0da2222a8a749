//! Progress bar display for file placement

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for copying placed files into the game directory
pub struct ProgressDisplay {
    file_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a progress bar over the total file count
    pub fn new(total_files: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("  [{bar:40.green/yellow}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let file_pb = ProgressBar::new(total_files);
        file_pb.set_style(style);
        Self { file_pb }
    }

    /// Advance past one file, showing a truncated path
    pub fn update_file(&self, file_path: &str) {
        self.file_pb.set_message(truncate_path(file_path));
        self.file_pb.inc(1);
    }

    pub fn finish(&self) {
        self.file_pb.finish_and_clear();
    }
}

/// Keep the tail of a long path, cutting only on a char boundary so
/// non-ASCII paths inside an archive cannot panic the slice.
fn truncate_path(file_path: &str) -> String {
    if file_path.len() <= 50 {
        return file_path.to_string();
    }
    let mut idx = file_path.len() - 47;
    while !file_path.is_char_boundary(idx) {
        idx += 1;
    }
    format!("...{}", &file_path[idx..])
}
