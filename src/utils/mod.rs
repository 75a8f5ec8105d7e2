//! Cross-cutting utilities.

pub mod fs;

pub use fs::{find_upwards, get_mtime, is_safe_path, normalize_path, read_lines, read_text_file};
