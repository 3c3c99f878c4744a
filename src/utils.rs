use std::fs::File;
use std::io::{self, prelude::*};
use std::env;
use std::path::{Component, Path, PathBuf};
use unicode_segmentation::UnicodeSegmentation;

/// Reads the whole file at `entry`. Content that is not valid UTF-8 is
/// rejected with `io::ErrorKind::InvalidData`.
pub fn read_file_as_utf8(entry: &Path) -> io::Result<String> {
    let mut file = File::open(entry)?;

    let mut content = String::new();
    file.read_to_string(&mut content)?;

    return Ok(content);
}

/// Makes `entry` absolute against the working directory and folds `.` and
/// `..` lexically. The file system is not consulted, so the path need not exist.
pub fn resolve_path(entry: &Path) -> PathBuf {
    let joined = if entry.is_absolute() {
        entry.to_path_buf()
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(entry),
            Err(_) => return entry.to_path_buf(),
        }
    };

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }

    return resolved;
}

/// Char-indexed view over a document.
///
/// Positions are counted in Unicode scalar values, so a lookahead of width 2
/// always means "the next two characters" regardless of how many bytes they
/// take.
pub struct SourceReader<'a> {
    document: &'a str,
    begin_index_map: Vec<usize>,
}

impl<'a> SourceReader<'a> {
    /// Returns up to `width` characters starting at `begin_index`. The slice
    /// is truncated at end of document, and is empty past it.
    pub fn look_ahead(&self, begin_index: usize, width: usize) -> &'a str {
        let l = self.len();
        if begin_index >= l {
            return "";
        }

        let end_index = (begin_index + width).min(l);

        let begin = self.begin_index_map[begin_index];
        let end = self.begin_index_map[end_index];

        return &self.document[begin..end];
    }

    pub fn len(&self) -> usize {
        return self.begin_index_map.len() - 1;
    }

    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    pub fn new(document: &'a str) -> Self {
        let mut begin_index_map = document
            .char_indices()
            .map(|(i, _)| i)
            .collect::<Vec<usize>>();
        begin_index_map.push(document.len());

        return SourceReader {
            document,
            begin_index_map,
        };
    }
}

/// Converts a 1-based byte column (as reported by serde_json) into the
/// 1-based column a reader sees on screen, counted in grapheme clusters.
pub fn grapheme_column(line: &str, byte_column: usize) -> usize {
    let mut end = byte_column.min(line.len());
    while !line.is_char_boundary(end) {
        end -= 1;
    }

    return UnicodeSegmentation::graphemes(&line[..end], true).count();
}

/// Renders the `line`-th line (1-based) of `document` with a caret under
/// `byte_column`. Returns `None` when the line does not exist.
pub fn excerpt(document: &str, line: usize, byte_column: usize) -> Option<String> {
    let text = document.lines().nth(line.checked_sub(1)?)?;
    let width = grapheme_column(text, byte_column);

    let gutter = format!("{:>4} | ", line);
    return Some(format!(
        "{}{}\n{:>width$}{}^",
        gutter,
        text,
        "| ",
        " ".repeat(width.saturating_sub(1)),
        width = gutter.len()
    ));
}
