//! Batch framing: N input texts into one engine input file.
//!
//! The engine reads one paragraph per line. A text that trims to nothing is
//! replaced by [`EMPTY_TOKEN`] rather than an empty line, so the segmenter
//! can tell "this input was empty" apart from the engine's own blank-line
//! sentence boundaries on the way back out. The engine is trusted never to
//! emit the sentinel as a real token; that is part of its contract, not
//! something checked at runtime.

use std::path::Path;

use crate::error::ParseError;

/// Reserved line content standing in for an empty input text.
pub const EMPTY_TOKEN: &str = "$$$EMPTY$$$";

/// Write `texts` to `path`, one per line, trimmed, with the sentinel in
/// place of empty texts and no trailing newline after the last one.
pub async fn write_batch(path: &Path, texts: &[String]) -> Result<(), ParseError> {
    tokio::fs::write(path, frame_batch(texts)).await?;
    Ok(())
}

fn frame_batch(texts: &[String]) -> String {
    let mut framed = String::new();
    for (index, text) in texts.iter().enumerate() {
        let text = text.trim();
        if text.is_empty() {
            framed.push_str(EMPTY_TOKEN);
        } else {
            framed.push_str(text);
        }
        if index != texts.len() - 1 {
            framed.push('\n');
        }
    }
    framed
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_one_line_per_text_no_trailing_newline() {
        let framed = frame_batch(&texts(&["first tweet", "second tweet"]));
        assert_eq!(framed, "first tweet\nsecond tweet");
    }

    #[test]
    fn test_empty_and_whitespace_texts_become_sentinel() {
        let framed = frame_batch(&texts(&["", "    ", "real"]));
        assert_eq!(framed, "$$$EMPTY$$$\n$$$EMPTY$$$\nreal");
    }

    #[test]
    fn test_texts_are_trimmed() {
        let framed = frame_batch(&texts(&["  padded  "]));
        assert_eq!(framed, "padded");
    }

    #[test]
    fn test_non_ascii_preserved() {
        let framed = frame_batch(&texts(&["Wednesday 27th october 2010. 》have a nice day :)"]));
        assert_eq!(framed, "Wednesday 27th october 2010. 》have a nice day :)");
    }

    #[test]
    fn test_empty_batch_writes_nothing() {
        assert_eq!(frame_batch(&[]), "");
    }

    #[tokio::test]
    async fn test_write_batch_utf8_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("text_file.txt");
        write_batch(&path, &texts(&["》have a nice day :)", ""]))
            .await
            .unwrap();
        let on_disk = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(on_disk, "》have a nice day :)\n$$$EMPTY$$$");
    }
}
