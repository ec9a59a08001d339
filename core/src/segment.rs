//! Re-segmentation of the engine's flat output into per-input blocks.
//!
//! The engine writes one tab-delimited line per token and a blank line after
//! every sentence. An empty input went in as the sentinel line, so it comes
//! back as a one-token sentence whose token field is the sentinel. The
//! engine additionally emits a spurious blank line between a just-closed
//! sentence and a following sentinel sentence; consecutive blanks are
//! therefore collapsed, otherwise the block count would drift away from the
//! input count.

use crate::error::ParseError;
use crate::frame::EMPTY_TOKEN;

/// Output slice for exactly one input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// The input was empty; transcodes to `""` / empty token and edge lists.
    Empty,
    /// Raw tab-delimited token lines, one per token, in engine order.
    Lines(Vec<String>),
}

/// Split `raw` engine output into exactly `expected` blocks.
///
/// The count postcondition is load-bearing: a mismatch means the framer/engine
/// contract was violated and the results can no longer be matched up with
/// their inputs, so it fails rather than truncating or padding.
pub fn segment_output(raw: &str, expected: usize) -> Result<Vec<Block>, ParseError> {
    let mut blocks = Vec::with_capacity(expected);
    let mut lines: Vec<String> = Vec::new();
    let mut sentinel_seen = false;
    let mut prev_blank: Option<bool> = None;

    for line in raw.lines() {
        let line = line.trim();
        if prev_blank == Some(true) && line.is_empty() {
            continue;
        }
        if line.is_empty() {
            blocks.push(finalize(std::mem::take(&mut lines)));
            sentinel_seen = false;
        } else {
            let token = token_field(line)?;
            if token == EMPTY_TOKEN {
                sentinel_seen = true;
            } else {
                lines.push(line.to_string());
            }
        }
        prev_blank = Some(line.is_empty());
    }

    // The engine terminates the last sentence with a blank line, but don't
    // lose the final block if that line is missing.
    if !lines.is_empty() || sentinel_seen {
        blocks.push(finalize(lines));
    }

    if blocks.len() != expected {
        return Err(ParseError::BlockCountMismatch {
            expected,
            actual: blocks.len(),
        });
    }
    Ok(blocks)
}

fn finalize(lines: Vec<String>) -> Block {
    if lines.is_empty() {
        Block::Empty
    } else {
        Block::Lines(lines)
    }
}

fn token_field(line: &str) -> Result<&str, ParseError> {
    line.split('\t')
        .nth(1)
        .map(str::trim)
        .ok_or_else(|| ParseError::malformed_line(line, "missing token field"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(items: &[&str]) -> Block {
        Block::Lines(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_two_sentences_two_blocks() {
        let raw = "1\tI\t_\tO\tO\t_\t2\t_\n2\tpredict\t_\tV\tV\t_\t0\t_\n\n\
                   1\tWednesday\t_\t^\t^\t_\t0\t_\n\n";
        let blocks = segment_output(raw, 2).unwrap();
        assert_eq!(
            blocks,
            vec![
                lines(&["1\tI\t_\tO\tO\t_\t2\t_", "2\tpredict\t_\tV\tV\t_\t0\t_"]),
                lines(&["1\tWednesday\t_\t^\t^\t_\t0\t_"]),
            ]
        );
    }

    #[test]
    fn test_sentinel_sentence_is_empty_block() {
        let raw = "1\t$$$EMPTY$$$\t_\tN\tN\t_\t0\t_\n\n";
        let blocks = segment_output(raw, 1).unwrap();
        assert_eq!(blocks, vec![Block::Empty]);
    }

    #[test]
    fn test_consecutive_blank_lines_collapse() {
        // Boundary blank + empty-sentence blank must not produce a third block.
        let raw = "1\ta\t_\tN\tN\t_\t0\t_\n\n\n1\t$$$EMPTY$$$\t_\tN\tN\t_\t0\t_\n\n";
        let blocks = segment_output(raw, 2).unwrap();
        assert_eq!(blocks, vec![lines(&["1\ta\t_\tN\tN\t_\t0\t_"]), Block::Empty]);
    }

    #[test]
    fn test_empty_block_between_populated_neighbors() {
        let raw = "1\tfirst\t_\tN\tN\t_\t0\t_\n\n\
                   1\t$$$EMPTY$$$\t_\tN\tN\t_\t0\t_\n\n\
                   1\tthird\t_\tN\tN\t_\t0\t_\n\n";
        let blocks = segment_output(raw, 3).unwrap();
        assert_eq!(
            blocks,
            vec![
                lines(&["1\tfirst\t_\tN\tN\t_\t0\t_"]),
                Block::Empty,
                lines(&["1\tthird\t_\tN\tN\t_\t0\t_"]),
            ]
        );
    }

    #[test]
    fn test_missing_trailing_blank_still_closes_last_block() {
        let raw = "1\ta\t_\tN\tN\t_\t0\t_\n\n1\tb\t_\tN\tN\t_\t0\t_";
        let blocks = segment_output(raw, 2).unwrap();
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_block_count_mismatch_is_error() {
        let raw = "1\ta\t_\tN\tN\t_\t0\t_\n\n";
        let err = segment_output(raw, 2).unwrap_err();
        match err {
            ParseError::BlockCountMismatch { expected, actual } => {
                assert_eq!((expected, actual), (2, 1));
            }
            other => panic!("expected BlockCountMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_output_for_empty_batch() {
        assert_eq!(segment_output("", 0).unwrap(), vec![]);
    }

    #[test]
    fn test_line_without_tabs_is_malformed() {
        let err = segment_output("garbage line\n\n", 1).unwrap_err();
        assert!(matches!(err, ParseError::MalformedLine { .. }));
    }
}
