//! Word-level diff between the submitted and the corrected text.

use similar::{ChangeTag, TextDiff};

/// How a segment changed between the two texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffKind {
    /// Present in both texts.
    Unchanged,
    /// Only in the corrected text.
    Added,
    /// Only in the original text.
    Removed,
}

/// A run of consecutive words with the same [`DiffKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSegment {
    /// Change kind.
    pub kind: DiffKind,
    /// Text including the whitespace between words.
    pub text: String,
}

impl DiffSegment {
    fn new(kind: DiffKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }
}

/// Diffs `original` against `corrected` word by word.
///
/// Both inputs are trimmed first. Adjacent tokens of the same kind are merged,
/// so whitespace between two added words stays inside the added segment.
#[must_use]
pub fn diff_words(original: &str, corrected: &str) -> Vec<DiffSegment> {
    let diff = TextDiff::from_words(original.trim(), corrected.trim());
    let mut segments: Vec<DiffSegment> = Vec::new();

    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => DiffKind::Unchanged,
            ChangeTag::Insert => DiffKind::Added,
            ChangeTag::Delete => DiffKind::Removed,
        };
        match segments.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(change.value()),
            _ => segments.push(DiffSegment::new(kind, change.value())),
        }
    }

    segments
}

/// Returns true when the two texts are equal after trimming.
#[must_use]
pub fn is_unchanged(original: &str, corrected: &str) -> bool {
    original.trim() == corrected.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appended_words_form_one_addition() {
        let segments = diff_words("السلام عليكم", "السلام عليكم ورحمة الله");
        assert_eq!(
            segments,
            vec![
                DiffSegment::new(DiffKind::Unchanged, "السلام عليكم"),
                DiffSegment::new(DiffKind::Added, " ورحمة الله"),
            ]
        );
    }

    #[test]
    fn replaced_word_shows_removal_and_addition() {
        let segments = diff_words("ذهبت الى المدرسة", "ذهبت إلى المدرسة");
        let removed: Vec<&str> = segments
            .iter()
            .filter(|s| s.kind == DiffKind::Removed)
            .map(|s| s.text.as_str())
            .collect();
        let added: Vec<&str> = segments
            .iter()
            .filter(|s| s.kind == DiffKind::Added)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(removed, vec!["الى"]);
        assert_eq!(added, vec!["إلى"]);
        assert_eq!(segments.first().map(|s| s.kind), Some(DiffKind::Unchanged));
    }

    #[test]
    fn identical_texts_are_one_unchanged_segment() {
        let segments = diff_words(" نص صحيح ", "نص صحيح");
        assert_eq!(segments, vec![DiffSegment::new(DiffKind::Unchanged, "نص صحيح")]);
        assert!(is_unchanged(" نص صحيح ", "نص صحيح\n"));
    }

    #[test]
    fn empty_inputs_produce_no_segments() {
        assert!(diff_words("", "").is_empty());
    }

    #[test]
    fn concatenated_segments_rebuild_the_corrected_text() {
        let corrected = "هذا نص مصحح بالكامل";
        let rebuilt: String = diff_words("هاذا نص مصحح", corrected)
            .into_iter()
            .filter(|s| s.kind != DiffKind::Removed)
            .map(|s| s.text)
            .collect();
        assert_eq!(rebuilt, corrected);
    }
}
