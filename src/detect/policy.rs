use std::borrow::Cow;

use serde::Deserialize;
use serde::Serialize;

use crate::NameKind;

/// Interpunct used between name parts in some original names.
const SEPARATOR_DOT: char = '・';

fn default_display_requires_separator() -> bool {
    true
}

fn default_kana_only_min_chars() -> usize {
    6
}

fn default_min_chars() -> usize {
    2
}

/// Name-eligibility policy applied before a name is indexed.
///
/// Short or ambiguous tokens produce far more false positives than hits, so
/// each name class carries an acceptability predicate. The defaults reject
/// single-word display names and short names drawn entirely from the kana
/// syllabaries. Deterministic: the same policy over the same snapshot always
/// indexes the same pattern set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamePolicy {
    /// Display names must contain a space to be indexed.
    #[serde(default = "default_display_requires_separator")]
    pub display_requires_separator: bool,

    /// Minimum character count for names made only of kana (i.e. 叶).
    #[serde(default = "default_kana_only_min_chars")]
    pub kana_only_min_chars: usize,

    /// Minimum character count for every other original name.
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
}

impl Default for NamePolicy {
    fn default() -> Self {
        Self {
            display_requires_separator: default_display_requires_separator(),
            kana_only_min_chars: default_kana_only_min_chars(),
            min_chars: default_min_chars(),
        }
    }
}

impl NamePolicy {
    /// Whether a name of the given class may be indexed at all.
    pub fn accepts(
        &self,
        kind: NameKind,
        name: &str,
    ) -> bool {
        match kind {
            NameKind::Display => !self.display_requires_separator || name.contains(' '),
            NameKind::Original => {
                let chars = name.chars().count();
                if name.chars().all(is_common_syllable) {
                    chars >= self.kana_only_min_chars
                } else {
                    chars >= self.min_chars
                }
            }
        }
    }

    /// The pattern to index for an accepted name, or `None` when rejected.
    ///
    /// Original names lose the `・` separator so that titles written without
    /// it still match.
    pub fn indexable<'a>(
        &self,
        kind: NameKind,
        name: &'a str,
    ) -> Option<Cow<'a, str>> {
        if !self.accepts(kind, name) {
            return None;
        }
        match kind {
            NameKind::Original if name.contains(SEPARATOR_DOT) => {
                Some(Cow::Owned(name.replace(SEPARATOR_DOT, "")))
            }
            _ => Some(Cow::Borrowed(name)),
        }
    }
}

/// Hiragana or katakana, the character range short ambiguous tokens live in.
fn is_common_syllable(c: char) -> bool {
    let katakana = ('\u{30A0}'..='\u{30FF}').contains(&c);
    let hiragana = ('\u{3041}'..='\u{3096}').contains(&c);
    katakana || hiragana
}
