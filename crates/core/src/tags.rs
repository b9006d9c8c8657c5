//! Tag string codec and normalization.
//!
//! Questions store their tag set as a single comma-delimited string column.
//! Every write path runs the incoming string through [`normalize`] so the
//! stored encoding is always trimmed, lowercased, deduplicated, and in
//! first-occurrence order. [`diff`] computes the before/after delta that
//! drives the global tag-frequency counters.

/// Delimiter used in the stored `tags` column.
pub const TAG_DELIMITER: char = ',';

/// Decode a delimited tag string into an ordered list of tag names.
///
/// Tokens are trimmed and lowercased; empty tokens are dropped; duplicates
/// are removed keeping the first occurrence.
pub fn string_to_list(tags: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for token in tags.split(TAG_DELIMITER) {
        let name = token.trim().to_lowercase();
        if name.is_empty() || out.contains(&name) {
            continue;
        }
        out.push(name);
    }
    out
}

/// Encode a list of tag names back into the delimited storage format.
pub fn list_to_string(tags: &[String]) -> String {
    tags.join(&TAG_DELIMITER.to_string())
}

/// Normalize a raw tag string into canonical storage form.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)` for all inputs.
pub fn normalize(tags: &str) -> String {
    list_to_string(&string_to_list(tags))
}

/// The symmetric difference between two tag strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDelta {
    /// Tags present in `new` but not in `old`.
    pub added: Vec<String>,
    /// Tags present in `old` but not in `new`.
    pub removed: Vec<String>,
}

impl TagDelta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Compute which tags were added and removed between two tag strings.
///
/// Both sides are decoded with [`string_to_list`], so the comparison is on
/// normalized names regardless of how either string is formatted.
pub fn diff(old_tags: &str, new_tags: &str) -> TagDelta {
    let old = string_to_list(old_tags);
    let new = string_to_list(new_tags);

    TagDelta {
        added: new.iter().filter(|t| !old.contains(t)).cloned().collect(),
        removed: old.iter().filter(|t| !new.contains(t)).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_trims_and_lowercases() {
        assert_eq!(string_to_list(" PHP , Yii "), vec!["php", "yii"]);
    }

    #[test]
    fn decode_drops_empty_tokens() {
        assert_eq!(string_to_list("a,,b,  ,c"), vec!["a", "b", "c"]);
        assert!(string_to_list("").is_empty());
        assert!(string_to_list(" , ,").is_empty());
    }

    #[test]
    fn decode_dedupes_keeping_first_occurrence() {
        assert_eq!(string_to_list("rust,db,Rust,db,web"), vec!["rust", "db", "web"]);
    }

    #[test]
    fn normalize_canonical_form() {
        assert_eq!(normalize("php, yii"), "php,yii");
        assert_eq!(normalize("  A, b ,a,"), "a,b");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["php, yii", "a,,B,a", "", " x ", "one,two,three,two"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn diff_symmetric_difference() {
        let delta = diff("a,b,c", "b,c,d");
        assert_eq!(delta.added, vec!["d"]);
        assert_eq!(delta.removed, vec!["a"]);
    }

    #[test]
    fn diff_empty_old_means_all_added() {
        let delta = diff("", "rust, sqlx");
        assert_eq!(delta.added, vec!["rust", "sqlx"]);
        assert!(delta.removed.is_empty());
    }

    #[test]
    fn diff_ignores_formatting_differences() {
        assert!(diff("a, b", "B,a").is_empty());
    }
}
