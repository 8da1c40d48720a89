//! Identifier normalization.
//!
//! Pure functions that map arbitrary user input onto the three naming domains
//! used by a generated project:
//!
//! - **slug**: lowercase `[a-z0-9_-]`, starts with a letter, at most 64 chars.
//!   Used as the mod id, in file names and in descriptor identities.
//! - **namespace**: dotted `[a-z0-9_]` segments, each starting with a letter or
//!   underscore. Used as the source package and directory hierarchy.
//! - **folder name**: free-form display text with filesystem-hostile
//!   characters removed.
//!
//! Every function is total and idempotent: normalizing an already-normalized
//! value returns it unchanged.

/// Letter prepended to slugs that do not start with a letter.
pub const SLUG_FILLER: char = 'c';

/// Slug returned when no letter survives stripping: the bare filler.
pub const SLUG_FALLBACK: &str = "c";

/// Maximum slug length in characters.
pub const SLUG_MAX_LEN: usize = 64;

/// Letter prepended to namespace segments that start with a digit.
pub const NAMESPACE_FILLER: char = 'p';

/// Namespace returned when no segment survives stripping.
pub const NAMESPACE_FALLBACK: &str = "com.example";

/// Grammar every normalized slug matches.
pub const SLUG_PATTERN: &str = r"^[a-z][a-z0-9_-]{0,63}$";

/// Grammar every normalized namespace matches.
pub const NAMESPACE_PATTERN: &str = r"^[a-z_][a-z0-9_]*(\.[a-z_][a-z0-9_]*)*$";

fn is_separator(c: char) -> bool {
    c == '_' || c == '-'
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || is_separator(c)
}

fn is_namespace_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '.'
}

/// Normalize a string into a slug.
///
/// Spaces become underscores, anything outside `[a-z0-9_-]` is dropped and a
/// run of separators collapses to its first character. A slug that does not
/// start with a letter loses its leading digits and separators and gets
/// [`SLUG_FILLER`] in front, so input without any letter yields
/// [`SLUG_FALLBACK`].
pub fn normalize_slug(input: &str) -> String {
    try_normalize_slug(input).unwrap_or_else(|| SLUG_FALLBACK.to_string())
}

/// Like [`normalize_slug`], but `None` when no letter survives stripping.
pub fn try_normalize_slug(input: &str) -> Option<String> {
    let lowered = input.to_lowercase().replace(' ', "_");

    let mut collapsed = String::with_capacity(lowered.len());
    for ch in lowered.chars().filter(|c| is_slug_char(*c)) {
        if is_separator(ch) && collapsed.ends_with(is_separator) {
            continue;
        }
        collapsed.push(ch);
    }

    let trimmed = collapsed.trim_matches(is_separator);
    let mut slug = if trimmed.starts_with(|c: char| c.is_ascii_lowercase()) {
        trimmed.to_string()
    } else {
        let rest = trimmed.trim_start_matches(|c: char| c.is_ascii_digit() || is_separator(c));
        if rest.is_empty() {
            return None;
        }
        format!("{SLUG_FILLER}{rest}")
    };

    // Only ASCII remains, so byte truncation is on a char boundary.
    slug.truncate(SLUG_MAX_LEN);
    while slug.ends_with(is_separator) {
        slug.pop();
    }
    Some(slug)
}

/// Normalize a string into a dotted namespace.
///
/// Hyphens and spaces become underscores, anything outside `[a-z0-9_.]` is
/// dropped, empty segments vanish, and a segment starting with a digit gets
/// [`NAMESPACE_FILLER`] in front.
pub fn normalize_namespace(input: &str) -> String {
    try_normalize_namespace(input).unwrap_or_else(|| NAMESPACE_FALLBACK.to_string())
}

/// Like [`normalize_namespace`], but `None` when no segment survives.
pub fn try_normalize_namespace(input: &str) -> Option<String> {
    let cleaned: String = input
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .filter(|c| is_namespace_char(*c))
        .collect();

    let segments: Vec<String> = cleaned
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if segment.starts_with(|c: char| c.is_ascii_lowercase() || c == '_') {
                segment.to_string()
            } else {
                format!("{NAMESPACE_FILLER}{segment}")
            }
        })
        .collect();

    (!segments.is_empty()).then(|| segments.join("."))
}

/// Strip characters that are unsafe in a single directory name.
///
/// Keeps letters, digits, `_`, `-`, `.` and spaces, then trims surrounding
/// whitespace. Returns `None` when nothing usable is left, including names
/// made only of dots, which would resolve outside the parent directory.
pub fn sanitize_folder_name(input: &str) -> Option<String> {
    let kept: String = input
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ' '))
        .collect();
    let trimmed = kept.trim();

    if trimmed.is_empty() || trimmed.chars().all(|c| c == '.') {
        None
    } else {
        Some(trimmed.to_string())
    }
}
