//! core::exclude
//!
//! Exclude-pattern evaluation for archive sources.
//!
//! # Pattern language
//!
//! Patterns are globs compared against POSIX-style relative paths prefixed
//! with `.` (the archived directory itself is `.`, a nested file is
//! `./a/file.md`). `*` and `**` match any run of characters, including path
//! separators; `?` matches one character; a pattern without wildcards
//! matches only that exact relative path. A path is excluded when it or any
//! of its ancestors matches any pattern, so excluding a directory excludes
//! its contents transitively.
//!
//! This module is pure: candidates in, included candidates out. No I/O, so
//! the semantics are exhaustively unit-testable.

/// Whether `text` matches a single glob `pattern`.
///
/// Iterative matcher with single-star backtracking; no allocation.
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let mut p = 0; // position in pattern
    let mut t = 0; // position in text
    let mut star: Option<usize> = None; // pattern position after last '*'
    let mut mark = 0; // text position the last '*' is currently matched up to

    while t < text.len() {
        if p < pattern.len() && (pattern[p] == '?' || pattern[p] == text[t]) {
            p += 1;
            t += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            star = Some(p + 1);
            mark = t;
            p += 1;
        } else if let Some(after_star) = star {
            // Backtrack: let the last '*' swallow one more character.
            p = after_star;
            mark += 1;
            t = mark;
        } else {
            return false;
        }
    }
    // Only trailing stars may remain unconsumed.
    pattern[p..].iter().all(|&c| c == '*')
}

/// Whether a relative path (or any of its ancestors) matches any pattern.
pub fn is_excluded(rel_path: &str, patterns: &[String]) -> bool {
    for prefix in path_prefixes(rel_path) {
        if patterns.iter().any(|pattern| glob_match(pattern, prefix)) {
            return true;
        }
    }
    false
}

/// Filter candidate paths down to the included set, preserving order.
///
/// Candidates are `.`-prefixed relative paths as produced by the source
/// walk. The root `.` itself is never excluded.
pub fn filter_included(candidates: Vec<String>, patterns: &[String]) -> Vec<String> {
    candidates
        .into_iter()
        .filter(|path| path == "." || !is_excluded(path, patterns))
        .collect()
}

/// All prefixes of a `./a/b` path that end at a segment boundary, from the
/// shortest ancestor below `.` up to the path itself.
fn path_prefixes(rel_path: &str) -> impl Iterator<Item = &str> {
    rel_path
        .char_indices()
        .filter_map(move |(i, c)| if c == '/' { Some(&rel_path[..i]) } else { None })
        .skip(1) // skip the bare "." prefix
        .chain(std::iter::once(rel_path))
}
