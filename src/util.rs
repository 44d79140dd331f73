//! Small utility helpers used across modules.

/// ASCII-case-insensitive substring search.
/// Returns the byte range of the first match; non-ASCII characters are
/// compared exactly, which is all the catalog content needs.
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<(usize, usize)> {
  if needle.is_empty() {
    return Some((0, 0));
  }
  let needle: Vec<char> = needle.chars().map(|c| c.to_ascii_lowercase()).collect();
  let chars: Vec<(usize, char)> = haystack.char_indices().collect();

  'outer: for start in 0..chars.len() {
    let mut pos = start;
    for &nc in &needle {
      match chars.get(pos) {
        Some(&(_, hc)) if hc.to_ascii_lowercase() == nc => pos += 1,
        _ => continue 'outer,
      }
    }
    let end = chars.get(pos).map(|&(b, _)| b).unwrap_or(haystack.len());
    return Some((chars[start].0, end));
  }
  None
}

/// True if `needle` occurs anywhere in `haystack`, ignoring ASCII case.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
  find_ignore_case(haystack, needle).is_some()
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge request payloads.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    return s.to_string();
  }
  let mut cut = max;
  while !s.is_char_boundary(cut) {
    cut -= 1;
  }
  format!("{}… ({} bytes total)", &s[..cut], s.len())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn finds_mixed_case_needle() {
    assert_eq!(find_ignore_case("Type here. Example: git status", "example:"), Some((11, 19)));
    assert_eq!(find_ignore_case("no marker at all", "example:"), None);
  }

  #[test]
  fn match_at_end_of_haystack() {
    let s = "ends with Example:";
    let (start, end) = find_ignore_case(s, "example:").expect("match");
    assert_eq!(&s[start..end], "Example:");
    assert_eq!(end, s.len());
  }

  #[test]
  fn contains_is_case_insensitive() {
    assert!(contains_ignore_case("TYPE YOUR ANSWER", "type your answer"));
    assert!(!contains_ignore_case("type the code", "type your answer"));
  }

  #[test]
  fn truncation_respects_char_boundaries() {
    let s = "héllo wörld, this is long";
    let t = trunc_for_log(s, 3);
    assert!(t.starts_with("hé") || t.starts_with("h"));
    assert!(t.contains("bytes total"));
  }
}
