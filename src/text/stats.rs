// Text analytics over the generated string array. All functions treat the
// array as read-only and walk it in generation order.

use rustc_hash::FxHashMap;

/// Per-character occurrence counts across all strings.
pub fn char_frequencies(strings: &[String]) -> FxHashMap<char, usize> {
    let mut freq = FxHashMap::default();
    for s in strings {
        for c in s.chars() {
            *freq.entry(c).or_insert(0) += 1;
        }
    }
    freq
}

/// Total occurrences of `symbol` across all strings.
pub fn count_char_occurrences(strings: &[String], symbol: char) -> usize {
    char_frequencies(strings).get(&symbol).copied().unwrap_or(0)
}

/// Longest maximal run of one repeated character across all strings. The
/// first run reaching the winning length is kept, so ties go to the earliest
/// string and position.
pub fn find_longest_repetition(strings: &[String]) -> String {
    let mut best_char = None;
    let mut best_len = 0;
    for s in strings {
        let mut prev: Option<char> = None;
        let mut run = 0;
        for c in s.chars() {
            if prev == Some(c) {
                run += 1;
            } else {
                prev = Some(c);
                run = 1;
            }
            if run > best_len {
                best_len = run;
                best_char = Some(c);
            }
        }
    }
    match best_char {
        Some(c) => std::iter::repeat(c).take(best_len).collect(),
        None => String::new(),
    }
}

/// All strings joined in generation order.
pub fn concatenate_strings(strings: &[String]) -> String {
    strings.concat()
}

/// Total occurrences of `needle` across all strings, overlapping matches
/// included: after a hit the search resumes one character past the match
/// start. An empty needle counts zero.
pub fn count_substring_occurrences(strings: &[String], needle: &str) -> usize {
    let Some(first) = needle.chars().next() else {
        return 0;
    };
    let step = first.len_utf8();
    let mut count = 0;
    for s in strings {
        let mut pos = 0;
        while let Some(found) = s[pos..].find(needle) {
            count += 1;
            pos += found + step;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn char_count_spans_all_strings() {
        let arr = strs(&["aab", "bba"]);
        assert_eq!(count_char_occurrences(&arr, 'a'), 3);
        assert_eq!(count_char_occurrences(&arr, 'b'), 3);
        assert_eq!(count_char_occurrences(&arr, 'z'), 0);
    }

    #[test]
    fn frequencies_cover_every_character() {
        let freq = char_frequencies(&strs(&["abca", "cb"]));
        assert_eq!(freq[&'a'], 2);
        assert_eq!(freq[&'b'], 2);
        assert_eq!(freq[&'c'], 2);
        assert_eq!(freq.len(), 3);
    }

    #[test]
    fn longest_repetition_basic() {
        assert_eq!(find_longest_repetition(&strs(&["aab"])), "aa");
        assert_eq!(find_longest_repetition(&strs(&["ab", "cddd", "ee"])), "ddd");
    }

    #[test]
    fn longest_repetition_first_run_wins_ties() {
        assert_eq!(find_longest_repetition(&strs(&["aabb", "ccdd"])), "aa");
        assert_eq!(find_longest_repetition(&strs(&["ab", "cc"])), "cc");
    }

    #[test]
    fn longest_repetition_handles_empty_input() {
        assert_eq!(find_longest_repetition(&[]), "");
        assert_eq!(find_longest_repetition(&strs(&["", ""])), "");
        assert_eq!(find_longest_repetition(&strs(&["x"])), "x");
    }

    #[test]
    fn concatenation_keeps_order() {
        assert_eq!(concatenate_strings(&strs(&["ab", "cd"])), "abcd");
        assert_eq!(concatenate_strings(&[]), "");
    }

    #[test]
    fn substring_count_is_overlapping() {
        assert_eq!(count_substring_occurrences(&strs(&["aaa"]), "aa"), 2);
        assert_eq!(count_substring_occurrences(&strs(&["aaaa"]), "aa"), 3);
        assert_eq!(count_substring_occurrences(&strs(&["abab", "ab"]), "ab"), 3);
    }

    #[test]
    fn substring_count_edge_cases() {
        assert_eq!(count_substring_occurrences(&strs(&["abc"]), ""), 0);
        assert_eq!(count_substring_occurrences(&strs(&["abc"]), "xyz"), 0);
        assert_eq!(count_substring_occurrences(&strs(&["ab"]), "abc"), 0);
    }
}
