//! Levenshtein edit distance

/// Compute the Levenshtein edit distance between two strings.
///
/// Returns the minimum number of single-character insertions, deletions,
/// or substitutions required to transform `a` into `b`. Operates on
/// `char`s, not bytes, so multi-byte input is counted per character.
///
/// Uses the full `(|a|+1) x (|b|+1)` dynamic-programming table. Quadratic
/// time and space is fine here: inputs are item names and typed queries,
/// both tens of characters at most. A banded or two-row variant would only
/// matter if catalog names could grow unbounded.
pub fn distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut table = vec![vec![0usize; n + 1]; m + 1];

    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        table[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            if a_chars[i - 1] == b_chars[j - 1] {
                table[i][j] = table[i - 1][j - 1];
            } else {
                let substitute = table[i - 1][j - 1];
                let insert = table[i][j - 1];
                let delete = table[i - 1][j];
                table[i][j] = 1 + substitute.min(insert).min(delete);
            }
        }
    }

    table[m][n]
}
