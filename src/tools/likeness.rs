/// Rough score in [0, 1] of how alike two texts are, for eyeballing a decompressed
/// file against its original.
///
/// Lines are compared pairwise. An identical line scores 1. Otherwise the words of the
/// line are compared pairwise, each identical word scoring an equal share of the line,
/// and for a differing word each matching letter scores an equal share of that word.
/// Lines, words and letters past the end of the shorter side are ignored.
pub fn likeness(text1: &str, text2: &str) -> f64 {
    let lines1 = split_trimmed(text1, '\n');
    let lines2 = split_trimmed(text2, '\n');
    let total_lines = lines1.len().min(lines2.len());
    if total_lines == 0 {
        return if lines1.len() == lines2.len() { 1.0 } else { 0.0 };
    }

    let score: f64 = lines1
        .iter()
        .zip(&lines2)
        .map(|(l1, l2)| line_likeness(l1, l2))
        .sum();
    score / total_lines as f64
}

fn line_likeness(line1: &str, line2: &str) -> f64 {
    if line1 == line2 {
        return 1.0;
    }
    let words1 = split_trimmed(line1, ' ');
    let words2 = split_trimmed(line2, ' ');
    let total_words = words1.len().min(words2.len());
    if total_words == 0 {
        return 0.0;
    }

    words1
        .iter()
        .zip(&words2)
        .map(|(w1, w2)| {
            if w1 == w2 {
                1.0
            } else {
                let total_letters = w1.chars().count().min(w2.chars().count());
                if total_letters == 0 {
                    return 0.0;
                }
                let same = w1.chars().zip(w2.chars()).filter(|(a, b)| a == b).count();
                same as f64 / total_letters as f64
            }
        })
        .sum::<f64>()
        / total_words as f64
}

/// Split, dropping empty pieces at the end.
fn split_trimmed(text: &str, sep: char) -> Vec<&str> {
    let mut pieces: Vec<&str> = text.split(sep).collect();
    while pieces.last().map_or(false, |p| p.is_empty()) {
        pieces.pop();
    }
    pieces
}

#[cfg(test)]
mod test {
    use super::likeness;

    #[test]
    fn identical_test() {
        let text = "first line\nsecond line\n";
        assert_eq!(likeness(text, text), 1.0);
        assert_eq!(likeness("", ""), 1.0);
    }

    #[test]
    fn one_word_off_test() {
        // Second line: one of two words matches fully, the other 3 of 4 letters.
        let score = likeness("same\nred fish", "same\nred dish");
        let expected = (1.0 + (1.0 + 0.75) / 2.0) / 2.0;
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn nothing_alike_test() {
        assert_eq!(likeness("abc", "xyz"), 0.0);
        assert_eq!(likeness("abc", ""), 0.0);
    }

    #[test]
    fn trailing_newline_test() {
        assert_eq!(likeness("a\nb\n", "a\nb"), 1.0);
    }
}
