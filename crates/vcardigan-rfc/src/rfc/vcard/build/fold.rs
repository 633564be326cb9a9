//! vCard line folding.

/// Inserted before every continuation line.
pub const FOLD_MARKER: &str = "\n ";

/// Folds a line to `width` characters. A width of `0` disables folding.
///
/// The first physical line holds `width` characters; each continuation line
/// starts with a single space and holds `width - 1` more, so no physical line
/// exceeds `width`. The marker is never emitted after the last chunk.
#[must_use]
pub fn fold_line(line: &str, width: usize) -> String {
    if width == 0 || line.chars().count() <= width {
        return line.to_string();
    }

    let continuation_max = width.saturating_sub(1).max(1);
    let mut result = String::with_capacity(line.len() + line.len() / continuation_max * 2);
    let mut current_len = 0;
    let mut first_segment = true;

    for c in line.chars() {
        let effective_max = if first_segment {
            width
        } else {
            continuation_max
        };

        if current_len == effective_max {
            result.push_str(FOLD_MARKER);
            current_len = 0;
            first_segment = false;
        }

        result.push(c);
        current_len += 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_line_unchanged() {
        let line = "FN:John Doe";
        assert_eq!(fold_line(line, 75), line);
    }

    #[test]
    fn zero_width_disables_folding() {
        let line = "X".repeat(500);
        assert_eq!(fold_line(&line, 0), line);
    }

    #[test]
    fn exact_width_unchanged() {
        let line = "X".repeat(75);
        assert_eq!(fold_line(&line, 75), line);
    }

    #[test]
    fn fold_at_75() {
        let line = "X".repeat(80);
        let folded = fold_line(&line, 75);
        let lines: Vec<&str> = folded.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 75);
        assert_eq!(lines[1], format!(" {}", "X".repeat(5)));
    }

    #[test]
    fn chunk_sizes() {
        let line: String = ('a'..='j').collect();
        assert_eq!(fold_line(&line, 4), "abcd\n efg\n hij");
    }

    #[test]
    fn fold_respects_chars() {
        let line = format!("NOTE:{}", "日".repeat(30));
        let folded = fold_line(&line, 10);
        for physical in folded.split('\n') {
            assert!(physical.chars().count() <= 10);
        }
        assert_eq!(folded.replace(FOLD_MARKER, ""), line);
    }

    #[test]
    fn fold_multiple_times() {
        let line = "X".repeat(200);
        let folded = fold_line(&line, 50);
        let lines: Vec<&str> = folded.split('\n').collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.len() <= 50));
        assert!(lines[1..].iter().all(|l| l.starts_with(' ') && !l.starts_with("  ")));
    }
}
