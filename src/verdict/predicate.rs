/// Output-based grading predicates
///
/// Grading is black-box: only captured text is inspected, never the
/// candidate's source. Every level's grader is a composition of the
/// primitives below.
use crate::exec::output::CapturedOutput;
use std::fmt::Debug;

/// A pass/fail decision over captured output
pub trait GradingPredicate: Debug + Send + Sync {
    fn evaluate(&self, output: &CapturedOutput) -> bool;
}

/// True iff `haystack` contains every needle as a substring
pub fn contains_all<S: AsRef<str>>(haystack: &str, needles: &[S]) -> bool {
    needles.iter().all(|needle| haystack.contains(needle.as_ref()))
}

/// True iff every needle is one of `haystack`'s lines, compared whole
pub fn contains_all_lines<S: AsRef<str>>(haystack: &str, lines: &[S]) -> bool {
    let present: Vec<&str> = haystack.lines().collect();
    lines.iter().all(|line| present.contains(&line.as_ref()))
}

/// Substring match over stdout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainsAll {
    needles: Vec<String>,
}

impl ContainsAll {
    pub fn new<I, S>(needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            needles: needles.into_iter().map(Into::into).collect(),
        }
    }
}

impl GradingPredicate for ContainsAll {
    fn evaluate(&self, output: &CapturedOutput) -> bool {
        contains_all(&output.stdout, &self.needles)
    }
}

/// Exact full-line match over stdout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainsAllLines {
    lines: Vec<String>,
}

impl ContainsAllLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl GradingPredicate for ContainsAllLines {
    fn evaluate(&self, output: &CapturedOutput) -> bool {
        contains_all_lines(&output.stdout, &self.lines)
    }
}

/// True iff every suffix ends at least one of `haystack`'s lines
pub fn contains_all_line_endings<S: AsRef<str>>(haystack: &str, suffixes: &[S]) -> bool {
    suffixes
        .iter()
        .all(|suffix| haystack.lines().any(|line| line.ends_with(suffix.as_ref())))
}

/// Line-suffix match over stdout; leading text on the line is ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainsAllLineEndings {
    suffixes: Vec<String>,
}

impl ContainsAllLineEndings {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
        }
    }
}

impl GradingPredicate for ContainsAllLineEndings {
    fn evaluate(&self, output: &CapturedOutput) -> bool {
        contains_all_line_endings(&output.stdout, &self.suffixes)
    }
}

/// Conjunction of predicates
#[derive(Debug, Default)]
pub struct AllOf {
    parts: Vec<Box<dyn GradingPredicate>>,
}

impl AllOf {
    pub fn new(parts: Vec<Box<dyn GradingPredicate>>) -> Self {
        Self { parts }
    }
}

impl GradingPredicate for AllOf {
    fn evaluate(&self, output: &CapturedOutput) -> bool {
        self.parts.iter().all(|p| p.evaluate(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn out(stdout: &str) -> CapturedOutput {
        CapturedOutput::new(stdout, "")
    }

    #[test]
    fn test_contains_all_lines_matches_whole_lines_only() {
        let haystack = "a\nb\nc";
        assert!(contains_all_lines(haystack, &["a", "c"]));
        assert!(!contains_all_lines(haystack, &["a", "d"]));
        assert!(!contains_all_lines(haystack, &["a\n"]));
        assert!(!contains_all_lines("abc", &["b"]));
    }

    #[test]
    fn test_contains_all_is_order_independent_substring_match() {
        let haystack = "Hello, Miles3103!";
        assert!(contains_all(haystack, &["Hello", "Miles3103"]));
        assert!(contains_all(haystack, &["Miles3103", "Hello"]));
        assert!(!contains_all(haystack, &["Goodbye"]));
    }

    #[test]
    fn test_contains_all_allows_needles_spanning_lines() {
        assert!(contains_all("hello\nhello\nhello\n", &["hello\nhello\nhello"]));
    }

    #[test]
    fn test_empty_output_never_passes_non_empty_needles() {
        assert!(!ContainsAll::new(["x"]).evaluate(&out("")));
        assert!(!ContainsAllLines::new(["x"]).evaluate(&out("")));
    }

    #[test]
    fn test_predicates_ignore_stderr() {
        let captured = CapturedOutput::new("", "Hello, Python World!");
        assert!(!ContainsAllLines::new(["Hello, Python World!"]).evaluate(&captured));
    }

    #[test]
    fn test_lines_predicate_accepts_crlf_output() {
        assert!(ContainsAllLines::new(["a", "b"]).evaluate(&out("a\r\nb\r\n")));
    }

    #[test]
    fn test_line_endings_ignore_leading_text() {
        assert!(contains_all_line_endings("  1\n  2", &["1"]));
        assert!(contains_all_line_endings("11\nFizzBuzz", &["1"]));
        assert!(contains_all_line_endings("x\n1", &["1"]));
        assert!(!contains_all_line_endings("12\n21x", &["1"]));
        assert!(!ContainsAllLineEndings::new(["1"]).evaluate(&out("")));
    }

    #[test]
    fn test_all_of_requires_every_part() {
        let both = AllOf::new(vec![
            Box::new(ContainsAll::new(["FizzBuzz"])),
            Box::new(ContainsAllLineEndings::new(["1"])),
        ]);
        assert!(both.evaluate(&out("1\n2\nFizz\nFizzBuzz")));
        assert!(both.evaluate(&out("11\nFizzBuzz")));
        assert!(!both.evaluate(&out("2\nFizzBuzz")));
        assert!(!both.evaluate(&out("1\n2\nFizz")));
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        let predicate = ContainsAll::new(["x=20 y=10"]);
        let captured = out("x=20 y=10");
        let first = predicate.evaluate(&captured);
        for _ in 0..5 {
            assert_eq!(predicate.evaluate(&captured), first);
        }
    }
}
