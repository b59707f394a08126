//! Level registry
//!
//! Built once at startup from the authored table in [`levels`] and passed by
//! reference afterwards. Lookups never mutate.

pub mod levels;

use crate::config::types::{ExamError, Result, LEVELS_PER_TOPIC, LEVEL_COUNT};
use crate::verdict::predicate::{
    AllOf, ContainsAll, ContainsAllLineEndings, ContainsAllLines, GradingPredicate,
};
use levels::{Check, LevelSpec, LEVELS, TOPIC_NAMES};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Topic label reported once every level is passed
pub const COMPLETE_TOPIC: &str = "Complete";

/// Fallback when a subject carries no `Tip:` line
pub const NO_HINT: &str = "No specific hint for this level. Re-read the subject carefully.";

#[derive(Debug)]
pub struct Level {
    pub number: u32,
    pub topic: &'static str,
    pub subject: String,
    pub predicate: Box<dyn GradingPredicate>,
}

#[derive(Debug)]
pub struct LevelRegistry {
    levels: Vec<Level>,
}

impl LevelRegistry {
    /// Registry whose subjects point at the default `py_rendu` directory
    pub fn standard() -> Self {
        Self::with_solution_dir(Path::new("py_rendu"))
    }

    /// Registry whose subjects name solution files under `rendu_dir`
    pub fn with_solution_dir(rendu_dir: &Path) -> Self {
        let levels = LEVELS
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                let number = index as u32;
                Level {
                    number,
                    topic: topic_name(number),
                    subject: render_subject(number, spec, rendu_dir),
                    predicate: build_predicate(&spec.check),
                }
            })
            .collect();
        Self { levels }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, level: u32) -> Option<&Level> {
        self.levels.get(level as usize)
    }

    pub fn subject_text(&self, level: u32) -> Result<&str> {
        self.get(level)
            .map(|l| l.subject.as_str())
            .ok_or(ExamError::UnknownLevel(level))
    }

    pub fn predicate(&self, level: u32) -> Result<&dyn GradingPredicate> {
        self.get(level)
            .map(|l| l.predicate.as_ref())
            .ok_or(ExamError::UnknownLevel(level))
    }

    /// Topic of `level`; anything past the last level reads as complete
    pub fn topic_of(&self, level: u32) -> &'static str {
        self.get(level).map_or(COMPLETE_TOPIC, |l| l.topic)
    }

    /// `Tip:` lines of the subject, trimmed
    pub fn hints(&self, level: u32) -> Result<Vec<&str>> {
        let subject = self.subject_text(level)?;
        Ok(subject
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with("Tip:"))
            .collect())
    }

    /// Startup consistency check; a failure here is a packaging fault
    pub fn validate(&self) -> Result<()> {
        if self.levels.len() != LEVEL_COUNT {
            return Err(ExamError::Registry(format!(
                "expected {} levels, found {}",
                LEVEL_COUNT,
                self.levels.len()
            )));
        }
        if TOPIC_NAMES.len() * LEVELS_PER_TOPIC as usize != LEVEL_COUNT {
            return Err(ExamError::Registry(format!(
                "{} topics cannot cover {} levels",
                TOPIC_NAMES.len(),
                LEVEL_COUNT
            )));
        }
        for (index, level) in self.levels.iter().enumerate() {
            if level.number as usize != index {
                return Err(ExamError::Registry(format!(
                    "level at position {} is numbered {}",
                    index, level.number
                )));
            }
            if level.subject.trim().is_empty() {
                return Err(ExamError::Registry(format!("level {} has no subject", index)));
            }
        }
        for (index, spec) in LEVELS.iter().enumerate() {
            if spec.check.needles().is_empty() {
                return Err(ExamError::Registry(format!(
                    "level {} has no expected output",
                    index
                )));
            }
        }
        log::debug!("Level registry validated: {} levels, {} topics", LEVEL_COUNT, TOPIC_NAMES.len());
        Ok(())
    }
}

fn topic_name(level: u32) -> &'static str {
    TOPIC_NAMES
        .get((level / LEVELS_PER_TOPIC) as usize)
        .copied()
        .unwrap_or(COMPLETE_TOPIC)
}

fn build_predicate(check: &Check) -> Box<dyn GradingPredicate> {
    match *check {
        Check::Text(needles) => Box::new(ContainsAll::new(needles.iter().copied())),
        Check::Lines(lines) => Box::new(ContainsAllLines::new(lines.iter().copied())),
        Check::TextAndLineEnds(needles, ends) => Box::new(AllOf::new(vec![
            Box::new(ContainsAll::new(needles.iter().copied())),
            Box::new(ContainsAllLineEndings::new(ends.iter().copied())),
        ])),
    }
}

fn solution_file(rendu_dir: &Path, level: u32) -> PathBuf {
    rendu_dir.join(format!("lvl{level}")).join("solution.py")
}

fn push_expected(out: &mut String, header: &str, needles: &[&str]) {
    let _ = writeln!(out, "\n{header}");
    for needle in needles {
        for line in needle.lines() {
            let _ = writeln!(out, "  {line}");
        }
    }
}

fn render_subject(level: u32, spec: &LevelSpec, rendu_dir: &Path) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== LEVEL {} \u{2014} {} ===", level, spec.title);
    let _ = writeln!(out, "FILE: {}", solution_file(rendu_dir, level).display());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", spec.brief);

    match spec.check {
        Check::Text(needles) => {
            push_expected(&mut out, "Expected output (must contain):", needles)
        }
        Check::Lines(lines) => {
            push_expected(&mut out, "Expected output (each as a full line):", lines)
        }
        Check::TextAndLineEnds(needles, ends) => {
            push_expected(&mut out, "Expected output (must contain):", needles);
            push_expected(&mut out, "And lines ending with:", ends);
        }
    }

    if let Some(tip) = spec.tip {
        let _ = writeln!(out, "\nTip: {tip}");
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::MAX_LEVEL;
    use crate::exec::output::CapturedOutput;

    #[test]
    fn test_registry_is_complete_and_valid() {
        let registry = LevelRegistry::standard();
        assert_eq!(registry.len(), (MAX_LEVEL + 1) as usize);
        registry.validate().unwrap();
        for level in 0..=MAX_LEVEL {
            assert!(registry.subject_text(level).is_ok());
            assert!(registry.predicate(level).is_ok());
        }
    }

    #[test]
    fn test_three_levels_per_topic() {
        let registry = LevelRegistry::standard();
        for (index, topic) in TOPIC_NAMES.iter().enumerate() {
            let first = index as u32 * 3;
            assert_eq!(registry.topic_of(first), *topic);
            assert_eq!(registry.topic_of(first + 1), *topic);
            assert_eq!(registry.topic_of(first + 2), *topic);
        }
        assert_eq!(registry.topic_of(0), "Basics");
        assert_eq!(registry.topic_of(MAX_LEVEL), "Final Challenge");
        assert_eq!(registry.topic_of(MAX_LEVEL + 1), COMPLETE_TOPIC);
    }

    #[test]
    fn test_out_of_range_lookup_is_unknown_level() {
        let registry = LevelRegistry::standard();
        assert!(matches!(
            registry.predicate(MAX_LEVEL + 1),
            Err(ExamError::UnknownLevel(60))
        ));
        assert!(matches!(registry.subject_text(500), Err(ExamError::UnknownLevel(500))));
    }

    #[test]
    fn test_level_zero_passes_on_expected_output() {
        let registry = LevelRegistry::standard();
        let expected = "Hello, Python World!\n\
                        Type: <class 'int'>\n\
                        Type: <class 'str'>\n\
                        Type: <class 'float'>\n\
                        Type: <class 'bool'>";
        let predicate = registry.predicate(0).unwrap();
        assert!(predicate.evaluate(&CapturedOutput::new(expected, "")));
        assert!(!predicate.evaluate(&CapturedOutput::new("Hello, World!", "")));
    }

    #[test]
    fn test_fizzbuzz_level_accepts_indented_output() {
        let registry = LevelRegistry::standard();
        let predicate = registry.predicate(6).unwrap();

        let mut lines: Vec<String> = ["95 → A", "83 → B", "71 → C", "55 → F"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        lines.extend((1..=20).map(|n| match (n % 3, n % 5) {
            (0, 0) => "FizzBuzz".to_string(),
            (0, _) => "Fizz".to_string(),
            (_, 0) => "Buzz".to_string(),
            _ => n.to_string(),
        }));

        let plain = lines.join("\n");
        let indented: Vec<String> = lines.iter().map(|l| format!("  {l}")).collect();
        assert!(predicate.evaluate(&CapturedOutput::new(plain, "")));
        assert!(predicate.evaluate(&CapturedOutput::new(indented.join("\n"), "")));

        let without_one = lines[..4].join("\n") + "\nFizz\nBuzz\nFizzBuzz";
        assert!(!predicate.evaluate(&CapturedOutput::new(without_one, "")));
    }

    #[test]
    fn test_subject_names_solution_file_and_header() {
        let registry = LevelRegistry::with_solution_dir(Path::new("/tmp/rendu"));
        let subject = registry.subject_text(4).unwrap();
        assert!(subject.starts_with("=== LEVEL 4 \u{2014} STRINGS [2/3]"));
        assert!(subject.contains("FILE: /tmp/rendu/lvl4/solution.py"));
        assert!(subject.contains("  count: 4"));
    }

    #[test]
    fn test_hints_collect_tip_lines() {
        let registry = LevelRegistry::standard();
        let hints = registry.hints(0).unwrap();
        assert_eq!(hints, vec!["Tip: print(type(x)) prints the type of x."]);
        assert!(registry.hints(4).unwrap().is_empty());
    }
}
