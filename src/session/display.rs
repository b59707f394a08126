/// Terminal rendering for the exam session
use crate::config::types::{LEVELS_PER_TOPIC, LEVEL_COUNT, MAX_LEVEL};
use std::io::{self, Write};
use std::path::Path;

/// Lines of stdout echoed back on a wrong answer
pub const FAILURE_STDOUT_LINES: usize = 10;
/// Lines of stderr echoed back on a wrong answer
pub const FAILURE_STDERR_LINES: usize = 5;

pub const COMMANDS_LINE: &str = "Commands: grademe | skip | hint | reset | progress | exit";

pub fn prompt(level: u32) -> String {
    format!("py-exam[lvl{level}]> ")
}

pub fn progress_bar(level: u32) -> String {
    let total = LEVEL_COUNT;
    let filled = (level as usize).min(total);
    let bar = format!("{}{}", "\u{2588}".repeat(filled), "\u{2591}".repeat(total - filled));
    let pct = filled * 100 / total;
    format!("[{bar}] {filled}/{total} ({pct}%)")
}

pub fn topic_line(level: u32, topic: &str) -> String {
    if level > MAX_LEVEL {
        format!("Topic:    {topic}")
    } else {
        format!(
            "Topic:    {} [{}/{}]",
            topic,
            level % LEVELS_PER_TOPIC + 1,
            LEVELS_PER_TOPIC
        )
    }
}

pub fn welcome_banner(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "\u{2554}{}\u{2557}", "\u{2550}".repeat(50))?;
    writeln!(out, "\u{2551}   Miles3103 \u{2014} Python Mastery Exam v1.0          \u{2551}")?;
    writeln!(out, "\u{2551}   60 Levels | 20 Topics | 3 Tasks Each          \u{2551}")?;
    writeln!(out, "\u{255a}{}\u{255d}", "\u{2550}".repeat(50))
}

pub fn progress_block(out: &mut dyn Write, level: u32, topic: &str) -> io::Result<()> {
    writeln!(out, "\n  Progress: {}", progress_bar(level))?;
    writeln!(out, "  {}", topic_line(level, topic))
}

pub fn grading_header(out: &mut dyn Write, level: u32, topic: &str) -> io::Result<()> {
    let rule = "\u{2500}".repeat(54);
    writeln!(out, "\n+{rule}+")?;
    writeln!(out, "| Grading Level {level:<3} \u{2502} Topic: {topic:<30} |")?;
    writeln!(out, "+{rule}+")
}

pub fn pass_banner(out: &mut dyn Write, level: u32) -> io::Result<()> {
    writeln!(out, "\n  \u{2713} \u{2713} \u{2713}  LEVEL {level} PASSED!  \u{2713} \u{2713} \u{2713}\n")
}

pub fn completion_banner(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\u{2554}{}\u{2557}", "\u{2550}".repeat(46))?;
    writeln!(out, "\u{2551}  ALL 60 LEVELS COMPLETE. YOU KNOW PYTHON.   \u{2551}")?;
    writeln!(out, "\u{2551}  Now go build something real. You're ready.  \u{2551}")?;
    writeln!(out, "\u{255a}{}\u{255d}", "\u{2550}".repeat(46))
}

pub fn failure_report(
    out: &mut dyn Write,
    level: u32,
    stdout: &str,
    stderr: &str,
    trace: Option<&Path>,
) -> io::Result<()> {
    writeln!(out, "\n  \u{2717}  WRONG OUTPUT \u{2014} Level {level} not passed.")?;
    writeln!(out, "\n  Your output:")?;
    let shown = if stdout.is_empty() { "(no output)" } else { stdout };
    for line in shown.lines().take(FAILURE_STDOUT_LINES) {
        writeln!(out, "    {line}")?;
    }
    if !stderr.is_empty() {
        writeln!(out, "\n  Stderr:")?;
        for line in stderr.lines().take(FAILURE_STDERR_LINES) {
            writeln!(out, "    {line}")?;
        }
    }
    if let Some(path) = trace {
        writeln!(out, "\n  Trace saved: {}", path.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_progress_bar() {
        let bar = progress_bar(30);
        assert!(bar.ends_with("] 30/60 (50%)"));
        assert_eq!(bar.chars().filter(|c| *c == '\u{2588}').count(), 30);
        assert_eq!(bar.chars().filter(|c| *c == '\u{2591}').count(), 30);
        assert!(progress_bar(0).ends_with("0/60 (0%)"));
        assert!(progress_bar(60).ends_with("60/60 (100%)"));
    }

    #[test]
    fn test_topic_line_shows_position_within_topic() {
        assert_eq!(topic_line(0, "Basics"), "Topic:    Basics [1/3]");
        assert_eq!(topic_line(5, "Strings"), "Topic:    Strings [3/3]");
        assert_eq!(topic_line(60, "Complete"), "Topic:    Complete");
    }

    #[test]
    fn test_failure_report_truncates_streams() {
        let stdout: Vec<String> = (1..=15).map(|i| format!("line {i}")).collect();
        let stderr: Vec<String> = (1..=8).map(|i| format!("err {i}")).collect();
        let text = render(|out| {
            failure_report(
                out,
                2,
                &stdout.join("\n"),
                &stderr.join("\n"),
                Some(Path::new("py_traces/trace_lvl2.txt")),
            )
        });
        assert!(text.contains("    line 10\n"));
        assert!(!text.contains("line 11"));
        assert!(text.contains("    err 5\n"));
        assert!(!text.contains("err 6"));
        assert!(text.contains("Trace saved: py_traces/trace_lvl2.txt"));
    }

    #[test]
    fn test_failure_report_without_output() {
        let text = render(|out| failure_report(out, 0, "", "", None));
        assert!(text.contains("    (no output)"));
        assert!(!text.contains("Stderr:"));
    }

    #[test]
    fn test_prompt() {
        assert_eq!(prompt(12), "py-exam[lvl12]> ");
    }
}
