/// Interactive command parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    GradeMe,
    Skip,
    Hint,
    Reset,
    Progress,
    Exit,
    Empty,
    Unknown(String),
}

impl Command {
    /// Parse one input line; surrounding whitespace and case are ignored
    pub fn parse(line: &str) -> Self {
        let word = line.trim().to_lowercase();
        match word.as_str() {
            "grademe" => Command::GradeMe,
            "skip" => Command::Skip,
            "hint" => Command::Hint,
            "reset" => Command::Reset,
            "progress" => Command::Progress,
            "exit" | "quit" | "q" => Command::Exit,
            "" => Command::Empty,
            _ => Command::Unknown(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(Command::parse("grademe"), Command::GradeMe);
        assert_eq!(Command::parse("skip"), Command::Skip);
        assert_eq!(Command::parse("hint"), Command::Hint);
        assert_eq!(Command::parse("reset"), Command::Reset);
        assert_eq!(Command::parse("progress"), Command::Progress);
    }

    #[test]
    fn test_parse_is_trimmed_and_case_insensitive() {
        assert_eq!(Command::parse("  GradeMe \n"), Command::GradeMe);
        assert_eq!(Command::parse("SKIP"), Command::Skip);
    }

    #[test]
    fn test_exit_aliases() {
        for alias in ["exit", "quit", "q", "Q"] {
            assert_eq!(Command::parse(alias), Command::Exit);
        }
    }

    #[test]
    fn test_empty_and_unknown() {
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(Command::parse("Dance"), Command::Unknown("dance".to_string()));
        assert_eq!(Command::parse("grade me"), Command::Unknown("grade me".to_string()));
    }
}
