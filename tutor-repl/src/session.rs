use std::io::{self, BufRead, Write};
use tutor_diagnose::{Catalog, InteractionLog, Tutor};

/// Returns true if the line ends the session: an empty line, or `exit` in any case.
pub fn is_terminator(line: &str) -> bool {
    line.is_empty() || line.eq_ignore_ascii_case("exit")
}

/// One session with the tutor, holding its own interaction log.
#[derive(Debug)]
pub struct Session<'a> {
    tutor: &'a Tutor,
    log: InteractionLog,
}

impl<'a> Session<'a> {
    pub fn new(tutor: &'a Tutor) -> Self {
        Self { tutor, log: InteractionLog::new() }
    }

    /// Returns the catalog of the tutor.
    pub fn catalog(&self) -> &'static Catalog {
        self.tutor.catalog()
    }

    /// Analyzes one line of input, returning the line to print, or [`None`] if the line ends the
    /// session. Surrounding whitespace is ignored when looking for a terminator, but the line is
    /// analyzed as written.
    pub fn respond(&mut self, line: &str) -> Option<String> {
        if is_terminator(line.trim()) {
            return None;
        }

        let hint = self.tutor.analyze(line, &mut self.log);
        Some(format!("{}{}", self.catalog().hint_prefix, hint))
    }

    /// Runs the session over every line of the reader, without prompts, until a terminator or the
    /// end of input.
    pub fn run_piped(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        for line in input.lines() {
            match self.respond(&line?) {
                Some(response) => writeln!(output, "{}", response)?,
                None => break,
            }
        }
        writeln!(output, "{}", self.catalog().farewell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tutor_diagnose::ENGLISH;

    fn run(input: &str) -> String {
        let tutor = Tutor::default();
        let mut output = Vec::new();
        Session::new(&tutor).run_piped(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn terminators() {
        assert!(is_terminator(""));
        assert!(is_terminator("exit"));
        assert!(is_terminator("EXIT"));
        assert!(is_terminator("Exit"));
        assert!(!is_terminator("exit now"));
        assert!(!is_terminator("2+2=4"));
    }

    #[test]
    fn hints_escalate_across_lines() {
        let output = run("d/dx(x^2)=x\n  d/dx(x^2)=x  \n2+2=4\n");
        assert_eq!(output, format!(
            "Tutor hint: {}\nTutor hint: {}\nTutor hint: {}\n{}\n",
            ENGLISH.power_rule_literal.base,
            ENGLISH.power_rule_literal.escalated,
            ENGLISH.neutral,
            ENGLISH.farewell,
        ));
    }

    #[test]
    fn stops_at_terminator() {
        let output = run("2+2=5\nExit\nd/dx(x^2)=x\n");
        assert_eq!(output, format!("Tutor hint: {}\n{}\n", ENGLISH.sides_unequal, ENGLISH.farewell));

        let output = run("2+2=5\n\nd/dx(x^2)=x\n");
        assert_eq!(output, format!("Tutor hint: {}\n{}\n", ENGLISH.sides_unequal, ENGLISH.farewell));
    }

    #[test]
    fn padded_lines() {
        let tutor = Tutor::default();
        let mut session = Session::new(&tutor);

        assert_eq!(session.respond("  EXIT \t"), None);
        assert_eq!(session.respond(" \t "), None);
        assert_eq!(
            session.respond("\td/dx(x^2)=x  \r"),
            Some(format!("Tutor hint: {}", ENGLISH.power_rule_literal.base)),
        );
        assert_eq!(
            session.respond(" d/dx(x^2) = x"),
            Some(format!("Tutor hint: {}", ENGLISH.power_rule_literal.escalated)),
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(run(""), format!("{}\n", ENGLISH.farewell));
    }
}
