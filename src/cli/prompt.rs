use std::io::{BufRead, Write};

use crate::majors::{MajorSelector, ResolutionError};
use crate::models::{MajorChoice, PrefixStat};

/// Course names shown under each prefix in the prompt
const EXAMPLES_PER_PREFIX: usize = 3;

fn io_error(e: std::io::Error) -> ResolutionError {
    ResolutionError::Selector(e.to_string())
}

/// Interactive major selection over any reader/writer pair
///
/// End of input is treated as declining (single prefix) or cancelling (several prefixes).
pub struct PromptSelector<R, W> {
    input: R,
    output: W,
    course_names: Vec<(String, Vec<String>)>,
}

impl<R: BufRead, W: Write> PromptSelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, course_names: Vec::new() }
    }

    /// Course names per prefix, listed as examples next to each choice
    pub fn with_course_names(mut self, course_names: Vec<(String, Vec<String>)>) -> Self {
        self.course_names = course_names;
        self
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>, ResolutionError> {
        write!(self.output, "{}", question).map_err(io_error)?;
        self.output.flush().map_err(io_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(io_error)?;
        if read == 0 {
            writeln!(self.output).map_err(io_error)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn describe(&mut self, index: Option<usize>, stat: &PrefixStat) -> Result<(), ResolutionError> {
        let label = match index {
            Some(i) => format!("  {}. {}", i + 1, stat.prefix),
            None => format!("  {}", stat.prefix),
        };
        writeln!(
            self.output,
            "{:<12} {} course(s), {}",
            label, stat.count, stat.representative_category
        )
        .map_err(io_error)?;

        let examples = self
            .course_names
            .iter()
            .find(|(prefix, _)| *prefix == stat.prefix)
            .map(|(_, names)| names.iter().take(EXAMPLES_PER_PREFIX).cloned().collect::<Vec<_>>())
            .unwrap_or_default();
        if !examples.is_empty() {
            writeln!(self.output, "               e.g. {}", examples.join(", ")).map_err(io_error)?;
        }
        Ok(())
    }

    /// Accepts a 1-based list number or a prefix (any case)
    fn pick<'s>(stats: &'s [PrefixStat], answer: &str) -> Option<&'s PrefixStat> {
        match answer.parse::<usize>() {
            Ok(n) => n.checked_sub(1).and_then(|i| stats.get(i)),
            Err(_) => stats.iter().find(|s| s.prefix.eq_ignore_ascii_case(answer)),
        }
    }
}

impl<R: BufRead, W: Write> MajorSelector for PromptSelector<R, W> {
    fn confirm_primary(&mut self, stat: &PrefixStat) -> Result<bool, ResolutionError> {
        writeln!(self.output, "One major course-code prefix was found:").map_err(io_error)?;
        self.describe(None, stat)?;

        loop {
            let question = format!("Is {} your primary major? [Y/n] ", stat.prefix);
            let Some(answer) = self.ask(&question)? else {
                return Ok(false);
            };
            match answer.to_lowercase().as_str() {
                "" | "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer y or n.").map_err(io_error)?,
            }
        }
    }

    fn choose_majors(
        &mut self,
        stats: &[PrefixStat],
    ) -> Result<Option<MajorChoice>, ResolutionError> {
        writeln!(self.output, "Several major course-code prefixes were found:").map_err(io_error)?;
        for (i, stat) in stats.iter().enumerate() {
            self.describe(Some(i), stat)?;
        }
        writeln!(
            self.output,
            "Prefixes you do not pick are imported into the general elective category."
        )
        .map_err(io_error)?;

        let primary = loop {
            let question = format!("Primary major [1-{}, q to cancel]: ", stats.len());
            let Some(answer) = self.ask(&question)? else {
                return Ok(None);
            };
            if answer.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match Self::pick(stats, &answer) {
                Some(stat) => break stat.prefix.clone(),
                None => writeln!(self.output, "Unknown choice: {}", answer).map_err(io_error)?,
            }
        };

        let secondary = loop {
            let Some(answer) = self.ask("Secondary major [number or prefix, Enter for none]: ")?
            else {
                break None;
            };
            if answer.is_empty() {
                break None;
            }
            match Self::pick(stats, &answer) {
                Some(stat) if stat.prefix == primary => {
                    writeln!(self.output, "{} is already the primary major.", primary)
                        .map_err(io_error)?;
                }
                Some(stat) => break Some(stat.prefix.clone()),
                None => writeln!(self.output, "Unknown choice: {}", answer).map_err(io_error)?,
            }
        };

        Ok(Some(MajorChoice::new(primary, secondary)))
    }
}
