//! Family Report
//!
//! Prints every member in order, then the mean age.

use crate::components::FamilyMember;
use std::io::{self, Write};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ReportError {
    /// Average age is undefined with no members
    #[error("cannot compute an average age for an empty family")]
    EmptyFamily,

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Arithmetic mean of all ages.
///
/// Ages are summed as `i64` so any `i32` inputs are safe from overflow.
pub fn average_age(members: &[FamilyMember]) -> Result<f64, ReportError> {
    if members.is_empty() {
        return Err(ReportError::EmptyFamily);
    }

    let total: i64 = members.iter().map(|m| i64::from(m.age())).sum();
    let average = total as f64 / members.len() as f64;
    debug!("Average age over {} members: {}", members.len(), average);
    Ok(average)
}

/// Borrowed, ordered view over the members to report on
pub struct FamilyReport<'a> {
    members: &'a [FamilyMember],
}

impl<'a> FamilyReport<'a> {
    pub fn new(members: &'a [FamilyMember]) -> Self {
        Self { members }
    }

    /// Write the full report. Nothing is written for an empty family.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        let average = average_age(self.members)?;

        writeln!(out, "Family Members:")?;
        for member in self.members {
            member.display_to(&mut *out)?;
        }
        writeln!(out, "Average Age: {}", average)?;
        Ok(())
    }

    /// Write the report to stdout
    pub fn print(&self) -> Result<(), ReportError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::household::Household;

    fn render(members: &[FamilyMember]) -> Result<String, ReportError> {
        let mut buf = Vec::new();
        FamilyReport::new(members).write_to(&mut buf)?;
        Ok(String::from_utf8(buf).expect("report is utf-8"))
    }

    #[test]
    fn test_sample_average_is_thirty() {
        let household = Household::sample();
        assert_eq!(average_age(household.members()).unwrap(), 30.0);
    }

    #[test]
    fn test_sample_report_output() {
        let household = Household::sample();
        let output = render(household.members()).unwrap();
        assert_eq!(
            output,
            "Family Members:\n\
             Type: Mother, Name: Alice, Age: 45\n\
             Type: Father, Name: Bob, Age: 48\n\
             Type: Daughter, Name: Charlotte, Age: 15\n\
             Type: Son, Name: David, Age: 12\n\
             Average Age: 30\n"
        );
    }

    #[test]
    fn test_order_follows_input() {
        let mut members = Household::sample().members().to_vec();
        members.reverse();

        let output = render(&members).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "Type: Son, Name: David, Age: 12");
        assert_eq!(lines[4], "Type: Mother, Name: Alice, Age: 45");
        assert_eq!(lines[5], "Average Age: 30");
        assert_eq!(average_age(&members).unwrap(), 30.0);
    }

    #[test]
    fn test_single_member() {
        let members = [FamilyMember::daughter("Charlotte", 15)];
        assert_eq!(average_age(&members).unwrap(), 15.0);
    }

    #[test]
    fn test_fractional_average() {
        let members = [FamilyMember::son("a", 1), FamilyMember::son("b", 2)];
        let output = render(&members).unwrap();
        assert!(output.ends_with("Average Age: 1.5\n"));
    }

    #[test]
    fn test_repeating_average_prints_full_precision() {
        let members = [
            FamilyMember::son("a", 33),
            FamilyMember::son("b", 33),
            FamilyMember::son("c", 34),
        ];
        let output = render(&members).unwrap();
        assert!(output.ends_with("Average Age: 33.333333333333336\n"));
    }

    #[test]
    fn test_empty_family() {
        assert!(matches!(average_age(&[]), Err(ReportError::EmptyFamily)));

        let mut buf = Vec::new();
        let result = FamilyReport::new(&[]).write_to(&mut buf);
        assert!(matches!(result, Err(ReportError::EmptyFamily)));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_large_ages_do_not_overflow() {
        let members = [
            FamilyMember::father("a", i32::MAX),
            FamilyMember::father("b", i32::MAX),
        ];
        assert_eq!(average_age(&members).unwrap(), i32::MAX as f64);
    }
}
