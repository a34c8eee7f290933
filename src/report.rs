use crate::Error;
use std::io::Write;

/// Write one `"<letter>: <count>"` line per entry, in the given order.
pub fn write_histogram<W: Write>(out: &mut W, entries: &[(char, u64)]) -> std::io::Result<()> {
    for (letter, count) in entries {
        writeln!(out, "{}: {}", letter, count)?;
    }
    Ok(())
}

/// Write the single diagnostic line shown when a run fails.
pub fn write_error<W: Write>(out: &mut W, error: &Error) -> std::io::Result<()> {
    writeln!(out, "An error occurred: {}", error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_lines() {
        let mut out = Vec::new();
        write_histogram(&mut out, &[('e', 12), ('a', 3)]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "e: 12\na: 3\n");
    }

    #[test]
    fn test_empty_histogram_prints_nothing() {
        let mut out = Vec::new();
        write_histogram(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_error_line() {
        let mut out = Vec::new();
        let error = Error::Status {
            status: reqwest::StatusCode::UNAUTHORIZED,
        };
        write_error(&mut out, &error).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "An error occurred: Response status code does not indicate success: 401 (Unauthorized)\n"
        );
    }
}
