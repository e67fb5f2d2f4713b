//! A pure parser for the textual `.mc` machine-code format.
//!
//! Reading the file itself is the host's job: this module only turns
//! already-read text into a program image, so it has no filesystem
//! dependency and no error path; malformed lines are skipped rather than
//! rejected.

/// Parse the contents of a `.mc` file into a program image.
///
/// Each line is trimmed; lines whose trimmed length is not exactly 16, or
/// that contain anything other than `'0'`/`'1'`, are skipped rather than
/// treated as an error. Blank lines are skipped silently.
pub fn parse_mc_program(text: &str) -> Vec<u16> {
    text.lines().filter_map(parse_mc_line).collect()
}

fn parse_mc_line(line: &str) -> Option<u16> {
    let trimmed = line.trim();
    if trimmed.len() != 16 {
        return None;
    }
    u16::from_str_radix(trimmed, 2).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_word_per_line() {
        let text = "0000000000000000\n0000000000000001\n";
        assert_eq!(parse_mc_program(text), vec![0, 1]);
    }

    #[test]
    fn skips_blank_and_malformed_lines() {
        let text = "\n0000000000000001\nnot-sixteen-bits\n000000000000001\n0000000000000010\n";
        assert_eq!(parse_mc_program(text), vec![1, 2]);
    }

    #[test]
    fn trims_surrounding_whitespace_before_measuring_length() {
        let text = "  0000000000000001  \n";
        assert_eq!(parse_mc_program(text), vec![1]);
    }

    #[test]
    fn empty_input_yields_empty_program() {
        assert_eq!(parse_mc_program(""), Vec::<u16>::new());
    }
}
