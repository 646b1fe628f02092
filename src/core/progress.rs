//! Console progress lines.

use std::fmt::Display;

/// Where user-facing progress lines go.
///
/// Progress moves to stderr when stdout carries JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Stdout,
    Stderr,
    Silent,
}

impl Progress {
    pub fn for_output(as_json: bool) -> Self {
        if as_json {
            Progress::Stderr
        } else {
            Progress::Stdout
        }
    }

    pub fn line(&self, msg: impl Display) {
        match self {
            Progress::Stdout => println!("{msg}"),
            Progress::Stderr => eprintln!("{msg}"),
            Progress::Silent => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_output() {
        assert_eq!(Progress::for_output(true), Progress::Stderr);
        assert_eq!(Progress::for_output(false), Progress::Stdout);
    }
}
