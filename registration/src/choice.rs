use std::str::FromStr;

use strum_macros::EnumString;

#[derive(EnumString, strum_macros::Display, Clone, Copy, Debug, PartialEq)]
pub enum Choice {
    #[strum(serialize = "1")]
    Authenticate,
    #[strum(serialize = "2")]
    Register,
}

impl Choice {
    /// `None` means the line does not select any menu entry.
    pub fn parse_line(s: &str) -> Option<Choice> {
        Choice::from_str(s.trim()).ok()
    }
}
