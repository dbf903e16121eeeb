//! Design tokens for the cascader terminal picker.
//!
//! All icons used by the picker are sourced from this module.

pub mod icons {
    pub const CURSOR: &str = "❯";
    pub const ON_PATH: &str = "●";
    pub const OFF_PATH: &str = " ";
    pub const BRANCH: &str = "▶";
    pub const DIVIDER: &str = "│";
    pub const RULE: &str = "─";
}

pub mod icons_ascii {
    pub const CURSOR: &str = ">";
    pub const ON_PATH: &str = "*";
    pub const OFF_PATH: &str = " ";
    pub const BRANCH: &str = ">";
    pub const DIVIDER: &str = "|";
    pub const RULE: &str = "-";
}

/// Icon set chosen by terminal capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icons {
    pub cursor: &'static str,
    pub on_path: &'static str,
    pub off_path: &'static str,
    pub branch: &'static str,
    pub divider: &'static str,
    pub rule: &'static str,
}

impl Icons {
    pub fn for_terminal(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                cursor: icons::CURSOR,
                on_path: icons::ON_PATH,
                off_path: icons::OFF_PATH,
                branch: icons::BRANCH,
                divider: icons::DIVIDER,
                rule: icons::RULE,
            }
        } else {
            Self {
                cursor: icons_ascii::CURSOR,
                on_path: icons_ascii::ON_PATH,
                off_path: icons_ascii::OFF_PATH,
                branch: icons_ascii::BRANCH,
                divider: icons_ascii::DIVIDER,
                rule: icons_ascii::RULE,
            }
        }
    }
}
