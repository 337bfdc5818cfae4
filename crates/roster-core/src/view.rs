//! Presentation selector
//!
//! Which read-only page is active. Switching views never touches roster
//! data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dashboard pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// Stat cards and headline charts
    #[default]
    Overview,
    /// Editable category table
    Workforce,
    /// Vacancy chart per category
    Gaps,
    /// AI strategic report
    Recommendations,
}

impl ViewKind {
    /// All views in navigation order
    pub const ALL: [ViewKind; 4] = [
        ViewKind::Overview,
        ViewKind::Workforce,
        ViewKind::Gaps,
        ViewKind::Recommendations,
    ];

    /// Page heading
    #[inline]
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ViewKind::Overview => "لوحة التحكم العامة",
            ViewKind::Workforce => "توزيع القوى العاملة",
            ViewKind::Gaps => "تحليل الفجوات والاحتياجات",
            ViewKind::Recommendations => "التوصيات والقرارات",
        }
    }

    /// Stable identifier used on the command line
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ViewKind::Overview => "overview",
            ViewKind::Workforce => "workforce",
            ViewKind::Gaps => "gaps",
            ViewKind::Recommendations => "recommendations",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized view identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view: {0}")]
pub struct UnknownView(pub String);

impl FromStr for ViewKind {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewKind::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_views() {
        assert_eq!("gaps".parse::<ViewKind>().unwrap(), ViewKind::Gaps);
        assert_eq!(" Workforce ".parse::<ViewKind>().unwrap(), ViewKind::Workforce);
    }

    #[test]
    fn rejects_unknown_view() {
        assert_eq!("charts".parse::<ViewKind>(), Err(UnknownView("charts".into())));
    }

    #[test]
    fn default_is_overview() {
        assert_eq!(ViewKind::default(), ViewKind::Overview);
        assert_eq!(ViewKind::default().title(), "لوحة التحكم العامة");
    }

    #[test]
    fn display_round_trips() {
        for view in ViewKind::ALL {
            assert_eq!(view.to_string().parse::<ViewKind>().unwrap(), view);
        }
    }
}
