//! Decides whether a pull request title marks work in progress, and rewrites it.
//!
//! Matching is plain substring search on the lower-cased title, so short
//! markers over-match (`"Addnmore"` contains `dnm`).

use std::{fmt::Display, str::FromStr, sync::LazyLock};

use anyhow::bail;
use regex::Regex;

pub(crate) const CONSTRUCTION_SIGN: &str = "🚧";

pub(crate) const WIP_MARKERS: [&str; 8] = [
    "wip",
    CONSTRUCTION_SIGN,
    "dnm",
    "work in progress",
    "work-in-progress",
    "do not merge",
    "do-not-merge",
    "draft",
];

pub(crate) const WIP_PREFIX: &str = "WIP: ";

/// Any marker, together with the whitespace around it and an optional trailing colon.
static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = WIP_MARKERS
        .iter()
        .map(|m| regex::escape(m))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\s*(?:{alternation}):?\s*")).expect("marker regex is valid")
});

pub(crate) fn is_wip(title: &str) -> bool {
    let title = title.to_lowercase();
    WIP_MARKERS.iter().any(|m| title.contains(m))
}

/// Prepends [`WIP_PREFIX`]. Does not check whether the title already is WIP.
pub(crate) fn add_marker(title: &str) -> String {
    format!("{WIP_PREFIX}{title}")
}

/// Removes the first marker occurrence, then any leftover construction sign.
///
/// The marker goes together with the whitespace around it. If that whitespace
/// separated two words, a single space takes its place (`"x\tWIP\ty"` becomes
/// `"x y"`). Once something was removed, the whole result is trimmed, including
/// whitespace the marker never touched. A title without any marker is returned
/// unchanged.
pub(crate) fn remove_marker(title: &str) -> String {
    let Some(found) = MARKER_RE.find(title) else {
        return title.replace(CONSTRUCTION_SIGN, "");
    };
    let (before, after) = (&title[..found.start()], &title[found.end()..]);
    // a marker that was set apart by whitespace keeps its neighbours apart
    let separated = found.as_str().starts_with(char::is_whitespace)
        || found.as_str().ends_with(char::is_whitespace);
    let glue = if separated && !before.is_empty() && !after.is_empty() {
        " "
    } else {
        ""
    };
    format!("{before}{glue}{after}")
        .replace(CONSTRUCTION_SIGN, "")
        .trim()
        .to_owned()
}

/// Identifier of the check run button that toggles the WIP marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum WipToggle {
    Wip,
    Unwip,
}

impl WipToggle {
    /// The button offered for a title in the given state.
    pub(crate) fn offered(is_wip: bool) -> Self {
        if is_wip {
            WipToggle::Unwip
        } else {
            WipToggle::Wip
        }
    }

    pub(crate) fn identifier(self) -> &'static str {
        match self {
            WipToggle::Wip => "wip",
            WipToggle::Unwip => "unwip",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            WipToggle::Wip => "Mark as WIP",
            WipToggle::Unwip => "Ready for review",
        }
    }

    pub(crate) fn description(self) -> &'static str {
        match self {
            WipToggle::Wip => "Prefix the PR title with a WIP marker",
            WipToggle::Unwip => "Strip the WIP marker from the PR title",
        }
    }

    pub(crate) fn apply(self, title: &str) -> String {
        match self {
            WipToggle::Wip => add_marker(title),
            WipToggle::Unwip => remove_marker(title),
        }
    }
}

impl FromStr for WipToggle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "wip" => Ok(WipToggle::Wip),
            "unwip" => Ok(WipToggle::Unwip),
            other => bail!("unknown WIP toggle {other:?}"),
        }
    }
}

impl Display for WipToggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}
