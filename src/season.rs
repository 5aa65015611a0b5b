use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// A competitive year as it appears in the source URLs (`saison_id=2021`).
///
/// Orders chronologically and hashes by year, so the same value works as a
/// sort key and as a grouping label. Serializes as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Season(u16);

impl Season {
    pub const fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn year(self) -> u16 {
        self.0
    }

    /// Inclusive chronological range.
    pub fn range(start: Season, end: Season) -> anyhow::Result<Vec<Season>> {
        if start > end {
            return Err(anyhow::anyhow!(
                "season range starts after it ends: {start} > {end}"
            ));
        }
        Ok((start.0..=end.0).map(Season).collect())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let year = s
            .trim()
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("invalid season {s:?}: {e}"))?;
        Ok(Season(year))
    }
}

impl From<u16> for Season {
    fn from(year: u16) -> Self {
        Season(year)
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
