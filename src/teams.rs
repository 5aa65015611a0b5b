/// A club as addressed in source URLs: a slug plus a numeric code, both
/// taken verbatim from the site's club page address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub slug: String,
    pub code: String,
}

// (display name, slug, code)
const PRESETS: [(&str, &str, &str); 12] = [
    ("Real Madrid", "real-madrid", "418"),
    ("FC Barcelona", "fc-barcelona", "131"),
    ("Atlético de Madrid", "atletico-madrid", "13"),
    ("Manchester City", "manchester-city", "281"),
    ("Liverpool", "fc-liverpool", "31"),
    ("Chelsea", "fc-chelsea", "631"),
    ("Bayern Munich", "fc-bayern-munchen", "27"),
    ("Paris Saint-Germain", "fc-paris-saint-germain", "583"),
    ("Juventus", "juventus-turin", "506"),
    ("AC Milan", "ac-mailand", "5"),
    ("Inter Milan", "inter-mailand", "46"),
    ("Ponferradina", "sd-ponferradina", "4032"),
];

impl Team {
    pub fn new(slug: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            code: code.into(),
        }
    }

    /// Looks a club up by display name or slug, ignoring case.
    pub fn preset(name: &str) -> Option<Team> {
        let name = name.trim();
        PRESETS
            .iter()
            .find(|(display, slug, _)| {
                display.eq_ignore_ascii_case(name) || slug.eq_ignore_ascii_case(name)
            })
            .map(|(_, slug, code)| Team::new(*slug, *code))
    }

    pub fn preset_names() -> impl Iterator<Item = &'static str> {
        PRESETS.iter().map(|(display, _, _)| *display)
    }

    /// An explicit code always wins; without one the name must be a preset.
    pub fn resolve(name: &str, code: Option<&str>) -> anyhow::Result<Team> {
        let preset = Team::preset(name);
        match (preset, code) {
            (Some(team), Some(code)) => Ok(Team::new(team.slug, code.trim())),
            (None, Some(code)) => Ok(Team::new(name.trim(), code.trim())),
            (Some(team), None) => Ok(team),
            (None, None) => Err(anyhow::anyhow!(
                "{name:?} is not a known team; set TEAM_CODE or use one of: {}",
                Team::preset_names().collect::<Vec<_>>().join(", ")
            )),
        }
    }
}
