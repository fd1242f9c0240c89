//! The seven team archetypes and their fixed descriptive notes.

use std::fmt;

use crate::types::TeamProfile;

/// A boolean team-behaviour tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    Stepperz,
    Scrubs,
    Headaches,
    Fortified,
    Oma,
    Bricksquad,
    Hitterz,
}

/// Wire label and note for each archetype, in tag order.
const NOTE_TABLE: &[(Archetype, &str, &str)] = &[
    (Archetype::Stepperz, "Stepperz", "Stepperz team: blowout + over-smash risk"),
    (Archetype::Scrubs, "Scrubs", "Scrubs team: cannot hold leads, fake safety risk"),
    (Archetype::Headaches, "Headaches", "Headaches team: slowdown + fake comebacks"),
    (Archetype::Fortified, "Fortified", "Fortified: comeback equity from +15"),
    (Archetype::Oma, "OMA", "One Man Army: high volatility when star sits"),
    (Archetype::Bricksquad, "Bricksquad", "Bricksquad: low shooting floor, drought risk"),
    (Archetype::Hitterz, "Hitterz-Ballerz", "Hitterz-Ballerz: stable shooting floor"),
];

impl Archetype {
    /// All archetypes in the order tags are emitted.
    pub const ALL: &'static [Archetype] = &[
        Archetype::Stepperz,
        Archetype::Scrubs,
        Archetype::Headaches,
        Archetype::Fortified,
        Archetype::Oma,
        Archetype::Bricksquad,
        Archetype::Hitterz,
    ];

    fn entry(&self) -> &'static (Archetype, &'static str, &'static str) {
        // NOTE_TABLE rows follow declaration order.
        &NOTE_TABLE[*self as usize]
    }

    /// Tag label as sent to the dashboard.
    pub fn label(&self) -> &'static str {
        self.entry().1
    }

    /// Human-readable explanation of the archetype.
    pub fn note(&self) -> &'static str {
        self.entry().2
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Accepts the wire label or the bare name (`Hitterz`), case-insensitive.
impl std::str::FromStr for Archetype {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stepperz" => Ok(Archetype::Stepperz),
            "scrubs" => Ok(Archetype::Scrubs),
            "headaches" => Ok(Archetype::Headaches),
            "fortified" => Ok(Archetype::Fortified),
            "oma" | "one man army" => Ok(Archetype::Oma),
            "bricksquad" => Ok(Archetype::Bricksquad),
            "hitterz" | "hitterz-ballerz" => Ok(Archetype::Hitterz),
            other => Err(anyhow::anyhow!("Unknown archetype: {other}")),
        }
    }
}

/// Look up the note for a tag label. Unknown labels have no note.
pub fn note_for(label: &str) -> Option<&'static str> {
    NOTE_TABLE
        .iter()
        .find(|(_, l, _)| *l == label)
        .map(|(_, _, note)| *note)
}

impl TeamProfile {
    /// Whether this team carries the given archetype flag.
    pub fn has(&self, archetype: Archetype) -> bool {
        match archetype {
            Archetype::Stepperz => self.is_stepperz,
            Archetype::Scrubs => self.is_scrubs,
            Archetype::Headaches => self.is_headaches,
            Archetype::Fortified => self.is_fortified,
            Archetype::Oma => self.is_oma,
            Archetype::Bricksquad => self.is_bricksquad,
            Archetype::Hitterz => self.is_hitterz,
        }
    }

    /// Archetypes this team carries, in tag order.
    pub fn archetypes(&self) -> Vec<Archetype> {
        Archetype::ALL.iter().copied().filter(|a| self.has(*a)).collect()
    }
}
