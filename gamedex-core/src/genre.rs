use serde::{Deserialize, Serialize};

/// Genre tags a game can carry.
///
/// A game may belong to several genres at once. Declaration order is the
/// `Ord` order, which is also the order a game's genre set iterates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Action,
    ActionAdventure,
    Adventure,
    BattleRoyale,
    Fighting,
    FirstPersonShooter,
    HackAndSlash,
    Horror,
    Metroidvania,
    Mmo,
    Platformer,
    Puzzle,
    Racing,
    Rhythm,
    Roguelike,
    RolePlaying,
    Sandbox,
    Shooter,
    Simulation,
    Sports,
    Stealth,
    Strategy,
    Survival,
}

/// All genre variants in declaration order.
const ALL_GENRES: &[Genre] = &[
    Genre::Action,
    Genre::ActionAdventure,
    Genre::Adventure,
    Genre::BattleRoyale,
    Genre::Fighting,
    Genre::FirstPersonShooter,
    Genre::HackAndSlash,
    Genre::Horror,
    Genre::Metroidvania,
    Genre::Mmo,
    Genre::Platformer,
    Genre::Puzzle,
    Genre::Racing,
    Genre::Rhythm,
    Genre::Roguelike,
    Genre::RolePlaying,
    Genre::Sandbox,
    Genre::Shooter,
    Genre::Simulation,
    Genre::Sports,
    Genre::Stealth,
    Genre::Strategy,
    Genre::Survival,
];

impl Genre {
    /// Canonical short name used on the command line.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Action => "action",
            Self::ActionAdventure => "action-adventure",
            Self::Adventure => "adventure",
            Self::BattleRoyale => "battle-royale",
            Self::Fighting => "fighting",
            Self::FirstPersonShooter => "fps",
            Self::HackAndSlash => "hack-and-slash",
            Self::Horror => "horror",
            Self::Metroidvania => "metroidvania",
            Self::Mmo => "mmo",
            Self::Platformer => "platformer",
            Self::Puzzle => "puzzle",
            Self::Racing => "racing",
            Self::Rhythm => "rhythm",
            Self::Roguelike => "roguelike",
            Self::RolePlaying => "rpg",
            Self::Sandbox => "sandbox",
            Self::Shooter => "shooter",
            Self::Simulation => "simulation",
            Self::Sports => "sports",
            Self::Stealth => "stealth",
            Self::Strategy => "strategy",
            Self::Survival => "survival",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::ActionAdventure => "Action-adventure",
            Self::Adventure => "Adventure",
            Self::BattleRoyale => "Battle royale",
            Self::Fighting => "Fighting",
            Self::FirstPersonShooter => "First-person shooter",
            Self::HackAndSlash => "Hack and slash",
            Self::Horror => "Horror",
            Self::Metroidvania => "Metroidvania",
            Self::Mmo => "Massively multiplayer online",
            Self::Platformer => "Platformer",
            Self::Puzzle => "Puzzle",
            Self::Racing => "Racing",
            Self::Rhythm => "Rhythm",
            Self::Roguelike => "Roguelike",
            Self::RolePlaying => "Role-playing",
            Self::Sandbox => "Sandbox",
            Self::Shooter => "Shooter",
            Self::Simulation => "Simulation",
            Self::Sports => "Sports",
            Self::Stealth => "Stealth",
            Self::Strategy => "Strategy",
            Self::Survival => "Survival",
        }
    }

    /// All accepted names for this genre (case-insensitive matching).
    ///
    /// The first entry is always the short name. The serialized
    /// `SCREAMING_SNAKE_CASE` form is accepted separately by `from_str`.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Action => &["action"],
            Self::ActionAdventure => &["action-adventure", "action adventure"],
            Self::Adventure => &["adventure"],
            Self::BattleRoyale => &["battle-royale", "battle royale", "br"],
            Self::Fighting => &["fighting", "fighter"],
            Self::FirstPersonShooter => &["fps", "first-person shooter", "first person shooter"],
            Self::HackAndSlash => &["hack-and-slash", "hack and slash", "hack'n'slash"],
            Self::Horror => &["horror", "survival horror"],
            Self::Metroidvania => &["metroidvania"],
            Self::Mmo => &["mmo", "mmorpg"],
            Self::Platformer => &["platformer", "platform"],
            Self::Puzzle => &["puzzle"],
            Self::Racing => &["racing"],
            Self::Rhythm => &["rhythm", "music"],
            Self::Roguelike => &["roguelike", "roguelite", "rogue-like"],
            Self::RolePlaying => &["rpg", "role-playing", "role playing"],
            Self::Sandbox => &["sandbox", "open world"],
            Self::Shooter => &["shooter"],
            Self::Simulation => &["simulation", "sim"],
            Self::Sports => &["sports", "sport"],
            Self::Stealth => &["stealth"],
            Self::Strategy => &["strategy", "rts"],
            Self::Survival => &["survival"],
        }
    }

    /// All genre variants.
    pub fn all() -> &'static [Genre] {
        ALL_GENRES
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `Genre`.
#[derive(Debug, Clone)]
pub struct GenreParseError(pub String);

impl std::fmt::Display for GenreParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown genre: '{}'", self.0)
    }
}

impl std::error::Error for GenreParseError {}

impl std::str::FromStr for Genre {
    type Err = GenreParseError;

    /// Parse a genre from any recognized name (case-insensitive).
    ///
    /// Matches the aliases and the serialized form (`ROLE_PLAYING`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let snake = lower.replace('_', " ");
        for &genre in ALL_GENRES {
            for alias in genre.aliases() {
                if *alias == lower || alias.replace('-', " ") == snake {
                    return Ok(genre);
                }
            }
        }
        Err(GenreParseError(s.to_string()))
    }
}
