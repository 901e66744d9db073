//! Gameplay facts read straight off the decoded records. These are fixed
//! conventions of the game data, not tunable heuristics: the picnums and tags
//! below are what the game code looks for.

use crate::map::BuildMap;
use crate::types::Sprite;
use std::fmt;

/// Picnum of the end-of-level switch
pub const PIC_END_SWITCH: i16 = 142;
/// Picnum of the multiplayer start marker
pub const PIC_PLAYER_START: i16 = 1405;

/// Player start lotag marking a co-op start
pub const LOTAG_COOP_START: u16 = 1;
/// Player start lotag marking a deathmatch start
pub const LOTAG_DEATHMATCH_START: u16 = 0;

/// End switch lotags that end the level
pub const LOTAG_END_32767: u16 = 32767;
pub const LOTAG_END_65534: u16 = 65534;
pub const LOTAG_END_65535: u16 = 65535;
/// End switch palette marking a secret exit
pub const PAL_SECRET_EXIT: u8 = 14;

/// The historic limits of the unmodified engine. A count equal to the limit is
/// still compatible.
pub const ENGINE_MAX_SECTORS: usize = 1024;
pub const ENGINE_MAX_WALLS: usize = 8192;
pub const ENGINE_MAX_SPRITES: usize = 4096;

/// Which end switch condition made the map playable in single player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelExit {
    /// lotag 32767
    Lotag32767,
    /// lotag 65534 (-2 as a signed tag)
    Lotag65534,
    /// lotag 65535 (-1 as a signed tag)
    Lotag65535,
    /// palette 14, the secret exit
    SecretExit,
}

impl LevelExit {
    fn from_sprite(sprite: &Sprite) -> Option<LevelExit> {
        if sprite.picnum != PIC_END_SWITCH {
            return None;
        }
        match sprite.lotag {
            LOTAG_END_32767 => Some(LevelExit::Lotag32767),
            LOTAG_END_65534 => Some(LevelExit::Lotag65534),
            LOTAG_END_65535 => Some(LevelExit::Lotag65535),
            _ if sprite.pal == PAL_SECRET_EXIT => Some(LevelExit::SecretExit),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LevelExit::Lotag32767 => "end-of-level switch with lotag 32767",
            LevelExit::Lotag65534 => "end-of-level switch with lotag 65534",
            LevelExit::Lotag65535 => "end-of-level switch with lotag 65535",
            LevelExit::SecretExit => "secret exit switch (palette 14)",
        }
    }
}

impl fmt::Display for LevelExit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Whether a multiplayer mode is available and for how many players
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    NotSupported,
    /// The local player plus one per start marker
    Supported { players: usize },
}

impl Capacity {
    fn from_starts(starts: usize) -> Capacity {
        if starts == 0 {
            Capacity::NotSupported
        } else {
            Capacity::Supported {
                players: starts + 1,
            }
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, Capacity::Supported { .. })
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Capacity::NotSupported => write!(f, "not supported"),
            Capacity::Supported { players } => write!(f, "up to {players} players"),
        }
    }
}

/// Can the unmodified engine load the map. `exceeded` lists every limit that
/// was broken, in sector, wall, sprite order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineCompat {
    pub exceeded: Vec<(&'static str, usize, usize)>,
}

impl EngineCompat {
    pub fn is_compatible(&self) -> bool {
        self.exceeded.is_empty()
    }
}

impl fmt::Display for EngineCompat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_compatible() {
            return write!(f, "compatible");
        }
        write!(f, "not compatible (")?;
        for (i, (what, count, limit)) in self.exceeded.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{count} {what} > {limit}")?;
        }
        write!(f, ")")
    }
}

/// The first end switch that makes the map finishable, in sprite order
pub fn single_player_exit(map: &BuildMap) -> Option<LevelExit> {
    map.sprites.iter().find_map(LevelExit::from_sprite)
}

fn count_starts(map: &BuildMap, lotag: u16) -> usize {
    map.sprites
        .iter()
        .filter(|s| s.picnum == PIC_PLAYER_START && s.lotag == lotag)
        .count()
}

pub fn coop_capacity(map: &BuildMap) -> Capacity {
    Capacity::from_starts(count_starts(map, LOTAG_COOP_START))
}

pub fn deathmatch_capacity(map: &BuildMap) -> Capacity {
    Capacity::from_starts(count_starts(map, LOTAG_DEATHMATCH_START))
}

pub fn engine_compatibility(map: &BuildMap) -> EngineCompat {
    let exceeded = [
        ("sectors", map.sectors.len(), ENGINE_MAX_SECTORS),
        ("walls", map.walls.len(), ENGINE_MAX_WALLS),
        ("sprites", map.sprites.len(), ENGINE_MAX_SPRITES),
    ]
    .into_iter()
    .filter(|(_, count, limit)| count > limit)
    .collect();
    EngineCompat { exceeded }
}

/// Everything the classifier can say about a map. Only the records' own
/// fields are read, so a map with dangling indexes classifies fine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameplayFacts {
    pub single_player: Option<LevelExit>,
    pub coop: Capacity,
    pub deathmatch: Capacity,
    pub engine: EngineCompat,
}

impl GameplayFacts {
    pub fn classify(map: &BuildMap) -> GameplayFacts {
        GameplayFacts {
            single_player: single_player_exit(map),
            coop: coop_capacity(map),
            deathmatch: deathmatch_capacity(map),
            engine: engine_compatibility(map),
        }
    }
}
