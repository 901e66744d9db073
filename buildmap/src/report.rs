use crate::classify::GameplayFacts;
use crate::map::BuildMap;
use crate::types::{Player, Sector, Sprite, Wall};
use crate::validate::{Violation, validate};
use std::fmt;
use std::str::FromStr;

/// How much of a map is printed
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// The facts and counts only
    #[default]
    Summary,
    /// The summary followed by a line per sector, wall and sprite
    Detailed,
}

impl FromStr for ReportMode {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "summary" => Ok(Self::Summary),
            "detailed" => Ok(Self::Detailed),
            _ => Err(std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "Invalid report mode",
            )),
        }
    }
}

/// The set of facts about one file. Every field can be checked on its own,
/// the `Display` impl is only the presentation of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapReport {
    pub file_name: String,
    pub version: i32,
    pub version_name: Option<&'static str>,
    pub player: Player,
    pub sector_start: i16,
    pub num_sectors: usize,
    pub num_walls: usize,
    pub num_sprites: usize,
    pub trailing_bytes: usize,
    pub facts: GameplayFacts,
    pub violations: Vec<Violation>,
    pub mode: ReportMode,
    /// One line per record, only filled for `ReportMode::Detailed`
    pub details: Vec<String>,
}

impl MapReport {
    pub fn new(file_name: impl Into<String>, map: &BuildMap, mode: ReportMode) -> MapReport {
        let details = match mode {
            ReportMode::Summary => Vec::new(),
            ReportMode::Detailed => record_lines(map),
        };

        MapReport {
            file_name: file_name.into(),
            version: map.header.version,
            version_name: map.header.version_name(),
            player: map.player,
            sector_start: map.sector_start,
            num_sectors: map.sectors.len(),
            num_walls: map.walls.len(),
            num_sprites: map.sprites.len(),
            trailing_bytes: map.trailing_bytes,
            facts: GameplayFacts::classify(map),
            violations: validate(map),
            mode,
            details,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

fn sector_line(i: usize, s: &Sector) -> String {
    format!(
        "sector {i}: walls {}+{}, ceiling z {} pic {} shade {} pal {}, floor z {} pic {} shade {} pal {}, visibility {}, tags {}/{}/{}",
        s.wall_start,
        s.wall_count,
        s.ceiling.z,
        s.ceiling.picnum,
        s.ceiling.shade,
        s.ceiling.pal,
        s.floor.z,
        s.floor.picnum,
        s.floor.shade,
        s.floor.pal,
        s.visibility,
        s.lotag,
        s.hitag,
        s.extra
    )
}

fn wall_line(i: usize, w: &Wall) -> String {
    format!(
        "wall {i}: ({}, {}), right {}, left {}, next sector {}, pic {} over {}, shade {} pal {}, tags {}/{}/{}",
        w.position.x,
        w.position.y,
        w.next_wall_right,
        w.next_wall_left,
        w.next_sector,
        w.picnum,
        w.over_picnum,
        w.shade,
        w.pal,
        w.lotag,
        w.hitag,
        w.extra
    )
}

fn sprite_line(i: usize, s: &Sprite) -> String {
    format!(
        "sprite {i}: ({}, {}, {}), pic {}, sector {}, status {}, angle {}, owner {}, shade {} pal {}, tags {}/{}/{}",
        s.position.x,
        s.position.y,
        s.position.z,
        s.picnum,
        s.sector,
        s.status,
        s.angle,
        s.owner,
        s.shade,
        s.pal,
        s.lotag,
        s.hitag,
        s.extra
    )
}

fn record_lines(map: &BuildMap) -> Vec<String> {
    let mut lines = Vec::with_capacity(map.sectors.len() + map.walls.len() + map.sprites.len());
    lines.extend(map.sectors.iter().enumerate().map(|(i, s)| sector_line(i, s)));
    lines.extend(map.walls.iter().enumerate().map(|(i, w)| wall_line(i, w)));
    lines.extend(map.sprites.iter().enumerate().map(|(i, s)| sprite_line(i, s)));
    lines
}

impl fmt::Display for MapReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "=== {} ===", self.file_name)?;
        match self.version_name {
            Some(name) => writeln!(f, "version:       {} ({name})", self.version)?,
            None => writeln!(f, "version:       {} (unrecognized)", self.version)?,
        }
        let p = &self.player;
        writeln!(
            f,
            "player start:  ({}, {}, {}) angle {} in sector {}",
            p.position.x, p.position.y, p.position.z, p.angle, self.sector_start
        )?;
        writeln!(
            f,
            "records:       {} sectors, {} walls, {} sprites",
            self.num_sectors, self.num_walls, self.num_sprites
        )?;
        match self.facts.single_player {
            Some(exit) => writeln!(f, "single player: yes, {exit}")?,
            None => writeln!(f, "single player: no end-of-level switch")?,
        }
        writeln!(f, "cooperative:   {}", self.facts.coop)?;
        writeln!(f, "deathmatch:    {}", self.facts.deathmatch)?;
        writeln!(f, "engine:        {}", self.facts.engine)?;
        if self.trailing_bytes > 0 {
            writeln!(f, "trailing:      {} bytes", self.trailing_bytes)?;
        }
        if !self.violations.is_empty() {
            writeln!(f, "{} structural violations:", self.violations.len())?;
            for v in &self.violations {
                writeln!(f, "  {v}")?;
            }
        }
        for line in &self.details {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}
