use crate::map::BuildMap;
use crate::types::NO_INDEX;
use std::fmt;

/// Which of the two wall links a violation is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    /// `next_wall_right`, the next point of the wall loop
    Right,
    /// `next_wall_left`, the wall on the other side of a portal
    Left,
}

/// One index field pointing outside the array it indexes. `total` is the
/// length of the target array at the time of the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    SectorWallRange {
        sector: usize,
        wall_start: i16,
        wall_count: i16,
        total: usize,
    },
    WallNextWall {
        wall: usize,
        side: WallSide,
        index: i16,
        total: usize,
    },
    WallNextSector {
        wall: usize,
        index: i16,
        total: usize,
    },
    SpriteSector {
        sprite: usize,
        index: i16,
        total: usize,
    },
    SpriteOwner {
        sprite: usize,
        index: i16,
        total: usize,
    },
    StartSector {
        index: i16,
        total: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Violation::SectorWallRange {
                sector,
                wall_start,
                wall_count,
                total,
            } => write!(
                f,
                "sector {sector}: walls [{wall_start}, {}) outside of {total} walls",
                *wall_start as i32 + *wall_count as i32
            ),
            Violation::WallNextWall {
                wall,
                side,
                index,
                total,
            } => {
                let field = match side {
                    WallSide::Right => "next_wall_right",
                    WallSide::Left => "next_wall_left",
                };
                write!(f, "wall {wall}: {field} {index} outside of {total} walls")
            }
            Violation::WallNextSector { wall, index, total } => {
                write!(f, "wall {wall}: next_sector {index} outside of {total} sectors")
            }
            Violation::SpriteSector {
                sprite,
                index,
                total,
            } => write!(f, "sprite {sprite}: sector {index} outside of {total} sectors"),
            Violation::SpriteOwner {
                sprite,
                index,
                total,
            } => write!(f, "sprite {sprite}: owner {index} outside of {total} sprites"),
            Violation::StartSector { index, total } => {
                write!(f, "player start sector {index} outside of {total} sectors")
            }
        }
    }
}

/// True if `index` is the sentinel or a valid index for an array of `len`
fn link_ok(index: i16, len: usize) -> bool {
    index == NO_INDEX || (index >= 0 && (index as usize) < len)
}

/// Check every index field in the map, collecting all violations in record
/// order: sectors, walls, sprites, then the player start sector.
pub fn validate(map: &BuildMap) -> Vec<Violation> {
    let mut violations = Vec::new();
    let num_sectors = map.sectors.len();
    let num_walls = map.walls.len();
    let num_sprites = map.sprites.len();

    for (i, sector) in map.sectors.iter().enumerate() {
        let end = sector.wall_start as i32 + sector.wall_count as i32;
        if sector.wall_start < 0 || end > num_walls as i32 {
            violations.push(Violation::SectorWallRange {
                sector: i,
                wall_start: sector.wall_start,
                wall_count: sector.wall_count,
                total: num_walls,
            });
        }
    }

    for (i, wall) in map.walls.iter().enumerate() {
        for (side, index) in [
            (WallSide::Right, wall.next_wall_right),
            (WallSide::Left, wall.next_wall_left),
        ] {
            if !link_ok(index, num_walls) {
                violations.push(Violation::WallNextWall {
                    wall: i,
                    side,
                    index,
                    total: num_walls,
                });
            }
        }
        if !link_ok(wall.next_sector, num_sectors) {
            violations.push(Violation::WallNextSector {
                wall: i,
                index: wall.next_sector,
                total: num_sectors,
            });
        }
    }

    for (i, sprite) in map.sprites.iter().enumerate() {
        // Sprites outside of every sector are allowed
        if !link_ok(sprite.sector, num_sectors) {
            violations.push(Violation::SpriteSector {
                sprite: i,
                index: sprite.sector,
                total: num_sectors,
            });
        }
        if !link_ok(sprite.owner, num_sprites) {
            violations.push(Violation::SpriteOwner {
                sprite: i,
                index: sprite.owner,
                total: num_sprites,
            });
        }
    }

    if !link_ok(map.sector_start, num_sectors) {
        violations.push(Violation::StartSector {
            index: map.sector_start,
            total: num_sectors,
        });
    }

    violations
}
