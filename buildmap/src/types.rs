//! Structures, in MAP order
//!  - [X] Header
//!  - [X] Player
//!  - [X] Sector
//!  - [X] Wall
//!  - [X] Sprite

/// Sentinel used by every index field for "no relation"
pub const NO_INDEX: i16 = -1;

/// Generic pair used for positions, panning, repeats and offsets
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vec2<T> {
    pub fn new(x: T, y: T) -> Vec2<T> {
        Vec2 { x, y }
    }
}

/// Generic triple used for positions and velocities
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vec3<T> {
    pub fn new(x: T, y: T, z: T) -> Vec3<T> {
        Vec3 { x, y, z }
    }
}

/// The versions this crate knows the layout of. Anything else is still decoded
/// with the same layout and reported as unrecognised.
pub const KNOWN_VERSIONS: [(i32, &str); 2] = [
    (7, "Build v7 (Duke Nukem 3D, Shadow Warrior, Redneck Rampage)"),
    (8, "Build v8 (EDuke32 extended limits)"),
];

/// First four bytes of the file
///
/// | Field Size | Data Type | Content        |
/// |------------|-----------|----------------|
/// |  0x00-0x03 |    i32    | Format version |
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MapHeader {
    pub version: i32,
}

impl MapHeader {
    pub fn new(version: i32) -> MapHeader {
        MapHeader { version }
    }

    /// Human name of the version if it is one of `KNOWN_VERSIONS`
    pub fn version_name(&self) -> Option<&'static str> {
        KNOWN_VERSIONS
            .iter()
            .find(|(v, _)| *v == self.version)
            .map(|(_, name)| *name)
    }

    pub fn is_known_version(&self) -> bool {
        self.version_name().is_some()
    }
}

/// Where the player spawns in single player
///
/// | Field Size | Data Type | Content    |
/// |------------|-----------|------------|
/// |  0x04-0x07 |    i32    | X Position |
/// |  0x08-0x0b |    i32    | Y Position |
/// |  0x0c-0x0f |    i32    | Z Position |
/// |  0x10-0x11 |    i16    | Angle      |
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub position: Vec3<i32>,
    /// Build angle, 2048 units to a full turn
    pub angle: i16,
}

/// The ceiling or floor half of a sector. The file interleaves the two halves
/// so the decoder fills both at once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SectorPlane {
    /// Z height, larger is lower
    pub z: i32,
    pub stat: i16,
    pub picnum: i16,
    /// Slope, only used when bit 1 of `stat` is set
    pub heinum: i16,
    pub shade: i8,
    pub pal: u8,
    pub panning: Vec2<u8>,
}

/// A `Sector` is a floor and ceiling over the loop(s) of walls it owns.
///
/// The data is structured as follows:
///
/// | Field Size | Data Type | Content                    |
/// |------------|-----------|----------------------------|
/// |  0x00-0x01 |    i16    | Index of first wall        |
/// |  0x02-0x03 |    i16    | Number of walls            |
/// |  0x04-0x07 |    i32    | Ceiling Z                  |
/// |  0x08-0x0b |    i32    | Floor Z                    |
/// |  0x0c-0x0d |    i16    | Ceiling stat               |
/// |  0x0e-0x0f |    i16    | Floor stat                 |
/// |  0x10-0x11 |    i16    | Ceiling picnum             |
/// |  0x12-0x13 |    i16    | Ceiling slope              |
/// |  0x14      |    i8     | Ceiling shade              |
/// |  0x15      |    u8     | Ceiling palette            |
/// |  0x16-0x17 |   2 u8    | Ceiling X, Y panning       |
/// |  0x18-0x19 |    i16    | Floor picnum               |
/// |  0x1a-0x1b |    i16    | Floor slope                |
/// |  0x1c      |    i8     | Floor shade                |
/// |  0x1d      |    u8     | Floor palette              |
/// |  0x1e-0x1f |   2 u8    | Floor X, Y panning         |
/// |  0x20      |    u8     | Visibility                 |
/// |  0x21      |    u8     | Filler                     |
/// |  0x22-0x23 |    i16    | Lotag                      |
/// |  0x24-0x25 |    i16    | Hitag                      |
/// |  0x26-0x27 |    i16    | Extra                      |
///
/// Each `Sector` record is 40 bytes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sector {
    /// Index in to the wall array of the first wall owned by this sector
    pub wall_start: i16,
    /// The sector owns `[wall_start, wall_start + wall_count)`
    pub wall_count: i16,
    pub ceiling: SectorPlane,
    pub floor: SectorPlane,
    pub visibility: u8,
    pub filler: u8,
    pub lotag: i16,
    pub hitag: i16,
    pub extra: i16,
}

impl Sector {
    pub const SIZE: usize = 40;
}

/// A `Wall` is the segment from its own point to the point of `next_wall_right`.
///
/// The data is structured as follows:
///
/// | Field Size | Data Type | Content                                   |
/// |------------|-----------|-------------------------------------------|
/// |  0x00-0x07 |   2 i32   | X, Y position                             |
/// |  0x08-0x09 |    i16    | Next wall going right (point2)            |
/// |  0x0a-0x0b |    i16    | Wall on the other side ( -1 when solid )  |
/// |  0x0c-0x0d |    i16    | Sector on the other side ( -1 when solid )|
/// |  0x0e-0x0f |    i16    | Stat                                      |
/// |  0x10-0x11 |    i16    | Picnum                                    |
/// |  0x12-0x13 |    i16    | Over picnum (masked walls)                |
/// |  0x14      |    i8     | Shade                                     |
/// |  0x15      |    u8     | Palette                                   |
/// |  0x16-0x17 |   2 u8    | X, Y repeat                               |
/// |  0x18-0x19 |   2 u8    | X, Y panning                              |
/// |  0x1a-0x1b |    i16    | Lotag                                     |
/// |  0x1c-0x1d |    i16    | Hitag                                     |
/// |  0x1e-0x1f |    i16    | Extra                                     |
///
/// Each `Wall` record is 32 bytes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    pub position: Vec2<i32>,
    pub next_wall_right: i16,
    pub next_wall_left: i16,
    /// A wall with a next sector is a portal
    pub next_sector: i16,
    pub stat: i16,
    pub picnum: i16,
    pub over_picnum: i16,
    pub shade: i8,
    pub pal: u8,
    pub repeat: Vec2<u8>,
    pub panning: Vec2<u8>,
    pub lotag: i16,
    pub hitag: i16,
    pub extra: i16,
}

impl Wall {
    pub const SIZE: usize = 32;

    pub fn is_portal(&self) -> bool {
        self.next_sector != NO_INDEX
    }
}

/// Every entity placed in the level: decorations, enemies, pickups and the
/// engine markers such as player starts and end switches.
///
/// The data is structured as follows:
///
/// | Field Size | Data Type | Content               |
/// |------------|-----------|-----------------------|
/// |  0x00-0x0b |   3 i32   | X, Y, Z position      |
/// |  0x0c-0x0d |    i16    | Stat                  |
/// |  0x0e-0x0f |    i16    | Picnum                |
/// |  0x10      |    i8     | Shade                 |
/// |  0x11      |    u8     | Palette               |
/// |  0x12      |    u8     | Clipping distance     |
/// |  0x13      |    u8     | Filler                |
/// |  0x14-0x15 |   2 u8    | X, Y repeat           |
/// |  0x16-0x17 |   2 i8    | X, Y offset           |
/// |  0x18-0x19 |    i16    | Sector                |
/// |  0x1a-0x1b |    i16    | Status                |
/// |  0x1c-0x1d |    i16    | Angle                 |
/// |  0x1e-0x1f |    i16    | Owner                 |
/// |  0x20-0x25 |   3 i16   | X, Y, Z velocity      |
/// |  0x26-0x27 |    u16    | Lotag                 |
/// |  0x28-0x29 |    u16    | Hitag                 |
/// |  0x2a-0x2b |    i16    | Extra                 |
///
/// Each `Sprite` record is 44 bytes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub position: Vec3<i32>,
    pub stat: i16,
    pub picnum: i16,
    pub shade: i8,
    pub pal: u8,
    pub clip_distance: u8,
    pub filler: u8,
    pub repeat: Vec2<u8>,
    pub offset: Vec2<i8>,
    pub sector: i16,
    pub status: i16,
    pub angle: i16,
    pub owner: i16,
    pub velocity: Vec3<i16>,
    /// Unsigned so the end switch sentinels 65534 and 65535 are reachable
    pub lotag: u16,
    pub hitag: u16,
    pub extra: i16,
}

impl Sprite {
    pub const SIZE: usize = 44;
}
