use crate::error::{MapError, RecordKind};
use crate::reader::MapReader;
use crate::types::{MapHeader, Player, Sector, SectorPlane, Sprite, Vec2, Vec3, Wall};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// The largest array counts any Build engine revision will load (EDuke32 v8).
/// A declared count above these is treated as a corrupt or hostile file.
pub const MAX_SECTORS_V8: usize = 4096;
pub const MAX_WALLS_V8: usize = 16384;
pub const MAX_SPRITES_V8: usize = 16384;

/// Upper bounds on the declared record counts, checked before allocating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    pub max_sectors: usize,
    pub max_walls: usize,
    pub max_sprites: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        DecodeLimits {
            max_sectors: MAX_SECTORS_V8,
            max_walls: MAX_WALLS_V8,
            max_sprites: MAX_SPRITES_V8,
        }
    }
}

impl DecodeLimits {
    fn limit_for(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Sector => self.max_sectors,
            RecordKind::Wall => self.max_walls,
            RecordKind::Sprite => self.max_sprites,
        }
    }
}

/// A fully decoded MAP file. The index fields inside the records are kept as
/// plain integers in to the three arrays here, nothing is resolved or trusted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildMap {
    pub header: MapHeader,
    pub player: Player,
    /// The sector the player spawns in
    pub sector_start: i16,
    pub sectors: Vec<Sector>,
    pub walls: Vec<Wall>,
    pub sprites: Vec<Sprite>,
    /// Bytes left in the file after the sprite array
    pub trailing_bytes: usize,
}

impl BuildMap {
    /// Read the file at `path` in to memory and decode it with the default limits
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<BuildMap, MapError> {
        Self::from_file_with_limits(path, &DecodeLimits::default())
    }

    pub fn from_file_with_limits<P: AsRef<Path>>(
        path: P,
        limits: &DecodeLimits,
    ) -> Result<BuildMap, MapError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| MapError::IoUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {:?}", data.len(), path);
        Self::decode_with_limits(&data, limits)
    }

    pub fn decode(data: &[u8]) -> Result<BuildMap, MapError> {
        Self::decode_with_limits(data, &DecodeLimits::default())
    }

    /// Walk the bytes front to back. Every declared record must be present,
    /// and no partially filled map is ever returned.
    pub fn decode_with_limits(data: &[u8], limits: &DecodeLimits) -> Result<BuildMap, MapError> {
        let mut reader = MapReader::new(data);

        let header = MapHeader::new(reader.read_i32()?);
        if !header.is_known_version() {
            warn!("Unrecognised MAP version {}", header.version);
        }

        let player = Player {
            position: Vec3::new(reader.read_i32()?, reader.read_i32()?, reader.read_i32()?),
            angle: reader.read_i16()?,
        };
        let sector_start = reader.read_i16()?;

        let sectors = read_records(&mut reader, RecordKind::Sector, limits, read_sector)?;
        let walls = read_records(&mut reader, RecordKind::Wall, limits, read_wall)?;
        let sprites = read_records(&mut reader, RecordKind::Sprite, limits, read_sprite)?;

        let trailing_bytes = reader.remaining();
        if trailing_bytes > 0 {
            warn!("{} trailing bytes after the sprite array", trailing_bytes);
        }

        Ok(BuildMap {
            header,
            player,
            sector_start,
            sectors,
            walls,
            sprites,
            trailing_bytes,
        })
    }
}

/// Read a `u16` count followed by that many records
fn read_records<T, F>(
    reader: &mut MapReader,
    kind: RecordKind,
    limits: &DecodeLimits,
    func: F,
) -> Result<Vec<T>, MapError>
where
    F: Fn(&mut MapReader) -> Result<T, MapError>,
{
    let count = reader.read_u16()? as usize;
    let limit = limits.limit_for(kind);
    if count > limit {
        return Err(MapError::AllocationTooLarge { kind, count, limit });
    }
    debug!("Reading {} {} records at byte {}", count, kind, reader.position());

    let mut v = Vec::with_capacity(count);
    for _ in 0..count {
        v.push(func(reader)?);
    }
    Ok(v)
}

fn read_sector(r: &mut MapReader) -> Result<Sector, MapError> {
    let mut sector = Sector {
        wall_start: r.read_i16()?,
        wall_count: r.read_i16()?,
        ..Sector::default()
    };
    let mut ceiling = SectorPlane::default();
    let mut floor = SectorPlane::default();

    ceiling.z = r.read_i32()?;
    floor.z = r.read_i32()?;
    ceiling.stat = r.read_i16()?;
    floor.stat = r.read_i16()?;
    read_plane_surface(r, &mut ceiling)?;
    read_plane_surface(r, &mut floor)?;

    sector.ceiling = ceiling;
    sector.floor = floor;
    sector.visibility = r.read_u8()?;
    sector.filler = r.read_u8()?;
    sector.lotag = r.read_i16()?;
    sector.hitag = r.read_i16()?;
    sector.extra = r.read_i16()?;
    Ok(sector)
}

/// picnum, slope, shade, pal, panning: the run that repeats for ceiling then floor
fn read_plane_surface(r: &mut MapReader, plane: &mut SectorPlane) -> Result<(), MapError> {
    plane.picnum = r.read_i16()?;
    plane.heinum = r.read_i16()?;
    plane.shade = r.read_i8()?;
    plane.pal = r.read_u8()?;
    plane.panning = Vec2::new(r.read_u8()?, r.read_u8()?);
    Ok(())
}

fn read_wall(r: &mut MapReader) -> Result<Wall, MapError> {
    Ok(Wall {
        position: Vec2::new(r.read_i32()?, r.read_i32()?),
        next_wall_right: r.read_i16()?,
        next_wall_left: r.read_i16()?,
        next_sector: r.read_i16()?,
        stat: r.read_i16()?,
        picnum: r.read_i16()?,
        over_picnum: r.read_i16()?,
        shade: r.read_i8()?,
        pal: r.read_u8()?,
        repeat: Vec2::new(r.read_u8()?, r.read_u8()?),
        panning: Vec2::new(r.read_u8()?, r.read_u8()?),
        lotag: r.read_i16()?,
        hitag: r.read_i16()?,
        extra: r.read_i16()?,
    })
}

fn read_sprite(r: &mut MapReader) -> Result<Sprite, MapError> {
    Ok(Sprite {
        position: Vec3::new(r.read_i32()?, r.read_i32()?, r.read_i32()?),
        stat: r.read_i16()?,
        picnum: r.read_i16()?,
        shade: r.read_i8()?,
        pal: r.read_u8()?,
        clip_distance: r.read_u8()?,
        filler: r.read_u8()?,
        repeat: Vec2::new(r.read_u8()?, r.read_u8()?),
        offset: Vec2::new(r.read_i8()?, r.read_i8()?),
        sector: r.read_i16()?,
        status: r.read_i16()?,
        angle: r.read_i16()?,
        owner: r.read_i16()?,
        velocity: Vec3::new(r.read_i16()?, r.read_i16()?, r.read_i16()?),
        lotag: r.read_u16()?,
        hitag: r.read_u16()?,
        extra: r.read_i16()?,
    })
}
