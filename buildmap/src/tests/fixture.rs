//! Builds MAP bytes in memory for the tests. Writing maps is not something
//! the crate does, so this lives only under `cfg(test)`.

use crate::types::{NO_INDEX, Player, Sector, Sprite, Vec2, Vec3, Wall};

#[derive(Debug, Clone)]
pub struct MapFixture {
    pub version: i32,
    pub player: Player,
    pub sector_start: i16,
    pub sectors: Vec<Sector>,
    pub walls: Vec<Wall>,
    pub sprites: Vec<Sprite>,
}

impl Default for MapFixture {
    fn default() -> Self {
        MapFixture {
            version: 7,
            player: Player::default(),
            sector_start: NO_INDEX,
            sectors: Vec::new(),
            walls: Vec::new(),
            sprites: Vec::new(),
        }
    }
}

impl MapFixture {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.version.to_le_bytes());
        let p = &self.player;
        put_i32(&mut out, &[p.position.x, p.position.y, p.position.z]);
        put_i16(&mut out, &[p.angle, self.sector_start]);

        out.extend_from_slice(&(self.sectors.len() as u16).to_le_bytes());
        for s in &self.sectors {
            put_i16(&mut out, &[s.wall_start, s.wall_count]);
            put_i32(&mut out, &[s.ceiling.z, s.floor.z]);
            put_i16(&mut out, &[s.ceiling.stat, s.floor.stat]);
            for plane in [&s.ceiling, &s.floor] {
                put_i16(&mut out, &[plane.picnum, plane.heinum]);
                out.extend_from_slice(&[
                    plane.shade as u8,
                    plane.pal,
                    plane.panning.x,
                    plane.panning.y,
                ]);
            }
            out.extend_from_slice(&[s.visibility, s.filler]);
            put_i16(&mut out, &[s.lotag, s.hitag, s.extra]);
        }

        out.extend_from_slice(&(self.walls.len() as u16).to_le_bytes());
        for w in &self.walls {
            put_i32(&mut out, &[w.position.x, w.position.y]);
            put_i16(
                &mut out,
                &[
                    w.next_wall_right,
                    w.next_wall_left,
                    w.next_sector,
                    w.stat,
                    w.picnum,
                    w.over_picnum,
                ],
            );
            out.extend_from_slice(&[
                w.shade as u8,
                w.pal,
                w.repeat.x,
                w.repeat.y,
                w.panning.x,
                w.panning.y,
            ]);
            put_i16(&mut out, &[w.lotag, w.hitag, w.extra]);
        }

        out.extend_from_slice(&(self.sprites.len() as u16).to_le_bytes());
        for s in &self.sprites {
            put_i32(&mut out, &[s.position.x, s.position.y, s.position.z]);
            put_i16(&mut out, &[s.stat, s.picnum]);
            out.extend_from_slice(&[
                s.shade as u8,
                s.pal,
                s.clip_distance,
                s.filler,
                s.repeat.x,
                s.repeat.y,
                s.offset.x as u8,
                s.offset.y as u8,
            ]);
            put_i16(
                &mut out,
                &[
                    s.sector,
                    s.status,
                    s.angle,
                    s.owner,
                    s.velocity.x,
                    s.velocity.y,
                    s.velocity.z,
                ],
            );
            out.extend_from_slice(&s.lotag.to_le_bytes());
            out.extend_from_slice(&s.hitag.to_le_bytes());
            put_i16(&mut out, &[s.extra]);
        }
        out
    }
}

fn put_i16(out: &mut Vec<u8>, values: &[i16]) {
    for v in values {
        out.extend_from_slice(&v.to_le_bytes());
    }
}

fn put_i32(out: &mut Vec<u8>, values: &[i32]) {
    for v in values {
        out.extend_from_slice(&v.to_le_bytes());
    }
}

/// A sprite in sector 0 with no owner
pub fn sprite(picnum: i16, lotag: u16, pal: u8) -> Sprite {
    Sprite {
        picnum,
        lotag,
        pal,
        sector: 0,
        owner: NO_INDEX,
        repeat: Vec2::new(64, 64),
        clip_distance: 32,
        ..Sprite::default()
    }
}

fn wall(x: i32, y: i32, next_wall_right: i16) -> Wall {
    Wall {
        position: Vec2::new(x, y),
        next_wall_right,
        next_wall_left: NO_INDEX,
        next_sector: NO_INDEX,
        repeat: Vec2::new(8, 8),
        ..Wall::default()
    }
}

fn room(wall_start: i16) -> Sector {
    let mut sector = Sector {
        wall_start,
        wall_count: 4,
        ..Sector::default()
    };
    sector.ceiling.z = -16384;
    sector.floor.z = 8192;
    sector
}

/// Two square rooms sharing the wall 1 / wall 7 portal, with a co-op start,
/// an end switch and a decoration
pub fn two_room_map() -> MapFixture {
    let mut walls = vec![
        wall(0, 0, 1),
        wall(1024, 0, 2),
        wall(1024, 1024, 3),
        wall(0, 1024, 0),
        wall(1024, 1024, 5),
        wall(2048, 1024, 6),
        wall(2048, 0, 7),
        wall(1024, 0, 4),
    ];
    walls[1].next_wall_left = 7;
    walls[1].next_sector = 1;
    walls[7].next_wall_left = 1;
    walls[7].next_sector = 0;

    let mut decoration = sprite(100, 0, 0);
    decoration.sector = 1;
    decoration.owner = 2;

    MapFixture {
        version: 7,
        player: Player {
            position: Vec3::new(1024, -512, 8192),
            angle: 1536,
        },
        sector_start: 0,
        sectors: vec![room(0), room(4)],
        walls,
        sprites: vec![sprite(1405, 1, 0), sprite(142, 65535, 0), decoration],
    }
}
