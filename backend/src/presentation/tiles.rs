use crates::domain::entities::upload_records::UploadRecord;
use rand::Rng;
use std::f64::consts::PI;

pub const BOARD_SIZE: f64 = 360.0;
pub const TILE_FOOTPRINT: f64 = 112.0;
pub const TILE_COUNT: usize = INNER_TILES + OUTER_TILES;

const INNER_TILES: usize = 9;
const OUTER_TILES: usize = 8;
const INNER_GRID_SIZE: f64 = 240.0;
const INNER_PITCH: f64 = 80.0;
const JITTER: f64 = 10.0;
const DRIFT_RANGE: f64 = 8.0;

/// One decorative square on the board. Pixel offsets are relative to the
/// board's top-left corner; timings are in seconds.
#[derive(Debug, Clone)]
pub struct Tile {
    pub top: f64,
    pub left: f64,
    pub hue: u16,
    pub z_index: usize,
    pub drift_x: f64,
    pub drift_y: f64,
    pub drift_secs: f64,
    pub drift_delay_secs: f64,
    pub pulse_secs: f64,
    pub pulse_delay_secs: f64,
    pub shimmer_secs: f64,
    pub shimmer_delay_secs: f64,
    pub record: Option<UploadRecord>,
}

impl Tile {
    pub fn color(&self) -> String {
        format!("hsl({}, 70%, 60%)", self.hue)
    }
}

#[derive(Debug, Clone)]
pub struct TileLayout {
    pub tiles: Vec<Tile>,
}

impl TileLayout {
    /// Builds the 3x3 inner grid plus the outer ring, relaxes overlaps once,
    /// then pins the newest records onto the last tiles.
    pub fn generate<R: Rng>(rng: &mut R, records: &[UploadRecord]) -> Self {
        let mut tiles = Vec::with_capacity(TILE_COUNT);
        let inner_offset = (BOARD_SIZE - INNER_GRID_SIZE) / 2.0;

        for i in 0..INNER_TILES {
            let row = (i / 3) as f64;
            let col = (i % 3) as f64;
            let top = row * INNER_PITCH + jitter(rng) + inner_offset;
            let left = col * INNER_PITCH + jitter(rng) + inner_offset;
            tiles.push(random_tile(rng, top, left));
        }

        let radius = BOARD_SIZE / 2.0 - TILE_FOOTPRINT / 2.0;
        let center = BOARD_SIZE / 2.0 - TILE_FOOTPRINT / 2.0;
        for i in 0..OUTER_TILES {
            let angle = (i as f64 / OUTER_TILES as f64) * 2.0 * PI;
            let top = angle.sin() * radius + center + jitter(rng);
            let left = angle.cos() * radius + center + jitter(rng);
            tiles.push(random_tile(rng, top, left));
        }

        relax_overlaps(&mut tiles);

        for (tile, record) in tiles.iter_mut().rev().zip(records) {
            tile.record = Some(record.clone());
        }

        Self { tiles }
    }
}

fn random_tile<R: Rng>(rng: &mut R, top: f64, left: f64) -> Tile {
    Tile {
        top,
        left,
        hue: rng.gen_range(0..360),
        z_index: rng.gen_range(0..TILE_COUNT),
        drift_x: rng.gen_range(-DRIFT_RANGE..DRIFT_RANGE),
        drift_y: rng.gen_range(-DRIFT_RANGE..DRIFT_RANGE),
        drift_secs: rng.gen_range(3.0..7.0),
        drift_delay_secs: rng.gen_range(0.0..5.0),
        pulse_secs: rng.gen_range(5.0..7.0),
        pulse_delay_secs: rng.gen_range(0.0..5.0),
        shimmer_secs: rng.gen_range(5.0..7.0),
        shimmer_delay_secs: rng.gen_range(0.0..5.0),
        record: None,
    }
}

fn jitter<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(-JITTER..JITTER)
}

/// Single pass: every pair closer than one footprint is pushed apart by half
/// the deficit each, along the line joining them.
fn relax_overlaps(tiles: &mut [Tile]) {
    for i in 0..tiles.len() {
        for j in (i + 1)..tiles.len() {
            let dx = tiles[i].left - tiles[j].left;
            let dy = tiles[i].top - tiles[j].top;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance < TILE_FOOTPRINT {
                let angle = dy.atan2(dx);
                let push = (TILE_FOOTPRINT - distance) / 2.0;
                tiles[i].left += angle.cos() * push;
                tiles[i].top += angle.sin() * push;
                tiles[j].left -= angle.cos() * push;
                tiles[j].top -= angle.sin() * push;
            }
        }
    }
}
