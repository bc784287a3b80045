//! Waterfall color lookup tables.

mod tables;

use bytemuck::{Pod, Zeroable};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

pub const TABLE_SIZE: usize = 256;

/// 8-bit RGB triple, laid out so rows can be handed to a texture upload as bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Pod, Zeroable)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    #[default]
    Gqrx,
    Turbo,
    Plasma,
    Viridis,
    Magma,
    Inferno,
    Grape,
    WhiteHot,
    WhiteHotCompressed,
    BlackHot,
}

impl Colormap {
    pub const ALL: [Colormap; 10] = [
        Colormap::Gqrx,
        Colormap::Turbo,
        Colormap::Plasma,
        Colormap::Viridis,
        Colormap::Magma,
        Colormap::Inferno,
        Colormap::Grape,
        Colormap::WhiteHot,
        Colormap::WhiteHotCompressed,
        Colormap::BlackHot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Colormap::Gqrx => "gqrx",
            Colormap::Turbo => "turbo",
            Colormap::Plasma => "plasma",
            Colormap::Viridis => "viridis",
            Colormap::Magma => "magma",
            Colormap::Inferno => "inferno",
            Colormap::Grape => "grape",
            Colormap::WhiteHot => "whitehot",
            Colormap::WhiteHotCompressed => "whitehotcompressed",
            Colormap::BlackHot => "blackhot",
        }
    }

    /// Shared, lazily built table for this scheme.
    pub fn table(self) -> Arc<ColorTable> {
        TableCache::global().get(self)
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColormap(pub String);

impl fmt::Display for UnknownColormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown colormap '{}'", self.0)
    }
}

impl std::error::Error for UnknownColormap {}

impl FromStr for Colormap {
    type Err = UnknownColormap;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Colormap::ALL
            .into_iter()
            .find(|map| map.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownColormap(s.to_owned()))
    }
}

/// 256 colors indexed by intensity, darkest first.
#[derive(Clone, PartialEq, Eq)]
pub struct ColorTable {
    colors: [Rgb; TABLE_SIZE],
}

impl ColorTable {
    pub fn build(colormap: Colormap) -> Self {
        let mut colors = [Rgb::BLACK; TABLE_SIZE];
        for (i, color) in colors.iter_mut().enumerate() {
            *color = match colormap {
                Colormap::Gqrx => gqrx_ramp(i as i32),
                Colormap::Turbo => from_bytes(tables::TURBO[i]),
                Colormap::Plasma => from_bytes(tables::PLASMA[i]),
                Colormap::Viridis => from_unit(tables::VIRIDIS[i]),
                Colormap::Magma => from_unit(tables::MAGMA[i]),
                Colormap::Inferno => from_unit(tables::INFERNO[i]),
                Colormap::Grape => from_unit(tables::GRAPE[i]),
                Colormap::WhiteHot => Rgb::gray(i as u8),
                Colormap::WhiteHotCompressed => {
                    if i < 64 {
                        Rgb::gray((i * 4) as u8)
                    } else {
                        Rgb::gray(u8::MAX)
                    }
                }
                Colormap::BlackHot => Rgb::gray(u8::MAX - i as u8),
            };
        }
        Self { colors }
    }

    #[inline]
    pub fn color(&self, index: u8) -> Rgb {
        self.colors[index as usize]
    }

    pub fn colors(&self) -> &[Rgb; TABLE_SIZE] {
        &self.colors
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }
}

impl fmt::Debug for ColorTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorTable")
            .field("first", &self.colors[0])
            .field("last", &self.colors[TABLE_SIZE - 1])
            .finish()
    }
}

// black, blue, light blue, yellow, red, white
fn gqrx_ramp(i: i32) -> Rgb {
    let (r, g, b) = match i {
        i32::MIN..20 => (0, 0, 0),
        20..70 => (0, 0, 140 * (i - 20) / 50),
        70..100 => (
            60 * (i - 70) / 30,
            125 * (i - 70) / 30,
            115 * (i - 70) / 30 + 140,
        ),
        100..150 => (
            195 * (i - 100) / 50 + 60,
            130 * (i - 100) / 50 + 125,
            255 - 255 * (i - 100) / 50,
        ),
        150..250 => (255, 255 - 255 * (i - 150) / 100, 0),
        _ => (255, 255 * (i - 250) / 5, 255 * (i - 250) / 5),
    };
    Rgb::new(channel(r), channel(g), channel(b))
}

fn channel(value: i32) -> u8 {
    value.clamp(0, u8::MAX as i32) as u8
}

fn from_bytes([r, g, b]: [u8; 3]) -> Rgb {
    Rgb::new(r, g, b)
}

fn from_unit([r, g, b]: [f32; 3]) -> Rgb {
    let scale = |v: f32| (v * TABLE_SIZE as f32).clamp(0.0, u8::MAX as f32) as u8;
    Rgb::new(scale(r), scale(g), scale(b))
}

struct TableCache {
    entries: RwLock<FxHashMap<Colormap, Arc<ColorTable>>>,
}

impl TableCache {
    fn global() -> &'static TableCache {
        static INSTANCE: OnceLock<TableCache> = OnceLock::new();
        INSTANCE.get_or_init(|| TableCache {
            entries: RwLock::new(FxHashMap::default()),
        })
    }

    fn get(&self, colormap: Colormap) -> Arc<ColorTable> {
        if let Some(existing) = self.entries.read().get(&colormap) {
            return Arc::clone(existing);
        }

        let mut write = self.entries.write();
        Arc::clone(
            write
                .entry(colormap)
                .or_insert_with(|| Arc::new(ColorTable::build(colormap))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitehot_is_a_gray_ramp() {
        let table = ColorTable::build(Colormap::WhiteHot);
        for i in 0..=255u8 {
            assert_eq!(table.color(i), Rgb::new(i, i, i));
        }
    }

    #[test]
    fn blackhot_inverts_whitehot() {
        let table = ColorTable::build(Colormap::BlackHot);
        assert_eq!(table.color(0), Rgb::new(255, 255, 255));
        assert_eq!(table.color(255), Rgb::BLACK);
    }

    #[test]
    fn compressed_whitehot_saturates_early() {
        let table = ColorTable::build(Colormap::WhiteHotCompressed);
        assert_eq!(table.color(10), Rgb::gray(40));
        assert_eq!(table.color(63), Rgb::gray(252));
        assert_eq!(table.color(64), Rgb::gray(255));
        assert_eq!(table.color(200), Rgb::gray(255));
    }

    #[test]
    fn gqrx_ramp_band_edges() {
        let table = ColorTable::build(Colormap::Gqrx);
        assert_eq!(table.color(0), Rgb::BLACK);
        assert_eq!(table.color(19), Rgb::BLACK);
        assert_eq!(table.color(70), Rgb::new(0, 0, 140));
        assert_eq!(table.color(100), Rgb::new(60, 125, 255));
        assert_eq!(table.color(150), Rgb::new(255, 255, 0));
        assert_eq!(table.color(250), Rgb::new(255, 0, 0));
        assert_eq!(table.color(255), Rgb::new(255, 255, 255));
    }

    #[test]
    fn every_scheme_fills_the_table() {
        for colormap in Colormap::ALL {
            let table = ColorTable::build(colormap);
            assert_eq!(table.colors().len(), TABLE_SIZE);
            assert_eq!(table.as_bytes().len(), TABLE_SIZE * 3);
        }
    }

    #[test]
    fn float_tables_scale_into_bytes() {
        let table = ColorTable::build(Colormap::Viridis);
        // 0.267004 * 256, 0.004874 * 256, 0.329415 * 256
        assert_eq!(table.color(0), Rgb::new(68, 1, 84));
        let last = table.color(255);
        assert!(last.r > 240 && last.g > 200);
    }

    #[test]
    fn names_resolve_case_insensitively() {
        assert_eq!("Turbo".parse::<Colormap>(), Ok(Colormap::Turbo));
        assert_eq!(
            "WHITEHOTCOMPRESSED".parse::<Colormap>(),
            Ok(Colormap::WhiteHotCompressed)
        );
        assert!("rainbow".parse::<Colormap>().is_err());
        for colormap in Colormap::ALL {
            assert_eq!(colormap.name().parse::<Colormap>(), Ok(colormap));
        }
    }

    #[test]
    fn cached_tables_are_shared() {
        let first = Colormap::Magma.table();
        let second = Colormap::Magma.table();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
