//! The wind rose: hourly wind cross-tabulated into direction sectors and
//! speed bands.

use crate::types::hourly::HourlyAggregate;
use serde::Serialize;

/// The sixteen compass sectors of the rose, 22.5° each, counted clockwise
/// from north with left-inclusive/right-exclusive boundaries.
///
/// Labels follow the station's German compass naming (`O` for Ost/east),
/// including the source dashboard's idiosyncratic `WWS` and `WWN`, which
/// downstream assets match verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sector {
    N,
    Nno,
    No,
    Ono,
    O,
    Oso,
    So,
    Sso,
    S,
    Ssw,
    Sw,
    Wws,
    W,
    Wwn,
    Nw,
    Nnw,
}

impl Sector {
    /// All sectors in rose order, starting at north.
    pub const ALL: [Sector; 16] = [
        Sector::N,
        Sector::Nno,
        Sector::No,
        Sector::Ono,
        Sector::O,
        Sector::Oso,
        Sector::So,
        Sector::Sso,
        Sector::S,
        Sector::Ssw,
        Sector::Sw,
        Sector::Wws,
        Sector::W,
        Sector::Wwn,
        Sector::Nw,
        Sector::Nnw,
    ];

    /// Angular width of one sector.
    pub const WIDTH_DEG: f64 = 22.5;

    /// The sector containing `degrees`. Full turns wrap, so 360° (which the
    /// hourly rounding can produce) lands in `N` again; 22.5° opens `Nno`.
    pub fn from_degrees(degrees: f64) -> Sector {
        let wrapped = degrees.rem_euclid(360.0);
        let index = (wrapped / Self::WIDTH_DEG) as usize % Self::ALL.len();
        Self::ALL[index]
    }

    /// Zero-based position in rose order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The sector's display label.
    pub fn label(self) -> &'static str {
        match self {
            Sector::N => "N",
            Sector::Nno => "NNO",
            Sector::No => "NO",
            Sector::Ono => "ONO",
            Sector::O => "O",
            Sector::Oso => "OSO",
            Sector::So => "SO",
            Sector::Sso => "SSO",
            Sector::S => "S",
            Sector::Ssw => "SSW",
            Sector::Sw => "SW",
            Sector::Wws => "WWS",
            Sector::W => "W",
            Sector::Wwn => "WWN",
            Sector::Nw => "NW",
            Sector::Nnw => "NNW",
        }
    }
}

/// One speed band of the rose, left-inclusive/right-exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeedBand {
    pub label: &'static str,
    pub min_ms: f64,
    pub max_ms: f64,
}

impl SpeedBand {
    fn contains(&self, speed: f64) -> bool {
        speed >= self.min_ms && speed < self.max_ms
    }

    /// Index of the band containing `speed`, `None` outside every band.
    /// Hourly means at or above 3 m/s fall off the rose, as on the source
    /// dashboard.
    pub fn index_of(speed: f64) -> Option<usize> {
        SPEED_BANDS.iter().position(|band| band.contains(speed))
    }
}

/// The four speed bands in rose order.
pub const SPEED_BANDS: [SpeedBand; 4] = [
    SpeedBand {
        label: "0-0.2m/s",
        min_ms: 0.0,
        max_ms: 0.2,
    },
    SpeedBand {
        label: "0.2-0.5m/s",
        min_ms: 0.2,
        max_ms: 0.5,
    },
    SpeedBand {
        label: "0.5-1m/s",
        min_ms: 0.5,
        max_ms: 1.0,
    },
    SpeedBand {
        label: "1-3m/s",
        min_ms: 1.0,
        max_ms: 3.0,
    },
];

/// Complete wind-rose histogram: all 16 sectors × 4 speed bands with zero
/// cells present, in fixed order. Downstream rendering relies on the full
/// axes, so an empty period yields the all-zero rose rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindRose {
    /// `counts[sector][band]` in [`Sector::ALL`] / [`SPEED_BANDS`] order.
    counts: [[u32; 4]; 16],
}

impl WindRose {
    /// Cross-tabulates a slice of the hourly table.
    ///
    /// An hourly row is counted when direction and speed are both non-null
    /// and the speed falls inside a band.
    pub fn from_hourly(rows: &[HourlyAggregate]) -> WindRose {
        let mut counts = [[0u32; 4]; 16];
        for row in rows {
            if let (Some(dir), Some(speed)) = (row.wind_dir_deg, row.wind_speed_ms) {
                if let Some(band) = SpeedBand::index_of(speed) {
                    counts[Sector::from_degrees(dir).index()][band] += 1;
                }
            }
        }
        WindRose { counts }
    }

    /// Counts for one sector, in band order.
    pub fn sector_counts(&self, sector: Sector) -> [u32; 4] {
        self.counts[sector.index()]
    }

    /// All cells in fixed (sector, band counts) order.
    pub fn rows(&self) -> impl Iterator<Item = (Sector, [u32; 4])> + '_ {
        Sector::ALL
            .iter()
            .map(move |&sector| (sector, self.counts[sector.index()]))
    }

    /// Sum over all cells.
    pub fn total(&self) -> u32 {
        self.counts.iter().flatten().sum()
    }
}
