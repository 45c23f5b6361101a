//! Presentation-ready derived views.
//!
//! Every builder here is a pure function over a period-filtered slice of the
//! owned tables: no I/O, no shared state, no panics on empty input.

pub mod humidity;
pub mod solar_pivot;
pub mod temp_precip;
pub mod wind_rose;

use crate::views::humidity::HumidityRange;
use crate::views::solar_pivot::SolarPivot;
use crate::views::temp_precip::TempPrecipSeries;
use crate::views::wind_rose::WindRose;
use serde::Serialize;

/// Outcome of a view computation over a period slice.
///
/// Views that cannot shape a meaningful value from an empty slice return
/// [`ViewResult::NoData`] instead of raising or handing back an undefined
/// structure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ViewResult<T> {
    Ready(T),
    NoData,
}

impl<T> ViewResult<T> {
    pub fn is_no_data(&self) -> bool {
        matches!(self, ViewResult::NoData)
    }

    /// The computed view, `None` for the no-data case.
    pub fn ready(self) -> Option<T> {
        match self {
            ViewResult::Ready(view) => Some(view),
            ViewResult::NoData => None,
        }
    }

    pub fn as_ready(&self) -> Option<&T> {
        match self {
            ViewResult::Ready(view) => Some(view),
            ViewResult::NoData => None,
        }
    }
}

/// Which derived view to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViewKind {
    WindRose,
    SolarPivot,
    HumidityRange,
    TempPrecip,
}

/// A derived view tagged by kind, as produced by
/// [`crate::Klimastation::build_view`].
///
/// The wind rose and the temperature/precipitation series have well-defined
/// empty forms (all-zero histogram, empty series) and are therefore always
/// `Ready`; the other two carry an explicit no-data marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DerivedView {
    WindRose(WindRose),
    SolarPivot(ViewResult<SolarPivot>),
    HumidityRange(ViewResult<HumidityRange>),
    TempPrecip(TempPrecipSeries),
}
