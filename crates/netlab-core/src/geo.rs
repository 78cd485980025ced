//! Fixed campus geography for the map page.
//!
//! Everything here is static apart from [`FlyTo`]: two markers, one outlined
//! block, and the animated re-center the author rows trigger.

use crate::theme::Rgb;
use crate::tween::Tween;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

pub const MAP_CENTER: LatLon = LatLon {
    lat: 40.6315,
    lon: -8.6575,
};
pub const MAP_ZOOM: u8 = 16;

/// Zoom applied when an author row re-centers the map.
pub const FLY_TO_ZOOM: u8 = 18;
pub const FLY_TO_TARGET: LatLon = LatLon {
    lat: 40.6332,
    lon: -8.6595,
};
/// Ticks for one fly-to crossing.
pub const FLY_TO_TICKS: u32 = 20;

/// An animated re-center: center and zoom tween together toward a target.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyTo {
    lat: Tween,
    lon: Tween,
    zoom: Tween,
}

impl FlyTo {
    pub fn new(from: LatLon, from_zoom: f64, to: LatLon, to_zoom: f64) -> Self {
        Self {
            lat: Tween::new(from.lat, to.lat, FLY_TO_TICKS),
            lon: Tween::new(from.lon, to.lon, FLY_TO_TICKS),
            zoom: Tween::new(from_zoom, to_zoom, FLY_TO_TICKS),
        }
    }

    /// Advance one tick. Returns true on the tick that lands.
    pub fn tick(&mut self) -> bool {
        self.lat.tick();
        self.lon.tick();
        self.zoom.tick()
    }

    pub fn center(&self) -> LatLon {
        LatLon {
            lat: self.lat.value(),
            lon: self.lon.value(),
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom.value()
    }
}

/// A marker with its two-line popup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub position: LatLon,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const MARKERS: [Marker; 2] = [
    Marker {
        position: LatLon {
            lat: 40.6332,
            lon: -8.6595,
        },
        title: "DETI",
        subtitle: "Dept. of Electronics",
    },
    Marker {
        position: LatLon {
            lat: 40.6310,
            lon: -8.6575,
        },
        title: "UA Rectorate",
        subtitle: "Campus Santiago",
    },
];

/// Index into [`MARKERS`] of the marker whose popup the fly-to opens.
pub const DETI_MARKER: usize = 0;

/// Corners of the outlined department block, drawn as a closed loop.
pub const CAMPUS_OUTLINE: [LatLon; 4] = [
    LatLon {
        lat: 40.6335,
        lon: -8.6598,
    },
    LatLon {
        lat: 40.6335,
        lon: -8.6590,
    },
    LatLon {
        lat: 40.6328,
        lon: -8.6590,
    },
    LatLon {
        lat: 40.6328,
        lon: -8.6598,
    },
];

pub const OUTLINE_COLOR: Rgb = Rgb(0xff, 0x00, 0x00);

/// Rows in the authors box; clicking any of them flies to the department.
pub const AUTHORS: [&str; 2] = ["Miguel Santos", "Ana Ferreira"];
