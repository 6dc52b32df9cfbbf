//! Labeled vector features
//!
//! A feature is a geometry paired with its attributes. Only one attribute,
//! the `name`, is ever consulted, so attributes are a fixed record with a
//! required field rather than an open-ended map.

use geo_types::{Geometry, Point, Polygon};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::geometry::GeometryProvider;

/// Attribute key holding the feature label
pub const NAME_KEY: &str = "name";

/// Feature attributes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attributes {
    /// Label identifying the feature in reports. Expected to be unique
    /// within one run; nothing here enforces it.
    pub name: String,
}

impl Attributes {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Build attributes from an open string map.
    ///
    /// Fails with [`Error::MissingAttribute`] when the `name` key is absent.
    /// Other keys are ignored.
    pub fn from_map(mut map: HashMap<String, String>) -> Result<Self> {
        map.remove(NAME_KEY)
            .map(|name| Self { name })
            .ok_or(Error::MissingAttribute(NAME_KEY))
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A geometry together with its attributes
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledGeometry<G = Geometry<f64>> {
    /// Feature geometry
    pub geometry: G,
    /// Feature attributes
    pub attributes: Attributes,
}

/// A labeled input location
pub type LabeledPoint = LabeledGeometry<Point<f64>>;

/// A labeled buffer polygon. Carries a copy of its source point's attributes.
pub type Buffer = LabeledGeometry<Polygon<f64>>;

impl<G> LabeledGeometry<G> {
    pub fn new(geometry: G, attributes: Attributes) -> Self {
        Self {
            geometry,
            attributes,
        }
    }

    /// Feature label
    pub fn name(&self) -> &str {
        &self.attributes.name
    }
}

/// Pair a geometry with a single `name` attribute.
///
/// Neither uniqueness nor non-emptiness of `name` is checked here.
pub fn make_labeled<G>(name: impl Into<String>, geometry: G) -> LabeledGeometry<G> {
    LabeledGeometry::new(geometry, Attributes::new(name))
}

/// An input site: a name and a longitude/latitude pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub name: String,
    pub lon: f64,
    pub lat: f64,
}

impl Site {
    pub fn new(name: impl Into<String>, lon: f64, lat: f64) -> Self {
        Self {
            name: name.into(),
            lon,
            lat,
        }
    }

    /// Build the labeled point for this site through `provider`.
    pub fn to_labeled<P: GeometryProvider>(&self, provider: &P) -> Result<LabeledPoint> {
        let point = provider.point(self.lon, self.lat)?;
        Ok(make_labeled(self.name.clone(), point))
    }
}

/// The reference data set: four hospitals around Tel Aviv.
pub fn reference_sites() -> Vec<Site> {
    vec![
        Site::new("Hospital A", 34.7818, 32.0853),
        Site::new("Hospital B", 34.8569, 32.1093),
        Site::new("Hospital C", 34.8964, 32.1495),
        Site::new("Hospital D", 34.9393, 32.0626),
    ]
}
