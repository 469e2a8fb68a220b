//! Public models for the collection-points module.

/// Category of recyclable material a point may accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i32,
    pub title: String,
    /// Image file name, served under `/uploads`.
    pub image: String,
}

/// Registered collection point.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    /// Stored image file name.
    pub image: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    /// Two-letter state code.
    pub uf: String,
    /// Street number.
    pub number: i32,
}

/// A point together with the items it accepts, in link order.
#[derive(Debug, Clone, PartialEq)]
pub struct PointDetails {
    pub point: Point,
    pub items: Vec<Item>,
}

/// Validated registration payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPoint {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub image: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
    pub number: i32,
    /// Distinct item ids, at least one.
    pub items: Vec<i32>,
}

/// Listing filter. All three parts are required; a point matches when it is
/// in `city`/`uf` and accepts at least one of `items`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointFilter {
    pub uf: String,
    pub city: String,
    pub items: Vec<i32>,
}
