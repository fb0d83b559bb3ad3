/// A point on the globe in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Returns `None` for non-finite or out-of-range degrees
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);

        valid.then_some(Self { lat, lon })
    }
}

/// A location field after resolution
///
/// Coordinates keep their raw text so the lexical fallback can still
/// compare them against a place name on the other side.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    Coordinate { point: Coordinate, raw: String },
    Text(String),
    Unresolved,
}

impl Location {
    /// Raw text usable for lexical comparison, if any
    pub fn raw(&self) -> Option<&str> {
        match self {
            Location::Coordinate { raw, .. } | Location::Text(raw) => {
                Some(raw.as_str()).filter(|s| !s.trim().is_empty())
            }
            Location::Unresolved => None,
        }
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Location::Coordinate { point, .. } => Some(*point),
            Location::Text(_) | Location::Unresolved => None,
        }
    }
}

/// Resolve a free-text location into a coordinate, a text token, or nothing
///
/// Never fails: anything that is not exactly `"<lat>,<lon>"` degrades to
/// [`Location::Text`], and empty input to [`Location::Unresolved`].
pub fn resolve_location(text: &str) -> Location {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Location::Unresolved;
    }

    match parse_coordinate(trimmed) {
        Some(point) => Location::Coordinate {
            point,
            raw: trimmed.to_string(),
        },
        None => Location::Text(trimmed.to_string()),
    }
}

/// Parse `"lat,lon"`; both halves must be decimal numbers
///
/// Stricter than a bare float parse: non-finite values and degrees outside
/// [-90, 90] / [-180, 180] are rejected, so `"91,10"` stays text.
pub fn parse_coordinate(text: &str) -> Option<Coordinate> {
    let mut parts = text.split(',');
    let lat = parts.next()?.trim().parse::<f64>().ok()?;
    let lon = parts.next()?.trim().parse::<f64>().ok()?;

    if parts.next().is_some() {
        return None;
    }

    Coordinate::new(lat, lon)
}
