use crate::geo::Coordinate;

/// A single business address as read from the input table.
///
/// All fields are expected to be non-empty; checking that is the
/// job of whoever constructs the record from raw input.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct AddressRecord {
    street      : String,
    number      : String,
    postal_code : String,
    coordinate  : Option<Coordinate>,
}

impl AddressRecord {
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            number: number.into(),
            postal_code: postal_code.into(),
            coordinate: None,
        }
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    /// `"{street}, {number}, {postal_code}"`
    ///
    /// Used verbatim as geocoding query and cache key.
    pub fn full_address(&self) -> String {
        format!("{}, {}, {}", self.street, self.number, self.postal_code)
    }

    /// The resolved location, if any.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }

    #[must_use]
    pub fn with_coordinate(mut self, coordinate: Coordinate) -> Self {
        self.coordinate = Some(coordinate);
        self
    }
}
