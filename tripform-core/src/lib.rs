pub mod counter;
pub mod dates;
pub mod segments;
pub mod selection;

pub use counter::{BoundedCounter, TravelerCounts, TravelerKind};
pub use dates::DateRange;
pub use segments::{SegmentField, SegmentList, TripSegment};
pub use selection::{CabType, CabinClass, RentalPackage, SelectionError};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Unknown selection label: {0}")]
    SelectionError(#[from] selection::SelectionError),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Parse a cabin-class menu label, lifting the failure into [`CoreError`].
pub fn parse_cabin_label(label: &str) -> CoreResult<CabinClass> {
    Ok(CabinClass::from_label(label)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cabin_label() {
        assert_eq!(parse_cabin_label("Business").unwrap(), CabinClass::Business);
        let err = parse_cabin_label("Cargo Hold").unwrap_err();
        assert!(matches!(err, CoreError::SelectionError(_)));
    }
}
