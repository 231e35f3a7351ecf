use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Unknown cabin class: {0}")]
    UnknownCabinClass(String),

    #[error("Unknown cab type: {0}")]
    UnknownCabType(String),

    #[error("Unknown rental package: {0}")]
    UnknownRentalPackage(String),
}

/// Fare tier for a flight search.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CabinClass {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
    FirstClass,
}

impl CabinClass {
    pub const ALL: [CabinClass; 4] = [
        CabinClass::Economy,
        CabinClass::PremiumEconomy,
        CabinClass::Business,
        CabinClass::FirstClass,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CabinClass::Economy => "Economy",
            CabinClass::PremiumEconomy => "Premium Economy",
            CabinClass::Business => "Business",
            CabinClass::FirstClass => "First Class",
        }
    }

    /// Look up a class by its menu label. Unknown labels are rejected
    /// rather than stored as-is, so a stale or mistyped menu entry cannot
    /// land in a search request.
    pub fn from_label(label: &str) -> Result<Self, SelectionError> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == label)
            .ok_or_else(|| SelectionError::UnknownCabinClass(label.to_string()))
    }
}

/// Vehicle tier for cab bookings. The booking screens default to Standard,
/// not the first menu entry.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CabType {
    Economy,
    #[default]
    Standard,
    Premium,
    Luxury,
}

impl CabType {
    pub const ALL: [CabType; 4] = [
        CabType::Economy,
        CabType::Standard,
        CabType::Premium,
        CabType::Luxury,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CabType::Economy => "Economy",
            CabType::Standard => "Standard",
            CabType::Premium => "Premium",
            CabType::Luxury => "Luxury",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, SelectionError> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == label)
            .ok_or_else(|| SelectionError::UnknownCabType(label.to_string()))
    }
}

/// Hourly rental bundle for cab rentals.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RentalPackage {
    #[default]
    Hours4Km40,
    Hours8Km80,
    Hours12Km120,
    Hours24Km240,
}

impl RentalPackage {
    pub const ALL: [RentalPackage; 4] = [
        RentalPackage::Hours4Km40,
        RentalPackage::Hours8Km80,
        RentalPackage::Hours12Km120,
        RentalPackage::Hours24Km240,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RentalPackage::Hours4Km40 => "4 Hours / 40 KM",
            RentalPackage::Hours8Km80 => "8 Hours / 80 KM",
            RentalPackage::Hours12Km120 => "12 Hours / 120 KM",
            RentalPackage::Hours24Km240 => "24 Hours / 240 KM",
        }
    }

    pub fn hours(&self) -> u32 {
        match self {
            RentalPackage::Hours4Km40 => 4,
            RentalPackage::Hours8Km80 => 8,
            RentalPackage::Hours12Km120 => 12,
            RentalPackage::Hours24Km240 => 24,
        }
    }

    pub fn included_km(&self) -> u32 {
        self.hours() * 10
    }

    pub fn from_label(label: &str) -> Result<Self, SelectionError> {
        Self::ALL
            .into_iter()
            .find(|p| p.label() == label)
            .ok_or_else(|| SelectionError::UnknownRentalPackage(label.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(CabinClass::default(), CabinClass::Economy);
        assert_eq!(CabType::default(), CabType::Standard);
        assert_eq!(RentalPackage::default(), RentalPackage::Hours4Km40);
    }

    #[test]
    fn test_label_round_trip() {
        for class in CabinClass::ALL {
            assert_eq!(CabinClass::from_label(class.label()).unwrap(), class);
        }
        for cab in CabType::ALL {
            assert_eq!(CabType::from_label(cab.label()).unwrap(), cab);
        }
        for package in RentalPackage::ALL {
            assert_eq!(RentalPackage::from_label(package.label()).unwrap(), package);
        }
    }

    #[test]
    fn test_unknown_labels_rejected() {
        assert_eq!(
            CabinClass::from_label("Steerage"),
            Err(SelectionError::UnknownCabinClass("Steerage".to_string()))
        );
        assert!(CabType::from_label("").is_err());
        assert!(RentalPackage::from_label("48 Hours / 480 KM").is_err());
    }

    #[test]
    fn test_rental_package_metrics() {
        assert_eq!(RentalPackage::Hours8Km80.hours(), 8);
        assert_eq!(RentalPackage::Hours24Km240.included_km(), 240);
    }

    #[test]
    fn test_serde_representation() {
        let json = serde_json::to_string(&CabinClass::PremiumEconomy).unwrap();
        assert_eq!(json, r#""PREMIUM_ECONOMY""#);
        let back: CabinClass = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CabinClass::PremiumEconomy);
    }
}
