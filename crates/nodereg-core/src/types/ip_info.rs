use serde::{Deserialize, Serialize};

/// Response from `ipinfo.io/json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IpInfo {
    /// Public IP address
    #[serde(default)]
    pub ip: Option<String>,

    /// City name
    #[serde(default)]
    pub city: Option<String>,

    /// Region/state name
    #[serde(default)]
    pub region: Option<String>,

    /// Two-letter country code
    #[serde(default)]
    pub country: Option<String>,

    /// "latitude,longitude"
    #[serde(default)]
    pub loc: Option<String>,

    /// Organization, usually "ASxxxx Name"
    #[serde(default)]
    pub org: Option<String>,

    /// Postal code
    #[serde(default)]
    pub postal: Option<String>,

    /// IANA timezone
    #[serde(default)]
    pub timezone: Option<String>,
}

impl IpInfo {
    /// Human-readable place: "city, region", falling back to city, then `loc`
    #[must_use]
    pub fn place(&self) -> Option<String> {
        match (self.city.as_deref(), self.region.as_deref()) {
            (Some(city), Some(region)) if !city.is_empty() && !region.is_empty() => {
                Some(format!("{city}, {region}"))
            }
            (Some(city), _) if !city.is_empty() => Some(city.to_string()),
            _ => self.loc.clone(),
        }
    }
}
