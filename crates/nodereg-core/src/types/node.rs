use serde::{Deserialize, Serialize};

use super::IpInfo;

/// Identity and location strings submitted for a VPN node
///
/// Field contents are passed through untouched; length limits are enforced
/// by the program, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDetails {
    /// Decentralized identifier of the node (e.g. `did:soon:...`)
    #[serde(default)]
    pub identity: String,

    /// Human-readable node name
    #[serde(default)]
    pub name: String,

    /// Public IP address
    #[serde(default)]
    pub ip_address: String,

    /// ISP descriptor
    #[serde(default)]
    pub isp_info: String,

    /// Region
    #[serde(default)]
    pub region: String,

    /// Location
    #[serde(default)]
    pub location: String,
}

impl NodeDetails {
    /// Names of fields that are still empty
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("identity", &self.identity),
            ("name", &self.name),
            ("ip_address", &self.ip_address),
            ("isp_info", &self.isp_info),
            ("region", &self.region),
            ("location", &self.location),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Fill empty network fields from an ipinfo lookup.
    ///
    /// Fields that already hold a value are left alone.
    pub fn fill_from_ip_info(&mut self, info: &IpInfo) {
        fill(&mut self.ip_address, info.ip.as_deref());
        fill(&mut self.isp_info, info.org.as_deref());
        fill(&mut self.region, info.country.as_deref());
        fill(&mut self.location, info.place().as_deref());
    }
}

fn fill(field: &mut String, value: Option<&str>) {
    if field.is_empty() {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            value.clone_into(field);
        }
    }
}

/// A node number together with the details submitted under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRegistration {
    /// Sequence number used in the record address seeds
    pub node_number: u64,

    /// Submitted strings
    #[serde(flatten)]
    pub details: NodeDetails,
}

impl NodeRegistration {
    /// Pair a node number with details
    #[must_use]
    pub const fn new(node_number: u64, details: NodeDetails) -> Self {
        Self {
            node_number,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip_info() -> IpInfo {
        IpInfo {
            ip: Some("203.0.113.7".into()),
            city: Some("Berlin".into()),
            region: Some("Berlin".into()),
            country: Some("DE".into()),
            loc: Some("52.5244,13.4105".into()),
            org: Some("AS3320 Deutsche Telekom AG".into()),
            postal: None,
            timezone: Some("Europe/Berlin".into()),
        }
    }

    #[test]
    fn missing_fields_lists_empty_ones() {
        let details = NodeDetails {
            identity: "did:x:1".into(),
            name: "N1".into(),
            ..NodeDetails::default()
        };
        assert_eq!(
            details.missing_fields(),
            vec!["ip_address", "isp_info", "region", "location"]
        );
    }

    #[test]
    fn fill_keeps_explicit_values() {
        let mut details = NodeDetails {
            ip_address: "10.0.0.1".into(),
            ..NodeDetails::default()
        };
        details.fill_from_ip_info(&ip_info());

        assert_eq!(details.ip_address, "10.0.0.1");
        assert_eq!(details.isp_info, "AS3320 Deutsche Telekom AG");
        assert_eq!(details.region, "DE");
        assert_eq!(details.location, "Berlin, Berlin");
        assert!(details.identity.is_empty());
    }

    #[test]
    fn registration_flattens_details() {
        let registration = NodeRegistration::new(
            7,
            NodeDetails {
                name: "N1".into(),
                ..NodeDetails::default()
            },
        );
        let json = serde_json::to_value(&registration).unwrap();
        assert_eq!(json["node_number"], 7);
        assert_eq!(json["name"], "N1");
    }
}
