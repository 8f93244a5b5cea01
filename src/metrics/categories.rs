//! Fixed remapping from register asset categories to the canonical
//! dashboard buckets.

/// Bucket for risks with no usable register category.
pub const UNCATEGORIZED_BUCKET: &str = "Other";

/// Known register categories and the dashboard bucket each collapses into.
/// Categories outside this table pass through unchanged as their own
/// bucket, since the field carries free-form historical data.
const CATEGORY_MAP: [(&str, &str); 15] = [
    ("Access Control", "Identity and Access"),
    ("Identity Management", "Identity and Access"),
    ("Privileged Access", "Identity and Access"),
    ("Cryptography", "Data Breach"),
    ("Data Protection", "Data Breach"),
    ("Information Classification", "Data Breach"),
    ("Network Security", "Service Disruption"),
    ("Operations Security", "Service Disruption"),
    ("Business Continuity", "Service Disruption"),
    ("Supplier Relationships", "Third-Party Exposure"),
    ("Cloud Services", "Third-Party Exposure"),
    ("Compliance", "Regulatory"),
    ("Legal", "Regulatory"),
    ("Physical and Environmental", "Physical Security"),
    ("Environmental Security", "Physical Security"),
];

/// Resolve a raw register category to its canonical bucket.
pub fn canonical_category(raw: Option<&str>) -> String {
    match raw {
        None => UNCATEGORIZED_BUCKET.to_string(),
        Some(name) if name.trim().is_empty() => UNCATEGORIZED_BUCKET.to_string(),
        Some(name) => CATEGORY_MAP
            .iter()
            .find(|(from, _)| *from == name)
            .map(|(_, to)| (*to).to_string())
            .unwrap_or_else(|| name.to_string()),
    }
}
