use serde::Serialize;

/// Two-digit industry sector codes and their display names.
pub const INDUSTRIES: &[(&str, &str)] = &[
    ("11", "Agriculture, Forestry, Fishing and Hunting"),
    ("21", "Mining, Quarrying, and Oil and Gas Extraction"),
    ("22", "Utilities"),
    ("23", "Construction"),
    ("31", "Manufacturing"),
    ("42", "Wholesale Trade"),
    ("44", "Retail Trade"),
    ("48", "Transportation and Warehousing"),
    ("51", "Information"),
    ("52", "Finance and Insurance"),
    ("53", "Real Estate and Rental and Leasing"),
    ("54", "Professional, Scientific, and Technical Services"),
    ("55", "Management of Companies and Enterprises"),
    ("56", "Administrative and Support Services"),
    ("61", "Educational Services"),
    ("62", "Health Care and Social Assistance"),
    ("71", "Arts, Entertainment, and Recreation"),
    ("72", "Accommodation and Food Services"),
    ("81", "Other Services"),
    ("92", "Public Administration"),
];

#[derive(Debug, Clone, Serialize)]
pub struct IndustryRef {
    pub code: &'static str,
    pub name: &'static str,
}

pub fn industry_label(code: &str) -> Option<&'static str> {
    INDUSTRIES
        .iter()
        .find(|(c, _)| *c == code.trim())
        .map(|(_, name)| *name)
}

pub fn all_industries() -> Vec<IndustryRef> {
    INDUSTRIES
        .iter()
        .map(|(code, name)| IndustryRef { code, name })
        .collect()
}
