use ferrous_numaddr_domain::parse_numeric_address_opt;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressReport {
    pub input: String,
    pub numeric: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<Vec<u8>>,
}

impl AddressReport {
    pub fn classify(input: &str) -> Self {
        match parse_numeric_address_opt(input) {
            Some(addr) => Self {
                input: input.to_string(),
                numeric: true,
                family: Some(addr.family().as_str()),
                canonical: Some(addr.to_canonical_string()),
                bytes: Some(addr.bytes().to_vec()),
            },
            None => Self {
                input: input.to_string(),
                numeric: false,
                family: None,
                canonical: None,
                bytes: None,
            },
        }
    }
}

pub fn render_text(reports: &[AddressReport], canonical: bool) -> String {
    let mut out = String::new();
    for report in reports {
        let _ = write!(out, "{}\t{}", report.input, report.family.unwrap_or("invalid"));
        if canonical {
            if let Some(rendered) = &report.canonical {
                let _ = write!(out, "\t{}", rendered);
            }
        }
        out.push('\n');
    }
    out
}

pub fn render_json(reports: &[AddressReport], canonical: bool) -> serde_json::Result<String> {
    if canonical {
        return serde_json::to_string_pretty(reports);
    }
    let stripped: Vec<AddressReport> = reports
        .iter()
        .cloned()
        .map(|report| AddressReport {
            canonical: None,
            ..report
        })
        .collect();
    serde_json::to_string_pretty(&stripped)
}
