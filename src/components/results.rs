//! Per-action result renderers: the display half of each ActionDescriptor.
//!
//! Renderers are pure functions of the settled body. A body lacking the
//! shape an action expects renders nothing rather than erroring.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use serde::Deserialize;
use serde_json::Value;

/// Values the service sometimes sends as one object, sometimes as a list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

/// `IsPartAvailable`: the body carries `IsAvailable` as a JSON-encoded
/// boolean (usually the string "true"/"false").
pub fn is_part_available(body: &Value) -> Option<Vec<Line<'static>>> {
    let available = match body.get("IsAvailable")? {
        Value::Bool(b) => *b,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };

    let (message, color) = if available {
        ("Available", Color::Green)
    } else {
        ("Not Available", Color::Red)
    };
    Some(vec![Line::from(Span::styled(
        format!(" {}", message),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))])
}

#[derive(Debug, Deserialize)]
struct PartListingsBody {
    #[serde(rename = "PartListings")]
    part_listings: PartListingsWrapper,
}

#[derive(Debug, Deserialize)]
struct PartListingsWrapper {
    #[serde(rename = "PartListings")]
    listings: OneOrMany<PartListing>,
}

#[derive(Debug, Deserialize)]
struct PartListing {
    #[serde(rename = "Company")]
    company: Company,
}

#[derive(Debug, Deserialize)]
struct Company {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "CompanyAddress", default)]
    address: Option<CompanyAddress>,
}

#[derive(Debug, Default, Deserialize)]
struct CompanyAddress {
    #[serde(rename = "Address1", default)]
    address1: Option<String>,
    #[serde(rename = "Address2", default)]
    address2: Option<String>,
    #[serde(rename = "City", default)]
    city: Option<String>,
    #[serde(rename = "StateProvince", default)]
    state_province: Option<String>,
    #[serde(rename = "PostalCode", default)]
    postal_code: Option<String>,
    #[serde(rename = "Country", default)]
    country: Option<String>,
}

impl CompanyAddress {
    /// Always four lines, matching the service's address block; a missing
    /// Address2 stays an empty line.
    fn lines(&self) -> [String; 4] {
        [
            self.address1.clone().unwrap_or_default(),
            self.address2.clone().unwrap_or_default(),
            format!(
                "{}, {} {}",
                self.city.clone().unwrap_or_default(),
                self.state_province.clone().unwrap_or_default(),
                self.postal_code.clone().unwrap_or_default()
            ),
            self.country.clone().unwrap_or_default(),
        ]
    }
}

/// `GetPartsAvailability`: one item per listing, the company name followed
/// by its address block. A single listing is treated as a one-element list.
pub fn parts_availability(body: &Value) -> Option<Vec<Line<'static>>> {
    let parsed: PartListingsBody = serde_json::from_value(body.clone()).ok()?;

    let mut lines = Vec::new();
    for listing in parsed.part_listings.listings.into_vec() {
        lines.push(Line::from(Span::styled(
            format!(" • {}", listing.company.name),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        if let Some(address) = listing.company.address {
            for text in address.lines() {
                lines.push(Line::from(Span::styled(
                    format!("    {}", text),
                    Style::default().fg(Color::Gray),
                )));
            }
        }
    }
    Some(lines)
}
