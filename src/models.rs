use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

// ============ Search Form ============

/// Countries the search service accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    /// Brazil.
    #[default]
    Br,
    /// United States.
    Us,
    /// Canada.
    Ca,
}

impl Country {
    pub const ALL: [Country; 3] = [Country::Br, Country::Us, Country::Ca];

    /// Wire value sent as the `country` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Br => "br",
            Country::Us => "us",
            Country::Ca => "ca",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Country::Br => "Brasil",
            Country::Us => "Estados Unidos",
            Country::Ca => "Canadá",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "br" => Ok(Country::Br),
            "us" => Ok(Country::Us),
            "ca" => Ok(Country::Ca),
            other => Err(format!("Unknown country: {} (expected br, us or ca)", other)),
        }
    }
}

/// Form state for one search session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParameters {
    pub category: String,
    /// Postal code as typed by the user; may contain separators.
    pub postal_code: String,
    /// Search radius in meters.
    pub radius: u32,
    pub max_results: u32,
    pub country: Country,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            category: String::new(),
            postal_code: String::new(),
            radius: 3000,
            max_results: 5,
            country: Country::Br,
        }
    }
}

/// A single form-field change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEdit {
    Category(String),
    PostalCode(String),
    Radius(u32),
    MaxResults(u32),
    Country(Country),
}

impl SearchParameters {
    /// Applies one form edit. Values are stored as entered; the postal code is
    /// only normalized when a request is built.
    pub fn apply(&mut self, edit: FormEdit) {
        match edit {
            FormEdit::Category(category) => self.category = category,
            FormEdit::PostalCode(postal_code) => self.postal_code = postal_code,
            FormEdit::Radius(radius) => self.radius = radius,
            FormEdit::MaxResults(max_results) => self.max_results = max_results,
            FormEdit::Country(country) => self.country = country,
        }
    }
}

/// Strips every character that is not an ASCII digit.
pub fn normalize_postal_code(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Outbound `/start-search` query, built from the form at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub category_id: String,
    /// Digits-only postal code.
    pub zipcode_id: String,
    pub radius: u32,
    pub max_results: u32,
    pub country: Country,
}

impl SearchRequest {
    pub fn from_params(params: &SearchParameters) -> Self {
        let zipcode_id = normalize_postal_code(&params.postal_code);
        tracing::debug!(
            "Postal code '{}' normalized to '{}'",
            params.postal_code,
            zipcode_id
        );

        Self {
            category_id: params.category.clone(),
            zipcode_id,
            radius: params.radius,
            max_results: params.max_results,
            country: params.country,
        }
    }

    /// Query parameters in wire order.
    pub fn query_pairs(&self) -> [(&'static str, String); 5] {
        [
            ("category_id", self.category_id.clone()),
            ("zipcode_id", self.zipcode_id.clone()),
            ("radius", self.radius.to_string()),
            ("max_results", self.max_results.to_string()),
            ("country", self.country.as_str().to_string()),
        ]
    }
}

// ============ Status ============

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    #[default]
    None,
    Success,
    Error,
}

/// User-facing status line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStatus {
    pub message: String,
    pub kind: StatusKind,
}

impl SearchStatus {
    pub const SEARCH_IN_PROGRESS: &'static str = "Starting search...";
    pub const SEARCH_SUCCEEDED: &'static str = "Search completed successfully!";
    pub const SEARCH_REJECTED: &'static str = "Error starting search";
    pub const SEARCH_UNREACHABLE: &'static str = "Connection error with backend";
    pub const LIST_REJECTED: &'static str = "Error fetching leads";
    pub const LIST_UNREACHABLE: &'static str = "Connection error fetching leads";

    pub fn in_progress() -> Self {
        Self {
            message: Self::SEARCH_IN_PROGRESS.to_string(),
            kind: StatusKind::None,
        }
    }

    /// Success status carrying the server's response text verbatim.
    pub fn search_succeeded(body: &str) -> Self {
        Self {
            message: format!("{} {}", Self::SEARCH_SUCCEEDED, body),
            kind: StatusKind::Success,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            message: message.to_string(),
            kind: StatusKind::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == StatusKind::Success
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

// ============ Leads ============

/// Lead record exactly as returned by `/list-leads`.
///
/// The wire shape differs between deployments, so the record is kept as
/// untyped JSON and only interpreted by the normalizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawLeadRecord(pub Value);

impl RawLeadRecord {
    /// Value stored under `key`, treating JSON `null` as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }
}

/// Canonical lead shape shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayLead {
    pub id: String,
    pub business_name: String,
    pub registered_name: String,
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
    pub website: String,
    pub instagram: String,
    pub facebook: String,
    pub tiktok: String,
    pub company_registration_id: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub owner: String,
    pub category: String,
    pub rating: f64,
    pub description: String,
    /// Plain `YYYY-MM-DD` date, or empty.
    pub foundation_date: String,
}

impl DisplayLead {
    /// Labeled values in display order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.clone()),
            ("businessName", self.business_name.clone()),
            ("registeredName", self.registered_name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("whatsapp", self.whatsapp.clone()),
            ("website", self.website.clone()),
            ("instagram", self.instagram.clone()),
            ("facebook", self.facebook.clone()),
            ("tiktok", self.tiktok.clone()),
            ("companyRegistrationId", self.company_registration_id.clone()),
            ("address", self.address.clone()),
            ("city", self.city.clone()),
            ("state", self.state.clone()),
            ("zipCode", self.zip_code.clone()),
            ("owner", self.owner.clone()),
            ("category", self.category.clone()),
            ("rating", self.rating.to_string()),
            ("description", self.description.clone()),
            ("foundationDate", self.foundation_date.clone()),
        ]
    }
}
