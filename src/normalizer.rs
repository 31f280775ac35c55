//! Maps raw `/list-leads` records onto [`DisplayLead`].
//!
//! Deployments of the listing service disagree on field casing: the Go API
//! serializes its struct field names (`BusinessName`, `ZIPCode`, a
//! `{Time, Valid}` wrapper for `FoundationDate`), the typed front-end contract
//! uses camelCase, and some dumps use snake_case. Every output field therefore
//! carries a fixed list of source keys, tried in order. Keys outside the table
//! are ignored.

use crate::models::{DisplayLead, RawLeadRecord};
use chrono::{DateTime, NaiveDate};
use serde_json::Value;

/// Source keys for each display field, one entry per known wire shape.
pub struct LeadFieldMap {
    pub id: &'static [&'static str],
    pub business_name: &'static [&'static str],
    pub registered_name: &'static [&'static str],
    pub email: &'static [&'static str],
    pub phone: &'static [&'static str],
    pub whatsapp: &'static [&'static str],
    pub website: &'static [&'static str],
    pub instagram: &'static [&'static str],
    pub facebook: &'static [&'static str],
    pub tiktok: &'static [&'static str],
    pub company_registration_id: &'static [&'static str],
    pub address: &'static [&'static str],
    pub city: &'static [&'static str],
    pub state: &'static [&'static str],
    pub zip_code: &'static [&'static str],
    pub owner: &'static [&'static str],
    pub category: &'static [&'static str],
    pub rating: &'static [&'static str],
    pub description: &'static [&'static str],
    pub foundation_date: &'static [&'static str],
}

/// Shapes observed from the listing service so far.
pub const KNOWN_FIELDS: LeadFieldMap = LeadFieldMap {
    id: &["id", "ID", "Id"],
    business_name: &["businessName", "BusinessName", "business_name"],
    registered_name: &["registeredName", "RegisteredName", "registered_name"],
    email: &["email", "Email"],
    phone: &["phone", "Phone"],
    whatsapp: &["whatsapp", "Whatsapp", "WhatsApp"],
    website: &["website", "Website"],
    instagram: &["instagram", "Instagram"],
    facebook: &["facebook", "Facebook"],
    tiktok: &["tikTok", "TikTok", "tiktok", "tik_tok"],
    company_registration_id: &[
        "companyRegistrationID",
        "companyRegistrationId",
        "CompanyRegistrationID",
        "company_registration_id",
    ],
    address: &["address", "Address"],
    city: &["city", "City"],
    state: &["state", "State"],
    zip_code: &["zipCode", "ZIPCode", "ZipCode", "zip_code"],
    owner: &["owner", "Owner"],
    category: &["category", "Category"],
    rating: &["rating", "Rating"],
    description: &["description", "Description"],
    foundation_date: &["foundationDate", "FoundationDate", "foundation_date"],
};

/// Converts one raw record into a fully populated display lead. Never fails.
pub fn normalize(raw: &RawLeadRecord) -> DisplayLead {
    normalize_with(raw, &KNOWN_FIELDS)
}

pub fn normalize_with(raw: &RawLeadRecord, map: &LeadFieldMap) -> DisplayLead {
    DisplayLead {
        id: text(raw, map.id),
        business_name: text(raw, map.business_name),
        registered_name: text(raw, map.registered_name),
        email: text(raw, map.email),
        phone: text(raw, map.phone),
        whatsapp: text(raw, map.whatsapp),
        website: text(raw, map.website),
        instagram: text(raw, map.instagram),
        facebook: text(raw, map.facebook),
        tiktok: text(raw, map.tiktok),
        company_registration_id: text(raw, map.company_registration_id),
        address: text(raw, map.address),
        city: text(raw, map.city),
        state: text(raw, map.state),
        zip_code: text(raw, map.zip_code),
        owner: text(raw, map.owner),
        category: text(raw, map.category),
        rating: number(raw, map.rating),
        description: text(raw, map.description),
        foundation_date: date(raw, map.foundation_date),
    }
}

/// Normalizes a full listing, preserving order.
pub fn normalize_all(raws: &[RawLeadRecord]) -> Vec<DisplayLead> {
    raws.iter().map(normalize).collect()
}

fn first<'a>(raw: &'a RawLeadRecord, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| raw.get(key))
}

fn text(raw: &RawLeadRecord, keys: &[&str]) -> String {
    match first(raw, keys) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn number(raw: &RawLeadRecord, keys: &[&str]) -> f64 {
    let value = match first(raw, keys) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

fn date(raw: &RawLeadRecord, keys: &[&str]) -> String {
    match first(raw, keys) {
        Some(Value::String(s)) => plain_date(s),
        Some(Value::Object(wrapper)) => {
            let valid = wrapper
                .get("valid")
                .or_else(|| wrapper.get("Valid"))
                .and_then(Value::as_bool)
                .unwrap_or(true);
            if !valid {
                return String::new();
            }
            match wrapper.get("time").or_else(|| wrapper.get("Time")) {
                Some(Value::String(s)) => plain_date(s),
                _ => String::new(),
            }
        }
        _ => String::new(),
    }
}

/// Reduces a timestamp to `YYYY-MM-DD`; unrecognized text is kept verbatim.
fn plain_date(value: &str) -> String {
    let trimmed = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return ts.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Some(prefix) = trimmed.get(..10) {
        if let Ok(day) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
            return day.format("%Y-%m-%d").to_string();
        }
    }
    value.to_string()
}
