//! Organization records and their display projection
//!
//! One record schema covers both registration data (contact and address
//! fields) and browse data (mission, progress, category). Stored JSON uses
//! camelCase field names. Input is read leniently: the legacy `name` /
//! `numitem` keys are accepted, every field may be missing or null, and
//! numbers written by a browser (fractional, negative, out of range, or
//! quoted) are coerced rather than rejected.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Category shown for organizations that have not chosen one.
pub const DEFAULT_CATEGORY: &str = "General";

/// A registered organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawOrganization")]
pub struct Organization {
    /// Identifier assigned by the backing database, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Display name of the organization
    pub organization_name: String,

    /// Contact person's given name
    pub contact_first_name: String,

    /// Contact person's family name
    pub contact_last_name: String,

    /// Contact email, used as the lookup key
    pub email: String,

    /// Contact phone number
    pub phone: String,

    /// Street address
    pub address: String,

    /// City
    pub city: String,

    /// State or region
    pub state: String,

    /// Postal code
    pub zip_code: String,

    /// Preformatted location string, overriding city and state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Mission statement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,

    /// Wishlist completion percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion: Option<u8>,

    /// Number of wishlist items still needed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_needed: Option<u32>,

    /// Cause category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Account type label shown on cards
    #[serde(rename = "user_type", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
}

/// Stored organization as written by either page, before coercion.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawOrganization {
    id: Option<Value>,
    name: Option<Value>,
    organization_name: Option<Value>,
    contact_first_name: Option<Value>,
    contact_last_name: Option<Value>,
    email: Option<Value>,
    phone: Option<Value>,
    address: Option<Value>,
    city: Option<Value>,
    state: Option<Value>,
    zip_code: Option<Value>,
    location: Option<Value>,
    mission: Option<Value>,
    completion: Option<Value>,
    items_needed: Option<Value>,
    numitem: Option<Value>,
    category: Option<Value>,
    #[serde(rename = "user_type")]
    user_type: Option<Value>,
}

/// Strings as-is, numbers and booleans in their JSON spelling.
fn text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Finite numbers, including numeric strings.
fn number(value: Option<Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    n.filter(|n: &f64| n.is_finite())
}

impl From<RawOrganization> for Organization {
    fn from(raw: RawOrganization) -> Self {
        // `name` wins when present, matching what the browse page displays.
        let organization_name = text(raw.name)
            .filter(|s| !s.trim().is_empty())
            .or_else(|| text(raw.organization_name))
            .unwrap_or_default();

        Self {
            id: number(raw.id)
                .filter(|n| *n >= 1.0)
                .map(|n| n.round() as u64),
            organization_name,
            contact_first_name: text(raw.contact_first_name).unwrap_or_default(),
            contact_last_name: text(raw.contact_last_name).unwrap_or_default(),
            email: text(raw.email).unwrap_or_default(),
            phone: text(raw.phone).unwrap_or_default(),
            address: text(raw.address).unwrap_or_default(),
            city: text(raw.city).unwrap_or_default(),
            state: text(raw.state).unwrap_or_default(),
            zip_code: text(raw.zip_code).unwrap_or_default(),
            location: text(raw.location),
            mission: text(raw.mission),
            completion: number(raw.completion).map(|n| n.round().clamp(0.0, 100.0) as u8),
            items_needed: number(raw.items_needed)
                .or_else(|| number(raw.numitem))
                .map(|n| n.round().clamp(0.0, u32::MAX as f64) as u32),
            category: text(raw.category),
            user_type: text(raw.user_type),
        }
    }
}

/// The card shown for one organization on the browse page.
///
/// Every field is populated; missing record data is replaced by defaults
/// in [`Organization::to_card`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonprofitCard {
    /// Record id, or the 1-based list position when the record has none
    pub id: u64,
    /// Organization name
    pub name: String,
    /// "City, State" or the record's explicit location
    pub location: String,
    /// Mission statement
    pub mission: String,
    /// Completion percentage in `0..=100`
    pub completion: u8,
    /// Items still needed
    pub items_needed: u32,
    /// Cause category
    pub category: String,
    /// Account type label
    #[serde(rename = "user_type", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
}

/// Fields collected by the organization sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    /// Organization name
    pub organization_name: String,
    /// Contact given name
    pub contact_first_name: String,
    /// Contact family name
    pub contact_last_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Street address
    pub address: String,
    /// City
    pub city: String,
    /// State or region
    pub state: String,
    /// Postal code
    pub zip_code: String,
}

/// Mission text used when an organization has not written one.
pub fn default_mission(name: &str, city: &str) -> String {
    format!("{} - Making a difference in {}", name, city)
}

/// Join city and state, dropping the separator when either is blank.
pub fn format_location(city: &str, state: &str) -> String {
    match (city.trim(), state.trim()) {
        ("", state) => state.to_string(),
        (city, "") => city.to_string(),
        (city, state) => format!("{}, {}", city, state),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

impl Organization {
    /// Create a record with just a name; everything else is blank.
    pub fn new(organization_name: impl Into<String>) -> Self {
        Self {
            organization_name: organization_name.into(),
            ..Default::default()
        }
    }

    /// Set the contact email (builder pattern)
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set city and state (builder pattern)
    pub fn with_location(mut self, city: impl Into<String>, state: impl Into<String>) -> Self {
        self.city = city.into();
        self.state = state.into();
        self
    }

    /// Set the mission statement (builder pattern)
    pub fn with_mission(mut self, mission: impl Into<String>) -> Self {
        self.mission = Some(mission.into());
        self
    }

    /// Set the completion percentage (builder pattern)
    pub fn with_completion(mut self, completion: u8) -> Self {
        self.completion = Some(completion);
        self
    }

    /// Set the items-needed count (builder pattern)
    pub fn with_items_needed(mut self, items_needed: u32) -> Self {
        self.items_needed = Some(items_needed);
        self
    }

    /// Set the category (builder pattern)
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Build a freshly registered organization.
    ///
    /// Display fields start at their registration values: generated
    /// mission, zero completion, zero items, and `category`.
    pub fn from_registration(form: RegistrationForm, category: &str) -> Self {
        let mission = default_mission(&form.organization_name, &form.city);
        Self {
            id: None,
            organization_name: form.organization_name,
            contact_first_name: form.contact_first_name,
            contact_last_name: form.contact_last_name,
            email: form.email,
            phone: form.phone,
            address: form.address,
            city: form.city,
            state: form.state,
            zip_code: form.zip_code,
            location: None,
            mission: Some(mission),
            completion: Some(0),
            items_needed: Some(0),
            category: Some(category.to_string()),
            user_type: None,
        }
    }

    /// Project this record into a card.
    ///
    /// `position` is the record's zero-based index in its list and becomes
    /// the card id when the record has none. `default_category` fills a
    /// missing category.
    pub fn to_card(&self, position: usize, default_category: &str) -> NonprofitCard {
        let id = self
            .id
            .filter(|id| *id != 0)
            .unwrap_or(position as u64 + 1);

        let location = non_empty(&self.location)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| format_location(&self.city, &self.state));

        let mission = non_empty(&self.mission)
            .map(str::to_string)
            .unwrap_or_else(|| default_mission(&self.organization_name, &self.city));

        NonprofitCard {
            id,
            name: self.organization_name.clone(),
            location,
            mission,
            completion: self.completion.unwrap_or(0).min(100),
            items_needed: self.items_needed.unwrap_or(0),
            category: non_empty(&self.category)
                .unwrap_or(default_category)
                .to_string(),
            user_type: self.user_type.clone(),
        }
    }
}

impl From<RegistrationForm> for Organization {
    fn from(form: RegistrationForm) -> Self {
        Self::from_registration(form, DEFAULT_CATEGORY)
    }
}
