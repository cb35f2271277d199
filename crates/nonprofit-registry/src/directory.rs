//! Organization directory keyed by email and name

use tracing::debug;

use crate::list::{Iter, RecordList};
use crate::organization::{NonprofitCard, Organization, RegistrationForm, DEFAULT_CATEGORY};

/// Ordered list of organizations with keyed lookup and card projection.
///
/// Emails and names are not required to be unique; lookups and deletions
/// act on the first match in list order.
///
/// # Example
///
/// ```
/// use nonprofit_registry::{Organization, OrganizationDirectory};
///
/// let mut directory = OrganizationDirectory::new();
/// directory.append(
///     Organization::new("Hope Center")
///         .with_email("hope@example.com")
///         .with_location("Austin", "TX"),
/// );
///
/// let cards = directory.to_nonprofit_array();
/// assert_eq!(cards[0].mission, "Hope Center - Making a difference in Austin");
/// assert_eq!(cards[0].completion, 0);
///
/// assert!(directory.delete_by_email("hope@example.com"));
/// assert!(directory.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationDirectory {
    records: RecordList<Organization>,
}

impl OrganizationDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of organizations.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory holds no organizations.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add an organization at the end.
    pub fn append(&mut self, organization: Organization) {
        debug!(email = %organization.email, "appending organization");
        self.records.append(organization);
    }

    /// Add an organization at the front.
    pub fn prepend(&mut self, organization: Organization) {
        debug!(email = %organization.email, "prepending organization");
        self.records.prepend(organization);
    }

    /// Append a newly registered organization with registration defaults.
    pub fn register(&mut self, form: RegistrationForm, default_category: &str) -> &Organization {
        let organization = Organization::from_registration(form, default_category);
        debug!(
            email = %organization.email,
            name = %organization.organization_name,
            "registering organization"
        );
        self.records.append(organization)
    }

    /// First organization with the given contact email.
    pub fn find_by_email(&self, email: &str) -> Option<&Organization> {
        self.records.find_by(|org| org.email == email)
    }

    /// First organization with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&Organization> {
        self.records.find_by(|org| org.organization_name == name)
    }

    /// Mutable access to the first organization with the given email.
    pub fn find_by_email_mut(&mut self, email: &str) -> Option<&mut Organization> {
        self.records.find_mut_by(|org| org.email == email)
    }

    /// Remove the first organization with the given email.
    pub fn delete_by_email(&mut self, email: &str) -> bool {
        let removed = self.records.delete_by(|org| org.email == email);
        debug!(email, removed, "delete by email");
        removed
    }

    /// Remove every organization.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Borrowing iterator in list order.
    pub fn iter(&self) -> Iter<'_, Organization> {
        self.records.iter()
    }

    /// Copy the organizations out in list order.
    pub fn to_vec(&self) -> Vec<Organization> {
        self.records.to_vec()
    }

    /// Cards for the browse page, defaulting the category to "General".
    pub fn to_nonprofit_array(&self) -> Vec<NonprofitCard> {
        self.to_cards(DEFAULT_CATEGORY)
    }

    /// Cards for the browse page with a caller-chosen fallback category.
    pub fn to_cards(&self, default_category: &str) -> Vec<NonprofitCard> {
        self.records
            .iter()
            .enumerate()
            .map(|(position, org)| org.to_card(position, default_category))
            .collect()
    }

    /// The underlying record list.
    pub fn records(&self) -> &RecordList<Organization> {
        &self.records
    }
}

impl FromIterator<Organization> for OrganizationDirectory {
    fn from_iter<I: IntoIterator<Item = Organization>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<Organization> for OrganizationDirectory {
    fn extend<I: IntoIterator<Item = Organization>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl<'a> IntoIterator for &'a OrganizationDirectory {
    type Item = &'a Organization;
    type IntoIter = Iter<'a, Organization>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl From<RecordList<Organization>> for OrganizationDirectory {
    fn from(records: RecordList<Organization>) -> Self {
        Self { records }
    }
}
