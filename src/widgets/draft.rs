use std::collections::BTreeSet;

use thiserror::Error;

pub const MESSAGE_LIMIT: usize = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Budget {
    Starter,
    Growth,
    Scale,
    Enterprise,
}

impl Budget {
    pub const ALL: [Budget; 4] = [Budget::Starter, Budget::Growth, Budget::Scale, Budget::Enterprise];

    /// Value sent to the intake service and used as the `<option>` value.
    pub fn value(&self) -> &'static str {
        match self {
            Budget::Starter => "$500-$1000",
            Budget::Growth => "$1000-$5000",
            Budget::Scale => "$5000-$10000",
            Budget::Enterprise => "$10000+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Budget::Starter => "💫 $500 - $1,000 / month",
            Budget::Growth => "🚀 $1,000 - $5,000 / month",
            Budget::Scale => "⚡ $5,000 - $10,000 / month",
            Budget::Enterprise => "👑 $10,000+ / month",
        }
    }

    pub fn from_value(value: &str) -> Option<Budget> {
        Budget::ALL.into_iter().find(|b| b.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Service {
    PerformanceMarketing,
    TechnicalSeo,
    CroDesign,
    Analytics,
}

impl Service {
    pub const CATALOG: [Service; 4] = [
        Service::PerformanceMarketing,
        Service::TechnicalSeo,
        Service::CroDesign,
        Service::Analytics,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Service::PerformanceMarketing => "Performance Marketing",
            Service::TechnicalSeo => "Technical SEO",
            Service::CroDesign => "CRO Design",
            Service::Analytics => "Analytics",
        }
    }

    pub fn from_label(label: &str) -> Option<Service> {
        Service::CATALOG.into_iter().find(|s| s.label() == label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Email,
    Budget,
    Message,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please select a budget range")]
    MissingBudget,
    #[error("Please tell us about your goals")]
    MissingMessage,
    #[error("Message must be at most 500 characters")]
    MessageTooLong,
}

/// In-progress contact form data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadFormDraft {
    pub name: String,
    pub email: String,
    pub budget: Option<Budget>,
    services: BTreeSet<Service>,
    message: String,
}

impl LeadFormDraft {
    pub fn services(&self) -> &BTreeSet<Service> {
        &self.services
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_empty(&self) -> bool {
        *self == LeadFormDraft::default()
    }

    /// Applies raw input from a form control. Budget values outside the
    /// catalog clear the selection; messages are cut at the length limit.
    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Email => self.email = value,
            DraftField::Budget => self.budget = Budget::from_value(&value),
            DraftField::Message => self.set_message(value),
        }
    }

    pub fn set_message(&mut self, value: String) {
        self.message = match value.char_indices().nth(MESSAGE_LIMIT) {
            Some((cut, _)) => value[..cut].to_string(),
            None => value,
        };
    }

    pub fn toggle_service(&mut self, service: Service) {
        if !self.services.remove(&service) {
            self.services.insert(service);
        }
    }

    pub fn has_service(&self, service: Service) -> bool {
        self.services.contains(&service)
    }

    /// Catalog labels of the selected services, joined for the intake form.
    pub fn services_joined(&self) -> String {
        self.services
            .iter()
            .map(Service::label)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        if self.budget.is_none() {
            return Err(ValidationError::MissingBudget);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::MissingMessage);
        }
        if self.message.chars().count() > MESSAGE_LIMIT {
            return Err(ValidationError::MessageTooLong);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = LeadFormDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LeadFormDraft {
        let mut draft = LeadFormDraft::default();
        draft.set_field(DraftField::Name, "Jane".into());
        draft.set_field(DraftField::Email, "jane@co.com".into());
        draft.set_field(DraftField::Budget, "$1000-$5000".into());
        draft.toggle_service(Service::TechnicalSeo);
        draft.set_field(DraftField::Message, "Help us rank".into());
        draft
    }

    #[test]
    fn message_is_truncated_not_rejected() {
        let mut draft = LeadFormDraft::default();
        draft.set_message("x".repeat(750));
        assert_eq!(draft.message().chars().count(), MESSAGE_LIMIT);

        // Multi-byte characters count as one each.
        draft.set_message("é".repeat(501));
        assert_eq!(draft.message().chars().count(), MESSAGE_LIMIT);

        draft.set_message("short".into());
        assert_eq!(draft.message(), "short");
    }

    #[test]
    fn toggling_a_service_twice_restores_the_set() {
        let mut draft = filled();
        let before = draft.services().clone();
        draft.toggle_service(Service::Analytics);
        assert!(draft.has_service(Service::Analytics));
        draft.toggle_service(Service::Analytics);
        assert_eq!(draft.services(), &before);
    }

    #[test]
    fn services_join_in_catalog_order() {
        let mut draft = LeadFormDraft::default();
        draft.toggle_service(Service::Analytics);
        draft.toggle_service(Service::PerformanceMarketing);
        assert_eq!(draft.services_joined(), "Performance Marketing, Analytics");
    }

    #[test]
    fn unknown_labels_are_not_in_the_catalog() {
        assert_eq!(Service::from_label("Technical SEO"), Some(Service::TechnicalSeo));
        assert_eq!(Service::from_label("Crypto Growth Hacking"), None);
        assert_eq!(Budget::from_value("$10000+"), Some(Budget::Enterprise));
        assert_eq!(Budget::from_value("free"), None);
    }

    #[test]
    fn validation_requires_core_fields() {
        assert_eq!(filled().validate(), Ok(()));

        let mut draft = filled();
        draft.name = "  ".into();
        assert_eq!(draft.validate(), Err(ValidationError::MissingName));

        let mut draft = filled();
        draft.email = "jane.co.com".into();
        assert_eq!(draft.validate(), Err(ValidationError::InvalidEmail));

        let mut draft = filled();
        draft.set_field(DraftField::Budget, String::new());
        assert_eq!(draft.validate(), Err(ValidationError::MissingBudget));

        let mut draft = filled();
        draft.set_message(String::new());
        assert_eq!(draft.validate(), Err(ValidationError::MissingMessage));
    }

    #[test]
    fn services_are_optional() {
        let mut draft = filled();
        draft.toggle_service(Service::TechnicalSeo);
        assert!(draft.services().is_empty());
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn clear_empties_the_draft() {
        let mut draft = filled();
        assert!(!draft.is_empty());
        draft.clear();
        assert!(draft.is_empty());
    }
}
