//! Robotics event records
//!
//! The case-tracking system receives a claim's legal history as events
//! grouped by category. Each event carries a business sequence number, a
//! category code, the date it was received and, where relevant, the party
//! it concerns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RoboticsError;

/// Litigious party id of the first applicant
pub const APPLICANT_ID: &str = "001";
/// Litigious party id of the first respondent
pub const RESPONDENT_ID: &str = "002";

/// Legal category of an event, serialized as its event code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EventType {
    Miscellaneous,
    AcknowledgementOfServiceReceived,
    ConsentExtensionFilingDefence,
    DefenceFiled,
    DefenceAndCounterClaim,
    ReceiptOfPartAdmission,
    ReceiptOfAdmission,
    ReplyToDefence,
    DirectionsQuestionnaireFiled,
}

impl EventType {
    pub const ALL: [EventType; 9] = [
        EventType::Miscellaneous,
        EventType::AcknowledgementOfServiceReceived,
        EventType::ConsentExtensionFilingDefence,
        EventType::DefenceFiled,
        EventType::DefenceAndCounterClaim,
        EventType::ReceiptOfPartAdmission,
        EventType::ReceiptOfAdmission,
        EventType::ReplyToDefence,
        EventType::DirectionsQuestionnaireFiled,
    ];

    /// Code the case-tracking system uses for this category
    pub fn code(self) -> &'static str {
        match self {
            EventType::Miscellaneous => "999",
            EventType::AcknowledgementOfServiceReceived => "38",
            EventType::ConsentExtensionFilingDefence => "45",
            EventType::DefenceFiled => "50",
            EventType::DefenceAndCounterClaim => "52",
            EventType::ReceiptOfPartAdmission => "60",
            EventType::ReceiptOfAdmission => "40",
            EventType::ReplyToDefence => "66",
            EventType::DirectionsQuestionnaireFiled => "197",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, RoboticsError> {
        EventType::ALL
            .into_iter()
            .find(|ty| ty.code() == code)
            .ok_or_else(|| RoboticsError::UnknownEventCode(code.to_string()))
    }

    /// Field name of the category in the serialized history
    pub fn field_name(self) -> &'static str {
        match self {
            EventType::Miscellaneous => "miscellaneous",
            EventType::AcknowledgementOfServiceReceived => "acknowledgementOfServiceReceived",
            EventType::ConsentExtensionFilingDefence => "consentExtensionFilingDefence",
            EventType::DefenceFiled => "defenceFiled",
            EventType::DefenceAndCounterClaim => "defenceAndCounterClaim",
            EventType::ReceiptOfPartAdmission => "receiptOfPartAdmission",
            EventType::ReceiptOfAdmission => "receiptOfAdmission",
            EventType::ReplyToDefence => "replyToDefence",
            EventType::DirectionsQuestionnaireFiled => "directionsQuestionnaireFiled",
        }
    }
}

impl TryFrom<String> for EventType {
    type Error = RoboticsError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        EventType::from_code(&code)
    }
}

impl From<EventType> for String {
    fn from(event_type: EventType) -> Self {
        event_type.code().to_string()
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Structured details attached to an event
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub misc_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_intention: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreed_extension_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_court_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stay_claim: Option<bool>,
}

/// One entry of the event history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_sequence: u32,
    pub event_code: EventType,
    pub date_received: NaiveDate,
    #[serde(rename = "litigiousPartyID", skip_serializing_if = "Option::is_none")]
    pub litigious_party_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_details: Option<EventDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_details_text: Option<String>,
}

impl Event {
    /// Creates an event of the given category
    pub fn new(event_type: EventType, sequence: u32, date_received: NaiveDate) -> Self {
        Self {
            event_sequence: sequence,
            event_code: event_type,
            date_received,
            litigious_party_id: None,
            event_details: None,
            event_details_text: None,
        }
    }

    /// Creates a miscellaneous event carrying free text
    pub fn miscellaneous(sequence: u32, date_received: NaiveDate, text: impl Into<String>) -> Self {
        Self::new(EventType::Miscellaneous, sequence, date_received).with_details(EventDetails {
            misc_text: Some(text.into()),
            ..Default::default()
        })
    }

    pub fn with_party(mut self, party_id: &str) -> Self {
        self.litigious_party_id = Some(party_id.to_string());
        self
    }

    pub fn with_details(mut self, details: EventDetails) -> Self {
        self.event_details = Some(details);
        self
    }

    pub fn with_details_text(mut self, text: impl Into<String>) -> Self {
        self.event_details_text = Some(text.into());
        self
    }

    pub fn event_type(&self) -> EventType {
        self.event_code
    }

    pub fn misc_text(&self) -> Option<&str> {
        self.event_details.as_ref().and_then(|details| details.misc_text.as_deref())
    }
}

/// Events of one claim, grouped by category
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventHistory {
    pub miscellaneous: Vec<Event>,
    pub acknowledgement_of_service_received: Vec<Event>,
    pub consent_extension_filing_defence: Vec<Event>,
    pub defence_filed: Vec<Event>,
    pub defence_and_counter_claim: Vec<Event>,
    pub receipt_of_part_admission: Vec<Event>,
    pub receipt_of_admission: Vec<Event>,
    pub reply_to_defence: Vec<Event>,
    pub directions_questionnaire_filed: Vec<Event>,
}

impl EventHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events of one category, in insertion order
    pub fn events(&self, event_type: EventType) -> &[Event] {
        match event_type {
            EventType::Miscellaneous => &self.miscellaneous,
            EventType::AcknowledgementOfServiceReceived => {
                &self.acknowledgement_of_service_received
            }
            EventType::ConsentExtensionFilingDefence => &self.consent_extension_filing_defence,
            EventType::DefenceFiled => &self.defence_filed,
            EventType::DefenceAndCounterClaim => &self.defence_and_counter_claim,
            EventType::ReceiptOfPartAdmission => &self.receipt_of_part_admission,
            EventType::ReceiptOfAdmission => &self.receipt_of_admission,
            EventType::ReplyToDefence => &self.reply_to_defence,
            EventType::DirectionsQuestionnaireFiled => &self.directions_questionnaire_filed,
        }
    }

    fn events_mut(&mut self, event_type: EventType) -> &mut Vec<Event> {
        match event_type {
            EventType::Miscellaneous => &mut self.miscellaneous,
            EventType::AcknowledgementOfServiceReceived => {
                &mut self.acknowledgement_of_service_received
            }
            EventType::ConsentExtensionFilingDefence => &mut self.consent_extension_filing_defence,
            EventType::DefenceFiled => &mut self.defence_filed,
            EventType::DefenceAndCounterClaim => &mut self.defence_and_counter_claim,
            EventType::ReceiptOfPartAdmission => &mut self.receipt_of_part_admission,
            EventType::ReceiptOfAdmission => &mut self.receipt_of_admission,
            EventType::ReplyToDefence => &mut self.reply_to_defence,
            EventType::DirectionsQuestionnaireFiled => &mut self.directions_questionnaire_filed,
        }
    }

    /// Appends an event to the category named by its code
    pub fn push(&mut self, event: Event) {
        self.events_mut(event.event_type()).push(event);
    }

    pub fn len(&self) -> usize {
        EventType::ALL.iter().map(|ty| self.events(*ty).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All events across categories, ordered by sequence number
    pub fn in_sequence(&self) -> Vec<(EventType, &Event)> {
        let mut all: Vec<(EventType, &Event)> = EventType::ALL
            .iter()
            .flat_map(|ty| self.events(*ty).iter().map(move |event| (*ty, event)))
            .collect();
        all.sort_by_key(|(_, event)| event.event_sequence);
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    #[test]
    fn test_event_takes_category_code() {
        let event = Event::new(EventType::DirectionsQuestionnaireFiled, 5, date());
        assert_eq!(event.event_type(), EventType::DirectionsQuestionnaireFiled);
        assert_eq!(event.event_code.code(), "197");
    }

    #[test]
    fn test_push_files_event_under_its_own_category() {
        let mut history = EventHistory::new();
        history.push(Event::new(EventType::ReplyToDefence, 6, date()));
        history.push(Event::miscellaneous(8, date(), "RPA Reason: Applicant proceeds"));

        assert_eq!(history.events(EventType::ReplyToDefence).len(), 1);
        assert_eq!(history.events(EventType::Miscellaneous).len(), 1);
        for (event_type, event) in history.in_sequence() {
            assert_eq!(event.event_type(), event_type);
        }
    }

    #[test]
    fn test_unknown_event_code_is_rejected() {
        let json = serde_json::json!({
            "eventSequence": 1,
            "eventCode": "123",
            "dateReceived": "2024-06-03"
        });
        assert!(serde_json::from_value::<Event>(json).is_err());
        assert_eq!(
            EventType::from_code("123"),
            Err(RoboticsError::UnknownEventCode("123".to_string()))
        );
        for ty in EventType::ALL {
            assert_eq!(EventType::from_code(ty.code()), Ok(ty));
        }
    }

    #[test]
    fn test_event_serialization() {
        let event = Event::new(EventType::DefenceFiled, 4, date()).with_party(RESPONDENT_ID);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "eventSequence": 4,
                "eventCode": "50",
                "dateReceived": "2024-06-03",
                "litigiousPartyID": "002"
            })
        );
    }

    #[test]
    fn test_in_sequence_orders_across_categories() {
        let mut history = EventHistory::new();
        history.push(Event::miscellaneous(5, date(), "later"));
        history.push(Event::new(EventType::ReceiptOfAdmission, 4, date()));
        history.push(Event::miscellaneous(1, date(), "first"));

        let sequences: Vec<u32> = history
            .in_sequence()
            .iter()
            .map(|(_, event)| event.event_sequence)
            .collect();
        assert_eq!(sequences, vec![1, 4, 5]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_field_names_match_serialization() {
        let json = serde_json::to_value(EventHistory::new()).unwrap();
        for ty in EventType::ALL {
            assert!(json.get(ty.field_name()).is_some(), "{ty} missing");
        }
    }
}
