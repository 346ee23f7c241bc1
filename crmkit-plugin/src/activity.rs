//! Activity party construction.
//!
//! Activity records (emails, phone calls, appointments) carry their
//! senders, recipients and organizers as lists of `activityparty` child
//! records. These helpers build the party records so plugins set the
//! list attributes in one call.

use crmkit_types::{AttributeValue, Entity, EntityReference, OptionValue};
use uuid::Uuid;

/// How a record participates in an activity.
///
/// Values are wire-significant: they match the platform's
/// `participationtypemask` option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticipationType {
    Sender = 1,
    ToRecipient = 2,
    CcRecipient = 3,
    BccRecipient = 4,
    RequiredAttendee = 5,
    OptionalAttendee = 6,
    Organizer = 7,
    Regarding = 8,
    Owner = 9,
    Resource = 10,
    Customer = 11,
}

impl ParticipationType {
    /// Returns the platform's `participationtypemask` value.
    #[must_use]
    pub const fn mask(self) -> i32 {
        self as i32
    }
}

/// Builds one `activityparty` record pointing at `party`.
#[must_use]
pub fn activity_party(participation: ParticipationType, party: &EntityReference) -> Entity {
    Entity::new("activityparty", Uuid::nil())
        .with_attribute("partyid", party.clone())
        .with_attribute(
            "participationtypemask",
            OptionValue::new(participation.mask()),
        )
}

/// Builds a party-list attribute value with every `party` under the same
/// participation type.
#[must_use]
pub fn activity_party_list(
    participation: ParticipationType,
    parties: &[EntityReference],
) -> AttributeValue {
    AttributeValue::Collection(
        parties
            .iter()
            .map(|party| activity_party(participation, party))
            .collect(),
    )
}
