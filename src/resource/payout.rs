//! Batch payout request and response shapes.

// self
use crate::{
	_prelude::*,
	resource::link::{Link, Relation, link_by_relation},
};

/// How a payout recipient is identified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecipientType {
	/// Recipient identified by email address.
	#[default]
	Email,
	/// Recipient identified by phone number.
	Phone,
	/// Recipient identified by PayPal account id.
	PaypalId,
}

/// Monetary amount of one payout instruction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoutAmount {
	/// Three-letter currency code.
	pub currency: String,
	/// Value as a decimal string, e.g. `"9.01"`.
	pub value: String,
}

/// Sender-created description of a payout to a single recipient.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutItem {
	/// How `receiver` identifies the recipient.
	pub recipient_type: RecipientType,
	/// Amount disbursed to the recipient.
	pub amount: PayoutAmount,
	/// Note shown to the recipient.
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub note: String,
	/// Recipient identifier matching `recipient_type`.
	pub receiver: String,
	/// Sender-chosen id for reconciling the item later.
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub sender_item_id: String,
}

/// Batch-level header describing the payout as a whole.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SenderBatchHeader {
	/// Subject of the notification email sent to recipients.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub email_subject: String,
	/// Default recipient type applied to items that omit one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub recipient_type: Option<RecipientType>,
	/// Sender-chosen id for the whole batch.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub sender_batch_id: String,
}

/// Request body disbursing funds to zero or more recipients in one batch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRequest {
	/// Batch-level header.
	pub sender_batch_header: SenderBatchHeader,
	/// Individual payout instructions.
	#[serde(default)]
	pub items: Vec<PayoutItem>,
}

/// Provider-side summary of a submitted batch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoutBatchHeader {
	/// Provider-assigned batch identifier.
	pub payout_batch_id: String,
	/// Batch processing state; server-authoritative, left opaque.
	pub batch_status: String,
	/// Echo of the sender-supplied header.
	pub sender_batch_header: SenderBatchHeader,
}

/// Response shape of the payout endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoutResponse {
	/// Summary of the accepted batch.
	pub batch_header: PayoutBatchHeader,
	/// Follow-up links for the batch resource.
	pub links: Vec<Link>,
}
impl PayoutResponse {
	/// Returns the first link carrying the requested relation, if any.
	pub fn link_by_relation(&self, relation: &Relation) -> Option<&Link> {
		link_by_relation(&self.links, relation)
	}
}
