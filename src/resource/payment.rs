//! Payment, transaction, and sale resource shapes.

// self
use crate::{
	_prelude::*,
	resource::link::{Link, Relation, link_by_relation},
};

/// Intent of a payment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Intent {
	/// Immediate payment.
	#[default]
	Sale,
	/// Authorize now, capture later.
	Authorize,
	/// Create an order for later authorization and capture.
	Order,
	/// Intent not known to this release; carries the wire string.
	Other(String),
}
impl Intent {
	/// Returns the wire representation of the intent.
	pub fn as_str(&self) -> &str {
		match self {
			Intent::Sale => "sale",
			Intent::Authorize => "authorize",
			Intent::Order => "order",
			Intent::Other(raw) => raw,
		}
	}

	fn from_known(raw: &str) -> Option<Self> {
		let known = match raw {
			"sale" => Intent::Sale,
			"authorize" => Intent::Authorize,
			"order" => Intent::Order,
			_ => return None,
		};

		Some(known)
	}
}
impl From<String> for Intent {
	fn from(value: String) -> Self {
		Self::from_known(&value).unwrap_or(Self::Other(value))
	}
}
impl From<Intent> for String {
	fn from(value: Intent) -> Self {
		match value {
			Intent::Other(raw) => raw,
			known => known.as_str().to_owned(),
		}
	}
}

/// Funding method selected by the payer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
	/// PayPal wallet payment approved through the redirect flow.
	#[default]
	Paypal,
	/// Direct credit-card payment.
	CreditCard,
	/// Method not known to this release; carries the wire string.
	Other(String),
}
impl PaymentMethod {
	/// Returns the wire representation of the method.
	pub fn as_str(&self) -> &str {
		match self {
			PaymentMethod::Paypal => "paypal",
			PaymentMethod::CreditCard => "credit_card",
			PaymentMethod::Other(raw) => raw,
		}
	}

	fn from_known(raw: &str) -> Option<Self> {
		let known = match raw {
			"paypal" => PaymentMethod::Paypal,
			"credit_card" => PaymentMethod::CreditCard,
			_ => return None,
		};

		Some(known)
	}
}
impl From<String> for PaymentMethod {
	fn from(value: String) -> Self {
		Self::from_known(&value).unwrap_or(Self::Other(value))
	}
}
impl From<PaymentMethod> for String {
	fn from(value: PaymentMethod) -> Self {
		match value {
			PaymentMethod::Other(raw) => raw,
			known => known.as_str().to_owned(),
		}
	}
}

/// Shipping address echoed inside payer information.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingAddress {
	/// City name.
	pub city: String,
	/// Two-letter country code.
	pub country_code: String,
	/// First street address line.
	pub line1: String,
	/// Postal code.
	pub postal_code: String,
	/// Name of the person the shipment is addressed to.
	pub recipient_name: String,
	/// State or province.
	pub state: String,
}

/// Payer details populated by the provider once known.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayerInfo {
	/// Provider-assigned payer identifier, required to execute a payment.
	pub payer_id: String,
	/// Payer's first name.
	pub first_name: String,
	/// Payer's last name.
	pub last_name: String,
	/// Payer's email address.
	pub email: String,
	/// Shipping address, when the payer shared one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub shipping_address: Option<ShippingAddress>,
}

/// Source of funds for a payment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payer {
	/// Funding method the payer uses.
	pub payment_method: PaymentMethod,
	/// Payer details; absent in requests, filled in by responses.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub payer_info: Option<PayerInfo>,
	/// Payer approval status; server-authoritative, left opaque.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub status: String,
}

/// Amount breakdown details.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmountDetails {
	/// Subtotal of all item amounts.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub subtotal: String,
}

/// Monetary amount with its currency.
///
/// Values stay decimal strings exactly as the wire carries them; the client
/// performs no arithmetic on money.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Amount {
	/// Three-letter currency code.
	pub currency: String,
	/// Total as a decimal string, e.g. `"9.99"`.
	pub total: String,
	/// Optional breakdown of the total.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<AmountDetails>,
}

/// Fee charged by the provider for a sale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionFee {
	/// Three-letter currency code.
	pub currency: String,
	/// Fee as a decimal string.
	pub value: String,
}

/// Completed sale attached to a transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sale {
	/// Provider-assigned sale identifier.
	pub id: String,
	/// Amount settled by the sale.
	pub amount: Amount,
	/// Sale state; server-authoritative, left opaque.
	pub state: String,
	/// Follow-up links (refund, parent payment, self).
	pub links: Vec<Link>,
	/// Identifier of the payment the sale belongs to.
	pub parent_payment: String,
	/// Settlement mode; server-authoritative, left opaque.
	pub payment_mode: String,
	/// Seller-protection eligibility flag.
	pub protection_eligibility: String,
	/// Seller-protection eligibility detail.
	pub protection_eligibility_type: String,
	/// Provider fee taken from the sale, when reported.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub transaction_fee: Option<TransactionFee>,
	/// Creation timestamp as an opaque RFC 3339 string.
	pub create_time: String,
	/// Last-update timestamp as an opaque RFC 3339 string.
	pub update_time: String,
}
impl Sale {
	/// Returns the first link carrying the requested relation, if any.
	pub fn link_by_relation(&self, relation: &Relation) -> Option<&Link> {
		link_by_relation(&self.links, relation)
	}
}

/// Resource settled by a transaction, populated once processing happened.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedResource {
	/// Completed sale, for `sale`-intent payments.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sale: Option<Sale>,
}

/// One purchase unit within a payment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
	/// Amount of the purchase unit.
	pub amount: Amount,
	/// Free-text description shown to the payer.
	#[serde(skip_serializing_if = "String::is_empty")]
	pub description: String,
	/// Settled resources attached by the provider.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub related_resources: Vec<RelatedResource>,
}

/// Redirect targets for the payer-approval flow.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectUrls {
	/// Where the payer lands after cancelling.
	pub cancel_url: String,
	/// Where the payer lands after approving.
	pub return_url: String,
}

/// Payment resource as returned by create, execute, and list calls.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payment {
	/// Provider-assigned payment identifier.
	pub id: String,
	/// Intent of the payment.
	pub intent: Intent,
	/// Payment state; server-authoritative, left opaque.
	pub state: String,
	/// Source of funds.
	pub payer: Payer,
	/// Purchase units of the payment.
	pub transactions: Vec<Transaction>,
	/// Follow-up links describing the valid next actions.
	pub links: Vec<Link>,
	/// Creation timestamp as an opaque RFC 3339 string.
	pub create_time: String,
	/// Last-update timestamp as an opaque RFC 3339 string.
	pub update_time: String,
}
impl Payment {
	/// Returns the first link carrying the requested relation, if any.
	pub fn link_by_relation(&self, relation: &Relation) -> Option<&Link> {
		link_by_relation(&self.links, relation)
	}
}

/// Response shape of the payment list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentListResponse {
	/// Number of payments in this page.
	pub count: u32,
	/// Payments visible to the application.
	pub payments: Vec<Payment>,
}

/// Request body for creating a payment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCreateRequest {
	/// Intent of the payment, `sale` for immediate settlement.
	pub intent: Intent,
	/// Source of funds; `paypal` payments only need the method set.
	pub payer: Payer,
	/// Redirect targets for the approval flow.
	pub redirect_urls: RedirectUrls,
	/// Purchase units; at least one is required by the provider.
	pub transactions: Vec<Transaction>,
}

/// Request body for executing a payer-approved payment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentExecuteRequest {
	/// Payer identifier returned to the `return_url` after approval.
	pub payer_id: String,
}
