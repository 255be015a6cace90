//! HATEOAS links and the relation lookup used to navigate follow-up actions.

// self
use crate::_prelude::*;

/// Named role a link plays relative to its parent resource.
///
/// Relations the server introduces after this release decode into
/// [`Relation::Other`] instead of failing, so navigation over known
/// relations keeps working against newer responses.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Relation {
	/// The resource the response describes.
	SelfLink,
	/// The originally created parent payment.
	ParentPayment,
	/// A completed sale attached to the payment.
	Sale,
	/// Executes and completes a payer-approved payment.
	Update,
	/// The original authorization for a captured payment.
	Authorization,
	/// Reauthorizes a previously authorized payment.
	Reauthorize,
	/// Captures an authorized but uncaptured payment.
	Capture,
	/// Voids an authorized payment.
	Void,
	/// Refunds a completed sale.
	Refund,
	/// Deletes a stored resource.
	Delete,
	/// Browser redirect where the payer approves the payment.
	ApprovalUrl,
	/// Relation not known to this release; carries the wire string.
	Other(String),
}
impl Relation {
	/// Returns the wire representation of the relation.
	pub fn as_str(&self) -> &str {
		match self {
			Relation::SelfLink => "self",
			Relation::ParentPayment => "parent_payment",
			Relation::Sale => "sale",
			Relation::Update => "update",
			Relation::Authorization => "authorization",
			Relation::Reauthorize => "reauthorize",
			Relation::Capture => "capture",
			Relation::Void => "void",
			Relation::Refund => "refund",
			Relation::Delete => "delete",
			Relation::ApprovalUrl => "approval_url",
			Relation::Other(raw) => raw,
		}
	}

	fn from_known(raw: &str) -> Option<Self> {
		let known = match raw {
			"self" => Relation::SelfLink,
			"parent_payment" => Relation::ParentPayment,
			"sale" => Relation::Sale,
			"update" => Relation::Update,
			"authorization" => Relation::Authorization,
			"reauthorize" => Relation::Reauthorize,
			"capture" => Relation::Capture,
			"void" => Relation::Void,
			"refund" => Relation::Refund,
			"delete" => Relation::Delete,
			"approval_url" => Relation::ApprovalUrl,
			_ => return None,
		};

		Some(known)
	}
}
impl From<String> for Relation {
	fn from(value: String) -> Self {
		Self::from_known(&value).unwrap_or(Self::Other(value))
	}
}
impl From<&str> for Relation {
	fn from(value: &str) -> Self {
		Self::from_known(value).unwrap_or_else(|| Self::Other(value.to_owned()))
	}
}
impl From<Relation> for String {
	fn from(value: Relation) -> Self {
		match value {
			Relation::Other(raw) => raw,
			known => known.as_str().to_owned(),
		}
	}
}
impl Display for Relation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// HTTP method (or pseudo-method) required to follow a link.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LinkMethod {
	/// Creates or acts upon the linked resource.
	Post,
	/// Reads the linked resource.
	Get,
	/// Removes the linked resource.
	Delete,
	/// Not an HTTP method: the payer's browser is redirected to the URL to
	/// approve the payment.
	Redirect,
	/// Method not known to this release; carries the wire string.
	Other(String),
}
impl LinkMethod {
	/// Returns the wire representation of the method.
	pub fn as_str(&self) -> &str {
		match self {
			LinkMethod::Post => "POST",
			LinkMethod::Get => "GET",
			LinkMethod::Delete => "DELETE",
			LinkMethod::Redirect => "REDIRECT",
			LinkMethod::Other(raw) => raw,
		}
	}

	fn from_known(raw: &str) -> Option<Self> {
		let known = match raw {
			"POST" => LinkMethod::Post,
			"GET" => LinkMethod::Get,
			"DELETE" => LinkMethod::Delete,
			"REDIRECT" => LinkMethod::Redirect,
			_ => return None,
		};

		Some(known)
	}
}
impl From<String> for LinkMethod {
	fn from(value: String) -> Self {
		Self::from_known(&value).unwrap_or(Self::Other(value))
	}
}
impl From<&str> for LinkMethod {
	fn from(value: &str) -> Self {
		Self::from_known(value).unwrap_or_else(|| Self::Other(value.to_owned()))
	}
}
impl From<LinkMethod> for String {
	fn from(value: LinkMethod) -> Self {
		match value {
			LinkMethod::Other(raw) => raw,
			known => known.as_str().to_owned(),
		}
	}
}
impl Display for LinkMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Follow-up action attached to a resource by the server.
///
/// Links are read-only projections of server state; the client only echoes
/// what responses carry and never fabricates them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
	/// Target URL of the action.
	pub href: String,
	/// Relation naming the action's role.
	pub rel: Relation,
	/// Method used to follow the link.
	pub method: LinkMethod,
}
impl Link {
	/// Parses the target into a [`Url`] for dereferencing.
	pub fn url(&self) -> Result<Url, url::ParseError> {
		Url::parse(&self.href)
	}
}

/// Returns the first link carrying the requested relation, if any.
///
/// An absent result is a valid outcome meaning the server does not currently
/// offer that transition; callers must not synthesize a URL in its place.
pub fn link_by_relation<'a>(links: &'a [Link], relation: &Relation) -> Option<&'a Link> {
	links.iter().find(|link| &link.rel == relation)
}
