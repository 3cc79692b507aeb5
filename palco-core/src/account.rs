//! Account types.
//!
//! An account is one registered person: a participant who attends events or
//! an organizer who lists them. The account kind decides which dashboard and
//! which operations apply; everything else is profile data.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::merge::{merge_field, merge_optional};

/// A registered account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub username: Option<String>,
    /// Unique across accounts, checked at registration only.
    pub email: String,
    pub phone: Option<String>,
    pub document_kind: Option<DocumentKind>,
    pub document_number: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub kind: AccountKind,
    pub profile_image: Option<String>,
    pub page_url: Option<String>,
    pub bio: Option<String>,
}

/// The two account classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Participant,
    Organizer,
}

/// Taxpayer document kinds accepted at signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Cpf,
    Cnpj,
}

/// Registration payload: everything but the id, which the store assigns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    pub name: String,
    pub username: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub document_kind: Option<DocumentKind>,
    pub document_number: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub kind: AccountKind,
    pub profile_image: Option<String>,
    pub page_url: Option<String>,
    pub bio: Option<String>,
}

/// Partial profile update. Omitted fields keep their current values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountPatch {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub document_kind: Option<DocumentKind>,
    pub document_number: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub kind: Option<AccountKind>,
    pub profile_image: Option<String>,
    pub page_url: Option<String>,
    pub bio: Option<String>,
}

impl NewAccount {
    /// Promote into a full record under a freshly assigned id.
    pub fn into_account(self, id: String) -> Account {
        Account {
            id,
            name: self.name,
            username: self.username,
            email: self.email,
            phone: self.phone,
            document_kind: self.document_kind,
            document_number: self.document_number,
            birth_date: self.birth_date,
            kind: self.kind,
            profile_image: self.profile_image,
            page_url: self.page_url,
            bio: self.bio,
        }
    }
}

impl Account {
    /// Shallow-merge `patch` into this account.
    pub fn apply(&mut self, patch: AccountPatch) {
        merge_field(&mut self.name, patch.name);
        merge_optional(&mut self.username, patch.username);
        merge_field(&mut self.email, patch.email);
        merge_optional(&mut self.phone, patch.phone);
        merge_optional(&mut self.document_kind, patch.document_kind);
        merge_optional(&mut self.document_number, patch.document_number);
        merge_optional(&mut self.birth_date, patch.birth_date);
        merge_field(&mut self.kind, patch.kind);
        merge_optional(&mut self.profile_image, patch.profile_image);
        merge_optional(&mut self.page_url, patch.page_url);
        merge_optional(&mut self.bio, patch.bio);
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AccountKind::Participant => write!(f, "participant"),
            AccountKind::Organizer => write!(f, "organizer"),
        }
    }
}
