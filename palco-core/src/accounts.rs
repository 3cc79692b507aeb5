//! Registered accounts and the current session.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::account::{Account, AccountPatch, NewAccount};
use crate::error::{PalcoError, PalcoResult};
use crate::storage::{self, ACCOUNTS_KEY, SESSION_KEY, Storage};

/// Owns the account collection and the single signed-in session.
///
/// Construct one per application at startup and pass it to whatever needs
/// it; the store persists the full collection on every mutation.
pub struct AccountStore {
    storage: Arc<dyn Storage>,
    accounts: Vec<Account>,
    session: Option<Account>,
}

impl AccountStore {
    /// Load the persisted accounts and session. Absent or malformed
    /// payloads fall back to an empty collection and no session.
    pub fn open(storage: Arc<dyn Storage>) -> Self {
        let accounts: Vec<Account> =
            storage::load(storage.as_ref(), ACCOUNTS_KEY).unwrap_or_default();
        let session = storage::load(storage.as_ref(), SESSION_KEY);
        debug!(accounts = accounts.len(), "account store opened");

        AccountStore {
            storage,
            accounts,
            session,
        }
    }

    /// The signed-in account, if any.
    pub fn session(&self) -> Option<&Account> {
        self.session.as_ref()
    }

    /// All registered accounts, in registration order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Register a new account and sign it in.
    ///
    /// Email uniqueness is enforced here and only here; later profile
    /// updates are not re-checked against the collection.
    pub fn register(&mut self, data: NewAccount) -> PalcoResult<Account> {
        if self.accounts.iter().any(|a| a.email == data.email) {
            return Err(PalcoError::DuplicateEmail(data.email));
        }

        let account = data.into_account(Uuid::new_v4().to_string());
        self.accounts.push(account.clone());
        storage::save(self.storage.as_ref(), ACCOUNTS_KEY, &self.accounts)?;
        self.set_session(account.clone())?;

        Ok(account)
    }

    /// Sign in by email.
    ///
    /// The password is accepted but never verified: this store stands in
    /// for a backend in a demo and holds no credentials at all. Wire up
    /// real verification before using it for anything beyond that.
    pub fn authenticate(&mut self, email: &str, _password: &str) -> PalcoResult<Account> {
        let account = self
            .accounts
            .iter()
            .find(|a| a.email == email)
            .cloned()
            .ok_or(PalcoError::InvalidCredentials)?;

        self.set_session(account.clone())?;
        Ok(account)
    }

    /// Sign out. Calling without a session is a no-op.
    pub fn logout(&mut self) {
        self.session = None;
        if let Err(err) = self.storage.remove(SESSION_KEY) {
            warn!(%err, "failed to clear persisted session");
        }
    }

    /// Merge `patch` into the signed-in account; omitted fields keep their
    /// current values. The result replaces the matching record in the
    /// collection (by id) and becomes the new session.
    pub fn update_profile(&mut self, patch: AccountPatch) -> PalcoResult<Account> {
        let mut account = self.session.clone().ok_or(PalcoError::NoActiveSession)?;
        account.apply(patch);

        if let Some(existing) = self.accounts.iter_mut().find(|a| a.id == account.id) {
            *existing = account.clone();
        }
        storage::save(self.storage.as_ref(), ACCOUNTS_KEY, &self.accounts)?;
        self.set_session(account.clone())?;

        Ok(account)
    }

    fn set_session(&mut self, account: Account) -> PalcoResult<()> {
        storage::save(self.storage.as_ref(), SESSION_KEY, &account)?;
        self.session = Some(account);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountKind;
    use crate::storage::MemoryStorage;

    fn participant(email: &str) -> NewAccount {
        NewAccount {
            name: "Ana".to_string(),
            username: None,
            email: email.to_string(),
            phone: Some("111".to_string()),
            document_kind: None,
            document_number: None,
            birth_date: None,
            kind: AccountKind::Participant,
            profile_image: None,
            page_url: None,
            bio: None,
        }
    }

    fn store() -> AccountStore {
        AccountStore::open(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn register_signs_the_account_in() {
        let mut store = store();
        let account = store.register(participant("ana@example.com")).unwrap();

        assert_eq!(store.session(), Some(&account));
        assert_eq!(store.accounts().len(), 1);
    }

    #[test]
    fn register_rejects_duplicate_email_and_keeps_collection() {
        let mut store = store();
        store.register(participant("ana@example.com")).unwrap();

        let err = store.register(participant("ana@example.com")).unwrap_err();
        assert!(matches!(err, PalcoError::DuplicateEmail(_)));
        assert_eq!(store.accounts().len(), 1);
    }

    #[test]
    fn authenticate_matches_by_email_only() {
        let mut store = store();
        store.register(participant("ana@example.com")).unwrap();
        store.logout();

        let account = store.authenticate("ana@example.com", "whatever").unwrap();
        assert_eq!(store.session(), Some(&account));
    }

    #[test]
    fn authenticate_unknown_email_fails() {
        let mut store = store();
        let err = store.authenticate("ghost@example.com", "pw").unwrap_err();
        assert!(matches!(err, PalcoError::InvalidCredentials));
        assert!(store.session().is_none());
    }

    #[test]
    fn logout_clears_session_and_is_idempotent() {
        let mut store = store();
        store.register(participant("ana@example.com")).unwrap();

        store.logout();
        assert!(store.session().is_none());

        // A second logout with no session is a no-op.
        store.logout();
        assert!(store.session().is_none());
    }

    #[test]
    fn update_profile_requires_a_session() {
        let mut store = store();
        let err = store.update_profile(AccountPatch::default()).unwrap_err();
        assert!(matches!(err, PalcoError::NoActiveSession));
    }

    #[test]
    fn update_profile_keeps_omitted_fields() {
        let mut store = store();
        store.register(participant("ana@example.com")).unwrap();

        let updated = store
            .update_profile(AccountPatch {
                phone: Some("222".to_string()),
                ..AccountPatch::default()
            })
            .unwrap();

        assert_eq!(updated.name, "Ana");
        assert_eq!(updated.phone.as_deref(), Some("222"));
        assert_eq!(store.accounts()[0].phone.as_deref(), Some("222"));
    }

    #[test]
    fn reopen_restores_accounts_and_session() {
        let storage = Arc::new(MemoryStorage::new());

        let mut store = AccountStore::open(storage.clone());
        let account = store.register(participant("ana@example.com")).unwrap();
        drop(store);

        let reopened = AccountStore::open(storage);
        assert_eq!(reopened.accounts().len(), 1);
        assert_eq!(reopened.session(), Some(&account));
    }

    #[test]
    fn reopen_with_malformed_accounts_falls_back_to_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.write(ACCOUNTS_KEY, "{not json").unwrap();

        let store = AccountStore::open(storage);
        assert!(store.accounts().is_empty());
        assert!(store.session().is_none());
    }
}
