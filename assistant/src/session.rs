use crate::errors::{AssistantError, AssistantResult};
use crate::menu_store::MenuStore;
use crate::models::*;
use std::path::Path;
use std::sync::Arc;

/// Credential and menu of one user. Nothing here outlives the session.
#[derive(Debug, Default, Clone)]
pub struct Session {
    credential: Option<Credential>,
    menu: Option<Arc<Menu>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credential(credential: Credential) -> Self {
        Self {
            credential: Some(credential),
            menu: None,
        }
    }

    /// Stores the key; a blank key clears any previous one.
    pub fn set_credential(&mut self, raw: &str) -> AssistantResult<()> {
        self.credential = Credential::new(raw);
        self.credential().map(|_| ())
    }

    pub fn credential(&self) -> AssistantResult<&Credential> {
        self.credential.as_ref().ok_or(AssistantError::MissingCredential)
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Replaces the menu. On a parse failure the session is left without one.
    pub fn upload_menu(&mut self, document: &[u8]) -> AssistantResult<usize> {
        self.replace_menu(|| MenuStore::parse(document))
    }

    /// Same as [`upload_menu`](Self::upload_menu), reading the document from disk.
    pub fn load_menu_file(&mut self, path: &Path) -> AssistantResult<usize> {
        self.replace_menu(|| MenuStore::load_file(path))
    }

    fn replace_menu(&mut self, load: impl FnOnce() -> AssistantResult<Menu>) -> AssistantResult<usize> {
        self.credential()?;
        self.menu = None;

        let menu = load()?;
        let count = menu.len();
        self.menu = Some(Arc::new(menu));
        Ok(count)
    }

    pub fn menu(&self) -> AssistantResult<&Arc<Menu>> {
        self.menu.as_ref().ok_or(AssistantError::MenuNotLoaded)
    }
}
