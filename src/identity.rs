//! The boundary with the identity provider
//!
//! Signing in is handled outside of this crate. The only thing the planner needs to know is whether a user is present, and how to sign them out.

use std::error::Error;
use std::sync::Mutex;

use async_trait::async_trait;

#[async_trait]
pub trait IdentityProvider {
    /// The id of the signed-in user, if any
    async fn current_user_id(&self) -> Option<String>;

    /// End the current session
    async fn sign_out(&self) -> Result<(), Box<dyn Error>>;

    async fn is_signed_in(&self) -> bool {
        self.current_user_id().await.is_some()
    }
}


/// An identity provider that lives in memory, e.g. for tests or demos
#[derive(Debug, Default)]
pub struct LocalIdentity {
    user_id: Mutex<Option<String>>,
}

impl LocalIdentity {
    pub fn signed_in_as(user_id: String) -> Self {
        Self { user_id: Mutex::new(Some(user_id)) }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentity {
    async fn current_user_id(&self) -> Option<String> {
        match self.user_id.lock() {
            Ok(user_id) => user_id.clone(),
            Err(_) => {
                log::warn!("Identity state is poisoned, considering nobody is signed in");
                None
            }
        }
    }

    async fn sign_out(&self) -> Result<(), Box<dyn Error>> {
        let mut user_id = self.user_id.lock()
            .map_err(|err| format!("Unable to sign out: {}", err))?;
        if let Some(id) = user_id.take() {
            log::info!("User {} signed out", id);
        }
        Ok(())
    }
}
