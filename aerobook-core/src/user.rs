use std::sync::Arc;

use aerobook_shared::Masked;
use tracing::info;
use uuid::Uuid;

use crate::models::{validate_email, NewUser, User, UserPatch};
use crate::password::PasswordHasher;
use crate::repository::{DuplicateEmail, UserRepository};
use crate::{CoreError, CoreResult};

/// Account registration, credential checks and profile maintenance.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>, hasher: PasswordHasher) -> Self {
        Self { repo, hasher }
    }

    pub async fn list(&self) -> CoreResult<Vec<User>> {
        self.repo.list_users().await.map_err(CoreError::internal)
    }

    pub async fn register(&self, input: NewUser) -> CoreResult<User> {
        input.validate()?;
        self.ensure_email_free(&input.email).await?;

        let user = User {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            password_hash: self.hasher.hash(input.password).await?,
        };
        self.repo.create_user(&user).await.map_err(write_error)?;

        info!("User registered: {}", user.id);
        Ok(user)
    }

    /// Returns the user whose email and password match.
    pub async fn login(&self, email: &str, password: Masked<String>) -> CoreResult<User> {
        let user = self
            .repo
            .find_user_by_email(email)
            .await
            .map_err(CoreError::internal)?
            .ok_or_else(|| CoreError::Unauthorized("user not present".to_string()))?;

        if !self.hasher.verify(password, &user.password_hash).await? {
            return Err(CoreError::Unauthorized("password wrong".to_string()));
        }
        Ok(user)
    }

    pub async fn delete(&self, id: Uuid) -> CoreResult<()> {
        let deleted = self.repo.delete_user(id).await.map_err(CoreError::internal)?;
        if !deleted {
            return Err(user_not_found(id));
        }
        info!("User deleted: {}", id);
        Ok(())
    }

    /// Applies a partial update. A new password goes through the same hashing
    /// path as registration.
    pub async fn update(&self, id: Uuid, patch: UserPatch) -> CoreResult<User> {
        let mut user = self
            .repo
            .get_user(id)
            .await
            .map_err(CoreError::internal)?
            .ok_or_else(|| user_not_found(id))?;

        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(CoreError::ValidationError("name is required".to_string()));
            }
            user.name = name;
        }
        if let Some(email) = patch.email {
            if email != user.email {
                validate_email(&email)?;
                self.ensure_email_free(&email).await?;
            }
            user.email = email;
        }
        if let Some(password) = patch.password {
            if password.expose().is_empty() {
                return Err(CoreError::ValidationError("password is required".to_string()));
            }
            user.password_hash = self.hasher.hash(password).await?;
        }

        let updated = self.repo.update_user(&user).await.map_err(write_error)?;
        if !updated {
            return Err(user_not_found(id));
        }
        info!("User updated: {}", id);
        Ok(user)
    }

    /// Fast path for a clear 409 before hashing. The repository write is what
    /// actually guarantees uniqueness.
    async fn ensure_email_free(&self, email: &str) -> CoreResult<()> {
        let existing = self.repo.find_user_by_email(email).await.map_err(CoreError::internal)?;
        if existing.is_some() {
            return Err(CoreError::Conflict(format!("email already registered: {}", email)));
        }
        Ok(())
    }
}

fn write_error(err: Box<dyn std::error::Error + Send + Sync>) -> CoreError {
    if let Some(dup) = err.downcast_ref::<DuplicateEmail>() {
        return CoreError::Conflict(dup.to_string());
    }
    CoreError::internal(err)
}

fn user_not_found(id: Uuid) -> CoreError {
    CoreError::NotFound(format!("user not found: {}", id))
}
