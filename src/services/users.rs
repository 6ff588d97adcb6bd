use crate::{
    auth::DemoUser,
    db::DbPool,
    entities::user::{self, Entity as UserEntity, Model as UserModel},
    errors::ServiceError,
    events::{Event, EventSender},
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Service for marketplace accounts.
///
/// Accounts are written on sign-in rather than through a registration flow:
/// the identity layer hands us an id plus profile fields and we upsert.
#[derive(Clone)]
pub struct UserService {
    db_pool: Arc<DbPool>,
    event_sender: Arc<EventSender>,
}

impl UserService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Inserts or refreshes the row for an authenticated identity and
    /// returns the stored record.
    #[instrument(skip(self, identity), fields(user_id = %identity.id))]
    pub async fn upsert_user(&self, identity: &DemoUser) -> Result<UserModel, ServiceError> {
        let db = &*self.db_pool;
        let now = Utc::now();

        let existing = UserEntity::find_by_id(identity.id.clone())
            .one(db)
            .await
            .map_err(|e| {
                error!(error = %e, user_id = %identity.id, "Failed to look up user");
                ServiceError::DatabaseError(e)
            })?;

        let stored = match existing {
            Some(model) => {
                let mut active: user::ActiveModel = model.into();
                active.email = Set(Some(identity.email.clone()));
                active.first_name = Set(Some(identity.first_name.clone()));
                active.last_name = Set(Some(identity.last_name.clone()));
                active.role = Set(identity.role);
                active.updated_at = Set(Some(now));
                active.update(db).await.map_err(|e| {
                    error!(error = %e, user_id = %identity.id, "Failed to refresh user row");
                    ServiceError::DatabaseError(e)
                })?
            }
            None => {
                let active = user::ActiveModel {
                    id: Set(identity.id.clone()),
                    email: Set(Some(identity.email.clone())),
                    first_name: Set(Some(identity.first_name.clone())),
                    last_name: Set(Some(identity.last_name.clone())),
                    profile_image_url: Set(None),
                    role: Set(identity.role),
                    phone: Set(None),
                    location: Set(None),
                    language: Set("en".to_string()),
                    created_at: Set(now),
                    updated_at: Set(Some(now)),
                };
                active.insert(db).await.map_err(|e| {
                    error!(error = %e, user_id = %identity.id, "Failed to insert user row");
                    ServiceError::DatabaseError(e)
                })?
            }
        };

        info!(user_id = %stored.id, "User signed in");
        if let Err(e) = self
            .event_sender
            .send(Event::UserSignedIn(stored.id.clone()))
            .await
        {
            warn!(error = %e, user_id = %stored.id, "Failed to send sign-in event");
        }

        Ok(stored)
    }

    /// Fetches a user by id.
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: &str) -> Result<UserModel, ServiceError> {
        let db = &*self.db_pool;

        UserEntity::find_by_id(user_id.to_string())
            .one(db)
            .await
            .map_err(|e| {
                error!(error = %e, user_id = %user_id, "Failed to fetch user");
                ServiceError::DatabaseError(e)
            })?
            .ok_or_else(|| ServiceError::NotFound(format!("User {} not found", user_id)))
    }
}
