//! User use-cases

use tracing::{debug, info};

use super::HbnbFacade;
use crate::domain::{CreateUserDto, DomainError, DomainResult, Entity, UpdateUserDto, User, UserId};

impl HbnbFacade {
    /// Register a new user. The email must not belong to any existing user.
    pub fn create_user(&self, dto: CreateUserDto) -> DomainResult<User> {
        let user = User::try_from(dto)?;

        let _guard = self.write_guard();
        if self.get_user_by_email(user.email()).is_some() {
            debug!(email = %user.email(), "Rejected duplicate email");
            return Err(DomainError::Conflict("Email already registered".into()));
        }
        self.repos.users().add(user.clone());

        info!(user_id = %user.id(), "User created");
        Ok(user)
    }

    pub fn get_user(&self, id: &UserId) -> Option<User> {
        self.repos.users().get(id)
    }

    /// Exact (case-sensitive) email lookup.
    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.repos
            .users()
            .find_first(&|user: &User| user.email() == email)
    }

    pub fn get_all_users(&self) -> Vec<User> {
        self.repos.users().get_all()
    }

    /// Replace the supplied fields. Returns `Ok(None)` for an unknown id.
    pub fn update_user(&self, id: &UserId, dto: UpdateUserDto) -> DomainResult<Option<User>> {
        let _guard = self.write_guard();
        let Some(current) = self.repos.users().get(id) else {
            return Ok(None);
        };

        let updated = current.apply(&dto)?;
        if dto.email.is_some() {
            if let Some(holder) = self.get_user_by_email(updated.email()) {
                if holder.id() != id {
                    debug!(user_id = %id, "Rejected email owned by another user");
                    return Err(DomainError::Conflict("Email already registered".into()));
                }
            }
        }
        self.repos.users().add(updated.clone());

        info!(user_id = %id, "User updated");
        Ok(Some(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;

    #[test]
    fn created_user_round_trips() {
        let facade = HbnbFacade::in_memory();
        let created = jane(&facade);

        let fetched = facade.get_user(created.id()).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.first_name(), "Jane");
        assert_eq!(fetched.last_name(), "Doe");
        assert_eq!(fetched.email(), "jane@x.com");
        assert!(!fetched.is_admin());
        assert_eq!(fetched.created_at(), fetched.updated_at());
    }

    #[test]
    fn duplicate_email_is_a_conflict_without_insert() {
        let facade = HbnbFacade::in_memory();
        jane(&facade);

        let err = facade
            .create_user(user_dto("Janet", "Other", "jane@x.com"))
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(facade.get_all_users().len(), 1);
    }

    #[test]
    fn email_uniqueness_is_case_sensitive() {
        let facade = HbnbFacade::in_memory();
        jane(&facade);
        assert!(facade
            .create_user(user_dto("Jane", "Upper", "JANE@x.com"))
            .is_ok());
    }

    #[test]
    fn missing_or_blank_fields_are_validation_errors() {
        let facade = HbnbFacade::in_memory();

        let mut dto = user_dto("Jane", "Doe", "jane@x.com");
        dto.email = None;
        assert!(matches!(facade.create_user(dto), Err(DomainError::Validation(_))));

        let dto = user_dto("   ", "Doe", "jane@x.com");
        assert!(matches!(facade.create_user(dto), Err(DomainError::Validation(_))));
        assert!(facade.get_all_users().is_empty());
    }

    #[test]
    fn lookups_return_none_when_absent() {
        let facade = HbnbFacade::in_memory();
        assert!(facade.get_user(&UserId::new()).is_none());
        assert!(facade.get_user_by_email("ghost@x.com").is_none());

        let created = jane(&facade);
        assert_eq!(facade.get_user_by_email("jane@x.com"), Some(created));
    }

    #[test]
    fn update_applies_only_supplied_fields() {
        let facade = HbnbFacade::in_memory();
        let created = jane(&facade);

        let updated = facade
            .update_user(
                created.id(),
                UpdateUserDto {
                    last_name: Some("Roe".into()),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.first_name(), "Jane");
        assert_eq!(updated.last_name(), "Roe");
        assert!(updated.updated_at() > created.updated_at());
        assert_eq!(facade.get_user(created.id()), Some(updated));
    }

    #[test]
    fn update_unknown_user_is_none() {
        let facade = HbnbFacade::in_memory();
        let result = facade
            .update_user(&UserId::new(), UpdateUserDto::default())
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn update_to_another_users_email_conflicts() {
        let facade = HbnbFacade::in_memory();
        let jane = jane(&facade);
        john(&facade);

        let err = facade
            .update_user(
                jane.id(),
                UpdateUserDto {
                    email: Some("john@x.com".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(facade.get_user(jane.id()).unwrap().email(), "jane@x.com");
    }

    #[test]
    fn update_keeping_own_email_is_allowed() {
        let facade = HbnbFacade::in_memory();
        let jane = jane(&facade);

        let updated = facade
            .update_user(
                jane.id(),
                UpdateUserDto {
                    email: Some("jane@x.com".into()),
                    is_admin: Some(true),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();
        assert!(updated.is_admin());
    }

    #[test]
    fn invalid_update_leaves_user_unchanged() {
        let facade = HbnbFacade::in_memory();
        let jane = jane(&facade);

        let err = facade
            .update_user(
                jane.id(),
                UpdateUserDto {
                    first_name: Some("".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(facade.get_user(jane.id()), Some(jane));
    }
}
