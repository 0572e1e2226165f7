//! User domain entity

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use utoipa::ToSchema;

use super::{CreateUserDto, UpdateUserDto};
use crate::domain::entity::{next_update, Entity, UserId};
use crate::domain::{DomainError, DomainResult};
use crate::shared::validations::{require, trimmed_text};

/// Maximum length of a first or last name, counted after trimming.
pub const NAME_MAX_CHARS: usize = 50;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn validate_email(email: &str) -> DomainResult<String> {
    if !email_regex().is_match(email) {
        return Err(DomainError::validation("The email address is not valid."));
    }
    Ok(email.to_string())
}

/// A registered user. May own places and author reviews.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct User {
    id: UserId,
    first_name: String,
    last_name: String,
    /// Stored exactly as supplied; uniqueness is case-sensitive
    email: String,
    is_admin: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(first_name: &str, last_name: &str, email: &str, is_admin: bool) -> DomainResult<Self> {
        let now = Utc::now();
        Ok(Self {
            id: UserId::new(),
            first_name: trimmed_text("First name", first_name, NAME_MAX_CHARS)?,
            last_name: trimmed_text("Last name", last_name, NAME_MAX_CHARS)?,
            email: validate_email(email)?,
            is_admin,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn with_first_name(mut self, first_name: &str) -> DomainResult<Self> {
        self.first_name = trimmed_text("First name", first_name, NAME_MAX_CHARS)?;
        Ok(self.touched())
    }

    pub fn with_last_name(mut self, last_name: &str) -> DomainResult<Self> {
        self.last_name = trimmed_text("Last name", last_name, NAME_MAX_CHARS)?;
        Ok(self.touched())
    }

    pub fn with_email(mut self, email: &str) -> DomainResult<Self> {
        self.email = validate_email(email)?;
        Ok(self.touched())
    }

    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self.touched()
    }

    /// Apply every supplied field of `dto`, or none of them.
    pub fn apply(self, dto: &UpdateUserDto) -> DomainResult<Self> {
        let mut user = self;
        if let Some(first_name) = &dto.first_name {
            user = user.with_first_name(first_name)?;
        }
        if let Some(last_name) = &dto.last_name {
            user = user.with_last_name(last_name)?;
        }
        if let Some(email) = &dto.email {
            user = user.with_email(email)?;
        }
        if let Some(is_admin) = dto.is_admin {
            user = user.with_admin(is_admin);
        }
        Ok(user)
    }

    fn touched(mut self) -> Self {
        self.updated_at = next_update(self.updated_at);
        self
    }
}

impl TryFrom<CreateUserDto> for User {
    type Error = DomainError;

    fn try_from(dto: CreateUserDto) -> DomainResult<Self> {
        let first_name = require("First name", dto.first_name)?;
        let last_name = require("Last name", dto.last_name)?;
        let email = require("Email", dto.email)?;
        Self::new(
            &first_name,
            &last_name,
            &email,
            dto.is_admin.unwrap_or(false),
        )
    }
}

impl Entity for User {
    type Id = UserId;
    const KIND: &'static str = "User";

    fn id(&self) -> &UserId {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
