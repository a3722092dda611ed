//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Every route must end up with a non-empty authority
//! - Flag pattern segments that are almost certainly typos
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouteTableConfig → Result<(), Vec<ValidationError>>
//! - Overlapping routes are not errors; the first one registered wins

use thiserror::Error;

use crate::config::schema::RouteTableConfig;
use crate::routing::pattern::{trim_pattern, NUMERIC, WILDCARD};

/// A single semantic problem in a route table config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("default_authority must not be empty")]
    EmptyDefaultAuthority,

    #[error("route {index}: authority must not be empty")]
    EmptyAuthority { index: usize },

    #[error("route {index}: no authority given and no default_authority set")]
    MissingAuthority { index: usize },

    #[error("route {index}: empty segment in path {path:?}")]
    EmptySegment { index: usize, path: String },

    #[error("route {index}: segment {segment:?} mixes a wildcard with other characters")]
    MixedWildcard { index: usize, segment: String },
}

pub fn validate_config<T>(config: &RouteTableConfig<T>) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let has_default = match config.default_authority.as_deref() {
        Some("") => {
            errors.push(ValidationError::EmptyDefaultAuthority);
            false
        }
        Some(_) => true,
        None => false,
    };

    for (index, route) in config.routes.iter().enumerate() {
        match route.authority.as_deref() {
            Some("") => errors.push(ValidationError::EmptyAuthority { index }),
            None if !has_default => errors.push(ValidationError::MissingAuthority { index }),
            _ => {}
        }

        let path = trim_pattern(&route.path);
        if path.is_empty() {
            continue;
        }

        for segment in path.split('/') {
            if segment.is_empty() {
                errors.push(ValidationError::EmptySegment {
                    index,
                    path: route.path.clone(),
                });
                break;
            }
            if segment != WILDCARD
                && segment != NUMERIC
                && (segment.contains(WILDCARD) || segment.contains(NUMERIC))
            {
                errors.push(ValidationError::MixedWildcard {
                    index,
                    segment: segment.to_string(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
