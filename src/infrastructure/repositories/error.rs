use crate::domain::errors::DomainError;

const CNT_POST_SLUG: &str = "posts_slug_key";
const CNT_POST_STATUS: &str = "posts_status_chk";
const CNT_POST_SLUG_ALPHABET: &str = "posts_slug_alphabet_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_POST_SLUG => DomainError::DuplicateSlug("slug already exists".into()),
                    CNT_POST_STATUS => DomainError::Validation("unknown post status".into()),
                    CNT_POST_SLUG_ALPHABET => {
                        DomainError::Validation("slug contains disallowed characters".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    // posts.slug is the only unique column besides the key
                    "23505" => {
                        return DomainError::DuplicateSlug("unique constraint violated".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
