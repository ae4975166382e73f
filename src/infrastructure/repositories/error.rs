use crate::domain::errors::DomainError;

const CNT_ARTICLE_CATEGORY: &str = "articles_category_chk";
const CNT_ARTICLE_PUBLISHED: &str = "articles_published_requires_timestamp_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_CATEGORY => {
                        DomainError::Validation("category is not included in the list".into())
                    }
                    CNT_ARTICLE_PUBLISHED => {
                        DomainError::Validation("published articles require published_at".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
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
