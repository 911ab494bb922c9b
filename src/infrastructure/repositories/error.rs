use crate::domain::errors::DomainError;

const CNT_VOTE_PAIR: &str = "article_vote_user_id_article_id_key";
const CNT_VOTE_KIND_CHECK: &str = "article_vote_vote_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_VOTE_PAIR => {
                        DomainError::Conflict("user has already voted for this article".into())
                    }
                    CNT_VOTE_KIND_CHECK => {
                        DomainError::Validation("vote must be one of up, down".into())
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
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
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
