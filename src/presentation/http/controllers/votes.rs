// src/presentation/http/controllers/votes.rs
use crate::application::{
    commands::votes::VoteForArticleCommand,
    dto::VoteForArticleResult,
};
use crate::domain::voting::Vote;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const TITLE_CANNOT_VOTE: &str = "Cannot vote for an article";

#[derive(Debug, Deserialize)]
pub struct CastArticleVoteRequest {
    pub user_id: Uuid,
    pub article_id: Uuid,
    pub vote: Vote,
}

#[derive(Debug, Serialize)]
pub struct ArticleVoteResponse {
    pub article_id: Uuid,
    pub user_id: Uuid,
    pub vote: Vote,
}

/// Problem-style body for the two rejection outcomes.
#[derive(Debug, Serialize)]
pub struct VoteProblemResponse {
    pub status: u16,
    pub title: &'static str,
    pub detail: String,
}

pub async fn cast_article_vote(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<CastArticleVoteRequest>, JsonRejection>,
) -> HttpResult<Response> {
    // Missing or malformed fields never reach the domain: reject with 400
    // regardless of which rejection variant axum produced.
    let Json(payload) = payload.map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;

    let command = VoteForArticleCommand {
        user_id: payload.user_id,
        article_id: payload.article_id,
        vote: payload.vote,
    };

    let result = state
        .services
        .vote_commands
        .vote_for_article(command)
        .await
        .into_http()?;

    Ok(vote_result_response(result))
}

fn vote_result_response(result: VoteForArticleResult) -> Response {
    match result {
        VoteForArticleResult::SuccessfullyVoted {
            user_id,
            article_id,
            vote,
        } => (
            StatusCode::CREATED,
            Json(ArticleVoteResponse {
                article_id: article_id.into(),
                user_id: user_id.into(),
                vote,
            }),
        )
            .into_response(),
        VoteForArticleResult::InsufficientKarma { user_id } => (
            StatusCode::BAD_REQUEST,
            Json(VoteProblemResponse {
                status: StatusCode::BAD_REQUEST.as_u16(),
                title: TITLE_CANNOT_VOTE,
                detail: format!(
                    "User {user_id} does not have enough karma to vote for an article"
                ),
            }),
        )
            .into_response(),
        VoteForArticleResult::AlreadyVoted {
            user_id,
            article_id,
        } => (
            StatusCode::CONFLICT,
            Json(VoteProblemResponse {
                status: StatusCode::CONFLICT.as_u16(),
                title: TITLE_CANNOT_VOTE,
                detail: format!(
                    "User \"{user_id}\" has already voted for article \"{article_id}\""
                ),
            }),
        )
            .into_response(),
    }
}
