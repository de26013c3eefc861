use std::net::SocketAddr;

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::error::QuizError;
use crate::models::Difficulty;
use crate::service::QueryService;

const HOME_PAGE: &str = include_str!("../static/home.html");
const GAME_PAGE: &str = include_str!("../static/game.html");
const QUIZ_SCRIPT: &str = include_str!("../static/quiz.js");

pub fn router(service: QueryService) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/game/:difficulty", get(game))
        .route("/static/quiz.js", get(quiz_script))
        .route("/api/words/:difficulty", get(words_api))
        .with_state(service)
}

pub async fn serve(service: QueryService, addr: SocketAddr) -> anyhow::Result<()> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

/// Game page for one tier. An unrecognized tier goes back to the landing
/// page instead of erroring.
async fn game(Path(difficulty): Path<String>) -> Response {
    if difficulty.parse::<Difficulty>().is_err() {
        return Redirect::to("/").into_response();
    }
    Html(GAME_PAGE.replace("{{difficulty}}", &difficulty)).into_response()
}

async fn quiz_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        QUIZ_SCRIPT,
    )
}

async fn words_api(
    State(service): State<QueryService>,
    Path(difficulty): Path<String>,
) -> Response {
    match service.get_words(&difficulty).await {
        Ok(words) => Json(words).into_response(),
        Err(QuizError::InvalidDifficulty(_)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid difficulty level"})),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("word query failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Internal server error"})),
            )
                .into_response()
        }
    }
}
