/// UI preference endpoints
use crate::context::AppContext;
use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

/// Build preference routes
pub fn routes() -> Router<AppContext> {
    Router::new().route("/api/preferences/intro", get(get_intro).post(set_intro))
}

#[derive(Debug, Serialize, Deserialize)]
struct IntroState {
    collapsed: bool,
}

async fn get_intro(State(ctx): State<AppContext>) -> Json<IntroState> {
    Json(IntroState {
        collapsed: ctx.intro.is_collapsed().await,
    })
}

/// Set the flag from the body, or flip it when there is none
async fn set_intro(
    State(ctx): State<AppContext>,
    body: Option<Json<IntroState>>,
) -> Json<IntroState> {
    let collapsed = match body {
        Some(Json(state)) => {
            ctx.intro.set_collapsed(state.collapsed).await;
            state.collapsed
        }
        None => ctx.intro.toggle().await,
    };
    Json(IntroState { collapsed })
}
