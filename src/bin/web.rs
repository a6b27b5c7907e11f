//! Single binary web server: JSON API over the tournament repository.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT, DATA_FILE.

use actix_web::{
    get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use americano_padel::{
    write_leaderboard_csv, JsonFileStore, MatchId, ScoreChange, ServerConfig, Side,
    TournamentConfig, TournamentError, TournamentId, TournamentRepository,
};
use serde::Deserialize;
use std::sync::RwLock;

/// One repository for the whole process; each request holds the lock until its command is applied.
type AppState = Data<RwLock<TournamentRepository<JsonFileStore>>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct UpdateScoreBody {
    side: Side,
    #[serde(flatten)]
    change: ScoreChange,
}

#[derive(Deserialize)]
struct RecordResultBody {
    team_1: u32,
    team_2: u32,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id, round index and match id.
#[derive(Deserialize)]
struct MatchPath {
    id: TournamentId,
    round: usize,
    match_id: MatchId,
}

fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::NotFound(_) => HttpResponse::NotFound().json(body),
        TournamentError::InvalidConfiguration(_) | TournamentError::InvalidScore { .. } => {
            HttpResponse::BadRequest().json(body)
        }
    }
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "americano-padel",
    })
}

/// List all tournaments (summaries only).
#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(g.summaries())
}

/// Create a tournament and its full schedule.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<TournamentConfig>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.create_tournament(body.into_inner()) {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(&e),
    }
}

/// Get a tournament by id (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.get(path.id) {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(&e),
    }
}

/// Add to or set one team's score.
#[put("/api/tournaments/{id}/rounds/{round}/matches/{match_id}/score")]
async fn api_update_score(
    state: AppState,
    path: Path<MatchPath>,
    body: Json<UpdateScoreBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.update_score(path.id, path.round, path.match_id, body.side, body.change) {
        Ok(m) => HttpResponse::Ok().json(m),
        Err(e) => error_response(&e),
    }
}

/// Set both scores of a match.
#[put("/api/tournaments/{id}/rounds/{round}/matches/{match_id}/result")]
async fn api_record_result(
    state: AppState,
    path: Path<MatchPath>,
    body: Json<RecordResultBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.record_result(path.id, path.round, path.match_id, body.team_1, body.team_2) {
        Ok(m) => HttpResponse::Ok().json(m),
        Err(e) => error_response(&e),
    }
}

#[get("/api/tournaments/{id}/leaderboard")]
async fn api_leaderboard(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.leaderboard(path.id) {
        Ok(standings) => HttpResponse::Ok().json(standings),
        Err(e) => error_response(&e),
    }
}

/// Leaderboard as a CSV download.
#[get("/api/tournaments/{id}/leaderboard.csv")]
async fn api_leaderboard_csv(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let standings = match g.leaderboard(path.id) {
        Ok(s) => s,
        Err(e) => return error_response(&e),
    };
    let mut buf = Vec::new();
    if let Err(e) = write_leaderboard_csv(&standings, &mut buf) {
        log::error!("Failed to write leaderboard CSV: {}", e);
        return HttpResponse::InternalServerError().body("csv error");
    }
    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .body(buf)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let store = JsonFileStore::new(config.data_file.clone());
    let repository = TournamentRepository::open(store).map_err(|e| {
        std::io::Error::other(format!(
            "cannot load {}: {}",
            config.data_file.display(),
            e
        ))
    })?;
    log::info!(
        "Starting server at http://{}:{} (data file {})",
        config.host,
        config.port,
        config.data_file.display()
    );

    let state = Data::new(RwLock::new(repository));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_list_tournaments)
            .service(api_create_tournament)
            .service(api_leaderboard_csv)
            .service(api_leaderboard)
            .service(api_get_tournament)
            .service(api_update_score)
            .service(api_record_result)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
