//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! The saved tournament (if any) is loaded at startup; every successful
//! mutation is saved back. STATE_DIR overrides where the save file lives.

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use golf_tournament_web::{
    abandon_to_setup, back_nine, final_score_to_par, final_standing_strokes, finish_tournament,
    format_score_to_par, front_nine, player_progress, rank_by_final, rank_by_progress,
    record_score, recorded_strokes, reset_tournament, score_bucket, score_distribution,
    score_term, start_tournament, CourseType, DisplayBucket, Hole, Player, PlayerId,
    ScoreDistribution, Tournament, TournamentStore,
};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// The single live tournament plus its durable slot.
struct AppData {
    tournament: Tournament,
    store: TournamentStore,
}

type AppState = Data<RwLock<AppData>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
    #[serde(default)]
    photo_url: Option<String>,
    #[serde(default)]
    handicap: Option<i32>,
}

#[derive(Deserialize)]
struct CourseTypeBody {
    course_type: CourseType,
}

#[derive(Deserialize)]
struct HoleParBody {
    par: u32,
}

#[derive(Deserialize)]
struct RecordScoreBody {
    player_id: PlayerId,
    hole: u32,
    strokes: u32,
}

/// Path segment: player id (e.g. /api/tournament/players/{player_id})
#[derive(Deserialize)]
struct PlayerPath {
    player_id: PlayerId,
}

/// Path segment: hole number (e.g. /api/tournament/course/{hole})
#[derive(Deserialize)]
struct HolePath {
    hole: u32,
}

/// One row of the live leaderboard.
#[derive(Serialize)]
struct LeaderboardRow {
    rank: usize,
    id: PlayerId,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    photo_url: Option<String>,
    total_strokes: u32,
    holes_played: u32,
    score_to_par: i32,
    score_display: String,
}

/// One row of the final standings.
#[derive(Serialize)]
struct StandingRow {
    rank: usize,
    id: PlayerId,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    photo_url: Option<String>,
    total_strokes: u32,
    score_to_par: i32,
    score_display: String,
}

/// Scorecard grid over one nine: hole headers plus per-player score rows.
#[derive(Serialize)]
struct NineGrid {
    holes: Vec<Hole>,
    par_total: u32,
    rows: Vec<NineGridRow>,
}

#[derive(Serialize)]
struct NineGridRow {
    id: PlayerId,
    name: String,
    /// Strokes per hole in this nine; null where unplayed.
    scores: Vec<Option<u32>>,
    /// Recorded strokes only (unplayed holes add nothing here).
    total: u32,
}

#[derive(Serialize)]
struct ScorecardResponse {
    standings: Vec<StandingRow>,
    front_nine: NineGrid,
    #[serde(skip_serializing_if = "Option::is_none")]
    back_nine: Option<NineGrid>,
}

/// Per-hole detail row for the player stats view.
#[derive(Serialize)]
struct HoleDetail {
    number: u32,
    par: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    strokes: Option<u32>,
    bucket: DisplayBucket,
    #[serde(skip_serializing_if = "Option::is_none")]
    term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to_par_display: Option<String>,
}

#[derive(Serialize)]
struct PlayerStatsResponse {
    id: PlayerId,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    handicap: Option<i32>,
    total_strokes: u32,
    holes_played: u32,
    score_to_par: i32,
    score_display: String,
    distribution: ScoreDistribution,
    holes: Vec<HoleDetail>,
}

fn leaderboard_rows(players: Vec<&Player>, course: &[Hole]) -> Vec<LeaderboardRow> {
    players
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            let progress = player_progress(p, course);
            LeaderboardRow {
                rank: i + 1,
                id: p.id,
                name: p.name.clone(),
                photo_url: p.photo_url.clone(),
                total_strokes: progress.total_strokes,
                holes_played: progress.holes_played,
                score_to_par: progress.score_to_par,
                score_display: format_score_to_par(progress.score_to_par),
            }
        })
        .collect()
}

fn nine_grid(holes: &[Hole], ranked: &[&Player]) -> NineGrid {
    NineGrid {
        holes: holes.to_vec(),
        par_total: holes.iter().map(|h| h.par).sum(),
        rows: ranked
            .iter()
            .map(|p| NineGridRow {
                id: p.id,
                name: p.name.clone(),
                scores: holes.iter().map(|h| p.strokes_on(h.number)).collect(),
                total: recorded_strokes(p, holes),
            })
            .collect(),
    }
}

fn player_stats_response(player: &Player, course: &[Hole]) -> PlayerStatsResponse {
    let progress = player_progress(player, course);
    let holes = course
        .iter()
        .map(|h| {
            let strokes = player.strokes_on(h.number);
            HoleDetail {
                number: h.number,
                par: h.par,
                strokes,
                bucket: score_bucket(h.par, strokes),
                term: strokes.map(|s| score_term(h.par, s).to_string()),
                to_par_display: strokes
                    .map(|s| format_score_to_par(s as i32 - h.par as i32)),
            }
        })
        .collect();
    PlayerStatsResponse {
        id: player.id,
        name: player.name.clone(),
        photo_url: player.photo_url.clone(),
        handicap: player.handicap,
        total_strokes: progress.total_strokes,
        holes_played: progress.holes_played,
        score_to_par: progress.score_to_par,
        score_display: format_score_to_par(progress.score_to_par),
        distribution: score_distribution(player, course),
        holes,
    }
}

/// Save the tournament after a successful mutation. A failed save is logged
/// and reported nowhere else; the in-memory tournament stays authoritative.
fn persist(data: &AppData) {
    if let Err(e) = data.store.save(&data.tournament) {
        log::warn!("Could not save tournament: {}", e);
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "golf-tournament-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Current tournament state.
#[get("/api/tournament")]
async fn api_get_tournament(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(&g.tournament)
}

/// Add a player (tournament must be in Setup).
#[post("/api/tournament/players")]
async fn api_add_player(state: AppState, body: Json<AddPlayerBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let body = body.into_inner();
    match g
        .tournament
        .add_player(body.name, body.photo_url, body.handicap)
    {
        Ok(_) => {
            persist(&g);
            HttpResponse::Ok().json(&g.tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Remove a player by id (tournament must be in Setup).
#[delete("/api/tournament/players/{player_id}")]
async fn api_remove_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.tournament.remove_player(path.player_id) {
        Ok(()) => {
            persist(&g);
            HttpResponse::Ok().json(&g.tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Switch between 9 and 18 holes; resets pars to the preset (Setup only).
#[put("/api/tournament/course-type")]
async fn api_set_course_type(state: AppState, body: Json<CourseTypeBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.tournament.set_course_type(body.course_type) {
        Ok(()) => {
            persist(&g);
            HttpResponse::Ok().json(&g.tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Edit one hole's par in the course draft (Setup only).
#[put("/api/tournament/course/{hole}")]
async fn api_set_hole_par(state: AppState, path: Path<HolePath>, body: Json<HoleParBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.tournament.set_hole_par(path.hole, body.par) {
        Ok(()) => {
            persist(&g);
            HttpResponse::Ok().json(&g.tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Start the tournament (Setup -> Playing).
#[post("/api/tournament/start")]
async fn api_start_tournament(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match start_tournament(&mut g.tournament) {
        Ok(()) => {
            persist(&g);
            HttpResponse::Ok().json(&g.tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Record strokes for one player on one hole (Playing only).
#[put("/api/tournament/scores")]
async fn api_record_score(state: AppState, body: Json<RecordScoreBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match record_score(&mut g.tournament, body.player_id, body.hole, body.strokes) {
        Ok(()) => {
            persist(&g);
            HttpResponse::Ok().json(&g.tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// End the round (Playing -> Finished).
#[post("/api/tournament/finish")]
async fn api_finish_tournament(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match finish_tournament(&mut g.tournament) {
        Ok(()) => {
            persist(&g);
            HttpResponse::Ok().json(&g.tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Abandon the round and return to Setup (Playing -> Setup).
#[post("/api/tournament/abandon")]
async fn api_abandon_tournament(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match abandon_to_setup(&mut g.tournament) {
        Ok(()) => {
            persist(&g);
            HttpResponse::Ok().json(&g.tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Discard a finished tournament and its saved state (Finished -> Setup).
#[post("/api/tournament/reset")]
async fn api_reset_tournament(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match reset_tournament(&mut g.tournament) {
        Ok(()) => {
            if let Err(e) = g.store.clear() {
                log::warn!("Could not clear saved tournament: {}", e);
            }
            HttpResponse::Ok().json(&g.tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Live leaderboard: ranked on score to par over played holes only.
#[get("/api/tournament/leaderboard")]
async fn api_leaderboard(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let t = &g.tournament;
    let ranked = rank_by_progress(&t.players, &t.course);
    HttpResponse::Ok().json(leaderboard_rows(ranked, &t.course))
}

/// Final scorecard: standings with unplayed holes counted as par, plus
/// front/back nine grids.
#[get("/api/tournament/scorecard")]
async fn api_scorecard(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let t = &g.tournament;
    let ranked = rank_by_final(&t.players, &t.course);
    let standings = ranked
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let score_to_par = final_score_to_par(p, &t.course);
            StandingRow {
                rank: i + 1,
                id: p.id,
                name: p.name.clone(),
                photo_url: p.photo_url.clone(),
                total_strokes: final_standing_strokes(p, &t.course),
                score_to_par,
                score_display: format_score_to_par(score_to_par),
            }
        })
        .collect();
    let back = back_nine(&t.course);
    HttpResponse::Ok().json(ScorecardResponse {
        standings,
        front_nine: nine_grid(front_nine(&t.course), &ranked),
        back_nine: (!back.is_empty()).then(|| nine_grid(back, &ranked)),
    })
}

/// Per-player stats: hole-by-hole detail and scoring distribution.
#[get("/api/tournament/players/{player_id}/stats")]
async fn api_player_stats(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let t = &g.tournament;
    match t.get_player(path.player_id) {
        Some(p) => HttpResponse::Ok().json(player_stats_response(p, &t.course)),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "Player not found" })),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let state_dir = std::env::var("STATE_DIR").unwrap_or_else(|_| "data".to_string());
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let store = TournamentStore::new(&state_dir);
    let tournament = store.load().unwrap_or_default();
    if tournament.status != golf_tournament_web::TournamentStatus::Setup {
        log::info!(
            "Resuming saved tournament ({} players)",
            tournament.players.len()
        );
    }
    let state = Data::new(RwLock::new(AppData { tournament, store }));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_get_tournament)
            .service(api_add_player)
            .service(api_remove_player)
            .service(api_set_course_type)
            .service(api_set_hole_par)
            .service(api_start_tournament)
            .service(api_record_score)
            .service(api_finish_tournament)
            .service(api_abandon_tournament)
            .service(api_reset_tournament)
            .service(api_leaderboard)
            .service(api_scorecard)
            .service(api_player_stats)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
