use actix_web::web;

pub mod backend_health;
pub mod h2h;
pub mod leaderboard;
pub mod matches;
pub mod players;
pub mod stats;
pub mod teams;

use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    // API routes (require authentication). Fixed match paths are
    // registered before the `{match_id}` catch-all.
    cfg.service(
        web::scope("/api")
            .wrap(AuthMiddleware)
            .service(leaderboard::get_leaderboard)
            .service(stats::get_own_stats)
            .service(stats::get_player_stats)
            .service(h2h::get_head_to_head)
            .service(matches::create_match)
            .service(matches::get_recent_matches)
            .service(matches::get_my_matches)
            .service(matches::get_match)
            .service(matches::save_match_stats)
            .service(matches::delete_match_stats)
            .service(players::list_players)
            .service(teams::list_teams),
    );
}
