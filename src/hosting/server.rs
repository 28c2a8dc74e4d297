use super::*;
use crate::learning::*;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(bind: String) -> Result<(), std::io::Error> {
        let tables = web::Data::new(Tables::default());
        log::info!("starting session server on {}", bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(tables.clone())
                .configure(routes)
        })
        .bind(bind)?
        .run()
        .await
    }
}

/// Session lifecycle plus one route per core operation, named after the
/// browser client's endpoints.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/start", web::post().to(start))
        .route("/close/{id}", web::post().to(close))
        .route("/{id}/status", web::get().to(status))
        .route("/{id}/play", web::get().to(play))
        .route("/{id}/evaluate", web::get().to(evaluate))
        .route("/{id}/reset", web::post().to(reset))
        .route("/{id}/add_datum", web::post().to(add_datum))
        .route("/{id}/train_model", web::post().to(train_model))
        .route("/{id}/predict_move", web::get().to(predict_move))
        .route("/{id}/round", web::post().to(round));
}

fn missing(e: anyhow::Error) -> HttpResponse {
    log::warn!("{}", e);
    HttpResponse::NotFound().json(Failure::new(e))
}

fn rejected(e: TrainError) -> HttpResponse {
    match e {
        TrainError::InvalidHyperparameter { .. } => HttpResponse::BadRequest(),
        TrainError::InsufficientData => HttpResponse::Conflict(),
        TrainError::Diverged { .. } => HttpResponse::UnprocessableEntity(),
    }
    .json(Failure::new(e))
}

// Route handlers
async fn start(tables: web::Data<Tables>) -> HttpResponse {
    HttpResponse::Ok().json(Opened {
        session: tables.open().await,
    })
}

async fn close(tables: web::Data<Tables>, path: web::Path<SessionId>) -> HttpResponse {
    match tables.close(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(e) => missing(e),
    }
}

async fn status(tables: web::Data<Tables>, path: web::Path<SessionId>) -> HttpResponse {
    match tables.get(path.into_inner()).await {
        Ok(session) => HttpResponse::Ok().json(session.lock().await.status()),
        Err(e) => missing(e),
    }
}

async fn play(tables: web::Data<Tables>, path: web::Path<SessionId>) -> HttpResponse {
    match tables.get(path.into_inner()).await {
        Ok(session) => HttpResponse::Ok().json(session.lock().await.play()),
        Err(e) => missing(e),
    }
}

async fn evaluate(
    tables: web::Data<Tables>,
    path: web::Path<SessionId>,
    query: web::Query<EvaluateQuery>,
) -> HttpResponse {
    match tables.get(path.into_inner()).await {
        Ok(session) => HttpResponse::Ok().json(
            session
                .lock()
                .await
                .evaluate(query.player, query.program),
        ),
        Err(e) => missing(e),
    }
}

async fn reset(tables: web::Data<Tables>, path: web::Path<SessionId>) -> HttpResponse {
    match tables.get(path.into_inner()).await {
        Ok(session) => {
            session.lock().await.reset();
            HttpResponse::Ok().finish()
        }
        Err(e) => missing(e),
    }
}

async fn add_datum(
    tables: web::Data<Tables>,
    path: web::Path<SessionId>,
    body: web::Json<Sample>,
) -> HttpResponse {
    match tables.get(path.into_inner()).await {
        Ok(session) => {
            session.lock().await.add_datum(body.into_inner());
            HttpResponse::Ok().finish()
        }
        Err(e) => missing(e),
    }
}

/// Holds the session lock for the whole run, off the async workers.
async fn train_model(
    tables: web::Data<Tables>,
    path: web::Path<SessionId>,
    query: web::Query<Hyperparameters>,
) -> HttpResponse {
    let session = match tables.get(path.into_inner()).await {
        Ok(session) => session,
        Err(e) => return missing(e),
    };
    let hyper = query.into_inner();
    let mut guard = session.lock_owned().await;
    match web::block(move || guard.train_model(hyper)).await {
        Ok(Ok(training)) => HttpResponse::Ok().json(training),
        Ok(Err(e)) => rejected(e),
        Err(e) => HttpResponse::InternalServerError().json(Failure::new(e)),
    }
}

async fn predict_move(
    tables: web::Data<Tables>,
    path: web::Path<SessionId>,
    query: web::Query<PredictQuery>,
) -> HttpResponse {
    match tables.get(path.into_inner()).await {
        Ok(session) => HttpResponse::Ok().json(session.lock().await.predict_move(
            query.last_player_move,
            query.last_program_move,
            query.last_result,
        )),
        Err(e) => missing(e),
    }
}

async fn round(
    tables: web::Data<Tables>,
    path: web::Path<SessionId>,
    query: web::Query<RoundQuery>,
) -> HttpResponse {
    match tables.get(path.into_inner()).await {
        Ok(session) => HttpResponse::Ok().json(session.lock().await.play_round(query.player)),
        Err(e) => missing(e),
    }
}
