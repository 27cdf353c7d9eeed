use actix_web::{HttpResponse, Responder, Scope, get, web};

use cassia_common::model::AppState;

#[get("/liveness")]
pub async fn liveness() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

#[get("/readiness")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    match data.database_connection.ping().await {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}

pub fn routers() -> Scope {
    web::scope("/health").service(liveness).service(readiness)
}
