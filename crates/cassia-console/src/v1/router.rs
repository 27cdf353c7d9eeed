use actix_web::{Scope, web};

use crate::v1::{health, property};

pub fn routers() -> Scope {
    web::scope("/v1").service(
        web::scope("/console")
            .service(health::routers())
            .service(property::routers()),
    )
}
