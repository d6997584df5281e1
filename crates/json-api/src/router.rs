//! App Router

use salvo::Router;

use crate::{healthcheck, mail, products};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("product")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .patch(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(Router::with_path("mail").post(mail::send::handler))
}
