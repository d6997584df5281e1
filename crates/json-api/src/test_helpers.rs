//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use catalog_app::{
    context::AppContext,
    domain::products::{
        MockProductsService,
        records::{ProductId, ProductRecord},
    },
    mail::{Mailer, MockMailer},
};

use crate::state::State;

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_mailer_mock() -> MockMailer {
    let mut mailer = MockMailer::new();

    mailer.expect_send().never();

    mailer
}

fn service_with_state(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service_with_state(
        AppContext::new(Arc::new(products), Arc::new(strict_mailer_mock())),
        route,
    )
}

pub(crate) fn mail_service(mailer: impl Mailer + 'static, route: Router) -> Service {
    service_with_state(
        AppContext::new(Arc::new(strict_products_mock()), Arc::new(mailer)),
        route,
    )
}

pub(crate) fn make_product(id: i64) -> ProductRecord {
    let now = Timestamp::UNIX_EPOCH;

    ProductRecord {
        id: ProductId::from_i64(id),
        code: "iPhone".to_string(),
        price: 20000,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}
