pub mod products;

use {
    crate::error::CatalogError,
    actix_cors::Cors,
    actix_web::{dev::HttpServiceFactory, web},
};

pub fn products() -> impl HttpServiceFactory + 'static {
    web::scope("/products")
        .app_data(json_config())
        .service(products::list)
        .service(products::create)
        .service(products::get)
        .service(products::update)
        .service(products::delete)
}

/// Cross-origin requests are allowed from anywhere.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

/// Malformed or mistyped bodies turn into a plain 400 instead of reaching the store.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| CatalogError::InvalidPayload(err.to_string()).into())
}
