use {
    crate::{
        error::CatalogError,
        models::{Product, ProductPayload},
        store::CatalogStore,
    },
    actix_web::{
        delete, get,
        http::header::{self, ContentType},
        post, put, web, HttpResponse,
    },
};

#[get("")]
pub async fn list(store: web::Data<dyn CatalogStore>) -> Result<web::Json<Vec<Product>>, CatalogError> {
    let products = store.list().await?;

    Ok(web::Json(products))
}

#[get("/{id}")]
pub async fn get(
    store: web::Data<dyn CatalogStore>,
    id: web::Path<i64>,
) -> Result<web::Json<Product>, CatalogError> {
    match store.get(id.into_inner()).await? {
        Some(product) => Ok(web::Json(product)),
        None => Err(CatalogError::NotFound("Product not found".to_string())),
    }
}

#[post("")]
pub async fn create(
    store: web::Data<dyn CatalogStore>,
    payload: web::Json<ProductPayload>,
) -> Result<HttpResponse, CatalogError> {
    payload.validate()?;

    let id = store.create(&payload).await?;

    tracing::info!(id, "product added");

    Ok(HttpResponse::Ok()
        .insert_header((header::LOCATION, format!("/products/{}", id)))
        .content_type(ContentType::plaintext())
        .body("Product added"))
}

#[put("/{id}")]
pub async fn update(
    store: web::Data<dyn CatalogStore>,
    id: web::Path<i64>,
    payload: web::Json<ProductPayload>,
) -> Result<HttpResponse, CatalogError> {
    let id = id.into_inner();

    payload.validate()?;

    if !store.update(id, &payload).await? {
        return Err(missing(id));
    }

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(format!("Product {} updated", id)))
}

#[delete("/{id}")]
pub async fn delete(
    store: web::Data<dyn CatalogStore>,
    id: web::Path<i64>,
) -> Result<HttpResponse, CatalogError> {
    let id = id.into_inner();

    if !store.delete(id).await? {
        return Err(missing(id));
    }

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(format!("Product {} deleted", id)))
}

fn missing(id: i64) -> CatalogError {
    CatalogError::NotFound(format!("Product {} not found", id))
}
