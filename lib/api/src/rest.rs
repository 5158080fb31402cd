use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer};
use roadnet_core::{CityId, RecordId, RoadId};
use roadnet_storage::StorageManager;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;

type ApiResult = Result<HttpResponse, ApiError>;

#[derive(Deserialize)]
struct CreateCityRequest {
    name: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct CreateRoadRequest {
    city_a: CityId,
    city_b: CityId,
    length: f64,
}

#[derive(Deserialize)]
struct PathQuery {
    from: Option<String>,
    to: Option<String>,
}

#[derive(Deserialize)]
struct RecordRequest {
    name: String,
    phone: String,
}

#[derive(Deserialize)]
struct RecordQuery {
    name: Option<String>,
}

pub const ROUTES: &str = "Available routes:
    GET    /                          -> this page
Cities:
    GET    /api/v1/cities
    GET    /api/v1/cities/{name}
    POST   /api/v1/cities             {name, latitude, longitude}
    DELETE /api/v1/cities/{id}
Roads:
    GET    /api/v1/roads
    POST   /api/v1/roads              {city_a, city_b, length}
    DELETE /api/v1/roads/{id}
Shortest path (Dijkstra):
    GET    /api/v1/path?from={city}&to={city}
Records:
    GET    /api/v1/records[?name={substring}]
    GET    /api/v1/records/{id}
    POST   /api/v1/records            {name, phone}
    PUT    /api/v1/records/{id}       {name, phone}
    DELETE /api/v1/records/{id}";

pub struct RestApi;

impl RestApi {
    pub async fn start(
        storage: Arc<StorageManager>,
        host: String,
        port: u16,
        workers: Option<usize>,
    ) -> std::io::Result<()> {
        let mut server = HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .wrap(middleware::Logger::default())
                .app_data(web::Data::new(storage.clone()))
                .configure(configure)
        });
        if let Some(workers) = workers {
            server = server.workers(workers);
        }

        info!("Listening on {}:{}", host, port);
        server.bind((host.as_str(), port))?.run().await
    }
}

/// Registers every route plus extractor error handlers. Expects
/// `web::Data<Arc<StorageManager>>` to be provided by the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(format!("invalid JSON body: {err}")).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(format!("invalid query string: {err}")).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(format!("bad id: {err}")).into()
    }))
    .route("/", web::get().to(hello))
    .service(
        web::scope("/api/v1")
            .route("/cities", web::get().to(list_cities))
            .route("/cities", web::post().to(create_city))
            .route("/cities/{name}", web::get().to(get_city))
            .route("/cities/{id}", web::delete().to(delete_city))
            .route("/roads", web::get().to(list_roads))
            .route("/roads", web::post().to(create_road))
            .route("/roads/{id}", web::delete().to(delete_road))
            .route("/path", web::get().to(shortest_path))
            .route("/records", web::get().to(list_records))
            .route("/records", web::post().to(create_record))
            .route("/records/{id}", web::get().to(get_record))
            .route("/records/{id}", web::put().to(update_record))
            .route("/records/{id}", web::delete().to(delete_record)),
    );
}

async fn hello(req: HttpRequest) -> HttpResponse {
    let text = format!("Hello World! Your URL is {}\n\n{}", req.uri(), ROUTES);
    HttpResponse::Ok().json(text)
}

async fn create_city(
    storage: web::Data<Arc<StorageManager>>,
    req: web::Json<CreateCityRequest>,
) -> ApiResult {
    let city = storage.create_city(&req.name, req.latitude, req.longitude)?;
    Ok(HttpResponse::Created().json(city))
}

async fn list_cities(storage: web::Data<Arc<StorageManager>>) -> ApiResult {
    Ok(HttpResponse::Ok().json(storage.list_cities()))
}

async fn get_city(
    storage: web::Data<Arc<StorageManager>>,
    path: web::Path<String>,
) -> ApiResult {
    let city = storage.city_by_name(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(city))
}

async fn delete_city(
    storage: web::Data<Arc<StorageManager>>,
    path: web::Path<CityId>,
) -> ApiResult {
    storage.delete_city(path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

async fn create_road(
    storage: web::Data<Arc<StorageManager>>,
    req: web::Json<CreateRoadRequest>,
) -> ApiResult {
    let road = storage.create_road(req.city_a, req.city_b, req.length)?;
    Ok(HttpResponse::Created().json(road))
}

async fn list_roads(storage: web::Data<Arc<StorageManager>>) -> ApiResult {
    Ok(HttpResponse::Ok().json(storage.list_roads()))
}

async fn delete_road(
    storage: web::Data<Arc<StorageManager>>,
    path: web::Path<RoadId>,
) -> ApiResult {
    storage.delete_road(path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

async fn shortest_path(
    storage: web::Data<Arc<StorageManager>>,
    query: web::Query<PathQuery>,
) -> ApiResult {
    let PathQuery { from, to } = query.into_inner();
    let (from, to) = match (from, to) {
        (Some(from), Some(to)) => (from, to),
        _ => {
            return Err(ApiError::BadRequest(
                "both 'from' and 'to' query parameters are required".to_string(),
            ))
        }
    };

    let path = storage.find_path(&from, &to)?;
    Ok(HttpResponse::Ok().json(path.to_string()))
}

async fn create_record(
    storage: web::Data<Arc<StorageManager>>,
    req: web::Json<RecordRequest>,
) -> ApiResult {
    let record = storage.create_record(&req.name, &req.phone)?;
    Ok(HttpResponse::Created().json(record))
}

async fn list_records(
    storage: web::Data<Arc<StorageManager>>,
    query: web::Query<RecordQuery>,
) -> ApiResult {
    Ok(HttpResponse::Ok().json(storage.list_records(query.name.as_deref())))
}

async fn get_record(
    storage: web::Data<Arc<StorageManager>>,
    path: web::Path<RecordId>,
) -> ApiResult {
    Ok(HttpResponse::Ok().json(storage.get_record(path.into_inner())?))
}

async fn update_record(
    storage: web::Data<Arc<StorageManager>>,
    path: web::Path<RecordId>,
    req: web::Json<RecordRequest>,
) -> ApiResult {
    let record = storage.update_record(path.into_inner(), &req.name, &req.phone)?;
    Ok(HttpResponse::Ok().json(record))
}

async fn delete_record(
    storage: web::Data<Arc<StorageManager>>,
    path: web::Path<RecordId>,
) -> ApiResult {
    storage.delete_record(path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
