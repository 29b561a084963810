use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use pickx_catalog::CatalogStore;
use pickx_core::{rank, Aspiration, CatalogItem, CriterionCheck, Error, DEFAULT_SHORTLIST};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Deserialize)]
struct RecommendRequest {
    aspiration: Aspiration,
    shortlist_size: Option<usize>,
}

#[derive(Serialize)]
struct RankedItem {
    id: serde_json::Value,
    distance: f64,
    values: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<serde_json::Value>,
    checks: Vec<CriterionCheck>,
}

#[derive(Serialize)]
struct RecommendResponse {
    best: RankedItem,
    alternatives: Vec<RankedItem>,
    out_of_range: Vec<String>,
}

#[derive(Serialize)]
struct CriterionInfo {
    name: String,
    direction: String,
    comparable: bool,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(store: Arc<CatalogStore>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(store.clone()))
                .route("/health", web::get().to(health))
                .route("/criteria", web::get().to(list_criteria))
                .route("/items", web::get().to(list_items))
                .route("/recommend", web::post().to(recommend))
                .route("/reload", web::post().to(reload))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn health(store: web::Data<Arc<CatalogStore>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "items": store.item_count()
    })))
}

async fn list_criteria(store: web::Data<Arc<CatalogStore>>) -> ActixResult<HttpResponse> {
    let snapshot = store.snapshot();
    let criteria: Vec<CriterionInfo> = snapshot
        .registry
        .iter()
        .map(|c| CriterionInfo {
            name: c.name.clone(),
            direction: c.direction.to_string(),
            comparable: c.comparable,
        })
        .collect();
    Ok(HttpResponse::Ok().json(criteria))
}

async fn list_items(store: web::Data<Arc<CatalogStore>>) -> ActixResult<HttpResponse> {
    let snapshot = store.snapshot();
    Ok(HttpResponse::Ok().json(snapshot.catalog.items()))
}

async fn recommend(
    store: web::Data<Arc<CatalogStore>>,
    req: web::Json<RecommendRequest>,
) -> ActixResult<HttpResponse> {
    let snapshot = store.snapshot();
    let shortlist = req.shortlist_size.unwrap_or(DEFAULT_SHORTLIST);

    let result = match rank(&snapshot.catalog, &snapshot.registry, &req.aspiration, shortlist) {
        Ok(result) => result,
        Err(e @ Error::EmptyCatalog) => {
            return Ok(HttpResponse::Conflict().json(serde_json::json!({
                "error": e.to_string()
            })));
        }
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            })));
        }
    };

    let mut annotations = result.annotations;
    let best_checks = annotations
        .remove(&result.best.id.to_string())
        .unwrap_or_default();
    let best = ranked_item(&result.best, result.best_distance, best_checks);

    let alternatives: Vec<RankedItem> = result
        .alternatives
        .iter()
        .map(|(item, distance)| {
            let checks = annotations.remove(&item.id.to_string()).unwrap_or_default();
            ranked_item(item, *distance, checks)
        })
        .collect();

    Ok(HttpResponse::Ok().json(RecommendResponse {
        best,
        alternatives,
        out_of_range: result.out_of_range,
    }))
}

async fn reload(store: web::Data<Arc<CatalogStore>>) -> ActixResult<HttpResponse> {
    match store.reload() {
        Ok(items) => {
            info!(items, "catalog reloaded via API");
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "result": true,
                "items": items
            })))
        }
        Err(e) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}

fn ranked_item(item: &CatalogItem, distance: f64, checks: Vec<CriterionCheck>) -> RankedItem {
    RankedItem {
        id: serde_json::to_value(&item.id).unwrap_or(serde_json::Value::Null),
        distance,
        values: serde_json::to_value(&item.values).unwrap_or(serde_json::Value::Null),
        payload: item.payload.clone(),
        checks,
    }
}
