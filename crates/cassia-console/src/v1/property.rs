//! Page and action endpoints of the product property resource.
//!
//! Four read endpoints serve the logical pages (index, create, view, edit);
//! the write endpoints accept the create/edit form submission and the three
//! bulk actions. Every response body travels inside `RestResult`.

use actix_web::{HttpResponse, Scope, get, post, put, web};
use serde::{Deserialize, Serialize};

use cassia_common::error::AppError;
use cassia_common::model::{AppState, Page, RestResult};
use cassia_common::CassiaError;
use cassia_persistence::entity::product_property;
use cassia_product::command::{
    PropertyCreateCommand, PropertyDeleteCommand, PropertyUpdateCommand,
};
use cassia_product::service::{property_command, property_query};
use cassia_product::service::property_query::{PropertyPageQuery, TrashedFilter};
use cassia_product::validation::{self, PropertyPayload};

use crate::descriptor::{self, ActionSchema, ColumnSchema, FieldSchema, FilterSchema, RouteDef};
use crate::render::{self, TableRow};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageParams {
    page_no: Option<u64>,
    page_size: Option<u64>,
    name: Option<String>,
    trashed: Option<TrashedFilter>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BulkIds {
    ids: Vec<i64>,
}

/// Everything the list page needs: the column, filter and action schemas
/// alongside the rendered page of rows.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IndexPage {
    columns: Vec<ColumnSchema>,
    filters: Vec<FilterSchema>,
    row_actions: Vec<ActionSchema>,
    bulk_actions: Vec<ActionSchema>,
    record_url: Option<&'static str>,
    routes: Vec<RouteDef>,
    page: Page<TableRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FormPage {
    fields: Vec<FieldSchema>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EditPage {
    fields: Vec<FieldSchema>,
    record: product_property::Model,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ViewPage {
    record: product_property::Model,
    row: TableRow,
}

#[get("")]
pub async fn index(
    data: web::Data<AppState>,
    params: web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    let db = &data.database_connection;
    let query = PropertyPageQuery {
        page_no: params.page_no.unwrap_or(1),
        page_size: params
            .page_size
            .unwrap_or(property_query::DEFAULT_PAGE_SIZE),
        name: params.name.clone(),
        trashed: params.trashed.unwrap_or_default(),
    };

    let page = property_query::page(db, &query).await?;
    let group_ids: Vec<i64> = page
        .page_items
        .iter()
        .filter_map(|model| model.group_id)
        .collect();
    let group_names = property_query::group_names(db, group_ids).await?;

    let page = page.map_items(|model| {
        let group_name = model
            .group_id
            .and_then(|id| group_names.get(&id))
            .map(String::as_str);
        render::render_table_row(&model, group_name)
    });

    let body = IndexPage {
        columns: descriptor::table_schema(),
        filters: descriptor::filters(),
        row_actions: descriptor::row_actions(),
        bulk_actions: descriptor::bulk_actions(),
        record_url: descriptor::RECORD_URL,
        routes: descriptor::routes(),
        page,
    };

    Ok(HttpResponse::Ok().json(RestResult::success(body)))
}

#[get("/create")]
pub async fn create_page(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let options = property_query::group_options(&data.database_connection, None).await?;
    let body = FormPage {
        fields: descriptor::form_schema(options),
    };
    Ok(HttpResponse::Ok().json(RestResult::success(body)))
}

#[post("")]
pub async fn store(
    data: web::Data<AppState>,
    payload: web::Json<PropertyPayload>,
) -> Result<HttpResponse, AppError> {
    let attributes =
        validation::validate_payload(&payload).map_err(CassiaError::Validation)?;
    let id = property_command::create(
        &data.database_connection,
        PropertyCreateCommand { attributes },
    )
    .await?;
    Ok(HttpResponse::Ok().json(RestResult::success(id)))
}

#[post("/bulk/delete")]
pub async fn bulk_delete(
    data: web::Data<AppState>,
    body: web::Json<BulkIds>,
) -> Result<HttpResponse, AppError> {
    let rows = property_command::delete(
        &data.database_connection,
        PropertyDeleteCommand {
            ids: body.into_inner().ids,
        },
    )
    .await?;
    Ok(HttpResponse::Ok().json(RestResult::success(rows)))
}

#[post("/bulk/force-delete")]
pub async fn bulk_force_delete(
    data: web::Data<AppState>,
    body: web::Json<BulkIds>,
) -> Result<HttpResponse, AppError> {
    let rows = property_command::force_delete(
        &data.database_connection,
        PropertyDeleteCommand {
            ids: body.into_inner().ids,
        },
    )
    .await?;
    Ok(HttpResponse::Ok().json(RestResult::success(rows)))
}

#[post("/bulk/restore")]
pub async fn bulk_restore(
    data: web::Data<AppState>,
    body: web::Json<BulkIds>,
) -> Result<HttpResponse, AppError> {
    let rows = property_command::restore(
        &data.database_connection,
        PropertyDeleteCommand {
            ids: body.into_inner().ids,
        },
    )
    .await?;
    Ok(HttpResponse::Ok().json(RestResult::success(rows)))
}

#[get("/{id}")]
pub async fn view(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let db = &data.database_connection;
    let id = path.into_inner();
    let model = property_query::find_by_id(db, id)
        .await?
        .ok_or(CassiaError::PropertyNotExist(id))?;

    let group_name = match model.group_id {
        Some(group_id) => property_query::group_names(db, vec![group_id])
            .await?
            .remove(&group_id),
        None => None,
    };

    let row = render::render_table_row(&model, group_name.as_deref());
    let body = ViewPage { record: model, row };

    Ok(HttpResponse::Ok().json(RestResult::success(body)))
}

#[get("/{id}/edit")]
pub async fn edit_page(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let db = &data.database_connection;
    let id = path.into_inner();
    let model = property_query::find_by_id(db, id)
        .await?
        .ok_or(CassiaError::PropertyNotExist(id))?;

    let options = property_query::group_options(db, None).await?;
    let body = EditPage {
        fields: descriptor::form_schema(options),
        record: model,
    };

    Ok(HttpResponse::Ok().json(RestResult::success(body)))
}

#[put("/{id}")]
pub async fn update(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<PropertyPayload>,
) -> Result<HttpResponse, AppError> {
    let attributes =
        validation::validate_payload(&payload).map_err(CassiaError::Validation)?;
    property_command::update(
        &data.database_connection,
        PropertyUpdateCommand {
            id: path.into_inner(),
            attributes,
        },
    )
    .await?;
    Ok(HttpResponse::Ok().json(RestResult::success(true)))
}

// Literal paths register before the `{id}` patterns so `/create` and the
// bulk action routes are never captured as record ids.
pub fn routers() -> Scope {
    web::scope(descriptor::RESOURCE_PREFIX)
        .service(index)
        .service(create_page)
        .service(store)
        .service(bulk_delete)
        .service(bulk_force_delete)
        .service(bulk_restore)
        .service(view)
        .service(edit_page)
        .service(update)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_ids_deserialization() {
        let body: BulkIds = serde_json::from_str(r#"{"ids":[1,2,3]}"#).unwrap();
        assert_eq!(body.ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_page_params_defaults() {
        let params: PageParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.page_no, None);
        assert_eq!(params.page_size, None);
        assert_eq!(params.trashed, None);
    }

    #[test]
    fn test_index_page_serialization_shape() {
        let body = IndexPage {
            columns: descriptor::table_schema(),
            filters: descriptor::filters(),
            row_actions: descriptor::row_actions(),
            bulk_actions: descriptor::bulk_actions(),
            record_url: descriptor::RECORD_URL,
            routes: descriptor::routes(),
            page: Page::default(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["columns"].as_array().unwrap().len(), 9);
        assert_eq!(json["recordUrl"], serde_json::Value::Null);
        assert_eq!(json["bulkActions"].as_array().unwrap().len(), 3);
        assert_eq!(json["page"]["totalCount"], 0);
    }
}
