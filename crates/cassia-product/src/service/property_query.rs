//! Read side of the product property resource.
//!
//! The default record query deliberately carries no soft-delete exclusion:
//! unless the trashed filter narrows the result, soft-deleted rows are listed
//! alongside live ones. Admins hide them explicitly through the filter.

use std::collections::HashMap;

use sea_orm::*;
use serde::{Deserialize, Serialize};

use cassia_common::model::Page;
use cassia_persistence::entity::{product_property, product_property_group};

pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Soft-delete visibility toggle of the list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrashedFilter {
    /// Default: soft-deleted rows are included.
    #[default]
    WithTrashed,
    OnlyTrashed,
    WithoutTrashed,
}

impl TrashedFilter {
    /// Whether a row with the given deletion marker passes the filter.
    pub fn matches(&self, deleted_at: Option<&chrono::NaiveDateTime>) -> bool {
        match self {
            TrashedFilter::WithTrashed => true,
            TrashedFilter::OnlyTrashed => deleted_at.is_some(),
            TrashedFilter::WithoutTrashed => deleted_at.is_none(),
        }
    }

    fn apply(
        &self,
        query: Select<product_property::Entity>,
    ) -> Select<product_property::Entity> {
        match self {
            TrashedFilter::WithTrashed => query,
            TrashedFilter::OnlyTrashed => {
                query.filter(product_property::Column::DeletedAt.is_not_null())
            }
            TrashedFilter::WithoutTrashed => {
                query.filter(product_property::Column::DeletedAt.is_null())
            }
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPageQuery {
    pub page_no: u64,
    pub page_size: u64,
    pub name: Option<String>,
    pub trashed: TrashedFilter,
}

/// One selectable group of the form's relation field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupOption {
    pub value: i64,
    pub label: String,
}

pub async fn find_by_id(
    db: &DatabaseConnection,
    id: i64,
) -> anyhow::Result<Option<product_property::Model>> {
    let model = product_property::Entity::find_by_id(id).one(db).await?;
    Ok(model)
}

/// Paginated listing ordered by `sort`, then `id`, optionally narrowed by a
/// name search and the trashed filter.
pub async fn page(
    db: &DatabaseConnection,
    query: &PropertyPageQuery,
) -> anyhow::Result<Page<product_property::Model>> {
    let page_no = query.page_no.max(1);
    let page_size = if query.page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        query.page_size
    };

    let mut select = product_property::Entity::find()
        .order_by_asc(product_property::Column::Sort)
        .order_by_asc(product_property::Column::Id);

    if let Some(name) = query.name.as_deref()
        && !name.is_empty()
    {
        select = select.filter(product_property::Column::Name.contains(name));
    }

    select = query.trashed.apply(select);

    let paginator = select.paginate(db, page_size);
    let total_count = paginator.num_items().await?;
    let page_items = paginator.fetch_page(page_no - 1).await?;

    Ok(Page::new(total_count, page_no, page_size, page_items))
}

/// Groups that can be referenced: trashed groups are neither offered by the
/// form select nor accepted as a submitted `group_id`.
fn live_groups() -> Select<product_property_group::Entity> {
    product_property_group::Entity::find()
        .filter(product_property_group::Column::DeletedAt.is_null())
}

/// Preloaded options for the group select, searchable by name substring.
pub async fn group_options(
    db: &DatabaseConnection,
    search: Option<&str>,
) -> anyhow::Result<Vec<GroupOption>> {
    let mut select = live_groups().order_by_asc(product_property_group::Column::Name);

    if let Some(search) = search
        && !search.is_empty()
    {
        select = select.filter(product_property_group::Column::Name.contains(search));
    }

    let groups = select.all(db).await?;

    Ok(groups
        .into_iter()
        .map(|group| GroupOption {
            value: group.id,
            label: group.name,
        })
        .collect())
}

/// Resolve group names for the table's group column.
pub async fn group_names(
    db: &DatabaseConnection,
    ids: Vec<i64>,
) -> anyhow::Result<HashMap<i64, String>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let groups = product_property_group::Entity::find()
        .filter(product_property_group::Column::Id.is_in(ids))
        .all(db)
        .await?;

    Ok(groups
        .into_iter()
        .map(|group| (group.id, group.name))
        .collect())
}

pub async fn group_exists(db: &DatabaseConnection, id: i64) -> anyhow::Result<bool> {
    let count = live_groups()
        .filter(product_property_group::Column::Id.eq(id))
        .count(db)
        .await?;
    Ok(count > 0)
}
