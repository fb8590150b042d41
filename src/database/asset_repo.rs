use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{AssetInput, AssetRecord, AssetSummary};
use crate::database::query_builder::BoundQuery;
use crate::database::repository::{AssetPage, NetworkAssetRepo};
use crate::filter::{column_list, AssetColumn, AssetFilter, Filter, Pagination, ASSET_TABLE, RECORD_COLUMNS};

/// PostgreSQL-backed asset repository
#[derive(Clone)]
pub struct PgNetworkAssetRepo {
    pool: PgPool,
}

impl PgNetworkAssetRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn not_found(name: &str) -> DatabaseError {
        DatabaseError::NotFound(format!("network asset '{}' not found", name))
    }
}

#[async_trait]
impl NetworkAssetRepo for PgNetworkAssetRepo {
    async fn search(&self, criteria: &AssetFilter, page: Pagination) -> Result<AssetPage, DatabaseError> {
        let filter = Filter::from_criteria(criteria);
        tracing::debug!(predicates = filter.predicates().len(), page = page.page, limit = page.limit, "searching network assets");

        let records = BoundQuery::new(filter.to_sql(page))
            .select_all::<AssetSummary>(&self.pool)
            .await?;
        let total = BoundQuery::new(filter.to_count_sql()).count(&self.pool).await?;

        Ok(AssetPage { records, total })
    }

    async fn get_by_name(&self, name: &str) -> Result<AssetRecord, DatabaseError> {
        let query = format!(
            "SELECT {} FROM \"{}\" WHERE {} = $1",
            column_list(RECORD_COLUMNS),
            ASSET_TABLE,
            AssetColumn::Name.quoted()
        );

        sqlx::query_as::<_, AssetRecord>(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Self::not_found(name))
    }

    async fn create(&self, input: &AssetInput) -> Result<AssetRecord, DatabaseError> {
        let query = format!(
            r#"INSERT INTO "{}" (
                "name", "systemname", "address", "shortdescription", "subnetmask", "protocoltype",
                "description", "addresstype", "dnshostname", "datasetid", "lastmodifiedby",
                "instanceid", "requestid"
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {}"#,
            ASSET_TABLE,
            column_list(RECORD_COLUMNS)
        );

        sqlx::query_as::<_, AssetRecord>(&query)
            .bind(&input.name)
            .bind(&input.system_name)
            .bind(&input.address)
            .bind(&input.short_description)
            .bind(&input.subnet_mask)
            .bind(&input.protocol_type)
            .bind(&input.description)
            .bind(&input.address_type)
            .bind(&input.dns_host_name)
            .bind(input.dataset_id)
            .bind(&input.last_modified_by)
            .bind(&input.instance_id)
            .bind(&input.request_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DatabaseError::from_write(e, format!("network asset '{}' already exists", input.name)))
    }

    async fn update(&self, name: &str, input: &AssetInput) -> Result<AssetRecord, DatabaseError> {
        let query = format!(
            r#"UPDATE "{}" SET
                "systemname" = $1, "address" = $2, "shortdescription" = $3, "subnetmask" = $4,
                "protocoltype" = $5, "description" = $6, "addresstype" = $7, "dnshostname" = $8,
                "datasetid" = $9, "modifieddate" = NOW(), "lastmodifiedby" = $10,
                "instanceid" = $11, "requestid" = $12
            WHERE "name" = $13
            RETURNING {}"#,
            ASSET_TABLE,
            column_list(RECORD_COLUMNS)
        );

        sqlx::query_as::<_, AssetRecord>(&query)
            .bind(&input.system_name)
            .bind(&input.address)
            .bind(&input.short_description)
            .bind(&input.subnet_mask)
            .bind(&input.protocol_type)
            .bind(&input.description)
            .bind(&input.address_type)
            .bind(&input.dns_host_name)
            .bind(input.dataset_id)
            .bind(&input.last_modified_by)
            .bind(&input.instance_id)
            .bind(&input.request_id)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Self::not_found(name))
    }

    async fn delete(&self, name: &str) -> Result<(), DatabaseError> {
        let query = format!("DELETE FROM \"{}\" WHERE \"name\" = $1", ASSET_TABLE);
        let result = sqlx::query(&query).bind(name).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(Self::not_found(name));
        }
        Ok(())
    }

    async fn exists_by_dns_host_name(&self, dns_host_name: &str) -> Result<bool, DatabaseError> {
        BoundQuery::new(Filter::exact(AssetColumn::DnsHostName, dns_host_name).to_exists_sql())
            .exists(&self.pool)
            .await
    }
}
