use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A full row of the asset table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AssetRecord {
    pub name: String,
    #[sqlx(rename = "systemname")]
    pub system_name: String,
    pub address: String,
    #[sqlx(rename = "shortdescription")]
    pub short_description: String,
    #[sqlx(rename = "subnetmask")]
    pub subnet_mask: String,
    #[sqlx(rename = "protocoltype")]
    pub protocol_type: String,
    pub description: String,
    #[sqlx(rename = "addresstype")]
    pub address_type: String,
    #[sqlx(rename = "dnshostname")]
    pub dns_host_name: String,
    #[sqlx(rename = "createdate")]
    pub create_date: DateTime<Utc>,
    #[sqlx(rename = "datasetid")]
    pub dataset_id: i32,
    #[sqlx(rename = "modifieddate")]
    pub modified_date: Option<DateTime<Utc>>,
    #[sqlx(rename = "lastmodifiedby")]
    pub last_modified_by: String,
    #[sqlx(rename = "instanceid")]
    pub instance_id: String,
    #[sqlx(rename = "requestid")]
    pub request_id: String,
}

/// List projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AssetSummary {
    pub name: String,
    #[sqlx(rename = "systemname")]
    pub system_name: String,
    pub address: String,
    #[sqlx(rename = "shortdescription")]
    pub short_description: String,
    #[sqlx(rename = "protocoltype")]
    pub protocol_type: String,
    #[sqlx(rename = "addresstype")]
    pub address_type: String,
    #[sqlx(rename = "dnshostname")]
    pub dns_host_name: String,
    #[sqlx(rename = "createdate")]
    pub create_date: DateTime<Utc>,
}

impl From<&AssetRecord> for AssetSummary {
    fn from(record: &AssetRecord) -> Self {
        Self {
            name: record.name.clone(),
            system_name: record.system_name.clone(),
            address: record.address.clone(),
            short_description: record.short_description.clone(),
            protocol_type: record.protocol_type.clone(),
            address_type: record.address_type.clone(),
            dns_host_name: record.dns_host_name.clone(),
            create_date: record.create_date,
        }
    }
}

/// Writable fields accepted by create and update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetInput {
    pub name: String,
    pub system_name: String,
    pub address: String,
    pub short_description: String,
    pub subnet_mask: String,
    pub protocol_type: String,
    pub description: String,
    pub address_type: String,
    pub dns_host_name: String,
    pub dataset_id: i32,
    pub last_modified_by: String,
    pub instance_id: String,
    pub request_id: String,
}

impl AssetInput {
    /// Names of required fields that are blank
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.address.trim().is_empty() {
            missing.push("address");
        }
        missing
    }

    /// Apply this input on top of an existing record, keeping identity and creation time
    pub fn apply_to(&self, record: &mut AssetRecord, modified_at: DateTime<Utc>) {
        record.system_name = self.system_name.clone();
        record.address = self.address.clone();
        record.short_description = self.short_description.clone();
        record.subnet_mask = self.subnet_mask.clone();
        record.protocol_type = self.protocol_type.clone();
        record.description = self.description.clone();
        record.address_type = self.address_type.clone();
        record.dns_host_name = self.dns_host_name.clone();
        record.dataset_id = self.dataset_id;
        record.modified_date = Some(modified_at);
        record.last_modified_by = self.last_modified_by.clone();
        record.instance_id = self.instance_id.clone();
        record.request_id = self.request_id.clone();
    }

    pub fn into_record(self, created_at: DateTime<Utc>) -> AssetRecord {
        AssetRecord {
            name: self.name,
            system_name: self.system_name,
            address: self.address,
            short_description: self.short_description,
            subnet_mask: self.subnet_mask,
            protocol_type: self.protocol_type,
            description: self.description,
            address_type: self.address_type,
            dns_host_name: self.dns_host_name,
            create_date: created_at,
            dataset_id: self.dataset_id,
            modified_date: None,
            last_modified_by: self.last_modified_by,
            instance_id: self.instance_id,
            request_id: self.request_id,
        }
    }
}
