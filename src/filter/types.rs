/// Table holding asset records. Postgres folds the unquoted `NetworkAssets`
/// used by the DDL to this name.
pub const ASSET_TABLE: &str = "networkassets";

/// Columns of the asset table that the builder may reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetColumn {
    Name,
    SystemName,
    Address,
    ShortDescription,
    SubnetMask,
    ProtocolType,
    Description,
    AddressType,
    DnsHostName,
    CreateDate,
    DatasetId,
    ModifiedDate,
    LastModifiedBy,
    InstanceId,
    RequestId,
}

impl AssetColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetColumn::Name => "name",
            AssetColumn::SystemName => "systemname",
            AssetColumn::Address => "address",
            AssetColumn::ShortDescription => "shortdescription",
            AssetColumn::SubnetMask => "subnetmask",
            AssetColumn::ProtocolType => "protocoltype",
            AssetColumn::Description => "description",
            AssetColumn::AddressType => "addresstype",
            AssetColumn::DnsHostName => "dnshostname",
            AssetColumn::CreateDate => "createdate",
            AssetColumn::DatasetId => "datasetid",
            AssetColumn::ModifiedDate => "modifieddate",
            AssetColumn::LastModifiedBy => "lastmodifiedby",
            AssetColumn::InstanceId => "instanceid",
            AssetColumn::RequestId => "requestid",
        }
    }

    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.as_str())
    }
}

/// Projection returned by list and search endpoints
pub const SUMMARY_COLUMNS: &[AssetColumn] = &[
    AssetColumn::Name,
    AssetColumn::SystemName,
    AssetColumn::Address,
    AssetColumn::ShortDescription,
    AssetColumn::ProtocolType,
    AssetColumn::AddressType,
    AssetColumn::DnsHostName,
    AssetColumn::CreateDate,
];

/// Every column, in table order
pub const RECORD_COLUMNS: &[AssetColumn] = &[
    AssetColumn::Name,
    AssetColumn::SystemName,
    AssetColumn::Address,
    AssetColumn::ShortDescription,
    AssetColumn::SubnetMask,
    AssetColumn::ProtocolType,
    AssetColumn::Description,
    AssetColumn::AddressType,
    AssetColumn::DnsHostName,
    AssetColumn::CreateDate,
    AssetColumn::DatasetId,
    AssetColumn::ModifiedDate,
    AssetColumn::LastModifiedBy,
    AssetColumn::InstanceId,
    AssetColumn::RequestId,
];

pub fn column_list(columns: &[AssetColumn]) -> String {
    columns.iter().map(AssetColumn::quoted).collect::<Vec<_>>().join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// Case-insensitive substring match (ILIKE '%value%')
    Contains,
    /// Equality against the raw value
    Equals,
}

/// A value bound to a positional placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Int(i32),
    BigInt(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub column: AssetColumn,
    pub operator: FilterOp,
    /// Raw value as supplied by the caller; wildcards are added at render time
    pub value: FilterValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SortDirection {
    Desc,
}

impl SortDirection {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilterOrderInfo {
    pub column: AssetColumn,
    pub sort: SortDirection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<FilterValue>,
}
