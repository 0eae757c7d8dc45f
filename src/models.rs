//! Frontend Models
//!
//! Data structures matching the clinic API's JSON entities. The client only
//! holds read/display projections; the server owns the canonical records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Timestamp fields arrive either as RFC 3339 strings, date-only strings, or
/// epoch milliseconds depending on the endpoint. Normalize all of them into
/// `DateTime<Utc>` at the deserialization boundary so sorting and comparison
/// never see mixed representations.
pub mod ts {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Millis(f64),
    }

    pub fn parse(text: &str) -> Option<DateTime<Utc>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
            return Some(parsed.with_timezone(&Utc));
        }
        let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
        let midnight = date.and_hms_opt(0, 0, 0)?;
        Some(Utc.from_utc_datetime(&midnight))
    }

    fn from_raw(raw: Raw) -> Option<DateTime<Utc>> {
        match raw {
            Raw::Text(text) => parse(&text),
            Raw::Millis(ms) => Utc.timestamp_millis_opt(ms as i64).single(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Raw::deserialize(deserializer)?;
        from_raw(raw).ok_or_else(|| serde::de::Error::custom("unrecognized timestamp"))
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    /// Optional variant: missing, null, and unparseable values all map to `None`.
    pub mod opt {
        use super::*;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = Option::<super::Raw>::deserialize(deserializer).unwrap_or(None);
            Ok(raw.and_then(super::from_raw))
        }

        pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(dt) => serializer.serialize_str(&dt.to_rfc3339()),
                None => serializer.serialize_none(),
            }
        }
    }
}

/// Clinic announcement shown on the home slideshow and managed by admins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(with = "ts")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "ts")]
    pub updated_at: DateTime<Utc>,
}

/// Workflow status of a medical request form. Statuses this console does not
/// recognize collapse into `Other` rather than failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Other,
}

impl<'de> Deserialize<'de> for RequestStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(match value.as_str() {
            "pending" => RequestStatus::Pending,
            "approved" => RequestStatus::Approved,
            "rejected" => RequestStatus::Rejected,
            _ => RequestStatus::Other,
        })
    }
}

impl RequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Other => "Other",
        }
    }
}

/// Medical request form submitted by a student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestForm {
    pub id: String,
    pub fullname: String,
    pub year_section: String,
    pub school_id_number: String,
    pub department_course: String,
    pub assessment: String,
    #[serde(default)]
    pub referred_to: String,
    pub status: RequestStatus,
    #[serde(with = "ts")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "ts::opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Account role; gates which admin pages the UI offers. Authorization itself
/// is enforced server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Nurse,
    StudentAssistant,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Nurse => "Nurse",
            Role::StudentAssistant => "Student Assistant",
        }
    }
}

/// Clinic system account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: Role,
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, with = "ts::opt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "ts::opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

/// Server-computed stock level classification, consumed verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    #[default]
    Normal,
    Low,
    Critical,
    Overstock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Normal => "Normal",
            StockStatus::Low => "Low",
            StockStatus::Critical => "Critical",
            StockStatus::Overstock => "Overstock",
        }
    }
}

/// Server-computed expiration classification, consumed verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpirationStatus {
    #[default]
    Good,
    Warning,
    Expiring,
    Expired,
}

impl ExpirationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ExpirationStatus::Good => "Good",
            ExpirationStatus::Warning => "Warning",
            ExpirationStatus::Expiring => "Expiring",
            ExpirationStatus::Expired => "Expired",
        }
    }
}

/// Eight-level category hierarchy for inventory items
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryHierarchy {
    #[serde(default)]
    pub level1: String,
    #[serde(default)]
    pub level2: String,
    #[serde(default)]
    pub level3: String,
    #[serde(default)]
    pub level4: String,
    #[serde(default)]
    pub level5: String,
    #[serde(default)]
    pub level6: String,
    #[serde(default)]
    pub level7: String,
    #[serde(default)]
    pub level8: String,
}

impl CategoryHierarchy {
    /// Non-empty levels joined for display, e.g. "Medicine > Analgesic"
    pub fn path(&self) -> String {
        [
            &self.level1, &self.level2, &self.level3, &self.level4, &self.level5, &self.level6,
            &self.level7, &self.level8,
        ]
        .iter()
        .filter(|level| !level.is_empty())
        .map(|level| level.as_str())
        .collect::<Vec<_>>()
        .join(" > ")
    }
}

/// One delivery batch of an inventory item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    #[serde(default)]
    pub batch_number: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default, with = "ts::opt")]
    pub delivery_date: Option<DateTime<Utc>>,
    #[serde(default, with = "ts::opt")]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(default, with = "ts::opt")]
    pub manufacturing_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Enhanced inventory item with batch tracking and expiry monitoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub generic_name: String,
    #[serde(default)]
    pub category_hierarchy: CategoryHierarchy,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub unit: String,
    #[serde(default, with = "ts::opt")]
    pub delivery_date: Option<DateTime<Utc>>,
    #[serde(default, with = "ts::opt")]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(default, with = "ts::opt")]
    pub manufacturing_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub batch_number: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub barcode: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub supplier_contact: String,
    #[serde(default)]
    pub storage_location: String,
    #[serde(default)]
    pub storage_conditions: String,
    #[serde(default)]
    pub min_stock_level: u32,
    #[serde(default)]
    pub max_stock_level: u32,
    #[serde(default)]
    pub reorder_point: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub stock_status: StockStatus,
    #[serde(default)]
    pub expiration_status: ExpirationStatus,
    #[serde(default)]
    pub days_until_expiration: i64,
    #[serde(default)]
    pub batches: Vec<Batch>,
    #[serde(default)]
    pub total_quantity: u32,
    #[serde(default, with = "ts::opt")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default, with = "ts::opt")]
    pub created_at: Option<DateTime<Utc>>,
}

// ========================
// Report aggregates
// ========================
//
// Entirely server-computed; the client only renders them. Generous defaults
// keep partially-populated months renderable.

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeverityBreakdown {
    #[serde(default)]
    pub mild: u64,
    #[serde(default)]
    pub moderate: u64,
    #[serde(default)]
    pub severe: u64,
    #[serde(default)]
    pub critical: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiseaseCount {
    #[serde(default)]
    pub disease: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalStats {
    #[serde(default)]
    pub total_cases: u64,
    #[serde(default)]
    pub disease_breakdown: BTreeMap<String, u64>,
    #[serde(default)]
    pub status_breakdown: BTreeMap<String, u64>,
    #[serde(default)]
    pub daily_trends: BTreeMap<String, u64>,
    #[serde(default)]
    pub severity_breakdown: SeverityBreakdown,
    #[serde(default)]
    pub top_diseases: Vec<DiseaseCount>,
    #[serde(default)]
    pub average_per_day: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConsumedItem {
    #[serde(default)]
    pub quantity: u64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub times: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopConsumedItem {
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub total_quantity: u64,
    #[serde(default)]
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consumption {
    #[serde(default)]
    pub total_consumed: u64,
    #[serde(default)]
    pub items_consumed: BTreeMap<String, ConsumedItem>,
    #[serde(default)]
    pub consumption_reasons: BTreeMap<String, u64>,
    #[serde(default)]
    pub top_consumed_items: Vec<TopConsumedItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AddedItem {
    #[serde(default)]
    pub quantity: u64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub batches: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Additions {
    #[serde(default)]
    pub total_added: u64,
    #[serde(default)]
    pub items_added: BTreeMap<String, AddedItem>,
    #[serde(default)]
    pub categories_added: BTreeMap<String, u64>,
    #[serde(default)]
    pub total_value: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InventoryFlow {
    #[serde(default)]
    pub consumption: Consumption,
    #[serde(default)]
    pub additions: Additions,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenderBreakdown {
    #[serde(default)]
    pub male: u64,
    #[serde(default)]
    pub female: u64,
    #[serde(default)]
    pub other: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewVsReturning {
    #[serde(default)]
    pub new: u64,
    #[serde(default)]
    pub returning: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStats {
    #[serde(default)]
    pub total_registrations: u64,
    #[serde(default)]
    pub grade_level_breakdown: BTreeMap<String, u64>,
    #[serde(default)]
    pub gender_breakdown: GenderBreakdown,
    #[serde(default)]
    pub registration_trends: BTreeMap<String, u64>,
    #[serde(default)]
    pub new_vs_returning: NewVsReturning,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    #[serde(default)]
    pub total_medical_cases: u64,
    #[serde(default)]
    pub total_inventory_consumed: u64,
    #[serde(default)]
    pub total_inventory_added: u64,
    #[serde(default)]
    pub total_registrations: u64,
    #[serde(default)]
    pub total_inventory_value: f64,
}

/// Monthly activity report rendered by the reporting dashboard
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthlyReport {
    #[serde(default)]
    pub medical: MedicalStats,
    #[serde(default)]
    pub inventory: InventoryFlow,
    #[serde(default)]
    pub registrations: RegistrationStats,
    #[serde(default)]
    pub summary: MonthlySummary,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffectedStudent {
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub year_section: String,
    #[serde(default)]
    pub school_id_number: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub assessment: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, with = "ts::opt")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiseaseDetail {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub students: Vec<AffectedStudent>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseStats {
    #[serde(default)]
    pub total_cases: u64,
    #[serde(default)]
    pub daily_average: f64,
    #[serde(default)]
    pub diseases: BTreeMap<String, u64>,
    #[serde(default)]
    pub disease_details: BTreeMap<String, DiseaseDetail>,
    #[serde(default)]
    pub status: BTreeMap<String, u64>,
    #[serde(default)]
    pub department: BTreeMap<String, u64>,
    #[serde(default)]
    pub top_diseases: Vec<DiseaseCount>,
    #[serde(default)]
    pub monthly_trends: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub min_stock: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiringItem {
    #[serde(default)]
    pub name: String,
    #[serde(default, with = "ts::opt")]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub days_until_expiration: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewlyAddedItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: u64,
    #[serde(default, with = "ts::opt")]
    pub added_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub current_stock: BTreeMap<String, u64>,
    #[serde(default)]
    pub low_stock_items: Vec<LowStockItem>,
    #[serde(default)]
    pub categories: BTreeMap<String, u64>,
    #[serde(default)]
    pub brands: BTreeMap<String, u64>,
    #[serde(default)]
    pub total_value: f64,
    #[serde(default)]
    pub expiring_items: Vec<ExpiringItem>,
    #[serde(default)]
    pub newly_added: Vec<NewlyAddedItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPeriod {
    #[serde(default)]
    pub month: u32,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub days_in_month: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveSummary {
    #[serde(default)]
    pub total_medical_cases: u64,
    #[serde(default)]
    pub average_daily_cases: f64,
    #[serde(default)]
    pub total_inventory_items: u64,
    #[serde(default)]
    pub total_inventory_value: f64,
    #[serde(default)]
    pub low_stock_count: u64,
    #[serde(default)]
    pub expiring_items_count: u64,
    #[serde(default)]
    pub newly_added_items_count: u64,
    #[serde(default)]
    pub top_disease: String,
    #[serde(default)]
    pub top_disease_count: u64,
    #[serde(default)]
    pub top_disease_percentage: f64,
}

/// Disease + inventory aggregate for one month
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveReport {
    #[serde(default)]
    pub period: ReportPeriod,
    #[serde(default)]
    pub disease_statistics: DiseaseStats,
    #[serde(default)]
    pub inventory_statistics: InventoryStats,
    #[serde(default)]
    pub summary: ComprehensiveSummary,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineMetadata {
    #[serde(default)]
    pub data_type: String,
    #[serde(default)]
    pub resolution: String,
    #[serde(default)]
    pub date_range: DateRange,
    #[serde(default)]
    pub total_days: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimelineMedical {
    #[serde(default)]
    pub cases: u64,
    #[serde(default)]
    pub diseases: BTreeMap<String, u64>,
    #[serde(default)]
    pub severity: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineInventory {
    #[serde(default)]
    pub consumed: i64,
    #[serde(default)]
    pub added: i64,
    #[serde(default)]
    pub net_change: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimelineRegistrations {
    #[serde(default)]
    pub new: u64,
    #[serde(default)]
    pub returning: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimelinePoint {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub timestamp: f64,
    #[serde(default)]
    pub medical: Option<TimelineMedical>,
    #[serde(default)]
    pub inventory: Option<TimelineInventory>,
    #[serde(default)]
    pub registrations: Option<TimelineRegistrations>,
}

/// Day-by-day combined activity timeline
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Timeline {
    #[serde(default)]
    pub metadata: TimelineMetadata,
    #[serde(default)]
    pub timeline: Vec<TimelinePoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_announcement_rfc3339_timestamp() {
        let json = r#"{
            "id": "a1",
            "title": "Flu shots",
            "description": "Available this week",
            "createdAt": "2025-03-10T08:30:00Z",
            "updatedAt": "2025-03-11T09:00:00Z"
        }"#;
        let parsed: Announcement = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.created_at, Utc.with_ymd_and_hms(2025, 3, 10, 8, 30, 0).unwrap());
    }

    #[test]
    fn test_announcement_epoch_millis_timestamp() {
        let json = r#"{
            "id": "a2",
            "title": "Dental mission",
            "description": "Sign up at the front desk",
            "createdAt": 1741594200000,
            "updatedAt": 1741594200000
        }"#;
        let parsed: Announcement = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.created_at.timestamp_millis(), 1_741_594_200_000);
    }

    #[test]
    fn test_date_only_string_parses_to_midnight() {
        let parsed = ts::parse("2025-06-01").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_request_status_wire_values() {
        assert_eq!(
            serde_json::from_str::<RequestStatus>("\"pending\"").unwrap(),
            RequestStatus::Pending
        );
        assert_eq!(
            serde_json::from_str::<RequestStatus>("\"in_review\"").unwrap(),
            RequestStatus::Other
        );
    }

    #[test]
    fn test_role_wire_values() {
        assert_eq!(
            serde_json::from_str::<Role>("\"student_assistant\"").unwrap(),
            Role::StudentAssistant
        );
        assert_eq!(serde_json::to_string(&Role::Nurse).unwrap(), "\"nurse\"");
    }

    #[test]
    fn test_inventory_item_minimal_payload() {
        let json = r#"{
            "id": "i1",
            "name": "Paracetamol 500mg",
            "categoryHierarchy": {"level1": "Medicine", "level2": "Analgesic"},
            "stockStatus": "low",
            "expirationStatus": "warning",
            "batches": []
        }"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.stock_status, StockStatus::Low);
        assert_eq!(item.expiration_status, ExpirationStatus::Warning);
        assert_eq!(item.category_hierarchy.path(), "Medicine > Analgesic");
        assert!(item.is_active);
    }

    #[test]
    fn test_monthly_report_defaults_for_sparse_months() {
        let report: MonthlyReport = serde_json::from_str("{}").unwrap();
        assert_eq!(report.summary.total_medical_cases, 0);
        assert!(report.medical.top_diseases.is_empty());
    }
}
