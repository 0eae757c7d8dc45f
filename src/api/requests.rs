//! Medical Request Endpoints

use super::{get_data, ApiResult};
use crate::config::AppConfig;
use crate::models::{RequestForm, RequestStatus};

pub async fn list_requests(config: &AppConfig) -> ApiResult<Vec<RequestForm>> {
    get_data(config, "/api/requests").await
}

/// Status filtering happens client-side; the endpoint always returns the
/// full collection.
pub fn pending_requests(forms: &[RequestForm]) -> Vec<RequestForm> {
    forms
        .iter()
        .filter(|form| form.status == RequestStatus::Pending)
        .cloned()
        .collect()
}

pub fn pending_count(forms: &[RequestForm]) -> usize {
    forms
        .iter()
        .filter(|form| form.status == RequestStatus::Pending)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_request(id: &str, status: RequestStatus) -> RequestForm {
        RequestForm {
            id: id.to_string(),
            fullname: "Test Student".to_string(),
            year_section: "3-A".to_string(),
            school_id_number: "2021-00123".to_string(),
            department_course: "BSIT".to_string(),
            assessment: "Headache".to_string(),
            referred_to: String::new(),
            status,
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn test_pending_filter_keeps_only_pending() {
        let forms = vec![
            make_request("r1", RequestStatus::Pending),
            make_request("r2", RequestStatus::Approved),
            make_request("r3", RequestStatus::Pending),
            make_request("r4", RequestStatus::Rejected),
        ];
        let pending = pending_requests(&forms);
        assert_eq!(pending.len(), 2);
        assert!(pending.iter().all(|f| f.status == RequestStatus::Pending));
        assert_eq!(pending_count(&forms), 2);
    }
}
