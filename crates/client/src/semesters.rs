use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use std::collections::HashMap;

use crate::{Client, Result, Transport};

const SEMESTERS_PAGE: usize = 100;

/// A semester / term
#[derive(Debug, Deserialize)]
pub struct Semester {
    pub id: String,
    pub attributes: SemesterAttributes,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SemesterAttributes {
    pub title: String,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub start_of_lectures: DateTime<FixedOffset>,
    pub end_of_lectures: DateTime<FixedOffset>,
    pub visible: bool,
    pub is_current: bool,
}

impl<T: Transport> Client<T> {
    /// Get all semesters, keyed by ID
    pub fn semesters(&self) -> Result<HashMap<String, SemesterAttributes>> {
        const ROUTE: &str = "/semesters";
        Ok(self
            .get_all::<Semester>(ROUTE, SEMESTERS_PAGE)?
            .into_result(ROUTE)?
            .into_iter()
            .map(|s| (s.id, s.attributes))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::{mock::MockTransport, Client};
    use chrono::{Datelike, Timelike};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn semester(id: &str, title: &str, year: u32, current: bool) -> serde_json::Value {
        json!({
            "type": "semesters",
            "id": id,
            "attributes": {
                "title": title,
                "description": "",
                "token": "",
                "start": format!("{}-10-01T00:00:00+02:00", year),
                "end": format!("{}-03-31T23:59:59+02:00", year + 1),
                "start-of-lectures": format!("{}-10-14T00:00:00+02:00", year),
                "end-of-lectures": format!("{}-02-01T23:59:59+01:00", year + 1),
                "visible": true,
                "is-current": current
            }
        })
    }

    #[test]
    fn test_semesters_keyed_by_id() {
        let client = Client::new(MockTransport::new().with_data(
            "/semesters",
            json!([
                semester("ws23", "WiSe 2023/24", 2023, false),
                semester("ws24", "WiSe 2024/25", 2024, true),
            ]),
        ));

        let semesters = client.semesters().unwrap();
        assert_eq!(semesters.len(), 2);

        let ws24 = &semesters["ws24"];
        assert_eq!(ws24.title, "WiSe 2024/25");
        assert!(ws24.visible);
        assert!(ws24.is_current);
        assert!(!semesters["ws23"].is_current);

        assert_eq!(ws24.start.year(), 2024);
        assert_eq!(ws24.start_of_lectures.day(), 14);
        assert_eq!(ws24.end.hour(), 23);
        assert_eq!(ws24.end_of_lectures.offset().local_minus_utc(), 3600);
    }

    #[test]
    fn test_semesters_bad_date_is_error() {
        let mut bad = semester("x", "x", 2024, false);
        bad["attributes"]["start"] = json!("yesterday");
        let client = Client::new(MockTransport::new().with_data("/semesters", json!([bad])));

        assert!(client.semesters().is_err());
    }
}
