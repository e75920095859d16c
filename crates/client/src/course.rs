use serde::Deserialize;

use crate::{Client, Relationship, Result, Transport};

#[derive(Clone, Debug, Deserialize)]
pub struct Course {
    pub id: String,
    pub attributes: CourseAttributes,
    pub relationships: CourseRelationships,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CourseAttributes {
    pub title: String,
    pub subtitle: Option<String>,
    pub course_number: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CourseRelationships {
    pub start_semester: Relationship,
}

impl Course {
    pub fn title(&self) -> &str {
        &self.attributes.title
    }

    /// ID of the semester this course starts in
    pub fn start_semester_id(&self) -> &str {
        &self.relationships.start_semester.data.id
    }
}

impl<T: Transport> Client<T> {
    pub fn course(&self, course_id: &str) -> Result<Course> {
        let route = format!("/courses/{}", course_id);
        self.get(&route)?.into_result(&route)
    }
}
