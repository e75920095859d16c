use log::debug;
use serde::Deserialize;

use crate::{course::Course, Client, Relationship, Result, Transport};

/// Enough memberships to get everything in one page
const MEMBERSHIPS_PAGE: usize = 500;

/// Ties a user to a course
#[derive(Debug, Deserialize)]
pub struct CourseMembership {
    pub id: String,
    pub relationships: MembershipRelationships,
}

#[derive(Debug, Deserialize)]
pub struct MembershipRelationships {
    pub course: Relationship,
}

impl<T: Transport> Client<T> {
    pub fn course_memberships(&self, user_id: &str) -> Result<Vec<CourseMembership>> {
        let route = format!("/users/{}/course-memberships", user_id);
        self.get_all(&route, MEMBERSHIPS_PAGE)?.into_result(&route)
    }

    /// Get every course the user is a member of, in membership order
    pub fn my_courses(&self, user_id: &str) -> Result<Vec<Course>> {
        let memberships = self.course_memberships(user_id)?;
        debug!("user {} has {} memberships", user_id, memberships.len());

        memberships
            .iter()
            .map(|m| {
                let course_id = &m.relationships.course.data.id;
                debug!("membership {} is in course {}", m.id, course_id);
                self.course(course_id)
            })
            .collect()
    }
}
