use anyhow::{anyhow, Context, Result};
use camino::Utf8Path;
use log::info;
use studip_client::{Client, Transport};

use crate::mirror::{Mirror, MirrorStats};

/// Mirror every course the current user is a member of into `output`.
///
/// If `only` isn't empty, courses whose ID isn't in it are left out.
pub fn export_all<T: Transport>(
    client: &Client<T>,
    output: &Utf8Path,
    only: &[String],
) -> Result<MirrorStats> {
    let me = client.me().context("error fetching current user")?;
    println!("user id: {}", me.id);

    let courses = client
        .my_courses(&me.id)
        .context("error fetching courses")?;
    let semesters = client.semesters().context("error fetching semesters")?;

    let mut total = MirrorStats::default();
    for course in courses
        .iter()
        .filter(|c| only.is_empty() || only.contains(&c.id))
    {
        let semester = semesters.get(course.start_semester_id()).ok_or_else(|| {
            anyhow!(
                "course {} starts in unknown semester {}",
                course.id,
                course.start_semester_id()
            )
        })?;
        println!("{}: {}", semester.title, course.title());

        let stats = Mirror::new(client, output, &semester.title, course.title())
            .run(&course.id)
            .with_context(|| format!("error mirroring {}", course.title()))?;
        info!(
            "{}: {} files ({} bytes), {} listings and {} files skipped",
            course.title(),
            stats.files,
            stats.bytes,
            stats.skipped_listings,
            stats.skipped_files
        );

        total += stats;
    }

    Ok(total)
}
