//! Lab batch partitioning.
//!
//! Turns a cohort's enrollment into schedulable lab batches:
//!
//! ```text
//! per_section         = floor(total_students / sections)
//! batches_per_section = ceil(per_section / batch_size)
//! labels              = S1B1 .. S{sections}B{batches_per_section}
//! ```

use crate::error::{Result, TimetableError};
use crate::models::{find_batch_config, BatchConfig, BatchLabel, Course};

/// Derives lab batches from batch configurations.
#[derive(Debug, Clone, Copy)]
pub struct BatchPartitioner<'a> {
    configs: &'a [BatchConfig],
}

impl<'a> BatchPartitioner<'a> {
    /// Creates a partitioner over the loaded configurations.
    pub fn new(configs: &'a [BatchConfig]) -> Self {
        Self { configs }
    }

    /// The configuration matching a course's department and semester.
    pub fn config_for(&self, course: &Course) -> Option<&'a BatchConfig> {
        find_batch_config(self.configs, &course.department, course.semester)
    }

    /// Batch labels for a course, section-major.
    ///
    /// Courses without a practical component get no batches. A course with
    /// one but no matching (or a degenerate) configuration is an error the
    /// caller records and moves past.
    pub fn partition(&self, course: &Course) -> Result<Vec<BatchLabel>> {
        if !course.hours.has_practical() {
            return Ok(Vec::new());
        }

        let config = self
            .config_for(course)
            .ok_or_else(|| TimetableError::MissingBatchConfig {
                department: course.department.clone(),
                semester: course.semester,
            })?;

        labels_for(config)
    }
}

/// Batch labels implied by one configuration.
pub fn labels_for(config: &BatchConfig) -> Result<Vec<BatchLabel>> {
    let invalid = |reason: &str| TimetableError::InvalidBatchConfig {
        department: config.department.clone(),
        semester: config.semester,
        reason: reason.to_string(),
    };
    if config.sections == 0 {
        return Err(invalid("sections must be positive"));
    }
    if config.batch_size == 0 {
        return Err(invalid("batch size must be positive"));
    }

    let per_section = config.total_students / config.sections;
    let batches_per_section = per_section.div_ceil(config.batch_size);

    Ok((1..=config.sections)
        .flat_map(|section| (1..=batches_per_section).map(move |batch| BatchLabel::new(section, batch)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lab_course(dept: &str, semester: u32) -> Course {
        Course::new("CS310", dept, semester).with_ltp(3, 0, 2)
    }

    #[test]
    fn test_partition_counts() {
        // 130 / 2 = 65 per section, ceil(65 / 30) = 3 batches each.
        let configs = vec![BatchConfig::new("CSE", 4, 130, 2, 30)];
        let p = BatchPartitioner::new(&configs);
        let labels = p.partition(&lab_course("CSE", 4)).unwrap();
        assert_eq!(labels.len(), 6);
        let names: Vec<String> = labels.iter().map(|l| l.to_string()).collect();
        assert_eq!(names, vec!["S1B1", "S1B2", "S1B3", "S2B1", "S2B2", "S2B3"]);
    }

    #[test]
    fn test_exact_division() {
        let configs = vec![BatchConfig::new("ECE", 2, 60, 1, 30)];
        let labels = BatchPartitioner::new(&configs)
            .partition(&lab_course("ECE", 2))
            .unwrap();
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn test_floor_then_ceil() {
        // floor(61 / 2) = 30, ceil(30 / 30) = 1: the odd student is dropped by the floor.
        let cfg = BatchConfig::new("DSAI", 6, 61, 2, 30);
        assert_eq!(labels_for(&cfg).unwrap().len(), 2);
    }

    #[test]
    fn test_no_practical_no_batches() {
        let p = BatchPartitioner::new(&[]);
        let course = Course::new("MA101", "CSE", 1).with_ltp(3, 1, 0);
        assert!(p.partition(&course).unwrap().is_empty());
    }

    #[test]
    fn test_missing_config() {
        let configs = vec![BatchConfig::new("CSE", 4, 120, 2, 30)];
        let err = BatchPartitioner::new(&configs)
            .partition(&lab_course("CSE", 6))
            .unwrap_err();
        assert!(matches!(
            err,
            TimetableError::MissingBatchConfig { semester: 6, .. }
        ));
    }

    #[test]
    fn test_degenerate_configs() {
        assert!(labels_for(&BatchConfig::new("CSE", 1, 100, 0, 30)).is_err());
        assert!(labels_for(&BatchConfig::new("CSE", 1, 100, 2, 0)).is_err());
        // Zero students still yields no batches rather than an error.
        assert!(labels_for(&BatchConfig::new("CSE", 1, 0, 2, 30)).unwrap().is_empty());
    }
}
