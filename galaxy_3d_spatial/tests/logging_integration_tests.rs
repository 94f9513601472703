//! Integration tests for the spatial index logging system
//!
//! These tests swap the process-wide logger, so they are serialized.
//!
//! Run with: cargo test --test logging_integration_tests

use galaxy_3d_spatial::galaxy3d::Diagnostics;
use galaxy_3d_spatial::galaxy3d::log::{Logger, LogEntry, LogSeverity};
use galaxy_3d_spatial::galaxy3d::math::AABB;
use galaxy_3d_spatial::galaxy3d::octree::{Locatable, OctreeConfig, RenderingOctree};
use galaxy_3d_spatial::glam::Vec3;
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn octree_entries(entries: &Arc<Mutex<Vec<LogEntry>>>, severity: LogSeverity) -> Vec<LogEntry> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|entry| entry.source == "galaxy3d::Octree" && entry.severity == severity)
        .cloned()
        .collect()
}

struct Marker(u32, Vec3);

impl Locatable for Marker {
    type Id = u32;

    fn id(&self) -> u32 {
        self.0
    }

    fn world_position(&self) -> Vec3 {
        self.1
    }
}

fn world() -> AABB {
    AABB::cube(Vec3::ZERO, 100.0)
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let (test_logger, entries) = TestLogger::new();
    Diagnostics::set_logger(test_logger);

    Diagnostics::log(LogSeverity::Info, "test::module", "Test info message".to_string());
    Diagnostics::log_detailed(
        LogSeverity::Error,
        "test::module",
        "Test error message".to_string(),
        "module.rs",
        12,
    );

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[0].message, "Test info message");
        assert_eq!(captured[0].file, None);
        assert_eq!(captured[1].severity, LogSeverity::Error);
        assert_eq!(captured[1].file, Some("module.rs"));
        assert_eq!(captured[1].line, Some(12));
    }

    Diagnostics::reset_logger();
}

#[test]
#[serial]
fn test_integration_erase_absent_element_warns() {
    let (test_logger, entries) = TestLogger::new();
    Diagnostics::set_logger(test_logger);

    let mut octree = RenderingOctree::<u32>::with_defaults(world()).unwrap();
    assert!(!octree.erase(42));

    let warnings = octree_entries(&entries, LogSeverity::Warn);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("42"));

    Diagnostics::reset_logger();
}

#[test]
#[serial]
fn test_integration_reserve_conflict_warns() {
    let (test_logger, entries) = TestLogger::new();
    Diagnostics::set_logger(test_logger);

    let config = OctreeConfig::default().with_auto_collapse(true);
    let mut octree = RenderingOctree::<u32>::new(world(), config).unwrap();
    assert!(octree.reserve(2).is_err());

    let warnings = octree_entries(&entries, LogSeverity::Warn);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("auto-collapse"));

    Diagnostics::reset_logger();
}

#[test]
#[serial]
fn test_integration_invalid_bounds_logs_error_with_location() {
    let (test_logger, entries) = TestLogger::new();
    Diagnostics::set_logger(test_logger);

    let bounds = AABB::new(Vec3::ZERO, Vec3::new(1.0, 5.0, 1.0));
    assert!(RenderingOctree::<u32>::with_defaults(bounds).is_err());

    let errors = octree_entries(&entries, LogSeverity::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].file.is_some());
    assert!(errors[0].line.is_some());

    Diagnostics::reset_logger();
}

#[test]
#[serial]
fn test_integration_depth_cap_logs_once() {
    let (test_logger, entries) = TestLogger::new();
    Diagnostics::set_logger(test_logger);

    let mut octree = RenderingOctree::<u32>::with_defaults(world()).unwrap();
    for id in 0..30 {
        octree.insert(&Marker(id, Vec3::splat(3.0)));
    }

    assert_eq!(octree_entries(&entries, LogSeverity::Debug).len(), 1);
    assert!(!octree_entries(&entries, LogSeverity::Trace).is_empty());

    Diagnostics::reset_logger();
}

#[test]
#[serial]
fn test_integration_silent_on_normal_use() {
    let (test_logger, entries) = TestLogger::new();
    Diagnostics::set_logger(test_logger);

    let mut octree = RenderingOctree::<u32>::with_defaults(world()).unwrap();
    octree.insert(&Marker(1, Vec3::ONE));
    octree.update(&Marker(1, Vec3::splat(-1.0)));
    octree.erase(1);

    assert!(octree_entries(&entries, LogSeverity::Warn).is_empty());
    assert!(octree_entries(&entries, LogSeverity::Error).is_empty());

    Diagnostics::reset_logger();
}
