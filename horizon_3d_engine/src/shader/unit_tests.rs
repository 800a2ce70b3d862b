//! Unit tests for the ShaderUnit state machine
//!
//! Exercises the NoSource → SourceLoaded → Compiled lifecycle against the
//! mock device, including the deliberate asymmetries (compile failure keeps
//! SourceLoaded, release keeps Compiled).

use std::io::Write;
use std::path::PathBuf;

use crate::device::mock_device::MockRenderDevice;
use crate::device::ShaderStage;
use crate::shader::{ShaderStatus, ShaderUnit, INFO_LOG_LIMIT};

const VALID_SOURCE: &str = "#version 450 core\nvoid main() {}\n";
const BROKEN_SOURCE: &str = "#version 450 core\n#error broken on purpose\n";

/// Write a throwaway shader file under the OS temp dir and return its path
fn write_temp_shader(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("horizon3d_unit_{}_{}", std::process::id(), name));
    let mut file = std::fs::File::create(&path).expect("temp shader file");
    file.write_all(contents.as_bytes()).expect("temp shader write");
    path
}

// ============================================================================
// STATUS LIFECYCLE TESTS
// ============================================================================

#[test]
fn test_new_unit_has_no_source() {
    let unit = ShaderUnit::new(ShaderStage::Vertex);

    assert_eq!(unit.stage(), ShaderStage::Vertex);
    assert_eq!(unit.status(), ShaderStatus::NoSource);
    assert!(unit.handle().is_none());
    assert!(unit.info_log().is_empty());
}

#[test]
fn test_append_source_loads() {
    let mut unit = ShaderUnit::new(ShaderStage::Vertex);

    unit.append_source(VALID_SOURCE);

    assert_eq!(unit.status(), ShaderStatus::SourceLoaded);
}

#[test]
fn test_append_source_resets_previous_state() {
    let mut device = MockRenderDevice::new();
    let mut unit = ShaderUnit::new(ShaderStage::Vertex);
    unit.append_source(VALID_SOURCE);
    assert!(unit.compile(&mut device));

    // Loading again from Compiled drops back to SourceLoaded
    unit.append_source(BROKEN_SOURCE);

    assert_eq!(unit.status(), ShaderStatus::SourceLoaded);
}

#[test]
fn test_compile_round_trip_reaches_compiled() {
    let mut device = MockRenderDevice::new();
    let mut unit = ShaderUnit::new(ShaderStage::Vertex);

    unit.append_source(VALID_SOURCE);
    let compiled = unit.compile(&mut device);

    assert!(compiled);
    assert_eq!(unit.status(), ShaderStatus::Compiled);
    assert_eq!(unit.info_log(), "ready");
    let handle = unit.handle().expect("handle after compile");
    assert!(handle.is_valid());
    assert_eq!(device.shader(handle).unwrap().source, VALID_SOURCE);
}

#[test]
fn test_compile_without_source_fails() {
    let mut device = MockRenderDevice::new();
    let mut unit = ShaderUnit::new(ShaderStage::Vertex);

    assert!(!unit.compile(&mut device));
    assert_eq!(unit.status(), ShaderStatus::NoSource);
    assert_eq!(device.created_shader_count(), 0);
}

#[test]
fn test_second_compile_after_success_fails() {
    let mut device = MockRenderDevice::new();
    let mut unit = ShaderUnit::new(ShaderStage::Vertex);
    unit.append_source(VALID_SOURCE);
    assert!(unit.compile(&mut device));

    // Status is Compiled, so the SourceLoaded precondition no longer holds
    assert!(!unit.compile(&mut device));
    assert_eq!(unit.status(), ShaderStatus::Compiled);
    assert_eq!(device.created_shader_count(), 1);
}

// ============================================================================
// COMPILE FAILURE TESTS
// ============================================================================

#[test]
fn test_broken_source_keeps_source_loaded() {
    let mut device = MockRenderDevice::new();
    let mut unit = ShaderUnit::new(ShaderStage::Fragment);

    unit.append_source(BROKEN_SOURCE);
    let compiled = unit.compile(&mut device);

    assert!(!compiled);
    assert_eq!(unit.status(), ShaderStatus::SourceLoaded);
    assert!(unit.handle().is_none());
    assert!(!unit.info_log().is_empty());
    assert!(unit.info_log().contains("#error"));
}

#[test]
fn test_failed_compile_leaves_no_live_backend_object() {
    let mut device = MockRenderDevice::new();
    let mut unit = ShaderUnit::new(ShaderStage::Fragment);

    unit.append_source(BROKEN_SOURCE);
    assert!(!unit.compile(&mut device));

    // The transient shader object was deleted again
    assert_eq!(device.live_shader_count(), 0);
}

#[test]
fn test_compile_with_refusing_backend_fails() {
    let mut device = MockRenderDevice::new();
    device.refuse_shader_creation();
    let mut unit = ShaderUnit::new(ShaderStage::Vertex);

    unit.append_source(VALID_SOURCE);
    assert!(!unit.compile(&mut device));
    assert_eq!(unit.status(), ShaderStatus::SourceLoaded);
    assert!(unit.info_log().contains("refused"));
}

#[test]
fn test_diagnostic_bound_is_1024_bytes() {
    assert_eq!(INFO_LOG_LIMIT, 1024);
}

// ============================================================================
// RELEASE TESTS
// ============================================================================

#[test]
fn test_release_deletes_handle_but_keeps_status() {
    let mut device = MockRenderDevice::new();
    let mut unit = ShaderUnit::new(ShaderStage::Vertex);
    unit.append_source(VALID_SOURCE);
    assert!(unit.compile(&mut device));

    unit.release(&mut device);

    assert_eq!(device.live_shader_count(), 0);
    assert!(unit.handle().is_none());
    // Documented asymmetry: status stays Compiled after release
    assert_eq!(unit.status(), ShaderStatus::Compiled);
}

#[test]
fn test_release_before_compile_is_noop() {
    let mut device = MockRenderDevice::new();
    let mut unit = ShaderUnit::new(ShaderStage::Vertex);
    unit.append_source(VALID_SOURCE);

    unit.release(&mut device);

    assert_eq!(unit.status(), ShaderStatus::SourceLoaded);
    assert_eq!(device.created_shader_count(), 0);
}

#[test]
fn test_double_release_is_noop() {
    let mut device = MockRenderDevice::new();
    let mut unit = ShaderUnit::new(ShaderStage::Vertex);
    unit.append_source(VALID_SOURCE);
    assert!(unit.compile(&mut device));

    unit.release(&mut device);
    unit.release(&mut device);

    assert_eq!(device.live_shader_count(), 0);
}

// ============================================================================
// FILE LOADING TESTS
// ============================================================================

#[test]
fn test_load_from_file_compiles_valid_source() {
    let path = write_temp_shader("valid.vert", VALID_SOURCE);
    let mut device = MockRenderDevice::new();
    let mut unit = ShaderUnit::new(ShaderStage::Vertex);

    let loaded = unit.load_from_file(&mut device, &path);

    assert!(loaded);
    assert_eq!(unit.status(), ShaderStatus::Compiled);
    let _ = std::fs::remove_file(path);
}

#[test]
fn test_load_from_file_missing_path_resets_to_no_source() {
    let mut device = MockRenderDevice::new();
    let mut unit = ShaderUnit::new(ShaderStage::Vertex);
    unit.append_source(VALID_SOURCE);

    let loaded = unit.load_from_file(&mut device, "/nonexistent/horizon3d/missing.vert");

    assert!(!loaded);
    assert_eq!(unit.status(), ShaderStatus::NoSource);
    assert!(!unit.info_log().is_empty());
    assert_eq!(device.created_shader_count(), 0);
}

#[test]
fn test_load_from_file_broken_source_reports_compile_failure() {
    let path = write_temp_shader("broken.frag", BROKEN_SOURCE);
    let mut device = MockRenderDevice::new();
    let mut unit = ShaderUnit::new(ShaderStage::Fragment);

    let loaded = unit.load_from_file(&mut device, &path);

    assert!(!loaded);
    // Read succeeded, compile failed: SourceLoaded, not NoSource
    assert_eq!(unit.status(), ShaderStatus::SourceLoaded);
    assert!(unit.info_log().contains("#error"));
    let _ = std::fs::remove_file(path);
}
