//! # Statistics Tests

use ls8_core::isa::InstructionClass;
use ls8_core::stats::{STATS_SECTIONS, SimStats};
use pretty_assertions::assert_eq;

#[test]
fn test_record_counts_by_class() {
    let mut stats = SimStats::default();
    stats.record(InstructionClass::Alu, false);
    stats.record(InstructionClass::Alu, false);
    stats.record(InstructionClass::Branch, true);
    stats.record(InstructionClass::Branch, false);
    assert_eq!(stats.instructions_retired, 4);
    assert_eq!(stats.inst_alu, 2);
    assert_eq!(stats.inst_branch, 2);
    assert_eq!(stats.branches_taken, 1);
    assert_eq!(stats.inst_load, 0);
}

#[test]
fn test_report_contains_all_sections_by_default() {
    let mut stats = SimStats::default();
    stats.cycles = 12;
    stats.record(InstructionClass::Load, false);
    let text = stats.report_sections(&[]);
    assert!(text.contains("sim_cycles               12"));
    assert!(text.contains("INSTRUCTION MIX"));
    assert!(text.contains("op.load                1 (100.00%)"));
    assert!(text.contains("CONTROL FLOW"));
}

#[test]
fn test_report_selects_sections() {
    let stats = SimStats::default();
    let text = stats.report_sections(&["control"]);
    assert!(text.contains("CONTROL FLOW"));
    assert!(!text.contains("INSTRUCTION MIX"));
    assert!(!text.contains("sim_cycles"));
}

#[test]
fn test_section_names() {
    assert_eq!(STATS_SECTIONS, &["summary", "instruction_mix", "control"]);
}

#[test]
fn test_empty_stats_do_not_divide_by_zero() {
    let text = SimStats::default().report_sections(&[]);
    assert!(text.contains("branch.taken_rate      0.00%"));
    assert!(!text.contains("NaN"));
}

#[test]
fn test_report_display_matches_rendered_text() {
    let mut stats = SimStats::default();
    stats.record(InstructionClass::Branch, true);
    let sections = ["instruction_mix", "control"];
    assert_eq!(
        format!("{}", stats.report(&sections)),
        stats.report_sections(&sections)
    );
    assert!(stats.report_sections(&sections).contains("branch.taken_rate      100.00%"));
}

#[test]
fn test_display_renders_every_section() {
    let text = SimStats::default().to_string();
    for heading in ["sim_cycles", "INSTRUCTION MIX", "CONTROL FLOW"] {
        assert!(text.contains(heading), "missing {heading}");
    }
    assert!(text.ends_with("==========================================================\n"));
}
