//! # Output Sink Tests

use ls8_core::Fault;
use ls8_core::soc::{CaptureOutput, Console, OutputSink};
use pretty_assertions::assert_eq;

#[test]
fn test_capture_records_values_in_order() {
    let mut out = CaptureOutput::new();
    out.print_value(1);
    out.print_value(72);
    assert_eq!(out.values(), &[1, 72]);
    assert_eq!(out.take_values(), vec![1, 72]);
    assert!(out.values().is_empty());
}

#[test]
fn test_capture_records_faults() {
    let mut out = CaptureOutput::new();
    let fault = Fault::UnknownOpcode { opcode: 0xFF, pc: 0 };
    out.report_fault(&fault);
    assert_eq!(out.faults(), &[fault]);
    assert!(out.values().is_empty());
}

#[test]
fn test_boxed_sink_forwards() {
    let mut boxed: Box<dyn OutputSink> = Box::new(CaptureOutput::new());
    boxed.print_value(3);
    let by_ref = &mut boxed;
    by_ref.print_value(4);
}

#[test]
fn test_console_sinks_do_not_panic() {
    let fault = Fault::InvalidRegister { index: 8, pc: 0 };
    for mut console in [Console::new(), Console::stderr()] {
        console.print_value(0);
        console.report_fault(&fault);
    }
}
