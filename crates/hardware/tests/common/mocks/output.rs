use ls8_core::Fault;
use ls8_core::soc::OutputSink;
use mockall::mock;

mock! {
    pub Sink {}

    impl OutputSink for Sink {
        fn print_value(&mut self, value: u8);
        fn report_fault(&mut self, fault: &Fault);
    }
}

/// Sink that panics on any output; for programs that must stay silent.
#[derive(Debug, Default)]
pub struct SilentSink;

impl OutputSink for SilentSink {
    fn print_value(&mut self, value: u8) {
        panic!("unexpected output {value}");
    }

    fn report_fault(&mut self, fault: &Fault) {
        panic!("unexpected fault {fault}");
    }
}
