/// Receives human-readable status lines as a scrape proceeds, in the order
/// the work happens.
pub trait ProgressObserver {
    fn notify(&mut self, message: &str);
}

impl<F: FnMut(&str)> ProgressObserver for F {
    fn notify(&mut self, message: &str) {
        self(message)
    }
}

/// Forwards progress to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressObserver for LogProgress {
    fn notify(&mut self, message: &str) {
        log::info!("{message}");
    }
}
