/// ProgressReporter port for reporting progress during a report run
///
/// Progress goes to stderr so stdout carries only report fragments.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports per-dependency progress
    ///
    /// # Arguments
    /// * `current` - Number of dependencies processed so far
    /// * `total` - Total number of dependencies
    /// * `message` - Optional message, usually the dependency name
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
