/// ProgressReporter port for reporting status during a run
///
/// Status always goes somewhere other than the comment itself (stderr for
/// the console adapter), so stdout stays reserved for the rendered Markdown.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
