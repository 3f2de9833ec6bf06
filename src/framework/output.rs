//! # Output Boundary
//!
//! Records and the registry never print directly. They write whole lines to an [`Output`],
//! which keeps presentation testable: production code hands in [`Stdout`], tests hand in
//! [`RecordingOutput`](crate::framework::mock::RecordingOutput).

/// A line-oriented text sink.
pub trait Output {
    /// Emits one line of text.
    fn line(&self, text: &str);
}

/// Writes every line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

impl Output for Stdout {
    fn line(&self, text: &str) {
        println!("{text}");
    }
}
