use std::thread;
use std::time::Duration;

use crate::clipboard::ClipboardSink;
use crate::error::DispatchError;
use crate::personas::Personas;

/// Copies persona credentials to a clipboard, username first, pausing after each write.
pub struct Dispatcher<S> {
    sink: S,
    delay: Duration,
}

impl<S: ClipboardSink> Dispatcher<S> {
    pub fn new(sink: S, delay: Duration) -> Self {
        Self { sink, delay }
    }

    /// Write one value and give the OS time to register it before the next overwrite.
    pub fn copy(&mut self, text: &str) -> Result<(), DispatchError> {
        self.sink.set_text(text)?;
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(())
    }

    /// Copy every persona in order. `progress` is called with (done, total) after each one.
    pub fn copy_all<F>(&mut self, personas: &Personas, mut progress: F) -> Result<(), DispatchError>
    where
        F: FnMut(usize, usize),
    {
        let total = personas.len();
        for (done, (user, password)) in personas.iter().enumerate() {
            self.copy(user)?;
            self.copy(password)?;
            progress(done + 1, total);
        }
        Ok(())
    }

    /// Copy a single persona. Nothing is written when the user is unknown.
    pub fn copy_user(&mut self, personas: &Personas, user: &str) -> Result<(), DispatchError> {
        let password = personas
            .get(user)
            .ok_or_else(|| DispatchError::UserNotFound(user.to_string()))?;
        self.copy(user)?;
        self.copy(password)
    }

    #[cfg(test)]
    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Single-line progress bar, redrawn in place: one `#` per 10%.
pub fn render_progress(done: usize, total: usize) -> String {
    let percent = if total == 0 { 100 } else { done * 100 / total };
    format!("\r [{}] {}%", "#".repeat(percent / 10), percent)
}
