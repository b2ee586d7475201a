use std::sync::mpsc::{self, Receiver};
use std::thread;

use log::{debug, warn};

use crate::enumerate::validate_digit_string;
use crate::search::core::{SearchEvent, run_search};
use crate::search::errors::SearchError;

/// A running background search for one digit string.
///
/// Events arrive over the channel as the worker finds them. Dropping the
/// handle closes the channel; the worker observes the failed send and
/// abandons the search wholesale, state and all.
pub struct SearchHandle {
    events: Receiver<SearchEvent>,
}

impl SearchHandle {
    /// Block for the next event until the stream ends.
    pub fn events(&self) -> &Receiver<SearchEvent> {
        &self.events
    }

    /// Iterate events until the worker sends `Done` and hangs up.
    pub fn iter(&self) -> impl Iterator<Item = SearchEvent> + '_ {
        self.events.iter()
    }
}

/// Spawn a dedicated worker thread for one digit string.
///
/// Searches share nothing: the worker builds fresh caches and expressions
/// for its input and discards them when it finishes or is abandoned.
///
/// # Errors
///
/// Invalid digit strings are rejected before the thread starts; thread
/// creation failures surface as `SearchError::Worker`.
pub fn spawn(digits: &str) -> Result<SearchHandle, SearchError> {
    validate_digit_string(digits)?;
    let digits = digits.to_string();
    let (sender, events) = mpsc::channel();
    thread::Builder::new()
        .name("annum-search".to_string())
        .spawn(move || {
            let outcome = run_search(&digits, |event| sender.send(event).is_ok());
            if let Err(err) = outcome {
                warn!("Search worker for '{}' failed: {}", digits, err);
            }
            debug!("Search worker for '{}' finished", digits);
        })?;
    Ok(SearchHandle { events })
}
