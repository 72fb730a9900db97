//! Generator session state.
//!
//! All fetch-cycle transitions live here as plain methods on a plain struct
//! so they can be exercised without a browser; `person_api` wraps this in a
//! signal and replays the transitions from async handlers.

use crate::model::Person;

/// State owned by the data-fetch hook: the most recently fetched profile,
/// every profile fetched this session (append-only, oldest first), and the
/// request flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub current: Option<Person>,
    pub history: Vec<Person>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Session {
    /// Start a fetch cycle: raise the loading flag and clear any prior error.
    /// Returns `false` without touching state when a fetch is already in
    /// flight; overlapping triggers are ignored, not queued.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Complete a fetch cycle. Success replaces the current profile and
    /// appends it to history; failure records the message and leaves the
    /// profile and history exactly as they were.
    pub fn finish(&mut self, result: Result<Person, String>) {
        match result {
            Ok(person) => {
                self.current = Some(person.clone());
                self.history.push(person);
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str) -> Person {
        Person {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "555-0100".to_string(),
            birthday: "1990-05-14".to_string(),
            password: "pw".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_starts_empty_and_idle() {
        let session = Session::default();
        assert!(session.current.is_none());
        assert!(session.history.is_empty());
        assert!(!session.loading);
        assert!(session.error.is_none());
    }

    #[test]
    fn test_successful_fetch_appends_to_history() {
        let mut session = Session::default();
        assert!(session.begin());
        session.finish(Ok(person("Ada")));

        assert_eq!(session.current, Some(person("Ada")));
        assert_eq!(session.history, vec![person("Ada")]);
        assert!(!session.loading);
        assert!(session.error.is_none());

        session.begin();
        session.finish(Ok(person("Grace")));

        assert_eq!(session.current, Some(person("Grace")));
        assert_eq!(session.history, vec![person("Ada"), person("Grace")]);
    }

    #[test]
    fn test_failed_fetch_preserves_profile_and_history() {
        let mut session = Session::default();
        session.begin();
        session.finish(Ok(person("Ada")));

        session.begin();
        session.finish(Err("request failed".to_string()));

        assert_eq!(session.current, Some(person("Ada")));
        assert_eq!(session.history, vec![person("Ada")]);
        assert_eq!(session.error.as_deref(), Some("request failed"));
        assert!(!session.loading);
    }

    #[test]
    fn test_begin_clears_prior_error() {
        let mut session = Session::default();
        session.begin();
        session.finish(Err("boom".to_string()));
        assert!(session.error.is_some());

        assert!(session.begin());
        assert!(session.error.is_none());
        assert!(session.loading);
    }

    #[test]
    fn test_begin_while_loading_is_ignored() {
        let mut session = Session::default();
        assert!(session.begin());
        let before = session.clone();

        assert!(!session.begin());
        assert_eq!(session, before);
    }

    #[test]
    fn test_history_keeps_duplicates_in_order() {
        let mut session = Session::default();
        for _ in 0..3 {
            session.begin();
            session.finish(Ok(person("Ada")));
        }
        assert_eq!(session.history.len(), 3);
    }
}
