//! Search workflow: form state, start-search, and the chained lead refresh.
//!
//! Session state lives in a `watch` channel so any number of observers see
//! every update. Operations take `&self` and may overlap; whichever response
//! resolves last writes the status and lead list.

use crate::client::LeadsClient;
use crate::errors::ClientError;
use crate::models::{DisplayLead, FormEdit, SearchParameters, SearchRequest, SearchStatus};
use crate::normalizer::normalize_all;
use tokio::sync::watch;

/// Everything the user sees for one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSession {
    pub params: SearchParameters,
    pub status: SearchStatus,
    pub leads: Vec<DisplayLead>,
}

pub struct SearchController {
    client: LeadsClient,
    state: watch::Sender<SearchSession>,
}

impl SearchController {
    pub fn new(client: LeadsClient) -> Self {
        Self::with_params(client, SearchParameters::default())
    }

    pub fn with_params(client: LeadsClient, params: SearchParameters) -> Self {
        let (state, _) = watch::channel(SearchSession {
            params,
            ..Default::default()
        });
        Self { client, state }
    }

    /// Receiver notified on every session change.
    pub fn subscribe(&self) -> watch::Receiver<SearchSession> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> SearchSession {
        self.state.borrow().clone()
    }

    pub fn edit(&self, edit: FormEdit) {
        self.state.send_modify(|session| session.params.apply(edit));
    }

    /// Runs a search with the form's current parameters.
    pub async fn submit(&self) -> SearchStatus {
        let params = self.state.borrow().params.clone();
        self.start_search(&params).await
    }

    /// Asks the search service to run, then refreshes the lead list on success.
    ///
    /// Returns the status produced by the start-search call. The session
    /// status may be overwritten afterwards by the chained refresh.
    pub async fn start_search(&self, params: &SearchParameters) -> SearchStatus {
        self.set_status(SearchStatus::in_progress());

        let request = SearchRequest::from_params(params);
        let status = match self.client.start_search(&request).await {
            Ok(body) => SearchStatus::search_succeeded(&body),
            Err(ClientError::Rejected(code)) => {
                tracing::error!("Start-search rejected with {}", code);
                SearchStatus::error(SearchStatus::SEARCH_REJECTED)
            }
            Err(e) => {
                tracing::error!("Start-search failed: {}", e);
                SearchStatus::error(SearchStatus::SEARCH_UNREACHABLE)
            }
        };
        self.set_status(status.clone());

        if status.is_success() {
            self.refresh_leads().await;
        }

        status
    }

    /// Replaces the held lead list with the listing service's current set.
    ///
    /// On failure the held list is left untouched and returned as-is.
    pub async fn refresh_leads(&self) -> Vec<DisplayLead> {
        match self.client.list_leads().await {
            Ok(raws) => {
                let leads = normalize_all(&raws);
                tracing::info!("Displaying {} leads", leads.len());
                self.state.send_modify(|session| session.leads = leads.clone());
                leads
            }
            Err(e) => {
                let message = if e.is_rejected() {
                    SearchStatus::LIST_REJECTED
                } else {
                    SearchStatus::LIST_UNREACHABLE
                };
                tracing::error!("Lead refresh failed: {}", e);
                self.set_status(SearchStatus::error(message));
                self.state.borrow().leads.clone()
            }
        }
    }

    fn set_status(&self, status: SearchStatus) {
        self.state.send_modify(|session| session.status = status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::Country;

    fn offline_controller() -> SearchController {
        let config = Config {
            search_base_url: "http://127.0.0.1:9".to_string(),
            api_base_url: "http://127.0.0.1:9".to_string(),
            request_timeout: None,
        };
        SearchController::new(LeadsClient::new(&config).unwrap())
    }

    #[test]
    fn test_initial_session() {
        let controller = offline_controller();
        let session = controller.snapshot();
        assert_eq!(session.params, SearchParameters::default());
        assert_eq!(session.status, SearchStatus::default());
        assert!(session.leads.is_empty());
    }

    #[test]
    fn test_edits_are_published() {
        let controller = offline_controller();
        let mut rx = controller.subscribe();

        controller.edit(FormEdit::Country(Country::Ca));

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().params.country, Country::Ca);
    }
}
