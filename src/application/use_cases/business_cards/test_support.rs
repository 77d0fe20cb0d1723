//! In-memory repository fake shared by the business card use case tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::gateways::Repository;
use crate::domain::models::business_card::{BusinessCard, BusinessCardField, BusinessCardId, NewBusinessCard};
use crate::domain::models::operation_result::OperationResult;
use crate::domain::models::predicate::Predicate;
use crate::shared::errors::RepositoryError;

#[derive(Default)]
struct State {
    cards: Vec<BusinessCard>,
    next_id: i32,
    add_calls: usize,
    filter_calls: usize,
    remove_calls: usize,
    last_predicate: Option<Predicate<BusinessCardField>>,
}

/// Stores cards in a vector, assigning sequential ids
pub struct InMemoryBusinessCardRepository {
    state: Mutex<State>,
    fail_add_on_call: Option<usize>,
    fail_queries: bool,
}

impl InMemoryBusinessCardRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                next_id: 1,
                ..State::default()
            }),
            fail_add_on_call: None,
            fail_queries: false,
        }
    }

    pub fn with_cards(cards: Vec<BusinessCard>) -> Self {
        let repo = Self::new();
        {
            let mut state = repo.state.lock().unwrap();
            for card in cards {
                let id = BusinessCardId::new(state.next_id);
                state.next_id += 1;
                state.cards.push(card.with_id(id));
            }
        }
        repo
    }

    /// Make the `n`th call to `add` (1-based) report a failure
    pub fn failing_add_on_call(mut self, n: usize) -> Self {
        self.fail_add_on_call = Some(n);
        self
    }

    /// Make every read fail with a repository error
    pub fn failing_queries(mut self) -> Self {
        self.fail_queries = true;
        self
    }

    pub fn cards(&self) -> Vec<BusinessCard> {
        self.state.lock().unwrap().cards.clone()
    }

    pub fn add_calls(&self) -> usize {
        self.state.lock().unwrap().add_calls
    }

    pub fn filter_calls(&self) -> usize {
        self.state.lock().unwrap().filter_calls
    }

    pub fn remove_calls(&self) -> usize {
        self.state.lock().unwrap().remove_calls
    }

    pub fn last_predicate(&self) -> Option<Predicate<BusinessCardField>> {
        self.state.lock().unwrap().last_predicate.clone()
    }

    fn check_queries(&self) -> Result<(), RepositoryError> {
        if self.fail_queries {
            return Err(RepositoryError::Mapping("store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Repository<BusinessCard> for InMemoryBusinessCardRepository {
    async fn add(&self, entity: &BusinessCard) -> OperationResult {
        let mut state = self.state.lock().unwrap();
        state.add_calls += 1;
        if self.fail_add_on_call == Some(state.add_calls) {
            return OperationResult::failure("Failed to add entity: value too long for column");
        }
        let id = BusinessCardId::new(state.next_id);
        state.next_id += 1;
        state.cards.push(entity.clone().with_id(id));
        OperationResult::success("Entity added successfully.")
    }

    async fn get_by_id(&self, id: BusinessCardId) -> Result<Option<BusinessCard>, RepositoryError> {
        self.check_queries()?;
        let state = self.state.lock().unwrap();
        Ok(state.cards.iter().find(|c| c.id() == Some(id)).cloned())
    }

    async fn get_all(&self) -> Result<Vec<BusinessCard>, RepositoryError> {
        self.check_queries()?;
        Ok(self.cards())
    }

    async fn get_by_filter(
        &self,
        predicate: Option<&Predicate<BusinessCardField>>,
    ) -> Result<Vec<BusinessCard>, RepositoryError> {
        self.check_queries()?;
        let mut state = self.state.lock().unwrap();
        state.filter_calls += 1;
        state.last_predicate = predicate.cloned();
        Ok(state
            .cards
            .iter()
            .filter(|c| predicate.map_or(true, |p| p.matches(*c)))
            .cloned()
            .collect())
    }

    async fn remove(&self, entity: &BusinessCard) -> OperationResult {
        let mut state = self.state.lock().unwrap();
        state.remove_calls += 1;
        let before = state.cards.len();
        state.cards.retain(|c| c.id() != entity.id());
        if state.cards.len() == before {
            OperationResult::failure("Failed to remove entity: no row was deleted")
        } else {
            OperationResult::success("Entity removed successfully.")
        }
    }
}

pub fn new_card(name: &str, gender: Option<&str>, email: &str, phone: Option<&str>, dob: (i32, u32, u32)) -> BusinessCard {
    BusinessCard::new(NewBusinessCard {
        name: name.to_string(),
        gender: gender.map(str::to_string),
        date_of_birth: NaiveDate::from_ymd_opt(dob.0, dob.1, dob.2).unwrap(),
        email: email.to_string(),
        phone: phone.map(str::to_string),
        address: Some("1 Test Street".to_string()),
        photo: None,
    })
    .unwrap()
}

/// Three cards with distinct names and emails; John Doe and Alex Poe share a birth date
pub fn sample_cards() -> Vec<BusinessCard> {
    vec![
        new_card("John Doe", Some("Male"), "John.Doe@Example.com", Some("555-0100"), (1993, 1, 1)),
        new_card("Jane Roe", Some("Female"), "jane@example.org", Some("555-0199"), (1988, 6, 15)),
        new_card("Alex Poe", None, "alex@sample.net", None, (1993, 1, 1)),
    ]
}
