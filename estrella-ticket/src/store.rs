use crate::code::{booking_code, DEFAULT_PREFIX};
use crate::models::Ticket;
use estrella_catalog::{Route, TimeSlot};
use estrella_shared::DateKey;
use estrella_store::app_config::OperatorConfig;
use estrella_store::{read_or_default, write_record, StorageGateway, StorageKey};
use std::collections::HashMap;
use uuid::Uuid;

/// The persisted shape: every user's tickets, keyed by user id. Always
/// written whole per mutation (read-modify-write, no partial updates).
type TicketMap = HashMap<Uuid, Vec<Ticket>>;

/// Fields a reprogram may overwrite. Identity and booking code are not
/// part of the patch by construction.
#[derive(Debug, Clone, Copy)]
pub struct TicketPatch {
    pub route: Route,
    pub date: DateKey,
    pub time: TimeSlot,
}

/// Owns the per-user ticket collections behind the storage gateway and
/// issues booking codes under the operator's configured prefix.
#[derive(Debug, Clone)]
pub struct TicketStore {
    code_prefix: String,
}

impl Default for TicketStore {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl TicketStore {
    pub fn new(code_prefix: impl Into<String>) -> Self {
        Self {
            code_prefix: code_prefix.into(),
        }
    }

    pub fn from_config(operator: &OperatorConfig) -> Self {
        Self::new(operator.code_prefix.clone())
    }

    /// The user's tickets ordered by (date, time) ascending. An unknown
    /// user simply has no tickets.
    pub fn list<G>(&self, gateway: &G, user_id: Uuid) -> Vec<Ticket>
    where
        G: StorageGateway + ?Sized,
    {
        let map: TicketMap = read_or_default(gateway, StorageKey::Tickets);
        let mut tickets = map.get(&user_id).cloned().unwrap_or_default();
        tickets.sort_by(|a, b| a.date.cmp(&b.date).then(a.time.cmp(&b.time)));
        tickets
    }

    /// Issue a fresh ticket (new id and booking code) and persist it.
    pub fn create<G>(
        &self,
        gateway: &mut G,
        user_id: Uuid,
        route: Route,
        date: DateKey,
        time: TimeSlot,
    ) -> Ticket
    where
        G: StorageGateway + ?Sized,
    {
        let ticket = Ticket::with_code(route, date, time, booking_code(&self.code_prefix));

        let mut map: TicketMap = read_or_default(gateway, StorageKey::Tickets);
        map.entry(user_id).or_default().push(ticket.clone());
        write_record(gateway, StorageKey::Tickets, &map);

        tracing::info!("Ticket created: {} for user {}", ticket.code, user_id);
        ticket
    }

    /// Overwrite route/date/time of an existing ticket in place. Identity
    /// and booking code are preserved.
    pub fn replace<G>(
        &self,
        gateway: &mut G,
        user_id: Uuid,
        ticket_id: Uuid,
        patch: TicketPatch,
    ) -> Result<Ticket, TicketError>
    where
        G: StorageGateway + ?Sized,
    {
        let mut map: TicketMap = read_or_default(gateway, StorageKey::Tickets);
        let tickets = map
            .get_mut(&user_id)
            .ok_or(TicketError::NotFound(ticket_id))?;
        let ticket = tickets
            .iter_mut()
            .find(|t| t.id == ticket_id)
            .ok_or(TicketError::NotFound(ticket_id))?;

        ticket.route = patch.route;
        ticket.date = patch.date;
        ticket.time = patch.time;
        let updated = ticket.clone();

        write_record(gateway, StorageKey::Tickets, &map);
        tracing::info!("Ticket reprogrammed: {}", updated.code);
        Ok(updated)
    }

    /// Delete a ticket from the user's collection and persist the reduced
    /// collection.
    pub fn remove<G>(
        &self,
        gateway: &mut G,
        user_id: Uuid,
        ticket_id: Uuid,
    ) -> Result<(), TicketError>
    where
        G: StorageGateway + ?Sized,
    {
        let mut map: TicketMap = read_or_default(gateway, StorageKey::Tickets);
        let tickets = map
            .get_mut(&user_id)
            .ok_or(TicketError::NotFound(ticket_id))?;

        let before = tickets.len();
        tickets.retain(|t| t.id != ticket_id);
        if tickets.len() == before {
            return Err(TicketError::NotFound(ticket_id));
        }

        write_record(gateway, StorageKey::Tickets, &map);
        tracing::info!("Ticket cancelled: {}", ticket_id);
        Ok(())
    }

    /// Look up a single ticket by identity.
    pub fn find<G>(&self, gateway: &G, user_id: Uuid, ticket_id: Uuid) -> Option<Ticket>
    where
        G: StorageGateway + ?Sized,
    {
        let map: TicketMap = read_or_default(gateway, StorageKey::Tickets);
        map.get(&user_id)?.iter().find(|t| t.id == ticket_id).cloned()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TicketError {
    #[error("Ticket not found: {0}")]
    NotFound(Uuid),
}

#[cfg(test)]
mod tests {
    use super::*;
    use estrella_store::MemoryGateway;

    fn slot(s: &str) -> TimeSlot {
        s.parse().unwrap()
    }

    fn date(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_list_for_unknown_user_is_empty() {
        let gateway = MemoryGateway::new();
        let store = TicketStore::default();
        assert!(store.list(&gateway, Uuid::new_v4()).is_empty());
    }

    #[test]
    fn test_create_and_list() {
        let mut gateway = MemoryGateway::new();
        let store = TicketStore::default();
        let user = Uuid::new_v4();

        let ticket = store.create(
            &mut gateway,
            user,
            Route::MercedesToCaba,
            date("2026-09-15"),
            slot("09:00"),
        );

        let listed = store.list(&gateway, user);
        assert_eq!(listed, vec![ticket]);
    }

    #[test]
    fn test_default_store_uses_default_prefix() {
        let mut gateway = MemoryGateway::new();
        let store = TicketStore::default();

        let ticket = store.create(
            &mut gateway,
            Uuid::new_v4(),
            Route::MercedesToCaba,
            date("2026-09-15"),
            slot("09:00"),
        );
        assert!(ticket.code.starts_with("ET-"));
    }

    #[test]
    fn test_configured_prefix_reaches_booking_codes() {
        let mut gateway = MemoryGateway::new();
        let operator = OperatorConfig {
            name: "Estrella Norte".to_string(),
            code_prefix: "ZZ".to_string(),
        };
        let store = TicketStore::from_config(&operator);

        let ticket = store.create(
            &mut gateway,
            Uuid::new_v4(),
            Route::MercedesToCaba,
            date("2026-09-15"),
            slot("09:00"),
        );
        assert!(
            ticket.code.starts_with("ZZ-"),
            "code {} should carry the configured prefix",
            ticket.code
        );
    }

    #[test]
    fn test_list_ordered_by_date_then_time() {
        let mut gateway = MemoryGateway::new();
        let store = TicketStore::default();
        let user = Uuid::new_v4();

        store.create(&mut gateway, user, Route::MercedesToCaba, date("2026-09-16"), slot("08:00"));
        store.create(&mut gateway, user, Route::MercedesToCaba, date("2026-09-15"), slot("18:30"));
        store.create(&mut gateway, user, Route::CabaToMercedes, date("2026-09-15"), slot("09:00"));

        let listed = store.list(&gateway, user);
        let order: Vec<String> = listed
            .iter()
            .map(|t| format!("{} {}", t.date, t.time))
            .collect();
        assert_eq!(
            order,
            vec!["2026-09-15 09:00", "2026-09-15 18:30", "2026-09-16 08:00"]
        );
    }

    #[test]
    fn test_replace_preserves_identity() {
        let mut gateway = MemoryGateway::new();
        let store = TicketStore::default();
        let user = Uuid::new_v4();

        let ticket = store.create(
            &mut gateway,
            user,
            Route::MercedesToCaba,
            date("2026-09-15"),
            slot("09:00"),
        );

        let updated = store
            .replace(
                &mut gateway,
                user,
                ticket.id,
                TicketPatch {
                    route: Route::CabaToMercedes,
                    date: date("2026-09-20"),
                    time: slot("10:00"),
                },
            )
            .unwrap();

        assert_eq!(updated.id, ticket.id);
        assert_eq!(updated.code, ticket.code);
        assert_eq!(updated.route, Route::CabaToMercedes);
        assert_eq!(updated.time, slot("10:00"));

        // Still a single ticket in the collection
        assert_eq!(store.list(&gateway, user).len(), 1);
    }

    #[test]
    fn test_replace_missing_ticket_is_not_found() {
        let mut gateway = MemoryGateway::new();
        let store = TicketStore::default();
        let user = Uuid::new_v4();

        let result = store.replace(
            &mut gateway,
            user,
            Uuid::new_v4(),
            TicketPatch {
                route: Route::MercedesToCaba,
                date: date("2026-09-15"),
                time: slot("09:00"),
            },
        );
        assert!(matches!(result, Err(TicketError::NotFound(_))));
    }

    #[test]
    fn test_remove() {
        let mut gateway = MemoryGateway::new();
        let store = TicketStore::default();
        let user = Uuid::new_v4();

        let ticket = store.create(
            &mut gateway,
            user,
            Route::MercedesToCaba,
            date("2026-09-15"),
            slot("09:00"),
        );

        store.remove(&mut gateway, user, ticket.id).unwrap();
        assert!(store.list(&gateway, user).is_empty());

        let again = store.remove(&mut gateway, user, ticket.id);
        assert!(matches!(again, Err(TicketError::NotFound(_))));
    }

    #[test]
    fn test_collections_are_per_user() {
        let mut gateway = MemoryGateway::new();
        let store = TicketStore::default();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let ticket = store.create(
            &mut gateway,
            alice,
            Route::MercedesToCaba,
            date("2026-09-15"),
            slot("09:00"),
        );

        assert!(store.list(&gateway, bob).is_empty());
        assert!(matches!(
            store.remove(&mut gateway, bob, ticket.id),
            Err(TicketError::NotFound(_))
        ));
        assert_eq!(store.list(&gateway, alice).len(), 1);
    }

    #[test]
    fn test_malformed_ticket_map_reads_as_empty() {
        let mut gateway = MemoryGateway::new();
        gateway.write(StorageKey::Tickets, serde_json::json!([1, 2, 3]));

        let store = TicketStore::default();
        assert!(store.list(&gateway, Uuid::new_v4()).is_empty());
    }
}
