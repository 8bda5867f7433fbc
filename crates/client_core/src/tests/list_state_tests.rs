use shared::{
    domain::{User, UserFilter, UserId},
    protocol::UserPage,
};

use crate::{
    error::ControllerError,
    list_state::{ListQuery, ListState, ResponseOrdering},
};

fn user(id: i64) -> User {
    User {
        id: UserId(id),
        nombre: format!("nombre-{id}"),
        apellido: format!("apellido-{id}"),
        email: format!("user{id}@example.com"),
        rol: "admin".into(),
    }
}

fn page(total_pages: u32, ids: &[i64]) -> UserPage {
    UserPage {
        total_pages,
        total: ids.len() as u64,
        usuarios: ids.iter().copied().map(user).collect(),
    }
}

#[test]
fn new_state_starts_on_first_page_without_filter() {
    let state = ListState::new();
    assert!(state.users().is_empty());
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.total_pages(), 1);
    assert_eq!(state.filter(), UserFilter::All);
    assert_eq!(state.query(), ListQuery::default());
}

#[test]
fn paginate_issues_ticket_only_when_page_changes() {
    let mut state = ListState::new();

    let ticket = state.paginate(2).expect("valid page").expect("ticket");
    assert_eq!(ticket.query.page, 2);
    assert_eq!(ticket.query.filter, UserFilter::All);

    assert!(state.paginate(2).expect("valid page").is_none());
}

#[test]
fn paginate_rejects_page_zero_without_changing_state() {
    let mut state = ListState::new();
    state.paginate(3).expect("valid page");

    assert_eq!(state.paginate(0), Err(ControllerError::InvalidPage));
    assert_eq!(state.current_page(), 3);
}

#[test]
fn filter_change_resets_to_first_page() {
    let mut state = ListState::new();
    state.paginate(4).expect("valid page");

    let ticket = state.apply_filter(UserFilter::Active).expect("ticket");
    assert_eq!(
        ticket.query,
        ListQuery {
            page: 1,
            filter: UserFilter::Active
        }
    );
    assert_eq!(state.current_page(), 1);
}

#[test]
fn same_filter_on_later_page_still_fetches_first_page() {
    let mut state = ListState::new();
    state.apply_filter(UserFilter::Inactive);
    state.paginate(2).expect("valid page");

    let ticket = state.apply_filter(UserFilter::Inactive).expect("page reset");
    assert_eq!(ticket.query.page, 1);
    assert!(state.apply_filter(UserFilter::Inactive).is_none());
}

#[test]
fn generations_increase_with_each_ticket() {
    let mut state = ListState::new();
    let first = state.issue_fetch();
    let second = state.paginate(2).expect("valid page").expect("ticket");
    let third = state.issue_fetch();
    assert!(first.generation < second.generation);
    assert!(second.generation < third.generation);
}

#[test]
fn applied_page_replaces_users_and_total_pages() {
    let mut state = ListState::new();
    let ticket = state.issue_fetch();

    assert!(state.apply_page(ticket, page(3, &[1, 2]), ResponseOrdering::LastResolved));
    assert_eq!(state.users().len(), 2);
    assert_eq!(state.total_pages(), 3);

    let ticket = state.issue_fetch();
    assert!(state.apply_page(ticket, page(1, &[9]), ResponseOrdering::LastResolved));
    assert_eq!(state.users(), &[user(9)]);
}

#[test]
fn zero_total_pages_is_stored_as_one() {
    let mut state = ListState::new();
    let ticket = state.issue_fetch();
    state.apply_page(ticket, page(0, &[]), ResponseOrdering::LastResolved);
    assert_eq!(state.total_pages(), 1);
}

#[test]
fn last_resolved_applies_older_response_arriving_late() {
    let mut state = ListState::new();
    let older = state.issue_fetch();
    let newer = state.paginate(2).expect("valid page").expect("ticket");

    assert!(state.apply_page(newer, page(2, &[3]), ResponseOrdering::LastResolved));
    assert!(state.apply_page(older, page(2, &[1]), ResponseOrdering::LastResolved));
    assert_eq!(state.users(), &[user(1)]);
    assert_eq!(state.current_page(), 2);
}

#[test]
fn latest_issued_discards_superseded_response() {
    let mut state = ListState::new();
    let older = state.issue_fetch();
    let newer = state.paginate(2).expect("valid page").expect("ticket");

    assert!(state.apply_page(newer, page(2, &[3]), ResponseOrdering::LatestIssued));
    assert!(!state.apply_page(older, page(2, &[1]), ResponseOrdering::LatestIssued));
    assert_eq!(state.users(), &[user(3)]);
}

#[test]
fn ordering_parses_from_config_strings() {
    assert_eq!(
        "latest-issued".parse::<ResponseOrdering>(),
        Ok(ResponseOrdering::LatestIssued)
    );
    assert_eq!(
        "LAST_RESOLVED".parse::<ResponseOrdering>(),
        Ok(ResponseOrdering::LastResolved)
    );
    assert!("newest".parse::<ResponseOrdering>().is_err());
}
