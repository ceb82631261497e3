mod common;

use std::time::Duration;

use common::{repository, reservation, settle, MockApi};
use tokio::time::sleep;
use tripnow_client::detail::MSG_DETAIL_FAILED;
use tripnow_client::repository::MSG_GET_FAILED;
use tripnow_client::ReservationListView;
use tripnow_core::TransportError;
use tripnow_shared::ReservationStatus;

#[tokio::test(start_paused = true)]
async fn test_refresh_fires_on_every_interval() {
    let api = MockApi::new();
    api.set_list(Ok(vec![
        reservation(1, ReservationStatus::PendingRiskCheck),
        reservation(2, ReservationStatus::Approved),
    ]));
    let mut view = ReservationListView::new(repository(api.clone()));

    view.activate();
    settle().await;
    assert_eq!(api.list_calls(), 1);

    sleep(Duration::from_secs(41)).await;
    settle().await;
    assert_eq!(api.list_calls(), 3);
    assert_eq!(view.repository().total_reservations(), 2);
    assert!(!view.repository().loading());

    view.teardown();
}

#[tokio::test(start_paused = true)]
async fn test_teardown_before_first_interval_stops_refresh() {
    let api = MockApi::new();
    let mut view = ReservationListView::new(repository(api.clone()));

    view.activate();
    sleep(Duration::from_secs(10)).await;
    view.teardown();
    assert!(!view.is_active());

    sleep(Duration::from_secs(120)).await;
    settle().await;
    assert_eq!(api.list_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_teardown_is_idempotent() {
    let api = MockApi::new();
    let mut view = ReservationListView::new(repository(api.clone()));

    view.activate();
    sleep(Duration::from_secs(25)).await;
    view.teardown();
    view.teardown();

    sleep(Duration::from_secs(100)).await;
    settle().await;
    assert_eq!(api.list_calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_the_view_cancels_refresh() {
    let api = MockApi::new();
    {
        let mut view = ReservationListView::new(repository(api.clone()));
        view.activate();
        settle().await;
    }

    sleep(Duration::from_secs(60)).await;
    settle().await;
    assert_eq!(api.list_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_activate_twice_keeps_a_single_timer() {
    let api = MockApi::new();
    let mut view =
        ReservationListView::new(repository(api.clone())).with_refresh_interval(Duration::from_secs(5));

    view.activate();
    view.activate();
    sleep(Duration::from_secs(11)).await;
    settle().await;

    assert_eq!(api.list_calls(), 3);
    view.teardown();
}

#[tokio::test]
async fn test_manual_reload_triggers_list() {
    let api = MockApi::new();
    api.set_list(Ok(vec![reservation(4, ReservationStatus::Rejected)]));
    let view = ReservationListView::new(repository(api.clone()));

    view.reload().await.unwrap();

    assert_eq!(api.list_calls(), 1);
    assert_eq!(view.repository().reservations()[0].id, 4);
}

#[tokio::test]
async fn test_valid_form_submits_and_closes() {
    let api = MockApi::new();
    api.push_create(Ok(reservation(11, ReservationStatus::PendingRiskCheck)));
    api.set_list(Ok(vec![reservation(11, ReservationStatus::PendingRiskCheck)]));
    let mut view = ReservationListView::new(repository(api.clone()));

    view.open_create();
    assert!(view.create_form().is_open());
    {
        let fields = view.create_form_mut().fields_mut();
        fields.customer_email = "new@example.com".to_string();
        fields.trip_country = "IT".to_string();
        fields.amount = Some(2);
    }

    let pending = view.create_form_mut().submit().unwrap();
    assert!(!view.create_form().is_open());
    assert_eq!(view.create_form().fields().customer_email, "");

    let created = pending.await.unwrap().unwrap();
    assert_eq!(created.id, 11);

    let sent = api.created();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].customer_email.expose(), "new@example.com");
    assert_eq!(sent[0].trip_country, "IT");
    assert_eq!(sent[0].amount, 2);
    assert_eq!(sent[0].idempotency_key, view.repository().session_identifier());
    assert_eq!(api.list_calls(), 1);
    assert_eq!(view.repository().total_reservations(), 1);
}

#[tokio::test]
async fn test_invalid_form_never_reaches_the_api() {
    let api = MockApi::new();
    let mut view = ReservationListView::new(repository(api.clone()));

    view.open_create();
    view.create_form_mut().fields_mut().customer_email = "not-an-email".to_string();
    view.create_form_mut().fields_mut().trip_country = "Italy".to_string();

    assert!(view.create_form_mut().submit().is_err());
    settle().await;

    assert!(view.create_form().is_open());
    assert!(api.created().is_empty());
    assert_eq!(api.list_calls(), 0);
}

#[tokio::test]
async fn test_detail_view_loads_reservation() {
    let api = MockApi::new();
    api.push_get(Ok(reservation(5, ReservationStatus::Approved)));
    let mut view = ReservationListView::new(repository(api.clone()));

    view.open_detail(5).await;

    let detail = view.detail();
    assert!(detail.is_open());
    assert_eq!(detail.reservation_id(), Some(5));
    assert_eq!(detail.reservation().map(|r| r.id), Some(5));
    assert!(!detail.loading());
    assert_eq!(detail.error(), None);
    assert_eq!(api.get_ids(), vec![5]);

    view.close_detail();
    assert!(!view.detail().is_open());
}

#[tokio::test]
async fn test_detail_view_reports_failure() {
    let api = MockApi::new();
    api.push_get(Err(TransportError::Status { status: 500 }));
    let mut view = ReservationListView::new(repository(api));

    view.open_detail(8).await;

    let detail = view.detail();
    assert!(detail.is_open());
    assert!(detail.reservation().is_none());
    assert_eq!(detail.error(), Some(MSG_DETAIL_FAILED));
    assert_eq!(view.repository().error().as_deref(), Some(MSG_GET_FAILED));
}
